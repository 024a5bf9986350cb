//! Parallax background: three layers scrolling at distinct speeds.

use crate::constants::{PARALLAX_SCALE, PARALLAX_SPEEDS};

/// One background layer's scroll state.
#[derive(Debug, Clone, Copy)]
pub struct ParallaxLayer {
    /// Current horizontal draw offset (non-positive while scrolling).
    pub offset: f32,
    /// Scroll speed in pixels/second.
    pub speed: f32,
    /// Source texture width in pixels.
    pub width: f32,
}

impl ParallaxLayer {
    /// Scroll leftward, wrapping to 0 once the layer has moved past twice
    /// its texture width. Two copies are drawn side by side at 2x scale,
    /// so the wrap point is where the second copy lines up with the first.
    pub fn update(&mut self, dt: f32) {
        self.offset -= self.speed * dt;
        if self.offset <= -self.width * PARALLAX_SCALE {
            self.offset = 0.0;
        }
    }
}

/// The full background, back to front.
#[derive(Debug, Clone, Copy)]
pub struct Parallax {
    pub layers: [ParallaxLayer; 3],
}

impl Parallax {
    /// Build layers from the three background texture widths, slowest
    /// (farthest) first.
    pub fn new(widths: [f32; 3]) -> Self {
        let layers = std::array::from_fn(|i| ParallaxLayer {
            offset: 0.0,
            speed: PARALLAX_SPEEDS[i],
            width: widths[i],
        });
        Self { layers }
    }

    pub fn update(&mut self, dt: f32) {
        for layer in &mut self.layers {
            layer.update(dt);
        }
    }
}
