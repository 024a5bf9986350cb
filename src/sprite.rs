//! Sprite state and frame-cycling animation.

use macroquad::math::{Rect, Vec2};

/// One animated sprite: the sub-rectangle of its sheet currently shown,
/// its world position, and the animation bookkeeping that cycles frames.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    /// Frame rectangle in source-texture space.
    pub rect: Rect,
    /// World position of the top-left corner.
    pub pos: Vec2,
    /// Current animation frame index.
    pub frame: u32,
    /// How long each frame is displayed, in seconds. Zero means the
    /// animation advances on every update.
    pub frame_time: f32,
    /// Time accumulated in the current frame.
    pub elapsed: f32,
}

impl Sprite {
    /// Create a sprite showing frame 0 of a sheet with the given frame size.
    pub fn new(frame_size: Vec2, pos: Vec2, frame_time: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, frame_size.x, frame_size.y),
            pos,
            frame: 0,
            frame_time,
            elapsed: 0.0,
        }
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// Accumulates `dt` into the elapsed counter; once it reaches the
    /// per-frame duration the counter resets, the frame rectangle's
    /// horizontal offset snaps to the current frame, and the frame index
    /// increments, wrapping to 0 past `max_frame`. Advances at most one
    /// frame per call; sub-frame ticks accumulate silently.
    pub fn advance(&mut self, dt: f32, max_frame: u32) {
        self.elapsed += dt;
        if self.elapsed >= self.frame_time {
            self.elapsed = 0.0;
            self.rect.x = self.frame as f32 * self.rect.w;
            self.frame += 1;
            if self.frame > max_frame {
                self.frame = 0;
            }
        }
    }

    /// The sprite's full rectangle in world space.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.rect.w, self.rect.h)
    }
}
