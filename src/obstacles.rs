//! The scrolling obstacle field and the finish line tied to it.

use crate::constants::{
    FINISH_LINE_OFFSET, OBSTACLE_COUNT, OBSTACLE_MAX_FRAME, OBSTACLE_VELOCITY, SPAWN_GAP_MAX,
    SPAWN_GAP_MIN,
};
use crate::sprite::Sprite;
use macroquad::math::{vec2, Vec2};
use rand::Rng;

/// A fixed-size set of obstacle sprites scrolling leftward, plus the finish
/// line that trails the last of them. Built once at startup.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub obstacles: [Sprite; OBSTACLE_COUNT],
    /// World x-coordinate the player must reach to win. Translated by the
    /// obstacle velocity every frame so its spacing to the last obstacle
    /// is preserved.
    pub finish_line: f32,
}

impl ObstacleField {
    /// Place obstacles off the right edge of the viewport with independent
    /// random horizontal gaps, all resting on the viewport floor.
    ///
    /// Obstacle animations use a frame time of zero, so they cycle one
    /// sheet frame per update regardless of player state.
    pub fn spawn<R: Rng>(
        frame_size: Vec2,
        viewport_size: Vec2,
        rng: &mut R,
    ) -> Self {
        let floor_y = viewport_size.y - frame_size.y;

        let obstacles: [Sprite; OBSTACLE_COUNT] = std::array::from_fn(|i| {
            let gap = rng.gen_range(SPAWN_GAP_MIN..=SPAWN_GAP_MAX);
            let x = viewport_size.x + i as f32 * gap;
            Sprite::new(frame_size, vec2(x, floor_y), 0.0)
        });
        let finish_line = obstacles[OBSTACLE_COUNT - 1].pos.x + FINISH_LINE_OFFSET;

        Self {
            obstacles,
            finish_line,
        }
    }

    /// Scroll every obstacle and the finish line leftward by the shared
    /// velocity, and advance each obstacle's animation unconditionally.
    pub fn update(&mut self, dt: f32) {
        let shift = OBSTACLE_VELOCITY * dt;
        for obstacle in &mut self.obstacles {
            obstacle.pos.x += shift;
            obstacle.advance(dt, OBSTACLE_MAX_FRAME);
        }
        self.finish_line += shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const VIEWPORT: Vec2 = vec2(512.0, 380.0);
    const FRAME: Vec2 = vec2(100.0, 100.0);

    fn field(seed: u64) -> ObstacleField {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        ObstacleField::spawn(FRAME, VIEWPORT, &mut rng)
    }

    #[test]
    fn test_spawn_places_obstacles_on_floor_off_right_edge() {
        let field = field(42);
        for (i, obstacle) in field.obstacles.iter().enumerate() {
            assert_eq!(obstacle.pos.y, VIEWPORT.y - FRAME.y);
            assert!(
                obstacle.pos.x >= VIEWPORT.x,
                "Obstacle {} should start off the right edge",
                i
            );
            assert_eq!(obstacle.frame, 0);
            assert_eq!(obstacle.frame_time, 0.0);
        }
        // First obstacle spawns exactly at the viewport edge (gap factor 0)
        assert_eq!(field.obstacles[0].pos.x, VIEWPORT.x);
    }

    #[test]
    fn test_spawn_gaps_within_bounds() {
        for seed in 0..20 {
            let field = field(seed);
            for (i, obstacle) in field.obstacles.iter().enumerate().skip(1) {
                let gap = (obstacle.pos.x - VIEWPORT.x) / i as f32;
                assert!(
                    (SPAWN_GAP_MIN..=SPAWN_GAP_MAX).contains(&gap),
                    "Gap {} out of bounds for seed {}",
                    gap,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_for_a_seed() {
        let a = field(7);
        let b = field(7);
        for (x, y) in a.obstacles.iter().zip(b.obstacles.iter()) {
            assert_eq!(x.pos.x, y.pos.x);
        }
        assert_eq!(a.finish_line, b.finish_line);
    }

    #[test]
    fn test_finish_line_trails_last_obstacle() {
        let field = field(42);
        let last = &field.obstacles[OBSTACLE_COUNT - 1];
        assert_eq!(field.finish_line, last.pos.x + FINISH_LINE_OFFSET);
    }

    #[test]
    fn test_update_translates_everything_by_shared_velocity() {
        let mut field = field(42);
        let dt = 1.0 / 60.0;
        let before: Vec<f32> = field.obstacles.iter().map(|o| o.pos.x).collect();
        let finish_before = field.finish_line;

        field.update(dt);

        let shift = OBSTACLE_VELOCITY * dt;
        for (obstacle, x_before) in field.obstacles.iter().zip(before) {
            assert!((obstacle.pos.x - (x_before + shift)).abs() < 1e-4);
        }
        assert!((field.finish_line - (finish_before + shift)).abs() < 1e-4);
    }

    #[test]
    fn test_finish_line_spacing_preserved_across_updates() {
        let mut field = field(42);
        let spacing = field.finish_line - field.obstacles[OBSTACLE_COUNT - 1].pos.x;

        for _ in 0..120 {
            field.update(1.0 / 60.0);
        }

        let spacing_after = field.finish_line - field.obstacles[OBSTACLE_COUNT - 1].pos.x;
        // The two coordinates accumulate the shared shift at different f32
        // magnitudes, so a couple of seconds of frames round differently by
        // a few hundredths of a pixel.
        assert!(
            (spacing - spacing_after).abs() < 0.1,
            "Finish-line spacing drifted by {}",
            spacing - spacing_after
        );
    }

    #[test]
    fn test_obstacles_animate_every_update() {
        let mut field = field(42);
        // frame_time 0 means one frame per update, wrapping past the max
        for expected in [1, 2, 3, 4, 5, 6, 7, 0, 1] {
            field.update(1.0 / 60.0);
            assert_eq!(field.obstacles[0].frame, expected);
        }
    }
}
