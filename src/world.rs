//! Per-frame orchestration and the round's terminal state machine.

use crate::assets::SheetLayout;
use crate::collision;
use crate::constants::{PLAYER_FRAME_TIME, PLAYER_MAX_FRAME, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::obstacles::ObstacleField;
use crate::parallax::Parallax;
use crate::physics::Player;
use crate::sprite::Sprite;
use log::info;
use macroquad::math::{vec2, Vec2};
use rand::Rng;

/// The round outcome. `Lost` and `Won` are terminal: nothing transitions
/// out of them, so a collision stays a collision even after the obstacle
/// scrolls past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    Lost,
    Won,
}

/// All simulation state for one round. Built once at startup, updated once
/// per rendered frame.
pub struct World {
    pub player: Player,
    pub obstacles: ObstacleField,
    pub parallax: Parallax,
    pub phase: RoundPhase,
}

pub fn viewport_size() -> Vec2 {
    vec2(VIEWPORT_WIDTH as f32, VIEWPORT_HEIGHT as f32)
}

impl World {
    /// Build the round: player centered on the floor, obstacles off the
    /// right edge with randomized gaps, backgrounds at rest.
    pub fn new<R: Rng>(layout: &SheetLayout, rng: &mut R) -> Self {
        let viewport = viewport_size();
        let frame = layout.player_frame;
        let player_pos = vec2(
            viewport.x / 2.0 - frame.x / 2.0,
            viewport.y - frame.y,
        );
        let player = Player::new(Sprite::new(frame, player_pos, PLAYER_FRAME_TIME));

        Self {
            player,
            obstacles: ObstacleField::spawn(layout.obstacle_frame, viewport, rng),
            parallax: Parallax::new(layout.layer_widths),
            phase: RoundPhase::Playing,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// While playing: parallax, vertical physics, jump input, obstacle
    /// field, position integration, grounded-only player animation,
    /// collision against the post-update obstacle positions, then the
    /// outcome check with Lost taking priority over Won.
    ///
    /// In a terminal phase only the scenery keeps moving; the player
    /// freezes, input is ignored and the outcome is never re-evaluated.
    pub fn update(&mut self, dt: f32, jump_pressed: bool) {
        self.parallax.update(dt);

        if self.phase != RoundPhase::Playing {
            self.obstacles.update(dt);
            return;
        }

        let viewport = viewport_size();
        self.player.apply_vertical_physics(dt, viewport.y);
        if jump_pressed {
            self.player.try_jump();
        }

        self.obstacles.update(dt);
        self.player.integrate(dt);

        if !self.player.airborne {
            self.player.sprite.advance(dt, PLAYER_MAX_FRAME);
        }

        if collision::player_hit(&self.player, &self.obstacles) {
            info!("round lost: collision");
            self.phase = RoundPhase::Lost;
        } else if self.player.sprite.pos.x >= self.obstacles.finish_line {
            info!("round won: crossed the finish line");
            self.phase = RoundPhase::Won;
        }
    }
}
