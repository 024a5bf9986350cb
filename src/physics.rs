//! Player state and vertical physics: gravity, jumping, ground contact.

use crate::constants::{GRAVITY, JUMP_VELOCITY};
use crate::sprite::Sprite;

/// True iff the sprite's bottom edge rests at or below the viewport floor.
pub fn is_on_ground(sprite: &Sprite, viewport_height: f32) -> bool {
    sprite.pos.y >= viewport_height - sprite.rect.h
}

/// The player sprite plus its vertical motion state.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub sprite: Sprite,
    /// Vertical velocity in pixels/second (negative = upward).
    pub velocity: f32,
    pub airborne: bool,
}

impl Player {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            velocity: 0.0,
            airborne: false,
        }
    }

    /// Ground check and gravity. On the ground the velocity zeroes and the
    /// airborne flag clears; in the air gravity accumulates. Runs before
    /// jump input each frame, so a same-frame jump starts from velocity 0.
    pub fn apply_vertical_physics(&mut self, dt: f32, viewport_height: f32) {
        if is_on_ground(&self.sprite, viewport_height) {
            self.velocity = 0.0;
            self.airborne = false;
        } else {
            self.velocity += GRAVITY * dt;
            self.airborne = true;
        }
    }

    /// Apply the jump impulse if grounded. Returns true if the jump took.
    pub fn try_jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity += JUMP_VELOCITY;
        true
    }

    /// Integrate vertical position.
    pub fn integrate(&mut self, dt: f32) {
        self.sprite.pos.y += self.velocity * dt;
    }
}
