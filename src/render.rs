//! Drawing. Reads the world, never mutates it.

use crate::assets::Textures;
use crate::constants::{PARALLAX_SCALE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::parallax::ParallaxLayer;
use crate::sprite::Sprite;
use crate::world::{RoundPhase, World};
use macroquad::prelude::*;

const LOSS_TEXT: &str = "Game Over!";
const WIN_TEXT: &str = "You Win!!!";
const OUTCOME_FONT_SIZE: f32 = 40.0;

/// Draw one frame: parallax layers back to front, then sprites and, in a
/// terminal phase, the outcome message. Obstacles are only drawn while the
/// round is live; a won round still shows the player.
pub fn draw(world: &World, textures: &Textures) {
    clear_background(WHITE);

    draw_layer(&textures.background, &world.parallax.layers[0]);
    draw_layer(&textures.midground, &world.parallax.layers[1]);
    draw_layer(&textures.foreground, &world.parallax.layers[2]);

    match world.phase {
        RoundPhase::Playing => {
            for obstacle in &world.obstacles.obstacles {
                draw_sprite(&textures.obstacle, obstacle);
            }
            draw_sprite(&textures.player, &world.player.sprite);
        }
        RoundPhase::Lost => draw_outcome(LOSS_TEXT),
        RoundPhase::Won => {
            draw_outcome(WIN_TEXT);
            draw_sprite(&textures.player, &world.player.sprite);
        }
    }
}

/// Draw a layer twice side by side at 2x scale for seamless tiling.
fn draw_layer(texture: &Texture2D, layer: &ParallaxLayer) {
    let dest = vec2(
        texture.width() * PARALLAX_SCALE,
        texture.height() * PARALLAX_SCALE,
    );
    for copy in 0..2 {
        draw_texture_ex(
            texture,
            layer.offset + copy as f32 * dest.x,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(dest),
                ..Default::default()
            },
        );
    }
}

/// Draw the sprite's current frame rectangle at its world position.
fn draw_sprite(texture: &Texture2D, sprite: &Sprite) {
    draw_texture_ex(
        texture,
        sprite.pos.x,
        sprite.pos.y,
        WHITE,
        DrawTextureParams {
            source: Some(sprite.rect),
            ..Default::default()
        },
    );
}

fn draw_outcome(text: &str) {
    draw_text(
        text,
        VIEWPORT_WIDTH as f32 / 4.0,
        VIEWPORT_HEIGHT as f32 / 2.0,
        OUTCOME_FONT_SIZE,
        WHITE,
    );
}
