//! Texture loading and sheet geometry.
//!
//! The only fallible part of the program: everything here runs once at
//! startup, before the frame loop. A texture that fails to load, or loads
//! with zero dimensions, aborts startup instead of feeding degenerate
//! frame rectangles into the simulation.

use crate::constants::{OBSTACLE_SHEET_GRID, PLAYER_SHEET_COLUMNS};
use macroquad::math::{vec2, Vec2};
use macroquad::texture::{load_texture, Texture2D};
use thiserror::Error;

pub const PLAYER_TEXTURE: &str = "textures/scarfy.png";
pub const OBSTACLE_TEXTURE: &str = "textures/12_nebula_spritesheet.png";
pub const BACKGROUND_TEXTURE: &str = "textures/far-buildings.png";
pub const MIDGROUND_TEXTURE: &str = "textures/back-buildings.png";
pub const FOREGROUND_TEXTURE: &str = "textures/foreground.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}: {source}")]
    Load {
        path: &'static str,
        source: macroquad::Error,
    },
    #[error("texture {path} loaded with zero dimensions")]
    ZeroSized { path: &'static str },
}

/// The five textures the game draws from.
pub struct Textures {
    pub player: Texture2D,
    pub obstacle: Texture2D,
    pub background: Texture2D,
    pub midground: Texture2D,
    pub foreground: Texture2D,
}

impl Textures {
    pub async fn load() -> Result<Self, AssetError> {
        Ok(Self {
            player: load_checked(PLAYER_TEXTURE).await?,
            obstacle: load_checked(OBSTACLE_TEXTURE).await?,
            background: load_checked(BACKGROUND_TEXTURE).await?,
            midground: load_checked(MIDGROUND_TEXTURE).await?,
            foreground: load_checked(FOREGROUND_TEXTURE).await?,
        })
    }

    /// Derive the sprite-sheet geometry the simulation needs. Texture
    /// dimensions drive frame sizing: the player sheet is a single row of
    /// six frames, the obstacle sheet an 8x8 grid.
    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            player_frame: vec2(
                self.player.width() / PLAYER_SHEET_COLUMNS,
                self.player.height(),
            ),
            obstacle_frame: vec2(
                self.obstacle.width() / OBSTACLE_SHEET_GRID,
                self.obstacle.height() / OBSTACLE_SHEET_GRID,
            ),
            layer_widths: [
                self.background.width(),
                self.midground.width(),
                self.foreground.width(),
            ],
        }
    }
}

/// Frame sizes and layer widths derived from texture dimensions. Plain
/// data, so the simulation and its tests never touch GPU resources.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub player_frame: Vec2,
    pub obstacle_frame: Vec2,
    pub layer_widths: [f32; 3],
}

async fn load_checked(path: &'static str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path)
        .await
        .map_err(|source| AssetError::Load { path, source })?;
    if texture.width() == 0.0 || texture.height() == 0.0 {
        return Err(AssetError::ZeroSized { path });
    }
    Ok(texture)
}
