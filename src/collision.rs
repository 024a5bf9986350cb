//! Axis-aligned collision testing between the player and obstacles.

use crate::constants::COLLISION_PAD;
use crate::obstacles::ObstacleField;
use crate::physics::Player;
use macroquad::math::Rect;

/// Shrink a rectangle by `pad` on every side.
pub fn inset(rect: Rect, pad: f32) -> Rect {
    Rect::new(
        rect.x + pad,
        rect.y + pad,
        rect.w - pad * 2.0,
        rect.h - pad * 2.0,
    )
}

/// Strict AABB overlap: rectangles intersect iff their projections overlap
/// on both axes. Touching edges do not count, and zero-width or zero-height
/// rectangles never collide.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    // A degenerate rectangle has no interior, even when it sits strictly
    // inside the other rectangle.
    a.w > 0.0
        && a.h > 0.0
        && b.w > 0.0
        && b.h > 0.0
        && a.x < b.x + b.w
        && a.x + a.w > b.x
        && a.y < b.y + b.h
        && a.y + a.h > b.y
}

/// True iff any obstacle's padded rectangle overlaps the player's full
/// rectangle. The padding compensates for the transparent margins baked
/// into the obstacle sprite sheet; the player side is unpadded.
pub fn player_hit(player: &Player, field: &ObstacleField) -> bool {
    let player_rect = player.sprite.bounds();
    field
        .obstacles
        .iter()
        .any(|obstacle| rects_overlap(inset(obstacle.bounds(), COLLISION_PAD), player_rect))
}
