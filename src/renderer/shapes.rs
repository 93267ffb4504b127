//! Shape generation for 2D primitives
//!
//! Everything in this game is an axis-aligned rectangle.

use super::vertex::{Vertex, colors};
use crate::consts::MAX_HEALTH;
use crate::sim::Player;

/// Health bar thickness and gap above the player
const BAR_HEIGHT: f32 = 5.0;
const BAR_OFFSET: f32 = 10.0;
/// Stock pips sit above the health bar
const PIP_SIZE: f32 = 6.0;
const PIP_GAP: f32 = 3.0;
const PIP_OFFSET: f32 = 20.0;
/// How far the swing flash extends past each side of the player
const SWING_REACH: f32 = 10.0;

/// Two triangles covering `(x, y)` to `(x + w, y + h)`, y pointing down
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (x2, y2) = (x + w, y + h);
    [
        Vertex::new(x, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Player body
pub fn player_body(player: &Player) -> [Vertex; 6] {
    rect(
        player.pos.x,
        player.pos.y,
        player.width(),
        player.height(),
        player.color,
    )
}

/// Width of the health bar. Negative health draws nothing.
pub fn health_bar_width(player: &Player) -> f32 {
    player.health.clamp(0, MAX_HEALTH) as f32 * player.width() / MAX_HEALTH as f32
}

/// Green bar above the player, proportional to health
pub fn health_bar(player: &Player) -> Option<[Vertex; 6]> {
    let width = health_bar_width(player);
    if width <= 0.0 {
        return None;
    }
    Some(rect(
        player.pos.x,
        player.pos.y - BAR_OFFSET,
        width,
        BAR_HEIGHT,
        colors::HEALTH,
    ))
}

/// Translucent flash around the player while the attack window is open
pub fn swing_flash(player: &Player) -> [Vertex; 6] {
    rect(
        player.pos.x - SWING_REACH,
        player.pos.y,
        player.width() + SWING_REACH * 2.0,
        player.height(),
        colors::HITBOX,
    )
}

/// One small square per remaining stock
pub fn stock_pips(player: &Player, stocks: u32) -> Vec<Vertex> {
    (0..stocks)
        .flat_map(|i| {
            rect(
                player.pos.x + i as f32 * (PIP_SIZE + PIP_GAP),
                player.pos.y - PIP_OFFSET,
                PIP_SIZE,
                PIP_SIZE,
                colors::STOCK,
            )
        })
        .collect()
}
