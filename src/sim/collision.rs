//! Platform collision
//!
//! Platforms are one-way: a player only lands when its bottom edge reaches
//! the platform top within this step's vertical velocity. There is no side
//! collision and a fast enough fall can pass through a thin platform.

use super::state::{Platform, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn of_player(player: &Player) -> Self {
        Self {
            x: player.pos.x,
            y: player.pos.y,
            w: player.width(),
            h: player.height(),
        }
    }

    pub fn of_platform(platform: &Platform) -> Self {
        Self {
            x: platform.x,
            y: platform.y,
            w: platform.width,
            h: platform.height,
        }
    }

    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w && self.x + self.w > other.x
    }
}

/// Landing predicate: horizontal overlap, bottom still above the platform's
/// bottom, and this step's projected bottom at or past the platform top.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    let body = Aabb::of_player(player);
    let ledge = Aabb::of_platform(platform);

    body.overlaps_x(&ledge)
        && player.bottom() < platform.bottom()
        && player.bottom() + player.vel.y >= platform.y
}

/// Snap the player onto every platform it lands on this step.
/// Returns true if the player touched down.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) -> bool {
    let mut landed = false;
    for platform in platforms {
        if lands_on(player, platform) {
            player.pos.y = platform.y - player.height();
            player.vel.y = 0.0;
            player.airborne = false;
            landed = true;
        }
    }
    landed
}
