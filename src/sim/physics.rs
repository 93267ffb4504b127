//! Per-step player physics
//!
//! Semi-implicit Euler, one step per tick. All constants are per step.

use super::rules::MatchRules;
use super::state::Player;

/// Apply gravity, move by velocity, then decay horizontal knockback
pub fn integrate(player: &mut Player, rules: &MatchRules) {
    player.vel.y += rules.gravity;
    player.pos += player.vel;
    player.vel.x *= rules.friction;
}

/// Walk left/right as a position delta, staying inside the arena
pub fn apply_movement(player: &mut Player, left: bool, right: bool, arena_width: f32) {
    if left {
        player.pos.x -= player.speed;
    }
    if right {
        player.pos.x += player.speed;
    }
    player.pos.x = player.pos.x.clamp(0.0, (arena_width - player.width()).max(0.0));
}

/// Start a jump if grounded. Returns true if the jump happened.
pub fn try_jump(player: &mut Player, jump: bool, jump_velocity: f32) -> bool {
    if jump && !player.airborne {
        player.vel.y = jump_velocity;
        player.airborne = true;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rules::Variant;
    use crate::sim::state::{Controls, colors};
    use glam::Vec2;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new("P", colors::RED, Vec2::new(x, y), Controls::arrows())
    }

    #[test]
    fn test_gravity_accumulates() {
        let rules = Variant::Duel.rules();
        let mut p = player_at(100.0, 100.0);
        integrate(&mut p, &rules);
        assert_eq!(p.vel.y, 0.5);
        assert_eq!(p.pos.y, 100.5);
        integrate(&mut p, &rules);
        assert_eq!(p.vel.y, 1.0);
        assert_eq!(p.pos.y, 101.5);
    }

    #[test]
    fn test_knockback_moves_before_decay() {
        let rules = Variant::Duel.rules();
        let mut p = player_at(100.0, 100.0);
        p.vel.x = 8.0;
        integrate(&mut p, &rules);
        assert_eq!(p.pos.x, 108.0);
        assert!((p.vel.x - 7.2).abs() < 1e-6);
    }

    #[test]
    fn test_movement_clamps_to_arena() {
        let mut p = player_at(2.0, 0.0);
        apply_movement(&mut p, true, false, 800.0);
        assert_eq!(p.pos.x, 0.0);

        let mut p = player_at(758.0, 0.0);
        apply_movement(&mut p, false, true, 800.0);
        assert_eq!(p.pos.x, 760.0);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut p = player_at(300.0, 0.0);
        apply_movement(&mut p, true, true, 800.0);
        assert_eq!(p.pos.x, 300.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut p = player_at(0.0, 0.0);
        assert!(try_jump(&mut p, true, -12.0));
        assert_eq!(p.vel.y, -12.0);
        assert!(p.airborne);

        p.vel.y = -3.0;
        assert!(!try_jump(&mut p, true, -12.0));
        assert_eq!(p.vel.y, -3.0);
    }
}
