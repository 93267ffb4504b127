//! Scene assembly
//!
//! Turns a `MatchState` into a flat vertex list. Pure function of state, so
//! it runs without a GPU.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::MatchState;

/// Build every vertex for the current frame, back to front
pub fn build(state: &MatchState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.platforms.len() + state.players.len() * 4) * 6);

    for platform in &state.platforms {
        vertices.extend(shapes::rect(
            platform.x,
            platform.y,
            platform.width,
            platform.height,
            colors::PLATFORM,
        ));
    }

    for (index, player) in state.players.iter().enumerate() {
        if state.rules.show_match_ui && player.attack_timer > 0 {
            vertices.extend(shapes::swing_flash(player));
        }

        vertices.extend(shapes::player_body(player));

        if state.rules.combat_enabled() {
            if let Some(bar) = shapes::health_bar(player) {
                vertices.extend(bar);
            }
        }

        if state.rules.show_match_ui {
            if let Some(stocks) = state.stocks_left(index) {
                vertices.extend(shapes::stock_pips(player, stocks));
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PlayerInput, TickInput, Variant, tick};

    #[test]
    fn test_duel_scene() {
        let state = MatchState::new(Variant::Duel);
        // 3 platforms, 2 bodies, 2 health bars
        assert_eq!(build(&state).len(), 7 * 6);
    }

    #[test]
    fn test_stock_scene_shows_pips_and_swing() {
        let mut state = MatchState::new(Variant::Stock);
        // 3 platforms + 2 × (body + bar + 3 pips)
        assert_eq!(build(&state).len(), (3 + 2 * 5) * 6);

        let input = TickInput {
            players: vec![
                PlayerInput {
                    attack: true,
                    ..Default::default()
                },
                PlayerInput::default(),
            ],
        };
        tick(&mut state, &input);
        let vertices = build(&state);
        assert!(vertices.iter().any(|v| v.color == colors::HITBOX));
    }

    #[test]
    fn test_solo_scene_has_no_health_bar() {
        let state = MatchState::new(Variant::Solo);
        // 3 platforms, 1 body
        let vertices = build(&state);
        assert_eq!(vertices.len(), 4 * 6);
        assert!(vertices.iter().all(|v| v.color != colors::HEALTH));
    }

    #[test]
    fn test_duel_never_shows_swing() {
        let mut state = MatchState::new(Variant::Duel);
        state.players[0].attack_timer = 1;
        assert!(build(&state).iter().all(|v| v.color != colors::HITBOX));
    }
}
