//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match deterministically:
//! input → physics → platforms → combat → stocks.

use super::collision::resolve_platforms;
use super::combat::{resolve_attacks, try_attack};
use super::physics::{apply_movement, integrate, try_jump};
use super::state::{GameEvent, GamePhase, MatchState};
use crate::consts::OFFSCREEN_X;

/// Buttons held by one player during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Indexed like `MatchState::players`; missing entries mean no buttons
    pub players: Vec<PlayerInput>,
}

impl TickInput {
    pub fn for_player(&self, index: usize) -> PlayerInput {
        self.players.get(index).copied().unwrap_or_default()
    }
}

/// Advance the match by one fixed step
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.events.clear();

    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    for index in 0..state.players.len() {
        let buttons = input.for_player(index);
        let rules = &state.rules;
        let player = &mut state.players[index];

        integrate(player, rules);
        apply_movement(player, buttons.left, buttons.right, rules.arena.width);

        if try_jump(player, buttons.jump, rules.jump_velocity) {
            state.events.push(GameEvent::Jump { player: index });
        }

        if let Some(combat) = &rules.combat {
            if try_attack(player, buttons.attack, combat) {
                state.events.push(GameEvent::Attack { player: index });
            }
        }

        resolve_platforms(player, &state.platforms);

        if player.pos.y > rules.arena.height {
            handle_fall(state, index);
            if state.is_over() {
                return;
            }
        }
    }

    if let Some(combat) = &state.rules.combat {
        resolve_attacks(&mut state.players, combat, &mut state.events);
    }
}

/// A player dropped below the arena: count the stock or respawn
fn handle_fall(state: &mut MatchState, index: usize) {
    state.events.push(GameEvent::Fall { player: index });

    let max_falls = state.rules.max_falls;
    let player = &mut state.players[index];

    let Some(max_falls) = max_falls else {
        log::info!("{} fell, respawning", player.name);
        player.respawn();
        return;
    };

    player.falls += 1;
    log::info!("{} fell ({}/{})", player.name, player.falls, max_falls);

    if player.falls < max_falls {
        player.respawn();
        return;
    }

    // The first other player takes the match
    let winner = (0..state.players.len()).find(|&i| i != index).unwrap_or(index);
    declare_winner(state, winner);
}

fn declare_winner(state: &mut MatchState, winner: usize) {
    state.phase = GamePhase::GameOver { winner };
    for player in &mut state.players {
        player.pos.x = OFFSCREEN_X;
    }
    state.events.push(GameEvent::Win { winner });
    log::info!("{} wins after {} ticks", state.players[winner].name, state.time_ticks);
}

/// Restore every player to spawn with full health and stocks, and resume play
pub fn reset(state: &mut MatchState) {
    for player in &mut state.players {
        player.reset();
    }
    state.phase = GamePhase::Playing;
    state.events.clear();
    log::info!("Match reset ({})", state.variant);
}
