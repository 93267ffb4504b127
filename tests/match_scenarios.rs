//! End-to-end matches driven through the keyboard state

use glam::Vec2;

use plat_duel::renderer::scene;
use plat_duel::sim::{GameEvent, GamePhase, MatchState, Variant, reset, tick};
use plat_duel::{FixedTimestep, KeyState};

/// Run `frames` display frames of `frame_dt` seconds with the given keys held
fn run_frames(
    state: &mut MatchState,
    keys: &KeyState,
    clock: &mut FixedTimestep,
    frames: u32,
    frame_dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        for _ in 0..clock.advance(frame_dt) {
            let input = keys.sample(state);
            tick(state, &input);
            events.extend(state.events.iter().copied());
        }
    }
    events
}

#[test]
fn idle_players_come_to_rest_on_their_ledges() {
    let mut state = MatchState::new(Variant::Duel);
    let mut clock = FixedTimestep::default();
    run_frames(&mut state, &KeyState::new(), &mut clock, 120, 1.0 / 60.0);

    assert_eq!(state.players[0].pos, Vec2::new(100.0, 460.0));
    assert_eq!(state.players[0].vel.y, 0.0);
    assert_eq!(state.players[1].pos, Vec2::new(600.0, 460.0));
}

#[test]
fn walking_off_the_ledge_three_times_loses_the_match() {
    let mut state = MatchState::new(Variant::Stock);
    let mut clock = FixedTimestep::default();
    let mut keys = KeyState::new();
    keys.press("ArrowRight");

    let events = run_frames(&mut state, &keys, &mut clock, 2_000, 1.0 / 60.0);

    let falls = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Fall { player: 0 }))
        .count();
    assert_eq!(falls, 3);
    assert_eq!(state.phase, GamePhase::GameOver { winner: 1 });
    assert_eq!(state.winner_banner().as_deref(), Some("Player 2 Wins!"));
    assert!(state.players.iter().all(|p| p.pos.x == -1000.0));

    reset(&mut state);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.players[0].falls, 0);
    assert_eq!(state.players[0].pos, Vec2::new(100.0, 400.0));
}

#[test]
fn attack_key_hits_neighbour() {
    let mut state = MatchState::new(Variant::Stock);
    state.players[1].pos = Vec2::new(140.0, 400.0);
    let mut clock = FixedTimestep::default();
    let mut keys = KeyState::new();
    keys.press("Enter");

    let events = run_frames(&mut state, &keys, &mut clock, 1, 1.0 / 60.0);

    assert!(events.contains(&GameEvent::Hit { attacker: 0, defender: 1 }));
    assert_eq!(state.players[1].health, 80);
    assert_eq!(state.players[1].vel.x, 8.0);
    assert!(!scene::build(&state).is_empty());
}

#[test]
fn solo_mode_has_a_single_jumping_player() {
    let mut state = MatchState::new(Variant::Solo);
    let mut clock = FixedTimestep::default();
    let mut keys = KeyState::new();
    run_frames(&mut state, &keys, &mut clock, 60, 1.0 / 60.0);

    keys.press(" ");
    let events = run_frames(&mut state, &keys, &mut clock, 1, 1.0 / 60.0);
    assert_eq!(events, vec![GameEvent::Jump { player: 0 }]);
    assert_eq!(state.players.len(), 1);
}
