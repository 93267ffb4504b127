//! Keyboard state
//!
//! Key handlers only flip flags here; the frame loop samples them once per
//! frame into a `TickInput`.

use std::collections::HashMap;

use crate::sim::{Controls, MatchState, PlayerInput, TickInput};

/// Held state per key identifier (`KeyboardEvent.key`)
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_string(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    /// Drop every held key (window lost focus, keyups will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Buttons for one control scheme
    pub fn buttons(&self, controls: &Controls) -> PlayerInput {
        PlayerInput {
            left: self.is_held(&controls.left),
            right: self.is_held(&controls.right),
            jump: self.is_held(&controls.jump),
            attack: self.is_held(&controls.attack),
        }
    }

    /// Sample every player's bindings
    pub fn sample(&self, state: &MatchState) -> TickInput {
        TickInput {
            players: state
                .players
                .iter()
                .map(|p| self.buttons(&p.controls))
                .collect(),
        }
    }
}

/// True if any player in the match has this key bound
pub fn is_bound(state: &MatchState, key: &str) -> bool {
    state
        .players
        .iter()
        .any(|p| p.controls.keys().contains(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Variant;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        assert!(!keys.is_held("a"));
        keys.press("a");
        assert!(keys.is_held("a"));
        keys.release("a");
        assert!(!keys.is_held("a"));
    }

    #[test]
    fn test_sample_maps_bindings_per_player() {
        let state = MatchState::new(Variant::Stock);
        let mut keys = KeyState::new();
        keys.press("ArrowRight");
        keys.press(" ");
        keys.press("s");

        let input = keys.sample(&state);
        assert_eq!(input.players.len(), 2);
        assert_eq!(
            input.players[0],
            PlayerInput {
                right: true,
                jump: true,
                ..Default::default()
            }
        );
        assert_eq!(
            input.players[1],
            PlayerInput {
                attack: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_release_all() {
        let state = MatchState::new(Variant::Duel);
        let mut keys = KeyState::new();
        keys.press("Enter");
        keys.release_all();
        assert_eq!(keys.sample(&state).players[0], PlayerInput::default());
    }

    #[test]
    fn test_is_bound() {
        let solo = MatchState::new(Variant::Solo);
        assert!(is_bound(&solo, " "));
        assert!(!is_bound(&solo, "w"));
        assert!(is_bound(&MatchState::new(Variant::Duel), "w"));
    }
}
