//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (constants are per step)
//! - Stable iteration order (by player index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod physics;
pub mod rules;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on, resolve_platforms};
pub use rules::{Arena, CombatRules, HitPolicy, MatchRules, Variant};
pub use state::{
    Controls, GameEvent, GamePhase, MatchState, Platform, Player, default_platforms,
};
pub use tick::{PlayerInput, TickInput, reset, tick};
