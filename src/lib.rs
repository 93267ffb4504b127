//! Plat Duel - A two-player local platform fighter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platforms, combat, stocks)
//! - `input`: Keyboard state and per-player input sampling
//! - `timestep`: Fixed timestep accumulator
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Persisted player preferences
//! - `sound`: Tone table for game events (played by `audio` on the web)

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sound;
pub mod timestep;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use input::KeyState;
pub use settings::{ConfigError, Settings};
pub use timestep::FixedTimestep;

/// Game configuration constants
///
/// Physics values are per simulation step, tuned for `SIM_DT`.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the physics was tuned at)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default arena (canvas) dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player box is a fixed square
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: i32 = 100;

    /// Downward acceleration per step²
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal knockback decay per step
    pub const FRICTION: f32 = 0.9;
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Solo platformer uses a softer jump
    pub const SOLO_JUMP_VELOCITY: f32 = -10.0;

    /// Combat
    pub const ATTACK_RANGE: f32 = 60.0;
    pub const ATTACK_DAMAGE: i32 = 20;
    pub const KNOCKBACK: f32 = 8.0;
    pub const KNOCKBACK_LIFT: f32 = -5.0;
    pub const ATTACK_COOLDOWN: i32 = 30;
    pub const ATTACK_WINDOW: u32 = 10;

    /// Falls before a player is eliminated
    pub const MAX_FALLS: u32 = 3;
    /// Where players are parked once the match is decided
    pub const OFFSCREEN_X: f32 = -1000.0;
}
