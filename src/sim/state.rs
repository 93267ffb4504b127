//! Match state and core simulation types
//!
//! Everything the simulation reads or writes lives in `MatchState`; there is
//! no global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rules::{MatchRules, Variant};
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A player ran out of stocks; simulation is frozen until reset
    GameOver { winner: usize },
}

/// Things that happened during a tick (sound, logging, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump { player: usize },
    Attack { player: usize },
    Hit { attacker: usize, defender: usize },
    Fall { player: usize },
    Win { winner: usize },
}

/// Key identifiers bound to a player's actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack: String,
}

impl Controls {
    pub fn new(left: &str, right: &str, jump: &str, attack: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            jump: jump.to_string(),
            attack: attack.to_string(),
        }
    }

    /// Arrow keys, space to jump, enter to attack
    pub fn arrows() -> Self {
        Self::new("ArrowLeft", "ArrowRight", " ", "Enter")
    }

    /// WASD layout with `s` to attack
    pub fn wasd() -> Self {
        Self::new("a", "d", "w", "s")
    }

    /// All bound key identifiers
    pub fn keys(&self) -> [&str; 4] {
        [&self.left, &self.right, &self.jump, &self.attack]
    }
}

/// A static axis-aligned platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The stage layout shared by every mode: two ledges and a floating middle
pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new(0.0, 500.0, 300.0, 20.0),
        Platform::new(500.0, 500.0, 300.0, 20.0),
        Platform::new(300.0, 400.0, 200.0, 20.0),
    ]
}

/// A fighter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: [f32; 4],
    /// Top-left corner
    pub pos: Vec2,
    /// `x` carries knockback only; walking moves `pos` directly
    pub vel: Vec2,
    pub speed: f32,
    /// Set by a jump, cleared by landing on a platform
    pub airborne: bool,
    /// Never clamped; nothing happens at zero
    pub health: i32,
    pub falls: u32,
    pub cooldown: i32,
    pub attacking: bool,
    /// Steps left in the current attack window
    pub attack_timer: u32,
    /// Defenders already hit by the current swing
    #[serde(default)]
    pub hit_this_swing: Vec<usize>,
    pub spawn: Vec2,
    pub controls: Controls,
}

impl Player {
    pub fn new(name: &str, color: [f32; 4], spawn: Vec2, controls: Controls) -> Self {
        Self {
            name: name.to_string(),
            color,
            pos: spawn,
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            airborne: false,
            health: MAX_HEALTH,
            falls: 0,
            cooldown: 0,
            attacking: false,
            attack_timer: 0,
            hit_this_swing: Vec::new(),
            spawn,
            controls,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        PLAYER_SIZE
    }

    #[inline]
    pub fn height(&self) -> f32 {
        PLAYER_SIZE
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height()
    }

    /// Put the player back on its spawn point after a fall
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
        self.health = MAX_HEALTH;
    }

    /// Full reset for a new match
    pub fn reset(&mut self) {
        self.respawn();
        self.falls = 0;
        self.airborne = false;
        self.cooldown = 0;
        self.attacking = false;
        self.attack_timer = 0;
        self.hit_this_swing.clear();
    }
}

pub mod colors {
    pub const RED: [f32; 4] = [0.9, 0.15, 0.15, 1.0];
    pub const BLUE: [f32; 4] = [0.15, 0.3, 0.95, 1.0];
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub variant: Variant,
    pub rules: MatchRules,
    pub platforms: Vec<Platform>,
    /// Fixed roster, indexed by player number
    pub players: Vec<Player>,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Create a match using a variant's preset rules
    pub fn new(variant: Variant) -> Self {
        Self::with_rules(variant, variant.rules())
    }

    /// Create a match with custom rules (arena size, hit policy, ...)
    pub fn with_rules(variant: Variant, rules: MatchRules) -> Self {
        let roster = [
            Player::new("Player 1", colors::RED, Vec2::new(100.0, 400.0), Controls::arrows()),
            Player::new("Player 2", colors::BLUE, Vec2::new(600.0, 400.0), Controls::wasd()),
        ];
        let players = roster
            .into_iter()
            .take(variant.player_count())
            .map(|mut p| {
                p.speed = rules.move_speed;
                p
            })
            .collect();

        Self {
            variant,
            rules,
            platforms: default_platforms(),
            players,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::GameOver { winner } => self.players.get(winner),
            GamePhase::Playing => None,
        }
    }

    /// Text for the win overlay, once the match is decided
    pub fn winner_banner(&self) -> Option<String> {
        self.winner().map(|p| format!("{} Wins!", p.name))
    }

    /// Remaining stocks for a player, if stocks are in play
    pub fn stocks_left(&self, player: usize) -> Option<u32> {
        let max = self.rules.max_falls?;
        let falls = self.players.get(player)?.falls;
        Some(max.saturating_sub(falls))
    }
}
