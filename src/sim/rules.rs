//! Match rules and variant presets
//!
//! Every difference between the game modes is data here, not control flow in
//! `tick`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::ConfigError;

/// How often a single swing may damage the same defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitPolicy {
    /// Every frame of the attack window re-checks range and applies damage
    #[default]
    EveryFrame,
    /// Each defender takes at most one hit per swing
    OncePerSwing,
}

/// Combat tuning. Absent from the rules when combat is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatRules {
    /// Max horizontal distance between attacker and defender (exclusive)
    pub range: f32,
    pub damage: i32,
    /// Horizontal knockback speed, signed away from the attacker
    pub knockback: f32,
    /// Vertical knockback velocity (negative is up)
    pub knockback_lift: f32,
    /// Steps between attacks
    pub cooldown: i32,
    /// Steps an attack stays active. 1 makes it a single-frame pulse.
    pub window: u32,
    pub hit_policy: HitPolicy,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            range: ATTACK_RANGE,
            damage: ATTACK_DAMAGE,
            knockback: KNOCKBACK,
            knockback_lift: KNOCKBACK_LIFT,
            cooldown: ATTACK_COOLDOWN,
            window: 1,
            hit_policy: HitPolicy::EveryFrame,
        }
    }
}

/// Playfield bounds (the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Complete rule set for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRules {
    pub arena: Arena,
    pub gravity: f32,
    pub friction: f32,
    pub jump_velocity: f32,
    pub move_speed: f32,
    /// `None` disables attacks entirely
    pub combat: Option<CombatRules>,
    /// Falls before elimination. `None` respawns forever.
    pub max_falls: Option<u32>,
    /// Play tones for game events
    pub sound: bool,
    /// Show names, fall counters, attack hitboxes and the win overlay
    pub show_match_ui: bool,
}

impl Default for MatchRules {
    fn default() -> Self {
        Variant::Stock.rules()
    }
}

impl MatchRules {
    pub fn combat_enabled(&self) -> bool {
        self.combat.is_some()
    }

    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena = Arena { width, height };
        self
    }
}

/// The three game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Two players, single-frame attacks, endless respawns
    Duel,
    /// One player, movement and jumping only
    Solo,
    /// Two players, three stocks, sound and match UI
    #[default]
    Stock,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Duel, Variant::Solo, Variant::Stock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Duel => "duel",
            Variant::Solo => "solo",
            Variant::Stock => "stock",
        }
    }

    /// Number of players this mode is played with
    pub fn player_count(&self) -> usize {
        match self {
            Variant::Solo => 1,
            Variant::Duel | Variant::Stock => 2,
        }
    }

    pub fn rules(&self) -> MatchRules {
        let base = MatchRules {
            arena: Arena::default(),
            gravity: GRAVITY,
            friction: FRICTION,
            jump_velocity: JUMP_VELOCITY,
            move_speed: PLAYER_SPEED,
            combat: None,
            max_falls: None,
            sound: false,
            show_match_ui: false,
        };

        match self {
            Variant::Duel => MatchRules {
                combat: Some(CombatRules::default()),
                ..base
            },
            Variant::Solo => MatchRules {
                jump_velocity: SOLO_JUMP_VELOCITY,
                ..base
            },
            Variant::Stock => MatchRules {
                combat: Some(CombatRules {
                    window: ATTACK_WINDOW,
                    ..CombatRules::default()
                }),
                max_falls: Some(MAX_FALLS),
                sound: true,
                show_match_ui: true,
                ..base
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if let Some(variant) = Variant::ALL.into_iter().find(|v| v.as_str() == name) {
            return Ok(variant);
        }
        match name.as_str() {
            "v1" => Ok(Variant::Duel),
            "v2" => Ok(Variant::Solo),
            "stocks" | "v3" => Ok(Variant::Stock),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}
