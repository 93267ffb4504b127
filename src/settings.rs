//! Game settings and preferences
//!
//! Persisted as JSON in LocalStorage. Match state itself is never saved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Variant;

/// Errors from parsing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown game mode: {0:?} (expected duel, solo or stock)")]
    UnknownVariant(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode started when the URL doesn't pick one
    pub variant: Variant,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Stock,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "plat_duel_settings";

    /// Parse settings, clamping volumes into range
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Volume applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Pick the mode from a `?mode=` query string, else the saved preference
    pub fn variant_from_query(&self, query: &str) -> Variant {
        let requested = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "mode")
            .map(|(_, value)| value);

        match requested.map(str::parse::<Variant>) {
            Some(Ok(variant)) => variant,
            Some(Err(e)) => {
                log::warn!("{}, using {}", e, self.variant);
                self.variant
            }
            None => self.variant,
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring saved settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Could not save settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"variant":"Duel","muted":true}"#).unwrap();
        assert_eq!(settings.variant, Variant::Duel);
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings = Settings::from_json(r#"{"master_volume":3.0,"sfx_volume":-1.0}"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSettings(_)));
        assert!(err.to_string().starts_with("invalid settings"));
    }

    #[test]
    fn test_variant_from_query() {
        let settings = Settings::default();
        assert_eq!(settings.variant_from_query("?mode=duel"), Variant::Duel);
        assert_eq!(settings.variant_from_query("?debug=1&mode=solo"), Variant::Solo);
        assert_eq!(settings.variant_from_query("?mode=chess"), Variant::Stock);
        assert_eq!(settings.variant_from_query(""), Variant::Stock);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            variant: Variant::Solo,
            ..Settings::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }
}
