//! Player settings and preferences
//!
//! Persistence is the host's job; this module only defines the record, its
//! defaults and a JSON form the host can store however it likes.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Player settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Swap left/right thrusters before they reach the simulation
    pub invert_controls: bool,

    // === Visual Effects ===
    /// Screen shake on impacts and danger-zone entry
    pub screen_shake: bool,
    /// Red flash on hull damage
    pub damage_flash: bool,

    // === Accessibility ===
    /// Reduced motion (minimize shake, flashes)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            invert_controls: false,
            screen_shake: true,
            damage_flash: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective damage flash (respects reduced_motion)
    pub fn effective_damage_flash(&self) -> bool {
        self.damage_flash && !self.reduced_motion
    }

    /// Parse stored settings, falling back to defaults for missing keys
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse stored settings, using defaults when the blob is unreadable
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json_str) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(e)) => {
                log::warn!("Discarding unreadable settings: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_effects() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
        assert!(!settings.effective_damage_flash());
        assert!(Settings::default().effective_screen_shake());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_str(r#"{"invert_controls":true}"#).unwrap();
        assert!(settings.invert_controls);
        assert!(settings.screen_shake);
    }

    #[test]
    fn test_load_or_default_recovers() {
        assert_eq!(Settings::load_or_default(Some("garbage")), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
        let json = Settings {
            invert_controls: true,
            ..Default::default()
        }
        .to_json()
        .unwrap();
        assert!(Settings::load_or_default(Some(&json)).invert_controls);
    }
}
