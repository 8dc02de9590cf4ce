//! Star class catalog
//!
//! Spectral classes from hot blue O giants down to small red M dwarfs. Hotter
//! stars pull harder and regenerate more power but burn the hull faster.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::StarBody;
use crate::error::TuningError;
use crate::tuning::ArenaTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StarClass {
    O,
    B,
    A,
    F,
    #[default]
    G,
    K,
    M,
}

/// Preset values for a class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPreset {
    pub radius: f32,
    pub mass: f32,
    pub power_multiplier: f32,
    pub burn_multiplier: f32,
    /// Renderer glow pulse rate
    pub pulse_speed: f32,
    pub color: &'static str,
    pub glow_color: &'static str,
}

impl StarClass {
    pub const ALL: [StarClass; 7] = [
        StarClass::O,
        StarClass::B,
        StarClass::A,
        StarClass::F,
        StarClass::G,
        StarClass::K,
        StarClass::M,
    ];

    pub fn preset(&self) -> StarPreset {
        match self {
            StarClass::O => StarPreset {
                radius: 105.0,
                mass: 3000.0,
                power_multiplier: 4.5,
                burn_multiplier: 6.5,
                pulse_speed: 4.5,
                color: "#00ffff",
                glow_color: "#ffffff",
            },
            StarClass::B => StarPreset {
                radius: 80.0,
                mass: 2000.0,
                power_multiplier: 3.2,
                burn_multiplier: 4.0,
                pulse_speed: 3.2,
                color: "#00ccff",
                glow_color: "#ffffff",
            },
            StarClass::A => StarPreset {
                radius: 60.0,
                mass: 1500.0,
                power_multiplier: 2.2,
                burn_multiplier: 2.5,
                pulse_speed: 2.2,
                color: "#ffffff",
                glow_color: "#ccf0ff",
            },
            StarClass::F => StarPreset {
                radius: 45.0,
                mass: 1000.0,
                power_multiplier: 1.5,
                burn_multiplier: 1.5,
                pulse_speed: 1.5,
                color: "#ffffcc",
                glow_color: "#ffff00",
            },
            StarClass::G => StarPreset {
                radius: 35.0,
                mass: 600.0,
                power_multiplier: 1.0,
                burn_multiplier: 1.0,
                pulse_speed: 1.0,
                color: "#ffaa00",
                glow_color: "#ffaa00",
            },
            StarClass::K => StarPreset {
                radius: 25.0,
                mass: 300.0,
                power_multiplier: 0.6,
                burn_multiplier: 0.5,
                pulse_speed: 0.6,
                color: "#ff8800",
                glow_color: "#ff4400",
            },
            StarClass::M => StarPreset {
                radius: 15.0,
                mass: 150.0,
                power_multiplier: 0.4,
                burn_multiplier: 0.3,
                pulse_speed: 0.3,
                color: "#ff4400",
                glow_color: "#ff0000",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StarClass::O => "O",
            StarClass::B => "B",
            StarClass::A => "A",
            StarClass::F => "F",
            StarClass::G => "G",
            StarClass::K => "K",
            StarClass::M => "M",
        }
    }

    /// Parse a class letter, case-insensitive
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Some(StarClass::O),
            "B" => Some(StarClass::B),
            "A" => Some(StarClass::A),
            "F" => Some(StarClass::F),
            "G" => Some(StarClass::G),
            "K" => Some(StarClass::K),
            "M" => Some(StarClass::M),
            _ => None,
        }
    }
}

impl StarBody {
    /// Star of the given class at `center`, with the arena's influence radius
    pub fn from_class(
        class: StarClass,
        center: Vec2,
        tuning: &ArenaTuning,
    ) -> Result<Self, TuningError> {
        let preset = class.preset();
        StarBody::new(
            center,
            preset.radius,
            tuning.star_influence_radius,
            preset.mass,
            preset.power_multiplier,
            preset.burn_multiplier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_builds() {
        let tuning = ArenaTuning::default();
        for class in StarClass::ALL {
            let star = StarBody::from_class(class, Vec2::ZERO, &tuning).unwrap();
            assert!(star.radius < star.influence_radius, "{}", class.as_str());
        }
    }

    #[test]
    fn test_hotter_classes_are_heavier() {
        let masses: Vec<f32> = StarClass::ALL.iter().map(|c| c.preset().mass).collect();
        assert!(masses.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(StarClass::from_letter("k"), Some(StarClass::K));
        assert_eq!(StarClass::from_letter(" O "), Some(StarClass::O));
        assert_eq!(StarClass::from_letter("X"), None);
        assert_eq!(StarClass::default(), StarClass::G);
    }
}
