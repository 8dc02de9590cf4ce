//! Damage flash overlay state

use serde::{Deserialize, Serialize};

/// Per-update intensity fade while the flash is running
const FLASH_FADE: f32 = 0.95;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageFlash {
    pub active: bool,
    /// 0.0 to 1.0
    pub intensity: f32,
    /// Seconds remaining
    pub duration: f32,
}

impl DamageFlash {
    pub fn trigger(&mut self, intensity: f32, duration: f32) {
        self.active = true;
        self.intensity = intensity.clamp(0.0, 1.0);
        self.duration = duration;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.duration -= dt;
        if self.duration <= 0.0 {
            self.active = false;
            self.intensity = 0.0;
            self.duration = 0.0;
        } else {
            self.intensity *= FLASH_FADE;
        }
    }

    /// Overlay alpha for the renderer (red tint at 30% of intensity)
    pub fn overlay_alpha(&self) -> f32 {
        if self.active && self.intensity >= 0.01 {
            self.intensity * 0.3
        } else {
            0.0
        }
    }
}
