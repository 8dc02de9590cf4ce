//! Trauma-based screen shake
//!
//! Trauma rises only through [`ScreenShake::add_trauma`] and decays linearly.
//! Offset scales with trauma² so small knocks barely register.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::ShakeTuning;

/// Y oscillates at a different rate so the motion never lines up diagonally
const Y_FREQUENCY_RATIO: f32 = 1.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenShake {
    /// 0.0 to 1.0
    pub trauma: f32,
    /// Oscillator clock; only runs while trauma > 0
    pub elapsed_time: f32,
    pub max_offset: f32,
    /// Trauma lost per second
    pub decay: f32,
    pub frequency: f32,
}

impl ScreenShake {
    pub fn new(tuning: &ShakeTuning) -> Self {
        Self {
            trauma: 0.0,
            elapsed_time: 0.0,
            max_offset: tuning.max_offset,
            decay: tuning.decay,
            frequency: tuning.frequency,
        }
    }

    /// Add trauma, capped at 1.0
    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount.max(0.0)).min(1.0);
    }

    /// Decay trauma and return this frame's offset in pixels
    pub fn update(&mut self, dt: f32) -> Vec2 {
        self.trauma = (self.trauma - self.decay * dt).max(0.0);

        if self.trauma == 0.0 {
            return Vec2::ZERO;
        }

        self.elapsed_time += dt;
        let intensity = self.trauma * self.trauma;
        let phase = self.elapsed_time * self.frequency;

        Vec2::new(
            phase.sin() * self.max_offset * intensity,
            (phase * Y_FREQUENCY_RATIO).cos() * self.max_offset * intensity,
        )
    }

    /// Clear trauma and clock (restart)
    pub fn reset(&mut self) {
        self.trauma = 0.0;
        self.elapsed_time = 0.0;
    }
}
