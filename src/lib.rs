//! Void Drift - A gravity survival arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinetics, gravity, collisions, resources, lifecycle)
//! - `fx`: Presentation directors (camera, screen shake, damage flash, particles)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (control inversion, effect toggles)

pub mod error;
pub mod fx;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
///
/// These are the compile-time defaults behind `Tuning::default()`.
pub mod consts {
    /// Largest frame delta the simulation will integrate (seconds)
    pub const MAX_DT: f32 = 0.1;
    /// Reference frame rate used to normalize smoothing constants
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Ship physics
    pub const SHIP_DRAG: f32 = 0.25;
    pub const ROTATION_SPEED: f32 = 2.25; // radians per second
    pub const THRUST_FORCE: f32 = 400.0; // pixels per second squared
    pub const MAX_SPEED: f32 = 1000.0;
    pub const SHIP_RADIUS: f32 = 16.0;

    /// Arena
    pub const ARENA_RADIUS: f32 = 1200.0;
    /// Wrap lands slightly inside the disc so it cannot re-trigger on float noise
    pub const WRAP_INSET: f32 = 0.99;
    pub const STAR_INFLUENCE_RADIUS: f32 = 600.0;
    pub const PLANET_INFLUENCE_FACTOR: f32 = 16.0;
    pub const PLANET_GRAVITY_SCALE: f32 = 1000.0;
    pub const RESTITUTION: f32 = 0.8;

    /// Survival resources
    pub const RESOURCE_MAX: f32 = 100.0;
    pub const INITIAL_HULL: f32 = 100.0;
    pub const INITIAL_POWER: f32 = 100.0;
    pub const POWER_CONSUMPTION_RATE: f32 = 1.0;
    pub const POWER_CONSUMPTION_SINGLE_THRUST: f32 = 2.0;
    pub const POWER_CONSUMPTION_DUAL_THRUST: f32 = 2.75;

    pub const ZONE_1_RADIUS: f32 = 100.0;
    pub const ZONE_2_RADIUS: f32 = 170.0;
    pub const ZONE_3_RADIUS: f32 = 240.0;

    pub const REGEN_ZONE_1: f32 = 4.0;
    pub const REGEN_ZONE_2: f32 = 2.0;
    pub const REGEN_ZONE_3: f32 = 0.5;

    pub const HULL_BURN_ZONE_1: f32 = 1.5;
    pub const HULL_BURN_ZONE_2: f32 = 0.5;
    pub const HULL_BURN_ZONE_3: f32 = 0.1;

    pub const PLANET_COLLISION_DAMAGE: f32 = 7.0;

    /// Camera
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    pub const VIEWPORT_WIDTH: f32 = 1920.0;
    pub const VIEWPORT_HEIGHT: f32 = 1080.0;
    pub const CAMERA_SNAP_DISTANCE: f32 = 1000.0;

    /// Screen shake
    pub const SHAKE_MAX_OFFSET: f32 = 4.0; // pixels at trauma 1.0
    pub const SHAKE_DECAY: f32 = 2.0; // trauma per second
    pub const SHAKE_FREQUENCY: f32 = 30.0;

    pub const TRAUMA_PLANET_COLLISION: f32 = 0.6;
    pub const TRAUMA_SUN_PROXIMITY: f32 = 0.3;
    pub const TRAUMA_BOOST: f32 = 0.1;

    /// Damage feedback
    pub const FLASH_INTENSITY: f32 = 1.0;
    pub const FLASH_DURATION: f32 = 0.3;
    pub const COLLISION_BURST_COUNT: usize = 12;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit heading vector for a rotation in radians
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI + 0.5) - (-PI + 0.5)).abs() < 1e-5);
        assert!(normalize_angle(f32::INFINITY).is_nan());
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
