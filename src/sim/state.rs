//! Simulation records
//!
//! Plain data owned by the caller and passed by reference into each step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::RESOURCE_MAX;
use crate::error::{TuningError, finite, non_negative, positive};
use crate::polar_to_cartesian;

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Per-tick force accumulator, zero between ticks
    pub acceleration: Vec2,
    /// Heading in radians (counter-clockwise positive)
    pub rotation: f32,
    pub radius: f32,
}

impl ShipBody {
    pub fn new(position: Vec2, rotation: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            rotation,
            radius,
        }
    }

    /// Speed in units per second
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The central star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBody {
    pub position: Vec2,
    /// Contact radius
    pub radius: f32,
    /// Gravity well extent
    pub influence_radius: f32,
    /// Gravity strength factor
    pub mass: f32,
    /// Scales zone power regeneration
    pub power_multiplier: f32,
    /// Scales zone hull burn
    pub burn_multiplier: f32,
}

impl StarBody {
    pub fn new(
        position: Vec2,
        radius: f32,
        influence_radius: f32,
        mass: f32,
        power_multiplier: f32,
        burn_multiplier: f32,
    ) -> Result<Self, TuningError> {
        let star = Self {
            position,
            radius,
            influence_radius,
            mass,
            power_multiplier,
            burn_multiplier,
        };
        star.validate()?;
        Ok(star)
    }

    /// Reject non-finite positions and non-positive sizes
    pub fn validate(&self) -> Result<(), TuningError> {
        finite("star.position.x", self.position.x)?;
        finite("star.position.y", self.position.y)?;
        positive("star.radius", self.radius)?;
        positive("star.influence_radius", self.influence_radius)?;
        positive("star.mass", self.mass)?;
        non_negative("star.power_multiplier", self.power_multiplier)?;
        non_negative("star.burn_multiplier", self.burn_multiplier)?;
        Ok(())
    }

    /// Distance from the star's center to a point
    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        (point - self.position).length()
    }
}

/// An orbiting planet. Its position is always derived from the orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetBody {
    pub name: String,
    pub orbit_center: Vec2,
    pub orbit_radius: f32,
    /// Radians per second
    pub orbit_speed: f32,
    /// Advances every tick
    pub orbit_angle: f32,
    pub radius: f32,
    pub mass: f32,
    /// Hex color for the renderer (e.g. `#8B7355`)
    pub color: String,
}

impl PlanetBody {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        orbit_center: Vec2,
        orbit_radius: f32,
        orbit_speed: f32,
        orbit_angle: f32,
        radius: f32,
        mass: f32,
        color: impl Into<String>,
    ) -> Result<Self, TuningError> {
        let planet = Self {
            name: name.into(),
            orbit_center,
            orbit_radius,
            orbit_speed,
            orbit_angle,
            radius,
            mass,
            color: color.into(),
        };
        planet.validate()?;
        Ok(planet)
    }

    /// Reject non-finite orbits and non-positive sizes
    pub fn validate(&self) -> Result<(), TuningError> {
        finite("planet.orbit_center.x", self.orbit_center.x)?;
        finite("planet.orbit_center.y", self.orbit_center.y)?;
        non_negative("planet.orbit_radius", self.orbit_radius)?;
        finite("planet.orbit_speed", self.orbit_speed)?;
        finite("planet.orbit_angle", self.orbit_angle)?;
        positive("planet.radius", self.radius)?;
        positive("planet.mass", self.mass)?;
        Ok(())
    }

    /// Current position on the orbit
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.orbit_center + polar_to_cartesian(self.orbit_radius, self.orbit_angle)
    }
}

/// Thruster snapshot for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub left_thruster: bool,
    pub right_thruster: bool,
    pub fire: bool,
}

impl InputIntent {
    /// Intent with left/right swapped when controls are inverted
    pub fn effective(self, invert_controls: bool) -> Self {
        if !invert_controls {
            return self;
        }
        Self {
            left_thruster: self.right_thruster,
            right_thruster: self.left_thruster,
            fire: self.fire,
        }
    }

    /// Any thruster or button held
    pub fn is_active(&self) -> bool {
        self.left_thruster || self.right_thruster || self.fire
    }

    /// Number of thrusters firing (0, 1 or 2)
    pub fn thrusters_firing(&self) -> u8 {
        self.left_thruster as u8 + self.right_thruster as u8
    }
}

/// Hull integrity and power, both in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub hull: f32,
    pub power: f32,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            hull: RESOURCE_MAX,
            power: RESOURCE_MAX,
        }
    }
}

impl Resources {
    pub fn new(hull: f32, power: f32) -> Self {
        let mut resources = Self { hull, power };
        resources.clamp();
        resources
    }

    /// Force both values into [0, 100]; NaN collapses to 0
    pub fn clamp(&mut self) {
        self.hull = clamp_resource(self.hull);
        self.power = clamp_resource(self.power);
    }
}

#[inline]
fn clamp_resource(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, RESOURCE_MAX)
    }
}

/// Lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Waiting for the first input
    Menu,
    Playing,
    /// Terminal until the host builds a fresh state
    GameOver,
    /// Pause-like side branch; time does not advance
    Settings,
}

/// Why a run ended, in evaluation priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeathCause {
    Star,
    Hull,
    Power,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::Star => "STAR",
            DeathCause::Hull => "HULL",
            DeathCause::Power => "POWER",
        }
    }
}

/// Run lifecycle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub status: GameStatus,
    /// Simulation clock value when play began
    pub start_time: Option<f64>,
    /// Seconds of play
    pub elapsed_time: f64,
    pub resources: Resources,
    pub death_cause: Option<DeathCause>,
    /// Status to return to when leaving Settings
    #[serde(default)]
    pub resume_status: Option<GameStatus>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(Resources::default())
    }
}

impl SimulationState {
    pub fn new(resources: Resources) -> Self {
        Self {
            status: GameStatus::Menu,
            start_time: None,
            elapsed_time: 0.0,
            resources,
            death_cause: None,
            resume_status: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
