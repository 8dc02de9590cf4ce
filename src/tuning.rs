//! Data-driven game balance
//!
//! [`Tuning`] is the immutable configuration bundle handed to a
//! [`World`](crate::sim::World) at construction. Every section defaults to the
//! compile-time constants in [`crate::consts`]; a JSON document may override
//! any subset of fields.
//!
//! ```
//! use void_drift::Tuning;
//!
//! let tuning = Tuning::from_json_str(r#"{ "ship": { "thrust_force": 500.0 } }"#).unwrap();
//! assert_eq!(tuning.ship.thrust_force, 500.0);
//! assert_eq!(tuning.ship.max_speed, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{TuningError, finite, in_range, non_negative, positive, strictly_between};

/// Ship handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Fraction of velocity shed per second
    pub drag: f32,
    /// Radians per second while a single thruster fires
    pub rotation_speed: f32,
    /// Acceleration magnitude of full thrust
    pub thrust_force: f32,
    pub max_speed: f32,
    pub radius: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            drag: SHIP_DRAG,
            rotation_speed: ROTATION_SPEED,
            thrust_force: THRUST_FORCE,
            max_speed: MAX_SPEED,
            radius: SHIP_RADIUS,
        }
    }
}

/// Arena geometry and the gravity/collision constants tied to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub radius: f32,
    /// Antipodal wrap scale (< 1 so the ship lands inside the disc)
    pub wrap_inset: f32,
    /// Gravity well extent of the central star
    pub star_influence_radius: f32,
    /// Planet influence radius as a multiple of planet radius
    pub planet_influence_factor: f32,
    pub planet_gravity_scale: f32,
    /// Velocity kept after a planet bounce
    pub restitution: f32,
    /// Frame delta ceiling (seconds)
    pub max_dt: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            radius: ARENA_RADIUS,
            wrap_inset: WRAP_INSET,
            star_influence_radius: STAR_INFLUENCE_RADIUS,
            planet_influence_factor: PLANET_INFLUENCE_FACTOR,
            planet_gravity_scale: PLANET_GRAVITY_SCALE,
            restitution: RESTITUTION,
            max_dt: MAX_DT,
        }
    }
}

/// Hull and power rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalTuning {
    pub initial_hull: f32,
    pub initial_power: f32,
    /// Idle drain per second
    pub power_consumption_rate: f32,
    pub power_consumption_single_thrust: f32,
    /// Not derived from the single rate; balanced on its own
    pub power_consumption_dual_thrust: f32,
    /// Zone radii around the star, nearest first
    pub zone_radii: [f32; 3],
    /// Power regenerated per second in each zone
    pub power_regen: [f32; 3],
    /// Hull lost per second in each zone
    pub hull_burn: [f32; 3],
    pub planet_collision_damage: f32,
}

impl Default for SurvivalTuning {
    fn default() -> Self {
        Self {
            initial_hull: INITIAL_HULL,
            initial_power: INITIAL_POWER,
            power_consumption_rate: POWER_CONSUMPTION_RATE,
            power_consumption_single_thrust: POWER_CONSUMPTION_SINGLE_THRUST,
            power_consumption_dual_thrust: POWER_CONSUMPTION_DUAL_THRUST,
            zone_radii: [ZONE_1_RADIUS, ZONE_2_RADIUS, ZONE_3_RADIUS],
            power_regen: [REGEN_ZONE_1, REGEN_ZONE_2, REGEN_ZONE_3],
            hull_burn: [HULL_BURN_ZONE_1, HULL_BURN_ZONE_2, HULL_BURN_ZONE_3],
            planet_collision_damage: PLANET_COLLISION_DAMAGE,
        }
    }
}

/// Camera follow behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub smoothing: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Displacement beyond which the camera snaps instead of panning
    pub snap_distance: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            smoothing: CAMERA_SMOOTHING,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            snap_distance: CAMERA_SNAP_DISTANCE,
        }
    }
}

/// Screen shake oscillator and trauma amounts per event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeTuning {
    pub max_offset: f32,
    pub decay: f32,
    pub frequency: f32,
    pub planet_collision: f32,
    pub sun_proximity: f32,
    pub boost: f32,
}

impl Default for ShakeTuning {
    fn default() -> Self {
        Self {
            max_offset: SHAKE_MAX_OFFSET,
            decay: SHAKE_DECAY,
            frequency: SHAKE_FREQUENCY,
            planet_collision: TRAUMA_PLANET_COLLISION,
            sun_proximity: TRAUMA_SUN_PROXIMITY,
            boost: TRAUMA_BOOST,
        }
    }
}

/// Damage flash and burst particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTuning {
    pub flash_intensity: f32,
    pub flash_duration: f32,
    pub burst_count: usize,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            flash_intensity: FLASH_INTENSITY,
            flash_duration: FLASH_DURATION,
            burst_count: COLLISION_BURST_COUNT,
        }
    }
}

/// Complete tuning bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub arena: ArenaTuning,
    pub survival: SurvivalTuning,
    pub camera: CameraTuning,
    pub shake: ShakeTuning,
    pub feedback: FeedbackTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for dumping the effective configuration)
    pub fn to_json_pretty(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the simulation unsound
    pub fn validate(&self) -> Result<(), TuningError> {
        let ship = &self.ship;
        non_negative("ship.drag", ship.drag)?;
        non_negative("ship.rotation_speed", ship.rotation_speed)?;
        non_negative("ship.thrust_force", ship.thrust_force)?;
        positive("ship.max_speed", ship.max_speed)?;
        positive("ship.radius", ship.radius)?;

        let arena = &self.arena;
        positive("arena.radius", arena.radius)?;
        // Landing on the boundary (1.0) would re-wrap every tick
        strictly_between("arena.wrap_inset", arena.wrap_inset, 0.0, 1.0)?;
        positive("arena.star_influence_radius", arena.star_influence_radius)?;
        positive("arena.planet_influence_factor", arena.planet_influence_factor)?;
        non_negative("arena.planet_gravity_scale", arena.planet_gravity_scale)?;
        in_range("arena.restitution", arena.restitution, 0.0, 1.0)?;
        positive("arena.max_dt", arena.max_dt)?;

        let survival = &self.survival;
        in_range("survival.initial_hull", survival.initial_hull, 0.0, RESOURCE_MAX)?;
        in_range("survival.initial_power", survival.initial_power, 0.0, RESOURCE_MAX)?;
        non_negative("survival.power_consumption_rate", survival.power_consumption_rate)?;
        non_negative(
            "survival.power_consumption_single_thrust",
            survival.power_consumption_single_thrust,
        )?;
        non_negative(
            "survival.power_consumption_dual_thrust",
            survival.power_consumption_dual_thrust,
        )?;
        for radius in survival.zone_radii {
            positive("survival.zone_radii", radius)?;
        }
        let [z1, z2, z3] = survival.zone_radii;
        if !(z1 < z2 && z2 < z3) {
            return Err(TuningError::UnorderedZones(survival.zone_radii));
        }
        for rate in survival.power_regen {
            non_negative("survival.power_regen", rate)?;
        }
        for rate in survival.hull_burn {
            non_negative("survival.hull_burn", rate)?;
        }
        non_negative("survival.planet_collision_damage", survival.planet_collision_damage)?;

        let camera = &self.camera;
        non_negative("camera.smoothing", camera.smoothing)?;
        positive("camera.viewport_width", camera.viewport_width)?;
        positive("camera.viewport_height", camera.viewport_height)?;
        positive("camera.snap_distance", camera.snap_distance)?;

        let shake = &self.shake;
        non_negative("shake.max_offset", shake.max_offset)?;
        in_range("shake.decay", shake.decay, 0.0, 10.0)?;
        positive("shake.frequency", shake.frequency)?;
        in_range("shake.planet_collision", shake.planet_collision, 0.0, 1.0)?;
        in_range("shake.sun_proximity", shake.sun_proximity, 0.0, 1.0)?;
        in_range("shake.boost", shake.boost, 0.0, 1.0)?;

        let feedback = &self.feedback;
        in_range("feedback.flash_intensity", feedback.flash_intensity, 0.0, 1.0)?;
        finite("feedback.flash_duration", feedback.flash_duration)?;
        non_negative("feedback.flash_duration", feedback.flash_duration)?;

        Ok(())
    }
}
