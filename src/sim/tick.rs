//! Per-frame simulation tick
//!
//! Runs the full pipeline for one arena: thrust, orbits, gravity, integration,
//! planet collisions, arena wrap, resources, death check, then the
//! presentation directors.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{self, Arena, DEFAULT_CENTER, SPAWN_DISTANCE};
use super::collision;
use super::gravity;
use super::kinetics;
use super::lifecycle;
use super::resources;
use super::state::{
    DeathCause, GameStatus, InputIntent, PlanetBody, Resources, ShipBody, SimulationState,
    StarBody,
};
use super::stellar::StarClass;
use crate::error::TuningError;
use crate::fx::{CameraState, DamageFlash, ParticleField, ScreenShake, planet_hue};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Ship spawns facing up, away from the star
const SPAWN_ROTATION: f32 = -std::f32::consts::FRAC_PI_2;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// The dt actually integrated (0 when the tick was rejected)
    pub dt: f32,
    /// Menu -> Playing happened this tick
    pub started: bool,
    /// Indices of planets the ship was overlapping
    pub collisions: Vec<usize>,
    pub wrapped: bool,
    pub camera_snapped: bool,
    pub death: Option<DeathCause>,
    /// Screen shake offset for this frame
    pub shake_offset: Vec2,
}

/// Final result of a run, for leaderboard submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub elapsed_time: f64,
    pub death_cause: DeathCause,
}

/// Read-only view of everything a renderer needs
#[derive(Debug, Serialize)]
pub struct FrameView<'a> {
    pub status: GameStatus,
    pub elapsed_time: f64,
    pub resources: Resources,
    pub death_cause: Option<DeathCause>,
    pub ship: &'a ShipBody,
    pub star: &'a StarBody,
    pub planets: &'a [PlanetBody],
    pub camera_position: Vec2,
    pub view_offset: Vec2,
    pub flash_alpha: f32,
    pub particles: &'a ParticleField,
}

/// Clamp a frame delta to `(0, max_dt]`
///
/// Non-positive and NaN deltas are rejected; anything above the ceiling,
/// including infinity, integrates as the ceiling.
pub fn clamp_dt(dt: f32, max_dt: f32) -> Option<f32> {
    if dt.is_nan() || dt <= 0.0 {
        None
    } else {
        Some(dt.min(max_dt))
    }
}

/// One self-contained arena: scene, run state, presentation and RNG
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub settings: Settings,
    pub arena: Arena,
    pub star: StarBody,
    pub planets: Vec<PlanetBody>,
    pub ship: ShipBody,
    pub state: SimulationState,
    pub camera: CameraState,
    pub shake: ScreenShake,
    pub flash: DamageFlash,
    pub particles: ParticleField,
    /// Simulation clock (seconds), advances only while playing
    pub clock: f64,
    seed: u64,
    rng: Pcg32,
    initial_planets: Vec<PlanetBody>,
    was_thrusting: bool,
    last_star_distance: f32,
}

impl World {
    /// Build an arena; fails if the tuning or any body is malformed
    pub fn new(
        tuning: Tuning,
        settings: Settings,
        star: StarBody,
        planets: Vec<PlanetBody>,
        seed: u64,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        star.validate()?;
        for planet in &planets {
            planet.validate()?;
        }

        let arena = Arena::new(star.position, tuning.arena.radius, tuning.arena.wrap_inset);
        let ship = spawn_ship(&star, &tuning);
        let camera = CameraState::centered_on(&tuning.camera, ship.position);
        let shake = ScreenShake::new(&tuning.shake);
        let state = SimulationState::new(Resources::new(
            tuning.survival.initial_hull,
            tuning.survival.initial_power,
        ));
        let last_star_distance = star.distance_to(ship.position);

        log::info!(
            "Arena ready: {} planets, star radius {}, seed {}",
            planets.len(),
            star.radius,
            seed
        );

        Ok(Self {
            arena,
            ship,
            camera,
            shake,
            state,
            flash: DamageFlash::default(),
            particles: ParticleField::new(),
            clock: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            initial_planets: planets.clone(),
            planets,
            star,
            tuning,
            settings,
            was_thrusting: false,
            last_star_distance,
        })
    }

    /// The classic layout: a G star and three planets
    pub fn classic(tuning: Tuning, settings: Settings, seed: u64) -> Result<Self, TuningError> {
        let star = StarBody::from_class(StarClass::G, DEFAULT_CENTER, &tuning.arena)?;
        let planets = arena::classic_planets(DEFAULT_CENTER);
        Self::new(tuning, settings, star, planets, seed)
    }

    /// A generated layout around a star of `class`
    pub fn seeded(
        tuning: Tuning,
        settings: Settings,
        class: StarClass,
        planet_count: usize,
        seed: u64,
    ) -> Result<Self, TuningError> {
        let star = StarBody::from_class(class, DEFAULT_CENTER, &tuning.arena)?;
        let planets = arena::seeded_planets(seed, planet_count, DEFAULT_CENTER, &tuning);
        Self::new(tuning, settings, star, planets, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fresh run on the same scene and seed
    pub fn restart(&mut self) {
        self.planets = self.initial_planets.clone();
        self.ship = spawn_ship(&self.star, &self.tuning);
        self.state = SimulationState::new(Resources::new(
            self.tuning.survival.initial_hull,
            self.tuning.survival.initial_power,
        ));
        self.camera = CameraState::centered_on(&self.tuning.camera, self.ship.position);
        self.shake.reset();
        self.flash = DamageFlash::default();
        self.particles.clear();
        self.clock = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.was_thrusting = false;
        self.last_star_distance = self.star.distance_to(self.ship.position);
        log::info!("Run reset");
    }

    pub fn open_settings(&mut self) -> bool {
        lifecycle::open_settings(&mut self.state)
    }

    pub fn close_settings(&mut self) -> bool {
        lifecycle::close_settings(&mut self.state)
    }

    /// Result of the run once it has ended
    pub fn summary(&self) -> Option<RunSummary> {
        if !self.state.is_over() {
            return None;
        }
        self.state.death_cause.map(|death_cause| RunSummary {
            elapsed_time: self.state.elapsed_time,
            death_cause,
        })
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            status: self.state.status,
            elapsed_time: self.state.elapsed_time,
            resources: self.state.resources,
            death_cause: self.state.death_cause,
            ship: &self.ship,
            star: &self.star,
            planets: &self.planets,
            camera_position: self.camera.position,
            view_offset: self.camera.view_offset(),
            flash_alpha: self.flash.overlay_alpha(),
            particles: &self.particles,
        }
    }
}

fn spawn_ship(star: &StarBody, tuning: &Tuning) -> ShipBody {
    ShipBody::new(
        star.position - Vec2::new(0.0, SPAWN_DISTANCE),
        SPAWN_ROTATION,
        tuning.ship.radius,
    )
}

/// Advance the world by one frame
///
/// `input` is the raw thruster snapshot; inversion from the world's settings
/// is applied here. Settings status freezes everything, including effects.
pub fn tick(world: &mut World, input: &InputIntent, dt: f32) -> TickReport {
    let mut report = TickReport::default();

    let Some(dt) = clamp_dt(dt, world.tuning.arena.max_dt) else {
        log::debug!("Rejected frame delta {}", dt);
        return report;
    };

    if world.state.status == GameStatus::Settings {
        return report;
    }
    report.dt = dt;

    let input = input.effective(world.settings.invert_controls);

    report.started = lifecycle::update_timer(&mut world.state, world.clock, input.is_active());
    if report.started {
        log::info!("Run started");
    }

    if world.state.is_playing() {
        world.clock += f64::from(dt);
        lifecycle::update_timer(&mut world.state, world.clock, false);
        step_physics(world, &input, dt, &mut report);
    }

    step_presentation(world, dt, &mut report);
    report
}

fn step_physics(world: &mut World, input: &InputIntent, dt: f32, report: &mut TickReport) {
    let tuning = &world.tuning;

    kinetics::apply_thrust(&mut world.ship, input, dt, &tuning.ship);
    gravity::advance_orbits(&mut world.planets, dt);
    gravity::apply_gravity(&mut world.ship, &world.star, &world.planets, &tuning.arena);
    kinetics::integrate(&mut world.ship, dt, &tuning.ship);

    report.collisions =
        collision::resolve_planet_collisions(&mut world.ship, &world.planets, tuning.arena.restitution);
    for &i in &report.collisions {
        log::debug!("Ship hit {}", world.planets[i].name);
    }

    report.wrapped = world.arena.wrap(&mut world.ship);
    if report.wrapped {
        log::debug!("Arena wrap to ({:.1}, {:.1})", world.ship.position.x, world.ship.position.y);
    }

    let distance = world.star.distance_to(world.ship.position);
    resources::update_resources(
        &mut world.state.resources,
        distance,
        &world.star,
        dt,
        input,
        report.collisions.len(),
        &tuning.survival,
    );

    trigger_feedback(world, input, distance, &report.collisions);

    report.death = lifecycle::evaluate_death(&mut world.state, &mut world.ship, &world.star);
    if let Some(cause) = report.death {
        log::info!(
            "Game over: {} after {:.2}s (hull {:.1}, power {:.1})",
            cause.as_str(),
            world.state.elapsed_time,
            world.state.resources.hull,
            world.state.resources.power
        );
    }
}

/// Trauma, flash and sparks for this tick's events
fn trigger_feedback(world: &mut World, input: &InputIntent, distance: f32, collisions: &[usize]) {
    let shake_enabled = world.settings.effective_screen_shake();
    let flash_enabled = world.settings.effective_damage_flash();
    let shake_tuning = &world.tuning.shake;
    let feedback = &world.tuning.feedback;

    for &i in collisions {
        let planet = &world.planets[i];
        if shake_enabled {
            world.shake.add_trauma(shake_tuning.planet_collision);
        }
        if flash_enabled {
            world.flash.trigger(feedback.flash_intensity, feedback.flash_duration);
        }
        let center = planet.position();
        let contact = center + (world.ship.position - center).normalize_or_zero() * planet.radius;
        world
            .particles
            .spawn_burst(contact, feedback.burst_count, planet_hue(&planet.color), &mut world.rng);
    }

    // Crossing into the innermost zone
    let danger = world.tuning.survival.zone_radii[0];
    if shake_enabled && distance < danger && world.last_star_distance >= danger {
        world.shake.add_trauma(shake_tuning.sun_proximity);
    }
    world.last_star_distance = distance;

    let thrusting = input.thrusters_firing() > 0;
    if shake_enabled && thrusting && !world.was_thrusting {
        world.shake.add_trauma(shake_tuning.boost);
    }
    world.was_thrusting = thrusting;
}

fn step_presentation(world: &mut World, dt: f32, report: &mut TickReport) {
    world.camera.set_target(world.ship.position);
    report.camera_snapped = world.camera.update(dt);
    report.shake_offset = world.shake.update(dt);
    world.flash.update(dt);
    world.particles.update(dt);
}
