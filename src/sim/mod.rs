//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied, clamped frame delta
//! - Seeded RNG only, one per world
//! - Stable iteration order (planets in scene order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod gravity;
pub mod kinetics;
pub mod lifecycle;
pub mod resources;
pub mod state;
pub mod stellar;
pub mod tick;
pub mod vector;

pub use arena::{Arena, DEFAULT_CENTER, SPAWN_DISTANCE, classic_planets, seeded_planets};
pub use collision::{CollisionResult, reflect_velocity, ship_planet_collision};
pub use state::{
    DeathCause, GameStatus, InputIntent, PlanetBody, Resources, ShipBody, SimulationState,
    StarBody,
};
pub use stellar::{StarClass, StarPreset};
pub use tick::{FrameView, RunSummary, TickReport, World, clamp_dt, tick};
pub use vector::VectorExt;
