//! Collision detection and response
//!
//! Planets bounce the ship with positional correction and a lossy reflection.
//! The star is never resolved physically; touching it ends the run.

use glam::Vec2;

use super::state::{PlanetBody, ShipBody, StarBody};

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at collision (pointing from the planet toward the ship)
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between the ship and a planet at its current orbit position
///
/// Coincident centers report a miss: there is no usable normal.
pub fn ship_planet_collision(ship_pos: Vec2, ship_radius: f32, planet: &PlanetBody) -> CollisionResult {
    let offset = ship_pos - planet.position();
    let dist = offset.length();
    let min_dist = planet.radius + ship_radius;

    if dist < min_dist && dist > 0.0 {
        CollisionResult {
            hit: true,
            normal: offset / dist,
            penetration: min_dist - dist,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Push the ship out by the penetration depth and bounce it
pub fn resolve_planet_collision(ship: &mut ShipBody, hit: &CollisionResult, restitution: f32) {
    ship.position += hit.normal * hit.penetration;
    ship.velocity = reflect_velocity(ship.velocity, hit.normal) * restitution;
}

/// Resolve every planet overlap, returning the indices of planets hit
///
/// Damage is charged per returned index, so a ship held against a planet
/// is charged every tick the overlap persists.
pub fn resolve_planet_collisions(
    ship: &mut ShipBody,
    planets: &[PlanetBody],
    restitution: f32,
) -> Vec<usize> {
    let mut hits = Vec::new();
    for (i, planet) in planets.iter().enumerate() {
        let result = ship_planet_collision(ship.position, ship.radius, planet);
        if result.hit {
            resolve_planet_collision(ship, &result, restitution);
            hits.push(i);
        }
    }
    hits
}

/// Check if the ship touched the star
#[inline]
pub fn ship_star_contact(ship_pos: Vec2, star: &StarBody) -> bool {
    star.distance_to(ship_pos) < star.radius
}
