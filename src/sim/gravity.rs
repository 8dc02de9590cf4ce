//! Star and planet gravity
//!
//! Tuned for feel, not physics: the star is a linear well that fades to zero
//! at its influence edge, planets are a short-range inverse square.

use glam::Vec2;

use super::state::{PlanetBody, ShipBody, StarBody};
use crate::normalize_angle;
use crate::tuning::ArenaTuning;

/// Star pull on a ship at `ship_pos`, or zero outside the well
///
/// Only acts strictly between the contact radius and the influence radius.
pub fn star_acceleration(star: &StarBody, ship_pos: Vec2) -> Vec2 {
    let to_star = star.position - ship_pos;
    let dist = to_star.length();

    if dist < star.influence_radius && dist > star.radius {
        let strength = star.mass * (1.0 - dist / star.influence_radius);
        to_star / dist * strength
    } else {
        Vec2::ZERO
    }
}

/// Planet pull on a ship, zero outside the influence band or when overlapping
pub fn planet_acceleration(
    planet: &PlanetBody,
    ship_pos: Vec2,
    ship_radius: f32,
    tuning: &ArenaTuning,
) -> Vec2 {
    let to_planet = planet.position() - ship_pos;
    let dist_sq = to_planet.length_squared();
    let dist = dist_sq.sqrt();
    let influence = planet.radius * tuning.planet_influence_factor;

    if dist < influence && dist > planet.radius + ship_radius {
        let strength = planet.mass / dist_sq * tuning.planet_gravity_scale;
        to_planet / dist * strength
    } else {
        Vec2::ZERO
    }
}

/// Move every planet along its orbit
///
/// `orbit_angle += orbit_speed * dt`, then wrapped into [-π, π) so long runs
/// keep f32 precision. The angle is not monotonic across the wrap; compare
/// positions, not raw angles.
pub fn advance_orbits(planets: &mut [PlanetBody], dt: f32) {
    for planet in planets {
        planet.orbit_angle = normalize_angle(planet.orbit_angle + planet.orbit_speed * dt);
    }
}

/// Accumulate star and planet gravity into the ship's acceleration
///
/// Planets must already be at this tick's orbit position.
pub fn apply_gravity(
    ship: &mut ShipBody,
    star: &StarBody,
    planets: &[PlanetBody],
    tuning: &ArenaTuning,
) {
    ship.acceleration += star_acceleration(star, ship.position);
    for planet in planets {
        ship.acceleration += planet_acceleration(planet, ship.position, ship.radius, tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> StarBody {
        StarBody::new(Vec2::ZERO, 35.0, 600.0, 600.0, 1.0, 1.0).unwrap()
    }

    fn planet_at(x: f32) -> PlanetBody {
        PlanetBody::new("p", Vec2::ZERO, x, 0.0, 0.0, 20.0, 50.0, "#6666CC").unwrap()
    }

    #[test]
    fn test_star_linear_falloff() {
        let star = star();
        // Half way to the influence edge: 600 * (1 - 0.5)
        let acc = star_acceleration(&star, Vec2::new(300.0, 0.0));
        assert!((acc - Vec2::new(-300.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_star_no_pull_outside_or_inside() {
        let star = star();
        assert_eq!(star_acceleration(&star, Vec2::new(700.0, 0.0)), Vec2::ZERO);
        assert_eq!(star_acceleration(&star, Vec2::new(600.0, 0.0)), Vec2::ZERO);
        assert_eq!(star_acceleration(&star, Vec2::new(20.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_planet_inverse_square() {
        let tuning = ArenaTuning::default();
        let planet = planet_at(100.0);
        let acc = planet_acceleration(&planet, Vec2::ZERO, 16.0, &tuning);
        // 50 / 100² * 1000 = 5, pointing toward +x
        assert!((acc - Vec2::new(5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_planet_no_pull_when_overlapping_or_far() {
        let tuning = ArenaTuning::default();
        let planet = planet_at(30.0);
        assert_eq!(planet_acceleration(&planet, Vec2::ZERO, 16.0, &tuning), Vec2::ZERO);
        // Influence is 16 * 20 = 320
        let far = planet_at(330.0);
        assert_eq!(planet_acceleration(&far, Vec2::ZERO, 16.0, &tuning), Vec2::ZERO);
    }

    #[test]
    fn test_advance_orbits_moves_position() {
        let mut planets = vec![planet_at(100.0)];
        planets[0].orbit_speed = 1.0;
        advance_orbits(&mut planets, 0.1);
        assert!((planets[0].orbit_angle - 0.1).abs() < 1e-6);
        let expected = Vec2::new(100.0 * 0.1f32.cos(), 100.0 * 0.1f32.sin());
        assert!((planets[0].position() - expected).length() < 1e-3);
    }

    #[test]
    fn test_orbit_angle_wraps_without_moving_planet() {
        let mut planets = vec![planet_at(100.0)];
        planets[0].orbit_angle = 3.0;
        planets[0].orbit_speed = 2.0;
        advance_orbits(&mut planets, 0.1);
        // 3.2 wraps to 3.2 - 2π
        let angle = planets[0].orbit_angle;
        assert!((-std::f32::consts::PI..std::f32::consts::PI).contains(&angle));
        assert!((angle - (3.2 - std::f32::consts::TAU)).abs() < 1e-5);
        let expected = Vec2::new(100.0 * 3.2f32.cos(), 100.0 * 3.2f32.sin());
        assert!((planets[0].position() - expected).length() < 1e-3);
    }

    #[test]
    fn test_gravity_is_additive_and_order_independent() {
        let tuning = ArenaTuning::default();
        let star = star();
        let a = planet_at(200.0);
        let mut b = planet_at(200.0);
        b.orbit_angle = std::f32::consts::FRAC_PI_2;

        let mut ship1 = ShipBody::new(Vec2::new(100.0, 50.0), 0.0, 16.0);
        let mut ship2 = ship1.clone();
        apply_gravity(&mut ship1, &star, &[a.clone(), b.clone()], &tuning);
        apply_gravity(&mut ship2, &star, &[b, a], &tuning);
        assert!((ship1.acceleration - ship2.acceleration).length() < 1e-4);
        assert!(ship1.acceleration.length() > 0.0);
    }
}
