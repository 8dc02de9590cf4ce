//! Circular arena boundary and planet layouts

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{PlanetBody, ShipBody};
use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Center of the logical play field
pub const DEFAULT_CENTER: Vec2 = Vec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);

/// Ship spawn distance from the star
pub const SPAWN_DISTANCE: f32 = 300.0;

/// Gap kept between generated orbits and the star's outer zone / arena edge
const LAYOUT_MARGIN: f32 = 80.0;
/// Gap kept between the spawn point and the nearest generated planet surface
const SPAWN_CLEARANCE: f32 = 40.0;
/// Largest generated planet radius
const MAX_SEEDED_RADIUS: f32 = 50.0;

/// The circular play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
    /// Antipodal wrap scale
    pub wrap_inset: f32,
}

impl Arena {
    pub fn new(center: Vec2, radius: f32, wrap_inset: f32) -> Self {
        Self {
            center,
            radius,
            wrap_inset,
        }
    }

    /// Whether a point is inside (or on) the disc
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Teleport a ship that left the disc to the antipodal point
    ///
    /// Velocity and rotation are untouched so momentum carries the ship back
    /// inward. Returns true if a wrap happened.
    pub fn wrap(&self, ship: &mut ShipBody) -> bool {
        let offset = ship.position - self.center;
        if offset.length_squared() > self.radius * self.radius {
            ship.position = self.center - offset * self.wrap_inset;
            true
        } else {
            false
        }
    }
}

/// The three planets of the classic arena
pub fn classic_planets(center: Vec2) -> Vec<PlanetBody> {
    vec![
        PlanetBody {
            name: "The Rock".into(),
            orbit_center: center,
            orbit_radius: 380.0,
            orbit_speed: 0.15,
            orbit_angle: 0.0,
            radius: 30.0,
            mass: 80.0,
            color: "#8B7355".into(),
        },
        PlanetBody {
            name: "The Gas".into(),
            orbit_center: center,
            orbit_radius: 650.0,
            orbit_speed: -0.08,
            orbit_angle: 2.1,
            radius: 50.0,
            mass: 150.0,
            color: "#6B4C9A".into(),
        },
        PlanetBody {
            name: "The Moon".into(),
            orbit_center: center,
            orbit_radius: 950.0,
            orbit_speed: 0.05,
            orbit_angle: -2.4,
            radius: 20.0,
            mass: 40.0,
            color: "#D0D0D0".into(),
        },
    ]
}

const SEEDED_COLORS: [&str; 4] = ["#8B7355", "#6B4C9A", "#D0D0D0", "#6666CC"];

/// Deterministic planet rings for a seed
///
/// Orbits are spread evenly between the arena edge and whichever is farther
/// out, the star's outermost zone or the spawn ring, one planet per ring, with
/// seeded size, speed, direction and phase. The innermost ring stays clear of
/// the spawn point at every phase.
pub fn seeded_planets(seed: u64, count: usize, center: Vec2, tuning: &Tuning) -> Vec<PlanetBody> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let spawn_clear = SPAWN_DISTANCE + tuning.ship.radius + MAX_SEEDED_RADIUS + SPAWN_CLEARANCE;
    let inner = (tuning.survival.zone_radii[2] + LAYOUT_MARGIN).max(spawn_clear);
    let outer = (tuning.arena.radius - LAYOUT_MARGIN).max(inner);
    let spacing = if count > 1 {
        (outer - inner) / (count - 1) as f32
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let radius: f32 = rng.random_range(15.0..MAX_SEEDED_RADIUS);
            let speed: f32 = rng.random_range(0.03..0.2);
            let direction: f32 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let phase: f32 = rng.random_range(-std::f32::consts::PI..std::f32::consts::PI);
            PlanetBody {
                name: format!("Planet {}", i + 1),
                orbit_center: center,
                orbit_radius: inner + spacing * i as f32,
                orbit_speed: speed * direction,
                orbit_angle: normalize_angle(phase),
                radius,
                // Denser bodies for bigger planets
                mass: radius * radius * 0.06,
                color: SEEDED_COLORS[i % SEEDED_COLORS.len()].into(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_antipodal() {
        let arena = Arena::new(DEFAULT_CENTER, 1200.0, 0.99);
        let mut ship = ShipBody::new(DEFAULT_CENTER + Vec2::new(1210.0, 0.0), 1.0, 16.0);
        ship.velocity = Vec2::new(300.0, -20.0);

        assert!(arena.wrap(&mut ship));
        let expected = DEFAULT_CENTER - Vec2::new(1210.0 * 0.99, 0.0);
        assert!((ship.position - expected).length() < 1e-3);
        assert_eq!(ship.velocity, Vec2::new(300.0, -20.0));
        assert_eq!(ship.rotation, 1.0);
        assert!(arena.contains(ship.position));
    }

    #[test]
    fn test_no_wrap_inside() {
        let arena = Arena::new(Vec2::ZERO, 1200.0, 0.99);
        let mut ship = ShipBody::new(Vec2::new(0.0, 1200.0), 0.0, 16.0);
        assert!(!arena.wrap(&mut ship));
        assert_eq!(ship.position, Vec2::new(0.0, 1200.0));
    }

    #[test]
    fn test_classic_planets_valid() {
        let planets = classic_planets(DEFAULT_CENTER);
        assert_eq!(planets.len(), 3);
        for p in &planets {
            assert!(p.radius > 0.0 && p.mass > 0.0);
            assert!(p.orbit_radius + p.radius < 1200.0);
        }
    }

    #[test]
    fn test_seeded_planets_deterministic() {
        let tuning = Tuning::default();
        let a = seeded_planets(42, 4, DEFAULT_CENTER, &tuning);
        let b = seeded_planets(42, 4, DEFAULT_CENTER, &tuning);
        let c = seeded_planets(43, 4, DEFAULT_CENTER, &tuning);
        assert_eq!(a, b);
        assert_ne!(a, c);
        for p in &a {
            assert!(p.orbit_radius >= tuning.survival.zone_radii[2]);
            assert!(p.orbit_radius <= tuning.arena.radius);
        }
    }

    #[test]
    fn test_seeded_rings_clear_spawn() {
        let tuning = Tuning::default();
        let spawn = DEFAULT_CENTER - Vec2::new(0.0, SPAWN_DISTANCE);
        for seed in 0..500 {
            for p in seeded_planets(seed, 3, DEFAULT_CENTER, &tuning) {
                let gap = (p.position() - spawn).length() - p.radius - tuning.ship.radius;
                assert!(gap > 0.0, "seed {} {} overlaps spawn", seed, p.name);
            }
        }
    }
}
