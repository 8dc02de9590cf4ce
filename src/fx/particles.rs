//! Collision burst particles and exhaust tint
//!
//! Visual only; nothing here feeds back into the simulation. Randomness comes
//! from the caller's seeded RNG so each world stays reproducible.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum particles
pub const MAX_PARTICLES: usize = 256;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, 0.0 when gone
    pub life: f32,
    /// Lifetime in seconds
    pub max_life: f32,
    /// 0-360
    pub hue: f32,
    pub size: f32,
}

impl Particle {
    /// Eased alpha: quadratic ease-out
    pub fn alpha(&self) -> f32 {
        self.life * (2.0 - self.life)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ring of sparks around `pos`, dropping any beyond the cap
    pub fn spawn_burst<R: Rng>(&mut self, pos: Vec2, count: usize, hue: f32, rng: &mut R) {
        for i in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let speed: f32 = 50.0 + rng.random_range(0.0..100.0);
            let hue_jitter: f32 = rng.random_range(-20.0..20.0);
            let max_life: f32 = 0.5 + rng.random_range(0.0..0.3);
            let size: f32 = 3.0 + rng.random_range(0.0..2.0);

            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                max_life,
                hue: (hue + hue_jitter).rem_euclid(360.0),
                size,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.life -= dt / particle.max_life;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Spark hue for a planet color; unknown colors fall back to red
pub fn planet_hue(color: &str) -> f32 {
    match color.to_ascii_uppercase().as_str() {
        "#8B7355" => 30.0,
        "#6B4C9A" => 270.0,
        "#D0D0D0" => 0.0,
        "#6666CC" => 240.0,
        _ => 0.0,
    }
}

/// Exhaust hue: blue when slow and charged, shifting green with speed and
/// warmer as power runs down
pub fn thrust_hue(speed: f32, power_percent: f32, max_speed: f32) -> f32 {
    let speed_factor = (speed / max_speed).min(1.0);
    let power_factor = power_percent / 100.0;
    200.0 - speed_factor * 80.0 - (1.0 - power_factor) * 20.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_spawns_ring() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ParticleField::new();
        field.spawn_burst(Vec2::new(10.0, 10.0), 12, 30.0, &mut rng);
        assert_eq!(field.len(), 12);
        for p in &field.particles {
            let speed = p.vel.length();
            assert!((50.0..150.0).contains(&speed));
            assert!((0.5..0.8).contains(&p.max_life));
            assert!((3.0..5.0).contains(&p.size));
        }
    }

    #[test]
    fn test_burst_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ParticleField::new();
        field.spawn_burst(Vec2::ZERO, MAX_PARTICLES + 50, 0.0, &mut rng);
        assert_eq!(field.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_particles_expire() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ParticleField::new();
        field.spawn_burst(Vec2::ZERO, 8, 240.0, &mut rng);
        field.update(0.1);
        assert_eq!(field.len(), 8);
        assert!(field.particles.iter().all(|p| p.life < 1.0 && p.alpha() > 0.0));
        for _ in 0..10 {
            field.update(0.1);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_thrust_hue() {
        assert_eq!(thrust_hue(0.0, 100.0, 1000.0), 200.0);
        assert_eq!(thrust_hue(2000.0, 0.0, 1000.0), 100.0);
    }

    #[test]
    fn test_planet_hue_case_insensitive() {
        assert_eq!(planet_hue("#6b4c9a"), 270.0);
        assert_eq!(planet_hue("#123456"), 0.0);
    }
}
