//! Hull and power model
//!
//! Every rate is per second. Within one update all terms are summed first and
//! the result is clamped once, so a regen and a drain in the same tick net out
//! before hitting a bound.

use super::state::{InputIntent, Resources, StarBody};
use crate::tuning::SurvivalTuning;

/// Index of the innermost zone containing `distance`, nearest first
pub fn zone_index(distance: f32, zone_radii: &[f32; 3]) -> Option<usize> {
    zone_radii.iter().position(|&radius| distance < radius)
}

/// Power drain per second for the thrusters in use
pub fn consumption_rate(input: &InputIntent, tuning: &SurvivalTuning) -> f32 {
    match input.thrusters_firing() {
        0 => tuning.power_consumption_rate,
        1 => tuning.power_consumption_single_thrust,
        _ => tuning.power_consumption_dual_thrust,
    }
}

/// Power regenerated per second at `distance` from the star
pub fn regen_rate(distance: f32, star: &StarBody, tuning: &SurvivalTuning) -> f32 {
    zone_index(distance, &tuning.zone_radii)
        .map(|zone| tuning.power_regen[zone] * star.power_multiplier)
        .unwrap_or(0.0)
}

/// Hull burned per second at `distance` from the star (contact excluded)
pub fn burn_rate(distance: f32, star: &StarBody, tuning: &SurvivalTuning) -> f32 {
    zone_index(distance, &tuning.zone_radii)
        .map(|zone| tuning.hull_burn[zone] * star.burn_multiplier)
        .unwrap_or(0.0)
}

/// Unclamped power change for one update
pub fn power_delta(
    distance: f32,
    star: &StarBody,
    dt: f32,
    input: &InputIntent,
    tuning: &SurvivalTuning,
) -> f32 {
    (regen_rate(distance, star, tuning) - consumption_rate(input, tuning)) * dt
}

/// One tick of the full resource model
///
/// Power drain/regen, zone burn and `collisions` planet impacts are summed,
/// then clamped together.
pub fn update_resources(
    resources: &mut Resources,
    distance: f32,
    star: &StarBody,
    dt: f32,
    input: &InputIntent,
    collisions: usize,
    tuning: &SurvivalTuning,
) {
    resources.power += power_delta(distance, star, dt, input, tuning);

    if distance < star.radius {
        resources.hull = 0.0;
    } else {
        resources.hull -= burn_rate(distance, star, tuning) * dt
            + tuning.planet_collision_damage * collisions as f32;
    }

    resources.clamp();
}
