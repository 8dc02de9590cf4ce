//! Differential thrust and integration
//!
//! Force contributors (thrust here, gravity in [`super::gravity`]) only add to
//! `ShipBody::acceleration`. [`integrate`] consumes the accumulator once per
//! tick and clears it.

use super::state::{InputIntent, ShipBody};
use super::vector::VectorExt;
use crate::heading;
use crate::tuning::ShipTuning;

/// Rotate and accumulate thrust for one tick
///
/// Left only turns counter-clockwise, right only turns clockwise, both fire
/// straight ahead. Thrust magnitude is the same in all three cases and is
/// applied along the heading after any rotation.
pub fn apply_thrust(ship: &mut ShipBody, input: &InputIntent, dt: f32, tuning: &ShipTuning) {
    let thrusting = match (input.left_thruster, input.right_thruster) {
        (true, true) => true,
        (true, false) => {
            ship.rotation += tuning.rotation_speed * dt;
            true
        }
        (false, true) => {
            ship.rotation -= tuning.rotation_speed * dt;
            true
        }
        (false, false) => false,
    };

    if thrusting {
        ship.acceleration += heading(ship.rotation) * tuning.thrust_force;
    }
}

/// Integrate accumulated acceleration, apply drag and the speed cap, move,
/// then reset the accumulator
pub fn integrate(ship: &mut ShipBody, dt: f32, tuning: &ShipTuning) {
    ship.velocity.add_mut(ship.acceleration * dt);

    // Clamped so a long frame can't flip the velocity
    let drag_factor = (1.0 - tuning.drag * dt).max(0.0);
    ship.velocity.scale_mut(drag_factor);

    if ship.velocity.magnitude() > tuning.max_speed {
        ship.velocity.normalize_mut().scale_mut(tuning.max_speed);
    }

    ship.position.add_mut(ship.velocity * dt);
    ship.acceleration.set_xy(0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ship() -> ShipBody {
        ShipBody::new(Vec2::ZERO, 0.0, 16.0)
    }

    fn input(left: bool, right: bool) -> InputIntent {
        InputIntent {
            left_thruster: left,
            right_thruster: right,
            fire: false,
        }
    }

    #[test]
    fn test_no_input_no_thrust() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        apply_thrust(&mut ship, &input(false, false), 0.1, &tuning);
        assert_eq!(ship.rotation, 0.0);
        assert_eq!(ship.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_left_rotates_counter_clockwise() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        apply_thrust(&mut ship, &input(true, false), 0.1, &tuning);
        assert!((ship.rotation - tuning.rotation_speed * 0.1).abs() < 1e-6);
        // Thrust along the new heading
        let expected = heading(ship.rotation) * tuning.thrust_force;
        assert!((ship.acceleration - expected).length() < 1e-3);
    }

    #[test]
    fn test_right_rotates_clockwise() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        apply_thrust(&mut ship, &input(false, true), 0.1, &tuning);
        assert!(ship.rotation < 0.0);
        assert!((ship.acceleration.length() - tuning.thrust_force).abs() < 1e-3);
    }

    #[test]
    fn test_both_thrusters_full_thrust_no_rotation() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        ship.rotation = 0.5;
        apply_thrust(&mut ship, &input(true, true), 0.1, &tuning);
        assert_eq!(ship.rotation, 0.5);
        let expected = heading(0.5) * tuning.thrust_force;
        assert!((ship.acceleration - expected).length() < 1e-3);
    }

    #[test]
    fn test_integrate_resets_accumulator() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        ship.acceleration = Vec2::new(100.0, 0.0);
        integrate(&mut ship, 0.1, &tuning);
        assert_eq!(ship.acceleration, Vec2::ZERO);
        // v = 10 * (1 - 0.025) = 9.75; x = 0.975
        assert!((ship.velocity.x - 9.75).abs() < 1e-4);
        assert!((ship.position.x - 0.975).abs() < 1e-4);
    }

    #[test]
    fn test_drag_never_reverses_velocity() {
        let tuning = ShipTuning {
            drag: 20.0,
            ..Default::default()
        };
        let mut ship = ship();
        ship.velocity = Vec2::new(50.0, 0.0);
        integrate(&mut ship, 0.1, &tuning);
        assert_eq!(ship.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_speed_cap_preserves_direction() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        ship.velocity = Vec2::new(3000.0, 4000.0);
        integrate(&mut ship, 0.01, &tuning);
        assert!((ship.speed() - tuning.max_speed).abs() < 1e-2);
        let dir = ship.velocity.normalize();
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-5);
    }
}
