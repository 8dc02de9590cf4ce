//! Run lifecycle: Menu -> Playing -> GameOver, with a Settings side branch
//!
//! `now` is the world's simulation clock in seconds, which only advances
//! while playing. GameOver is never left; a restart builds a new state.

use glam::Vec2;

use super::collision::ship_star_contact;
use super::state::{DeathCause, GameStatus, ShipBody, SimulationState, StarBody};

/// Start the run on the first active input, then track elapsed time
///
/// Returns true on the tick the run starts.
pub fn update_timer(state: &mut SimulationState, now: f64, input_active: bool) -> bool {
    let mut started = false;
    if state.status == GameStatus::Menu && input_active {
        state.status = GameStatus::Playing;
        state.start_time = Some(now);
        started = true;
    }

    if state.status == GameStatus::Playing {
        if let Some(start) = state.start_time {
            state.elapsed_time = (now - start).max(0.0);
        }
    }
    started
}

/// First matching death cause, in priority order Star, Hull, Power
pub fn check_death(state: &SimulationState, ship_pos: Vec2, star: &StarBody) -> Option<DeathCause> {
    if ship_star_contact(ship_pos, star) {
        return Some(DeathCause::Star);
    }
    if state.resources.hull <= 0.0 {
        return Some(DeathCause::Hull);
    }
    if state.resources.power <= 0.0 {
        return Some(DeathCause::Power);
    }
    None
}

/// End the run: record the cause and freeze the ship
pub fn handle_death(state: &mut SimulationState, cause: DeathCause, ship: &mut ShipBody) {
    state.status = GameStatus::GameOver;
    state.death_cause = Some(cause);
    ship.velocity = Vec2::ZERO;
}

/// Evaluate and apply death for a playing run; returns the cause if it ended
pub fn evaluate_death(
    state: &mut SimulationState,
    ship: &mut ShipBody,
    star: &StarBody,
) -> Option<DeathCause> {
    if state.status != GameStatus::Playing {
        return None;
    }
    let cause = check_death(state, ship.position, star)?;
    handle_death(state, cause, ship);
    Some(cause)
}

/// Enter Settings from Menu or Playing; ignored otherwise
pub fn open_settings(state: &mut SimulationState) -> bool {
    match state.status {
        GameStatus::Menu | GameStatus::Playing => {
            state.resume_status = Some(state.status);
            state.status = GameStatus::Settings;
            true
        }
        GameStatus::GameOver | GameStatus::Settings => false,
    }
}

/// Leave Settings, returning to the status it was opened from
pub fn close_settings(state: &mut SimulationState) -> bool {
    if state.status != GameStatus::Settings {
        return false;
    }
    state.status = state.resume_status.take().unwrap_or(GameStatus::Menu);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Resources;

    fn star() -> StarBody {
        StarBody::new(Vec2::ZERO, 35.0, 600.0, 600.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_timer_starts_on_first_input() {
        let mut state = SimulationState::default();
        assert!(!update_timer(&mut state, 1.0, false));
        assert_eq!(state.status, GameStatus::Menu);
        assert_eq!(state.start_time, None);

        assert!(update_timer(&mut state, 2.0, true));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.start_time, Some(2.0));

        // Later ticks do not restart
        assert!(!update_timer(&mut state, 5.5, true));
        assert_eq!(state.elapsed_time, 3.5);
    }

    #[test]
    fn test_star_beats_hull_and_power() {
        let mut state = SimulationState::new(Resources::new(0.0, 0.0));
        state.status = GameStatus::Playing;
        assert_eq!(check_death(&state, Vec2::new(10.0, 0.0), &star()), Some(DeathCause::Star));
        assert_eq!(check_death(&state, Vec2::new(500.0, 0.0), &star()), Some(DeathCause::Hull));
        state.resources.hull = 10.0;
        assert_eq!(check_death(&state, Vec2::new(500.0, 0.0), &star()), Some(DeathCause::Power));
        state.resources.power = 10.0;
        assert_eq!(check_death(&state, Vec2::new(500.0, 0.0), &star()), None);
    }

    #[test]
    fn test_death_freezes_ship_and_is_terminal() {
        let mut state = SimulationState::new(Resources::new(0.0, 50.0));
        state.status = GameStatus::Playing;
        let mut ship = ShipBody::new(Vec2::new(500.0, 0.0), 0.0, 16.0);
        ship.velocity = Vec2::new(120.0, -40.0);

        assert_eq!(evaluate_death(&mut state, &mut ship, &star()), Some(DeathCause::Hull));
        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(ship.velocity, Vec2::ZERO);

        // Second evaluation does nothing
        state.resources.power = 0.0;
        assert_eq!(evaluate_death(&mut state, &mut ship, &star()), None);
        assert_eq!(state.death_cause, Some(DeathCause::Hull));

        // Nothing leaves GameOver
        assert!(!open_settings(&mut state));
        assert!(!update_timer(&mut state, 100.0, true));
        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn test_settings_returns_to_prior_status() {
        let mut state = SimulationState::default();
        assert!(open_settings(&mut state));
        assert_eq!(state.status, GameStatus::Settings);
        assert!(close_settings(&mut state));
        assert_eq!(state.status, GameStatus::Menu);

        update_timer(&mut state, 0.0, true);
        assert!(open_settings(&mut state));
        assert!(!open_settings(&mut state));
        assert!(close_settings(&mut state));
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!close_settings(&mut state));
    }
}
