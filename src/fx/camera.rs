//! Camera director
//!
//! Chases a target with frame-rate independent damping and snaps when the
//! target jumps (an arena wrap) instead of panning across the whole field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::REFERENCE_FPS;
use crate::tuning::CameraTuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Center of view
    pub position: Vec2,
    pub target: Vec2,
    /// 0 = frozen, higher = tighter follow
    pub smoothing: f32,
    /// Logical viewport size in world units
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub snap_distance: f32,
}

impl CameraState {
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            smoothing: tuning.smoothing,
            viewport_width: tuning.viewport_width,
            viewport_height: tuning.viewport_height,
            snap_distance: tuning.snap_distance,
        }
    }

    /// Camera already centered on `position`
    pub fn centered_on(tuning: &CameraTuning, position: Vec2) -> Self {
        let mut camera = Self::new(tuning);
        camera.position = position;
        camera.target = position;
        camera
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Move toward the target; returns true if it snapped
    pub fn update(&mut self, dt: f32) -> bool {
        let delta = self.target - self.position;

        if delta.length_squared() > self.snap_distance * self.snap_distance {
            self.position = self.target;
            return true;
        }

        let factor = (self.smoothing * dt * REFERENCE_FPS).min(1.0);
        self.position += delta * factor;
        false
    }

    /// Top-left corner of the viewport in world space
    pub fn view_offset(&self) -> Vec2 {
        self.position - Vec2::new(self.viewport_width, self.viewport_height) / 2.0
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.view_offset()
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.view_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraState {
        CameraState::new(&CameraTuning::default())
    }

    #[test]
    fn test_converges_geometrically() {
        let mut cam = camera();
        cam.set_target(Vec2::new(100.0, 0.0));
        // factor = 0.1 * (1/60) * 60 = 0.1
        assert!(!cam.update(1.0 / 60.0));
        assert!((cam.position.x - 10.0).abs() < 1e-3);
        cam.update(1.0 / 60.0);
        assert!((cam.position.x - 19.0).abs() < 1e-3);
    }

    #[test]
    fn test_snaps_on_teleport() {
        let mut cam = camera();
        cam.set_target(Vec2::new(1500.0, 0.0));
        assert!(cam.update(1.0 / 60.0));
        assert_eq!(cam.position, Vec2::new(1500.0, 0.0));
    }

    #[test]
    fn test_factor_capped_at_one() {
        let mut cam = camera();
        cam.smoothing = 5.0;
        cam.set_target(Vec2::new(0.0, 300.0));
        cam.update(0.1);
        assert_eq!(cam.position, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_screen_world_conversion() {
        let cam = CameraState::centered_on(&CameraTuning::default(), Vec2::new(960.0, 540.0));
        assert_eq!(cam.view_offset(), Vec2::ZERO);
        let cam = CameraState::centered_on(&CameraTuning::default(), Vec2::new(1000.0, 600.0));
        let world = Vec2::new(1234.0, 321.0);
        let screen = cam.world_to_screen(world);
        assert_eq!(screen, Vec2::new(1234.0 - 40.0, 321.0 - 60.0));
        assert_eq!(cam.screen_to_world(screen), world);
    }
}
