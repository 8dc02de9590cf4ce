//! Presentation directors
//!
//! Derived from simulation output each frame. They never feed back into
//! physics or resources.

pub mod camera;
pub mod flash;
pub mod particles;
pub mod shake;

pub use camera::CameraState;
pub use flash::DamageFlash;
pub use particles::{MAX_PARTICLES, Particle, ParticleField, planet_hue, thrust_hue};
pub use shake::ScreenShake;
