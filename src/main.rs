//! Void Drift entry point
//!
//! Headless native driver: builds an arena, flies a simple autopilot at a
//! fixed 60 Hz and prints the run summary as JSON.
//!
//! Usage: `void-drift [TUNING_JSON] [--seed N] [--class O|B|A|F|G|K|M] [--planets N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;
    use void_drift::sim::{InputIntent, StarClass, World, tick};
    use void_drift::{Settings, Tuning, TuningError, normalize_angle};

    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Ten minutes of play
    const MAX_TICKS: u32 = 60 * 600;
    /// Orbit the autopilot tries to hold, between the two outer zones
    const CRUISE_DISTANCE: f32 = 200.0;
    /// Heading error below which both thrusters fire
    const ALIGN_TOLERANCE: f32 = 0.15;

    struct Options {
        tuning_path: Option<String>,
        seed: u64,
        class: Option<StarClass>,
        planets: usize,
    }

    fn parse_args() -> Options {
        let mut options = Options {
            tuning_path: None,
            seed: 12345,
            class: None,
            planets: 3,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().map(|s| s.parse()) {
                    Some(Ok(seed)) => options.seed = seed,
                    _ => log::warn!("--seed needs an integer, keeping {}", options.seed),
                },
                "--class" => match args.next().as_deref().and_then(StarClass::from_letter) {
                    Some(class) => options.class = Some(class),
                    None => log::warn!("--class needs one of O B A F G K M"),
                },
                "--planets" => match args.next().map(|s| s.parse()) {
                    Some(Ok(count)) => options.planets = count,
                    _ => log::warn!("--planets needs a count, keeping {}", options.planets),
                },
                path => options.tuning_path = Some(path.to_string()),
            }
        }
        options
    }

    fn load_tuning(path: Option<&str>) -> Result<Tuning, TuningError> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loading tuning from {}", path);
                Tuning::from_json_str(&json)
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path, e);
                Ok(Tuning::default())
            }
        }
    }

    /// Hold a prograde orbit around the star, correcting radially
    fn autopilot(world: &World) -> InputIntent {
        let offset = world.ship.position - world.star.position;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return InputIntent {
                left_thruster: true,
                right_thruster: true,
                fire: false,
            };
        }

        let radial = offset / distance;
        let tangent = Vec2::new(-radial.y, radial.x);
        let correction = ((distance - CRUISE_DISTANCE) / CRUISE_DISTANCE).clamp(-1.0, 1.0);
        let desired = tangent - radial * correction;
        let error = normalize_angle(desired.y.atan2(desired.x) - world.ship.rotation);

        if error.abs() < ALIGN_TOLERANCE {
            InputIntent {
                left_thruster: true,
                right_thruster: true,
                fire: false,
            }
        } else {
            InputIntent {
                left_thruster: error > 0.0,
                right_thruster: error < 0.0,
                fire: false,
            }
        }
    }

    pub fn run() -> Result<(), TuningError> {
        let options = parse_args();
        let tuning = load_tuning(options.tuning_path.as_deref())?;

        let mut world = match options.class {
            Some(class) => {
                World::seeded(tuning, Settings::default(), class, options.planets, options.seed)?
            }
            None => World::classic(tuning, Settings::default(), options.seed)?,
        };

        for frame in 0..MAX_TICKS {
            let input = autopilot(&world);
            tick(&mut world, &input, FRAME_DT);

            if world.state.is_over() {
                break;
            }
            if frame % 600 == 0 {
                let r = world.state.resources;
                log::debug!(
                    "t={:.1}s hull={:.1} power={:.1}",
                    world.state.elapsed_time,
                    r.hull,
                    r.power
                );
            }
        }

        match world.summary() {
            Some(summary) => println!("{}", serde_json::to_string(&summary)?),
            None => log::info!(
                "Survived the full {:.0}s without dying",
                world.state.elapsed_time
            ),
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Void Drift (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts on wasm drive `void_drift::sim::tick` directly
}
