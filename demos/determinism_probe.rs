//! Determinism probe: run a seeded lockstep scenario and print a checksum of the
//! final state. Run it on two machines (or two builds) and compare the checksums.
//!
//! ```text
//! cargo run --example determinism_probe
//! RUST_LOG=fixvec=trace cargo run --example determinism_probe
//! ```

use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use fixvec::{scalar, FixedNum, Vector2Fixed, Vector3Fixed, VectorError};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG_PATH: &str = "demos/probe_config.ron";

/// Scenario parameters. Floats only cross into fixed point once, at startup.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ProbeConfig {
    pub seed: u64,
    pub bodies: usize,
    pub ticks: u32,
    pub tick_rate: f32,
    pub speed: f32,
    pub spawn_half_extent: i32,
    pub target: (f32, f32),
    pub sidestep: f32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bodies: 1_000,
            ticks: 600,
            tick_rate: 30.0,
            speed: 3.0,
            spawn_half_extent: 200,
            target: (25.0, -40.0),
            sidestep: 0.25,
        }
    }
}

fn load_config(path: &str) -> ProbeConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match ron::from_str::<ProbeConfig>(&contents) {
            Ok(config) => {
                info!("Loaded probe config from {}", path);
                config
            }
            Err(e) => {
                error!("Failed to parse probe config: {}", e);
                error!("Using default ProbeConfig");
                ProbeConfig::default()
            }
        },
        Err(e) => {
            error!("Failed to read {}: {}", path, e);
            error!("Using default ProbeConfig");
            ProbeConfig::default()
        }
    }
}

/// Log to stdout and to a timestamped file under `logs/`. Returns the file path.
fn setup_file_logging() -> PathBuf {
    let log_dir = PathBuf::from("logs");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create logs directory: {e}");
    }

    let log_filename = format!("determinism_probe_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let file_appender = RollingFileAppender::new(Rotation::NEVER, &log_dir, &log_filename);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fixvec=info,determinism_probe=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .init();

    log_dir.join(log_filename)
}

#[derive(Clone, Copy, Debug)]
struct Body {
    position: Vector3Fixed,
    velocity: Vector3Fixed,
}

/// The scenario after the float boundary: everything below is fixed point.
struct Scenario {
    target: Vector2Fixed,
    speed: FixedNum,
    sidestep: FixedNum,
    dt: FixedNum,
    turn_threshold: FixedNum,
}

impl Scenario {
    fn from_config(config: &ProbeConfig) -> fixvec::Result<Self> {
        let tick_rate = scalar::from_f32(config.tick_rate)?;
        Ok(Self {
            target: Vector2Fixed::try_from(config.target)?,
            speed: scalar::from_f32(config.speed)?,
            sidestep: scalar::from_f32(config.sidestep)?,
            dt: scalar::ONE.checked_div(tick_rate).ok_or(VectorError::DivideByZero)?,
            turn_threshold: FixedNum::from_num(0.1),
        })
    }

    fn step(&self, bodies: &mut [Body]) {
        let half = FixedNum::from_num(0.5);

        for body in bodies.iter_mut() {
            let heading = body.velocity.to_vector2_xz();
            let desired = (self.target - body.position.to_vector2_xz()).normalized() * self.speed;

            let steered = if heading.angle(desired) > self.turn_threshold {
                (heading + desired) * half
            } else {
                desired
            };

            let side = Vector3Fixed::UP.cross(steered.to_vector3_xz()).normalized();
            let turn = heading.cross(desired).signum() * self.sidestep;

            body.velocity = steered.to_vector3_xz() + side * turn;
            body.position += body.velocity * self.dt;
            body.position.y = body.position.y * half;
        }
    }
}

fn spawn(config: &ProbeConfig) -> Vec<Body> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let extent = config.spawn_half_extent.max(1);

    (0..config.bodies)
        .map(|_| {
            // Integer part plus 8 random fractional bits, built without touching a float.
            let mut coordinate = || {
                scalar::from_int(rng.i32(-extent..=extent)) + FixedNum::from_bits(i64::from(rng.u8(..)) << 24)
            };
            Body {
                position: Vector3Fixed::new(coordinate(), FixedNum::ZERO, coordinate()),
                velocity: Vector3Fixed::ZERO,
            }
        })
        .collect()
}

fn checksum(bodies: &[Body]) -> u64 {
    let mut hasher = FxHasher::default();
    for body in bodies {
        for component in body.position.to_array().into_iter().chain(body.velocity.to_array()) {
            component.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}

fn main() {
    let log_file = setup_file_logging();

    info!("Logging to {}", log_file.display());

    let config = load_config(CONFIG_PATH);
    let scenario = match Scenario::from_config(&config) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("Probe config cannot be used: {}", e);
            std::process::exit(1);
        }
    };

    let mut bodies = spawn(&config);
    info!("Spawned {} bodies with seed {}", bodies.len(), config.seed);

    for tick in 0..config.ticks {
        scenario.step(&mut bodies);
        if tick % 100 == 0 {
            info!("[PROBE] tick {} checksum {:016x}", tick, checksum(&bodies));
        }
    }

    let arrived = bodies
        .iter()
        .filter(|b| b.position.to_vector2_xz().distance(scenario.target) < FixedNum::from_num(1))
        .count();

    info!("Arrived at target: {}/{}", arrived, bodies.len());
    println!("checksum {:016x}", checksum(&bodies));
}
