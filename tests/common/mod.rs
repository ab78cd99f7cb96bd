//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use fixvec::{FixedNum, Vector2Fixed, Vector3Fixed};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fixvec=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Bounded component with 8 fractional bits.
pub fn random_component(rng: &mut fastrand::Rng, bound: i64) -> FixedNum {
    FixedNum::from_bits(rng.i64(-(bound << 32)..=(bound << 32)) & !0xFF_FFFF)
}

pub fn random_vector2(rng: &mut fastrand::Rng) -> Vector2Fixed {
    Vector2Fixed::new(random_component(rng, 1000), random_component(rng, 1000))
}

pub fn random_vector3(rng: &mut fastrand::Rng) -> Vector3Fixed {
    Vector3Fixed::new(
        random_component(rng, 1000),
        random_component(rng, 1000),
        random_component(rng, 1000),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Body {
    pub position: Vector3Fixed,
    pub velocity: Vector3Fixed,
}

pub fn spawn_bodies(seed: u64, count: usize) -> Vec<Body> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Body {
            position: Vector3Fixed::new(
                random_component(&mut rng, 200),
                random_component(&mut rng, 4),
                random_component(&mut rng, 200),
            ),
            velocity: Vector3Fixed::new(random_component(&mut rng, 2), FixedNum::ZERO, random_component(&mut rng, 2)),
        })
        .collect()
}

/// One lockstep tick: steer every body toward `target` on the ground plane.
pub fn step(bodies: &mut [Body], target: Vector2Fixed, speed: FixedNum, dt: FixedNum) {
    let half = FixedNum::from_num(0.5);

    for body in bodies.iter_mut() {
        let ground = body.position.to_vector2_xz();
        let desired = (target - ground).normalized() * speed;
        let heading = body.velocity.to_vector2_xz();

        // Blend toward the desired heading while the turn is wider than ~6 degrees.
        let steered = if heading.angle(desired) > FixedNum::from_num(0.1) {
            (heading + desired) * half
        } else {
            desired
        };

        // Sidestep to the left of travel, scaled by which way the turn goes.
        let side = Vector3Fixed::UP.cross(steered.to_vector3_xz()).normalized();
        let turn = heading.cross(desired).signum() * FixedNum::from_num(0.25);

        body.velocity = steered.to_vector3_xz() + side * turn;
        body.position += body.velocity * dt;
        body.position.y = body.position.y * half;
    }
}

pub fn run(seed: u64, count: usize, ticks: u32) -> Vec<Body> {
    let mut bodies = spawn_bodies(seed, count);
    let target = Vector2Fixed::from_int(25, -40);
    let speed = FixedNum::from_num(3);
    let dt = FixedNum::from_num(1) / FixedNum::from_num(30);

    for _ in 0..ticks {
        step(&mut bodies, target, speed, dt);
    }
    bodies
}
