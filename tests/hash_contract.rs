mod common;

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::BuildHasher;

use fixvec::{FixedNum, Vector2Fixed, Vector3Fixed};
use rustc_hash::FxBuildHasher;

use common::{random_vector2, random_vector3};

/// Second operand for a pair: an identical copy, a rebuilt equal value, a one-ulp
/// neighbour, or an unrelated vector.
fn partner<T: Copy>(rng: &mut fastrand::Rng, a: T, rebuild: impl Fn(T) -> T, nudge: impl Fn(T) -> T, fresh: impl Fn(&mut fastrand::Rng) -> T) -> T {
    match rng.u8(0..4) {
        0 => a,
        1 => rebuild(a),
        2 => nudge(a),
        _ => fresh(rng),
    }
}

#[test]
fn test_equal_vector2_pairs_hash_equal() {
    let std_state = RandomState::new();
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut equal_pairs = 0;

    for _ in 0..1_000 {
        let a = random_vector2(&mut rng);
        let b = partner(
            &mut rng,
            a,
            |v| Vector2Fixed::from_array(v.to_array()),
            |v| Vector2Fixed::new(v.x, v.y + FixedNum::from_bits(1)),
            random_vector2,
        );

        if a == b {
            equal_pairs += 1;
            assert_eq!(FxBuildHasher.hash_one(a), FxBuildHasher.hash_one(b), "{a} == {b} but Fx hashes differ");
            assert_eq!(std_state.hash_one(a), std_state.hash_one(b), "{a} == {b} but std hashes differ");
        }
    }

    assert!(equal_pairs > 0, "The generator should produce some equal pairs");
}

#[test]
fn test_equal_vector3_pairs_hash_equal() {
    let std_state = RandomState::new();
    let mut rng = fastrand::Rng::with_seed(2025);
    let mut equal_pairs = 0;

    for _ in 0..1_000 {
        let a = random_vector3(&mut rng);
        let b = partner(
            &mut rng,
            a,
            |v| Vector3Fixed::new(v[0], v[1], v[2]),
            |v| Vector3Fixed::new(v.x - FixedNum::from_bits(1), v.y, v.z),
            random_vector3,
        );

        if a == b {
            equal_pairs += 1;
            assert_eq!(FxBuildHasher.hash_one(a), FxBuildHasher.hash_one(b), "{a} == {b} but Fx hashes differ");
            assert_eq!(std_state.hash_one(a), std_state.hash_one(b), "{a} == {b} but std hashes differ");
        } else {
            assert_ne!(a.to_array(), b.to_array(), "Unequal vectors must differ in some component");
        }
    }

    assert!(equal_pairs > 0, "The generator should produce some equal pairs");
}

#[test]
fn test_one_ulp_difference_is_unequal() {
    let a = Vector2Fixed::from_int(3, 4);
    let b = Vector2Fixed::new(a.x + FixedNum::from_bits(1), a.y);
    assert_ne!(a, b, "Equality has no epsilon tolerance");
}

#[test]
fn test_hash_set_deduplicates_equal_vectors() {
    let mut set = HashSet::with_hasher(FxBuildHasher);
    set.insert(Vector3Fixed::UP);
    set.insert(Vector3Fixed::from_int(0, 1, 0));
    set.insert(Vector3Fixed::from_f32(0.0, 1.0, 0.0));
    set.insert(-Vector3Fixed::DOWN);
    assert_eq!(set.len(), 1, "All four spellings of UP should collapse to one entry");

    set.insert(Vector3Fixed::FORWARD);
    assert_eq!(set.len(), 2);
}
