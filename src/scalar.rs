//! Deterministic fixed-point scalar.
//!
//! Every vector component is a [`FixedNum`]. Arithmetic, comparison and the square
//! root come straight from the `fixed` crate. The arccosine is computed here with a
//! CORDIC iteration over the raw bits, so no floating-point value is ever touched
//! between the conversion boundary and the result.
//!
//! # Format
//!
//! `I32F32`: 32 integer bits (sign included), 32 fractional bits. Range is roughly
//! ±2.1 billion with a precision of ~0.00000000023.
//!
//! # Overflow
//!
//! Vector arithmetic saturates at [`FixedNum::MIN`]/[`FixedNum::MAX`] in every
//! build profile. Squared magnitudes reach the limit once a component passes
//! 46 340 (about 26 754 per axis on a 3D diagonal), after which `sqr_magnitude`
//! reads `MAX` and `magnitude` reads `sqrt(MAX)`. Results stay bit-identical
//! across debug and release builds but are no longer geometrically exact, so keep
//! world coordinates inside that range.

use fixed::types::I32F32;
use tracing::trace;

use crate::error::{Result, VectorError};

/// Fixed-point number type used by every vector component.
pub type FixedNum = I32F32;

pub const ZERO: FixedNum = FixedNum::ZERO;
pub const ONE: FixedNum = FixedNum::from_bits(1 << 32);
pub const NEG_ONE: FixedNum = FixedNum::from_bits(-(1 << 32));

/// π rounded to the nearest `I32F32`.
pub const PI: FixedNum = FixedNum::from_bits(13_493_037_705);
/// π/2 rounded to the nearest `I32F32`.
pub const FRAC_PI_2: FixedNum = FixedNum::from_bits(6_746_518_852);

/// `atan(2^-i)` in `I32F32` bits, rounded to nearest.
const ATAN_TABLE: [i64; 32] = [
    3_373_259_426,
    1_991_351_318,
    1_052_175_346,
    534_100_635,
    268_086_748,
    134_174_063,
    67_103_403,
    33_553_749,
    16_777_131,
    8_388_597,
    4_194_303,
    2_097_152,
    1_048_576,
    524_288,
    262_144,
    131_072,
    65_536,
    32_768,
    16_384,
    8_192,
    4_096,
    2_048,
    1_024,
    512,
    256,
    128,
    64,
    32,
    16,
    8,
    4,
    2,
];

/// Square root, zero for zero and negative input.
pub fn sqrt(value: FixedNum) -> FixedNum {
    if value <= ZERO {
        return ZERO;
    }
    value.sqrt()
}

/// Arccosine in radians, in `[0, π]`.
///
/// Input outside `[-1, 1]` is clamped, which keeps ratios that overshoot by a
/// rounding step (`dot / (|a| * |b|)` for parallel vectors) well defined.
pub fn acos(value: FixedNum) -> FixedNum {
    if value >= ONE {
        if value > ONE {
            trace!("acos input {value} clamped to 1");
        }
        return ZERO;
    }
    if value <= NEG_ONE {
        if value < NEG_ONE {
            trace!("acos input {value} clamped to -1");
        }
        return PI;
    }
    if value == ZERO {
        return FRAC_PI_2;
    }

    // acos(c) = atan2(sqrt(1 - c^2), c), evaluated on |c| and mirrored for c < 0.
    let adjacent = value.abs();
    let opposite = sqrt(ONE - adjacent * adjacent);
    let angle = FixedNum::from_bits(cordic_atan2(opposite.to_bits(), adjacent.to_bits()));

    if value < ZERO {
        PI - angle
    } else {
        angle
    }
}

/// CORDIC vectoring mode: rotate `(x, y)` onto the positive x axis and sum the
/// rotation angles. Expects `x > 0`, `y >= 0`, both at most `1.0` in `I32F32` bits.
fn cordic_atan2(mut y: i64, mut x: i64) -> i64 {
    let mut angle = 0i64;
    for (shift, step) in ATAN_TABLE.iter().enumerate() {
        let dx = y >> shift;
        let dy = x >> shift;
        if y > 0 {
            x += dx;
            y -= dy;
            angle += step;
        } else {
            x -= dx;
            y += dy;
            angle -= step;
        }
    }
    angle
}

/// `a[0] * b[0] + a[1] * b[1] + ...`, saturating at every step, summed in index order.
pub(crate) fn sum_of_products<const N: usize>(a: [FixedNum; N], b: [FixedNum; N]) -> FixedNum {
    a.into_iter()
        .zip(b)
        .fold(ZERO, |sum, (p, q)| sum.saturating_add(p.saturating_mul(q)))
}

/// `acos(dot / magnitude_product)`, or zero when the product is zero.
pub(crate) fn angle_from_dot(dot: FixedNum, magnitude_product: FixedNum) -> FixedNum {
    if magnitude_product == ZERO {
        trace!("angle with a zero-length operand, returning 0");
        return ZERO;
    }
    acos(dot.saturating_div(magnitude_product))
}

/// Convert one float component at the system boundary.
pub fn from_f32(value: f32) -> Result<FixedNum> {
    if !value.is_finite() {
        return Err(VectorError::UnrepresentableFloat { value: f64::from(value) });
    }
    FixedNum::checked_from_num(value).ok_or(VectorError::UnrepresentableFloat {
        value: f64::from(value),
    })
}

/// Lift an integer exactly. Every `i32` fits in the integer part.
pub fn from_int(value: i32) -> FixedNum {
    FixedNum::from_bits(i64::from(value) << 32)
}
