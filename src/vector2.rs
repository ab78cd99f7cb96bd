//! Two-component fixed-point vector.

use fixvec_macros::VectorOps;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{fault, Result, VectorError};
use crate::scalar::{self, FixedNum};

/// Deterministic 2D vector. Equality and hashing are exact over the component bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, VectorOps)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2Fixed {
    pub x: FixedNum,
    pub y: FixedNum,
}

impl Vector2Fixed {
    pub const ZERO: Self = Self::new(scalar::ZERO, scalar::ZERO);
    pub const ONE: Self = Self::new(scalar::ONE, scalar::ONE);
    pub const UP: Self = Self::new(scalar::ZERO, scalar::ONE);
    pub const DOWN: Self = Self::new(scalar::ZERO, scalar::NEG_ONE);
    pub const RIGHT: Self = Self::new(scalar::ONE, scalar::ZERO);
    pub const LEFT: Self = Self::new(scalar::NEG_ONE, scalar::ZERO);

    pub const fn new(x: FixedNum, y: FixedNum) -> Self {
        Self { x, y }
    }

    pub fn from_int(x: i32, y: i32) -> Self {
        Self::new(scalar::from_int(x), scalar::from_int(y))
    }

    /// Convert from floats at the system boundary.
    ///
    /// # Panics
    /// If either component is NaN, infinite, or outside the `FixedNum` range.
    /// Use [`Self::try_from_f32`] for untrusted input.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::try_from_f32(x, y).unwrap_or_else(|err| fault(err))
    }

    pub fn try_from_f32(x: f32, y: f32) -> Result<Self> {
        Ok(Self::new(scalar::from_f32(x)?, scalar::from_f32(y)?))
    }

    pub fn to_f32_array(self) -> [f32; 2] {
        [self.x.to_num(), self.y.to_num()]
    }

    pub fn to_f32_tuple(self) -> (f32, f32) {
        (self.x.to_num(), self.y.to_num())
    }

    pub fn to_f64_array(self) -> [f64; 2] {
        [self.x.to_num(), self.y.to_num()]
    }

    /// Sum of squared components. Saturates at `FixedNum::MAX`, so it is never negative.
    pub fn sqr_magnitude(self) -> FixedNum {
        scalar::sum_of_products(self.to_array(), self.to_array())
    }

    pub fn magnitude(self) -> FixedNum {
        scalar::sqrt(self.sqr_magnitude())
    }

    /// Unit vector in the same direction, or `ZERO` when the magnitude is zero.
    ///
    /// Each component is divided by the magnitude rather than multiplied by its
    /// reciprocal. The single rounding step keeps axis-aligned inputs exact:
    /// `(0, 7)` becomes exactly `(0, 1)`, where `7 * (1 / 7)` would land a few ulps short.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len == FixedNum::ZERO {
            trace!("normalized() on zero-length {self}, returning ZERO");
            return Self::ZERO;
        }
        Self::new(self.x.saturating_div(len), self.y.saturating_div(len))
    }

    /// Normalize in place. A zero-length vector is left untouched.
    pub fn normalize(&mut self) {
        let len = self.magnitude();
        if len == FixedNum::ZERO {
            trace!("normalize() on zero-length {self}, left unmodified");
            return;
        }
        self.x = self.x.saturating_div(len);
        self.y = self.y.saturating_div(len);
    }

    /// Copy of `v` normalized with [`Self::normalize`]'s zero-length policy.
    pub fn get_normalized(v: Self) -> Self {
        let mut result = v;
        result.normalize();
        result
    }

    pub fn dot(self, other: Self) -> FixedNum {
        scalar::sum_of_products(self.to_array(), other.to_array())
    }

    /// Signed area of the parallelogram spanned by `self` and `other`.
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross(self, other: Self) -> FixedNum {
        self.x.saturating_mul(other.y).saturating_sub(self.y.saturating_mul(other.x))
    }

    pub fn distance(self, other: Self) -> FixedNum {
        (self - other).magnitude()
    }

    pub fn distance_sqr(self, other: Self) -> FixedNum {
        (self - other).sqr_magnitude()
    }

    /// Unsigned angle in radians, `[0, π]`. Zero if either vector has zero length.
    pub fn angle(self, other: Self) -> FixedNum {
        scalar::angle_from_dot(self.dot(other), self.magnitude().saturating_mul(other.magnitude()))
    }
}

impl TryFrom<[f32; 2]> for Vector2Fixed {
    type Error = VectorError;

    fn try_from([x, y]: [f32; 2]) -> Result<Self> {
        Self::try_from_f32(x, y)
    }
}

impl TryFrom<(f32, f32)> for Vector2Fixed {
    type Error = VectorError;

    fn try_from((x, y): (f32, f32)) -> Result<Self> {
        Self::try_from_f32(x, y)
    }
}
