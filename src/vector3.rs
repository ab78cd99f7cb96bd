//! Three-component fixed-point vector.
//!
//! Axis convention: `RIGHT` is +x, `UP` is +y, `FORWARD` is +z. [`Vector3Fixed::cross`]
//! is the plain determinant expansion, so `RIGHT x UP == FORWARD` and
//! `FORWARD x UP == LEFT`.

use fixvec_macros::VectorOps;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{fault, Result, VectorError};
use crate::scalar::{self, FixedNum};

/// Deterministic 3D vector. Equality and hashing are exact over the component bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, VectorOps)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3Fixed {
    pub x: FixedNum,
    pub y: FixedNum,
    pub z: FixedNum,
}

impl Vector3Fixed {
    pub const ZERO: Self = Self::new(scalar::ZERO, scalar::ZERO, scalar::ZERO);
    pub const ONE: Self = Self::new(scalar::ONE, scalar::ONE, scalar::ONE);
    pub const UP: Self = Self::new(scalar::ZERO, scalar::ONE, scalar::ZERO);
    pub const DOWN: Self = Self::new(scalar::ZERO, scalar::NEG_ONE, scalar::ZERO);
    pub const RIGHT: Self = Self::new(scalar::ONE, scalar::ZERO, scalar::ZERO);
    pub const LEFT: Self = Self::new(scalar::NEG_ONE, scalar::ZERO, scalar::ZERO);
    pub const FORWARD: Self = Self::new(scalar::ZERO, scalar::ZERO, scalar::ONE);
    pub const BACK: Self = Self::new(scalar::ZERO, scalar::ZERO, scalar::NEG_ONE);

    pub const fn new(x: FixedNum, y: FixedNum, z: FixedNum) -> Self {
        Self { x, y, z }
    }

    pub fn from_int(x: i32, y: i32, z: i32) -> Self {
        Self::new(scalar::from_int(x), scalar::from_int(y), scalar::from_int(z))
    }

    /// Convert from floats at the system boundary.
    ///
    /// # Panics
    /// If any component is NaN, infinite, or outside the `FixedNum` range.
    /// Use [`Self::try_from_f32`] for untrusted input.
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::try_from_f32(x, y, z).unwrap_or_else(|err| fault(err))
    }

    pub fn try_from_f32(x: f32, y: f32, z: f32) -> Result<Self> {
        Ok(Self::new(
            scalar::from_f32(x)?,
            scalar::from_f32(y)?,
            scalar::from_f32(z)?,
        ))
    }

    pub fn to_f32_array(self) -> [f32; 3] {
        [self.x.to_num(), self.y.to_num(), self.z.to_num()]
    }

    pub fn to_f32_tuple(self) -> (f32, f32, f32) {
        (self.x.to_num(), self.y.to_num(), self.z.to_num())
    }

    pub fn to_f64_array(self) -> [f64; 3] {
        [self.x.to_num(), self.y.to_num(), self.z.to_num()]
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
    /// `(0, 0, 7)` becomes exactly `(0, 0, 1)`, where `7 * (1 / 7)` would land a few ulps short.
    pub fn normalized(self) -> Self {
        let len = self.magnitude();
        if len == FixedNum::ZERO {
            trace!("normalized() on zero-length {self}, returning ZERO");
            return Self::ZERO;
        }
        Self::new(
            self.x.saturating_div(len),
            self.y.saturating_div(len),
            self.z.saturating_div(len),
        )
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
        self.z = self.z.saturating_div(len);
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

    /// Vector orthogonal to both inputs, with the parallelogram area as magnitude.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y.saturating_mul(other.z).saturating_sub(other.y.saturating_mul(self.z)),
            self.z.saturating_mul(other.x).saturating_sub(other.z.saturating_mul(self.x)),
            self.x.saturating_mul(other.y).saturating_sub(other.x.saturating_mul(self.y)),
        )
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

impl TryFrom<[f32; 3]> for Vector3Fixed {
    type Error = VectorError;

    fn try_from([x, y, z]: [f32; 3]) -> Result<Self> {
        Self::try_from_f32(x, y, z)
    }
}

impl TryFrom<(f32, f32, f32)> for Vector3Fixed {
    type Error = VectorError;

    fn try_from((x, y, z): (f32, f32, f32)) -> Result<Self> {
        Self::try_from_f32(x, y, z)
    }
}
