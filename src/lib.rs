//! Deterministic fixed-point 2D and 3D vectors.
//!
//! Every component is a [`FixedNum`] and no operation goes through a float, so the
//! same inputs produce the same bits on every platform, compiler and optimization
//! level. This is what lockstep multiplayer, replays and consensus checks rely on.
//!
//! # Singular cases
//!
//! - Normalizing a zero-length vector yields the zero vector.
//! - The angle involving a zero-length vector is zero.
//! - Dividing by a zero scalar panics (`/`) or returns [`VectorError::DivideByZero`]
//!   ([`Vector2Fixed::checked_div`]).
//! - Out-of-range indexing panics (`v[i]`) or reports through `get`/`set`.
//!
//! # Example
//!
//! ```rust
//! use fixvec::{FixedNum, Vector2Fixed, Vector3Fixed};
//!
//! let v = Vector3Fixed::from_int(3, 4, 0);
//! assert_eq!(v.magnitude(), FixedNum::from_num(5));
//!
//! let ground = v.to_vector2_xz();
//! assert_eq!(ground, Vector2Fixed::from_int(3, 0));
//! assert_eq!(Vector2Fixed::cross(Vector2Fixed::RIGHT, Vector2Fixed::UP), FixedNum::from_num(1));
//! ```

pub mod error;
mod projection;
pub mod scalar;
pub mod vector2;
pub mod vector3;

pub use error::{Result, VectorError};
pub use scalar::FixedNum;
pub use vector2::Vector2Fixed;
pub use vector3::Vector3Fixed;
