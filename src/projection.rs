//! Axis projections between the 2D and 3D vectors.
//!
//! The `xz` pair maps the ground plane of a y-up world onto 2D, the `xy` pair keeps
//! the first two axes. Dropping an axis is lossy and the reverse direction fills
//! it with zero, so a round trip does not restore the dropped component.

use crate::scalar;
use crate::vector2::Vector2Fixed;
use crate::vector3::Vector3Fixed;

impl Vector3Fixed {
    /// `(x, y, z) -> (x, z)`
    pub const fn to_vector2_xz(self) -> Vector2Fixed {
        Vector2Fixed::new(self.x, self.z)
    }

    /// `(x, y, z) -> (x, y)`
    pub const fn to_vector2_xy(self) -> Vector2Fixed {
        Vector2Fixed::new(self.x, self.y)
    }
}

impl Vector2Fixed {
    /// `(x, y) -> (x, 0, y)`
    pub const fn to_vector3_xz(self) -> Vector3Fixed {
        Vector3Fixed::new(self.x, scalar::ZERO, self.y)
    }

    /// `(x, y) -> (x, y, 0)`
    pub const fn to_vector3_xy(self) -> Vector3Fixed {
        Vector3Fixed::new(self.x, self.y, scalar::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedNum;

    fn v3(x: f64, y: f64, z: f64) -> Vector3Fixed {
        Vector3Fixed::new(FixedNum::from_num(x), FixedNum::from_num(y), FixedNum::from_num(z))
    }

    #[test]
    fn test_xz_drops_y() {
        let v = v3(1.5, -7.25, 3.0);
        assert_eq!(v.to_vector2_xz(), Vector2Fixed::new(v.x, v.z));
    }

    #[test]
    fn test_xy_drops_z() {
        let v = v3(1.5, -7.25, 3.0);
        assert_eq!(v.to_vector2_xy(), Vector2Fixed::new(v.x, v.y));
    }

    #[test]
    fn test_xz_round_trip_zeroes_y() {
        let v = v3(4.0, 99.0, -2.5);
        let back = v.to_vector2_xz().to_vector3_xz();
        assert_eq!(back, v3(4.0, 0.0, -2.5), "Y must be zeroed, never preserved");
    }

    #[test]
    fn test_xy_round_trip_zeroes_z() {
        let v = v3(4.0, 99.0, -2.5);
        let back = v.to_vector2_xy().to_vector3_xy();
        assert_eq!(back, v3(4.0, 99.0, 0.0), "Z must be zeroed, never preserved");
    }

    #[test]
    fn test_2d_to_3d_and_back_is_identity() {
        let flat = Vector2Fixed::from_int(-3, 8);
        assert_eq!(flat.to_vector3_xz().to_vector2_xz(), flat);
        assert_eq!(flat.to_vector3_xy().to_vector2_xy(), flat);
    }

    #[test]
    fn test_axis_constants_project_onto_matching_axes() {
        assert_eq!(Vector3Fixed::FORWARD.to_vector2_xz(), Vector2Fixed::UP);
        assert_eq!(Vector3Fixed::RIGHT.to_vector2_xz(), Vector2Fixed::RIGHT);
        assert_eq!(Vector3Fixed::UP.to_vector2_xz(), Vector2Fixed::ZERO);
        assert_eq!(Vector3Fixed::UP.to_vector2_xy(), Vector2Fixed::UP);
        assert_eq!(Vector2Fixed::UP.to_vector3_xz(), Vector3Fixed::FORWARD);
        assert_eq!(Vector2Fixed::UP.to_vector3_xy(), Vector3Fixed::UP);
    }
}
