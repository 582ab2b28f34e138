//! Math utilities and types
//!
//! Canvas-space math for the underlay: positions are in pixels with the
//! origin at the top-left corner, angles are in degrees unless noted.

pub use nalgebra::{Vector2, Vector3, Matrix4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// One full turn in degrees
    pub const FULL_TURN_DEG: f32 = 360.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Wrap an angle by subtracting at most one full turn
    ///
    /// Angles that overshoot by more than a turn stay above 360 after this.
    pub fn wrap_degrees_once(degrees: f32) -> f32 {
        if degrees >= constants::FULL_TURN_DEG {
            degrees - constants::FULL_TURN_DEG
        } else {
            degrees
        }
    }

    /// Wrap an angle by subtracting full turns until it is below 360
    ///
    /// When the angle is so large that subtracting a turn no longer changes
    /// the float, the exact remainder is taken instead so the loop ends.
    pub fn wrap_degrees(mut degrees: f32) -> f32 {
        if !degrees.is_finite() {
            return 0.0;
        }
        while degrees >= constants::FULL_TURN_DEG {
            let next = degrees - constants::FULL_TURN_DEG;
            if next == degrees {
                return degrees.rem_euclid(constants::FULL_TURN_DEG);
            }
            degrees = next;
        }
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::utils::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI);
        assert_relative_eq!(deg_to_rad(0.0), 0.0);
    }

    #[test]
    fn test_wrap_once_subtracts_a_single_turn() {
        assert_relative_eq!(wrap_degrees_once(10.0), 10.0);
        assert_relative_eq!(wrap_degrees_once(360.0), 0.0);
        assert_relative_eq!(wrap_degrees_once(370.0), 10.0);
        // More than one turn over stays out of range
        assert_relative_eq!(wrap_degrees_once(800.0), 440.0);
    }

    #[test]
    fn test_wrap_loops_until_in_range() {
        assert_relative_eq!(wrap_degrees(800.0), 80.0, epsilon = 1e-3);
        assert_relative_eq!(wrap_degrees(360.0), 0.0);
        assert_relative_eq!(wrap_degrees(359.5), 359.5);
    }

    #[test]
    fn test_wrap_terminates_for_huge_angles() {
        let wrapped = wrap_degrees(1.0e12);
        assert!((0.0..360.0).contains(&wrapped));

        assert_eq!(wrap_degrees(f32::INFINITY), 0.0);
        assert!((0.0..360.0).contains(&wrap_degrees(f32::MAX)));
    }
}
