/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Places a point at `radius` along `angle` (radians), measured from +Y
/// towards +X.
#[must_use]
pub fn polar(radius: f64, angle: f64) -> Point2 {
    Point2::new(radius * angle.sin(), radius * angle.cos())
}

/// Linear interpolation between two planar points.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn polar_zero_angle_points_along_y() {
        let p = polar(2.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn polar_quarter_turn_points_along_x() {
        let p = polar(3.0, FRAC_PI_2);
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_midpoint() {
        let m = lerp(&Point2::new(0.0, 0.0), &Point2::new(2.0, 4.0), 0.5);
        assert_relative_eq!(m.x, 1.0);
        assert_relative_eq!(m.y, 2.0);
    }
}
