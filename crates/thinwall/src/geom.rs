//! Scalar 2-D helpers shared by the tree builder and the property passes.
//!
//! - `GeomCfg`: centralizes the length epsilon for degenerate-edge checks.
//! - Polar angles are measured in degrees on [0, 360); the sweep sign of
//!   an edge around a pole is the sign of the polar-angle difference.
//! - Triangle areas come from Heron's formula with the radicand clamped
//!   at zero, since near-collinear triangles can drive it slightly
//!   negative and a NaN here would poison every downstream sectorial sum.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Edges no longer than this count as zero-length.
    pub eps_len: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_len: 1e-12 }
    }
}

/// Euclidean distance between two positions.
#[inline]
pub fn dist(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Angle between the x-axis and the radius vector of `p`, in degrees,
/// normalized to [0, 360).
///
/// The normalization keys off the 2-decimal rounding of the raw atan2
/// angle, so a value that would print as `-0.00` stays on the positive
/// branch instead of jumping to ~360.
pub fn polar_angle_deg(p: Vector2<f64>) -> f64 {
    let mut angle = p.y.atan2(p.x).to_degrees();
    if (angle * 100.0).round() < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Sign of the sectorial sweep from `u` to `v` around the origin:
/// +1 counterclockwise, -1 clockwise, 0 when the polar angles coincide.
#[inline]
pub fn turn_sign(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let d = polar_angle_deg(v) - polar_angle_deg(u);
    if d > 0.0 {
        1.0
    } else if d < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Area of the triangle (a, b, c) via Heron's formula, radicand clamped
/// at zero.
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = dist(a, b);
    let bc = dist(b, c);
    let ca = dist(c, a);
    let p = 0.5 * (ab + bc + ca);
    (p * (p - ab) * (p - bc) * (p - ca)).max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn polar_angle_quadrants() {
        assert!((polar_angle_deg(vector![1.0, 0.0]) - 0.0).abs() < 1e-12);
        assert!((polar_angle_deg(vector![0.0, 1.0]) - 90.0).abs() < 1e-12);
        assert!((polar_angle_deg(vector![-1.0, 0.0]) - 180.0).abs() < 1e-12);
        // Below the x-axis the angle lands on the [180, 360) branch.
        assert!((polar_angle_deg(vector![0.0, -1.0]) - 270.0).abs() < 1e-12);
        assert!((polar_angle_deg(vector![1.0, -1.0]) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn turn_sign_orientation() {
        let u = vector![1.0, 0.0];
        assert_eq!(turn_sign(u, vector![1.0, 1.0]), 1.0);
        assert_eq!(turn_sign(vector![1.0, 1.0], u), -1.0);
        // Same ray: no sweep.
        assert_eq!(turn_sign(u, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn heron_right_triangle() {
        let a = vector![0.0, 0.0];
        let b = vector![4.0, 0.0];
        let c = vector![0.0, 3.0];
        assert!((triangle_area(a, b, c) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn heron_collinear_clamps_to_zero() {
        // Near-collinear points can push the radicand below zero; the
        // clamp must keep the area finite and non-negative.
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 1.0e-9];
        let c = vector![2.0, 2.0e-9];
        let area = triangle_area(a, b, c);
        assert!(area.is_finite());
        assert!(area >= 0.0);
        assert!(area < 1e-8);
    }
}
