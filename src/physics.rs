//! Thin-plate theory primitives
//!
//! Classical simply-supported rectangular plate eigenfrequencies, plus the
//! single empirical correction constant used to approximate clamped edges.
//! This is deliberately schematic: boundary conditions are absorbed into one
//! global multiplier rather than resolved per mode.

use std::f64::consts::PI;

/// Default multiplicative correction from simply-supported to clamped-edge
/// frequencies. One crude global knob, kept constant to avoid parameter
/// explosion.
pub const DEFAULT_CLAMP_CORRECTION: f64 = 1.25;

/// Modal angular frequency of a simply-supported rectangular plate:
///
/// ω_mn² = (D / m_areal) · ((mπ/a)² + (nπ/b)²)²
///
/// # Arguments
/// * `d` - Bending stiffness per unit width in N·m
/// * `m_areal` - Mass per unit area in kg/m²
/// * `a`, `b` - Plate edge lengths in m
/// * `m`, `n` - Half-wave counts in x and y (positive integers)
///
/// Undefined for non-positive `d` or `m_areal`; callers must guard.
pub fn modal_angular_frequency(d: f64, m_areal: f64, a: f64, b: f64, m: u32, n: u32) -> f64 {
    let kx = m as f64 * PI / a;
    let ky = n as f64 * PI / b;
    ((d / m_areal) * (kx * kx + ky * ky).powi(2)).sqrt()
}

/// Simply-supported mode shape evaluated at the plate center:
/// sin(mπ/2)·sin(nπ/2). Zero for any even half-wave count.
pub fn center_mode_shape(m: u32, n: u32) -> f64 {
    (m as f64 * PI * 0.5).sin() * (n as f64 * PI * 0.5).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fundamental_square_plate() {
        // Square plate: ω_11 = sqrt(D/m) * (2 (π/a)²)
        let (d, m_areal, a) = (1e-4, 0.05, 1.5e-3);
        let w = modal_angular_frequency(d, m_areal, a, a, 1, 1);
        let expected = (d / m_areal).sqrt() * 2.0 * (PI / a).powi(2);
        assert_relative_eq!(w, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_frequency_monotonic_in_mode_metric() {
        let (d, m_areal, a, b) = (1e-4, 0.05, 1.5e-3, 2.0e-3);
        let w11 = modal_angular_frequency(d, m_areal, a, b, 1, 1);
        let w21 = modal_angular_frequency(d, m_areal, a, b, 2, 1);
        let w22 = modal_angular_frequency(d, m_areal, a, b, 2, 2);
        let w33 = modal_angular_frequency(d, m_areal, a, b, 3, 3);
        assert!(w11 < w21);
        assert!(w21 < w22);
        assert!(w22 < w33);
    }

    #[test]
    fn test_center_shape_vanishes_for_even_modes() {
        assert!(center_mode_shape(2, 1).abs() < 1e-12);
        assert!(center_mode_shape(1, 2).abs() < 1e-12);
        assert!(center_mode_shape(2, 2).abs() < 1e-12);
        assert_relative_eq!(center_mode_shape(1, 1), 1.0, epsilon = 1e-12);
        assert_relative_eq!(center_mode_shape(3, 3), 1.0, epsilon = 1e-12);
        assert_relative_eq!(center_mode_shape(3, 1), -1.0, epsilon = 1e-12);
    }
}
