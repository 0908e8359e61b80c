//! # Circular Section Property Formulas
//!
//! Geometric properties of solid and hollow circular cross-sections.
//!
//! ## Notation
//!
//! - `D` = Outer diameter
//! - `Di` = Inner (bore) diameter
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about a diameter (bending)
//! - `J` = Polar second moment of area (torsion)
//! - `r` = Radius of gyration (√(I/A))
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - API RP 1111, Section 4.3 (pipe section properties)

use std::f64::consts::PI;

// =============================================================================
// SOLID CIRCLE
// =============================================================================

/// Area of a full circle from its diameter
///
/// ```text
///       ╭───╮
///      │  ·  │  D
///       ╰───╯
/// ```
///
/// # Formula
/// A = (π/4) × D²
///
/// # Example
/// ```rust
/// use pipe_core::equations::section::circle_area;
///
/// let area = circle_area(0.0254);
/// assert!((area - 5.067e-4).abs() < 1e-7);
/// ```
#[inline]
pub fn circle_area(diameter: f64) -> f64 {
    0.25 * PI * diameter.powi(2)
}

// =============================================================================
// HOLLOW CIRCLE (TUBE)
// =============================================================================

/// Wall (annulus) area of a tube
///
/// # Formula
/// A = (π/4) × (D² − Di²)
#[inline]
pub fn annulus_area(outer_diameter: f64, inner_diameter: f64) -> f64 {
    circle_area(outer_diameter) - circle_area(inner_diameter)
}

/// Second moment of area of a tube about a diameter
///
/// Governs bending stiffness and elastic bending strength.
///
/// # Formula
/// I = (π/64) × (D⁴ − Di⁴)
///
/// # Example
/// ```rust
/// use pipe_core::equations::section::tube_second_moment;
///
/// // Solid 100 mm bar: I = π × 0.1⁴ / 64
/// let i = tube_second_moment(0.1, 0.0);
/// assert!((i - 4.9087e-6).abs() < 1e-9);
/// ```
#[inline]
pub fn tube_second_moment(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI / 64.0 * (outer_diameter.powi(4) - inner_diameter.powi(4))
}

/// Polar second moment of area of a tube
///
/// # Formula
/// J = (π/32) × (D⁴ − Di⁴) = 2I
#[inline]
pub fn tube_polar_moment(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI / 32.0 * (outer_diameter.powi(4) - inner_diameter.powi(4))
}

/// Elastic section modulus S = I / c, with c the distance to the extreme fibre
///
/// Returns `None` when `extreme_fibre` is zero.
#[inline]
pub fn section_modulus(second_moment: f64, extreme_fibre: f64) -> Option<f64> {
    if extreme_fibre == 0.0 {
        None
    } else {
        Some(second_moment / extreme_fibre)
    }
}

/// Radius of gyration r = √(I/A)
///
/// Returns `None` when the area is zero.
#[inline]
pub fn radius_of_gyration(second_moment: f64, area: f64) -> Option<f64> {
    if area == 0.0 {
        None
    } else {
        Some((second_moment / area).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert!((circle_area(2.0) - PI).abs() < 1e-12);
        assert_eq!(circle_area(0.0), 0.0);
    }

    #[test]
    fn test_annulus_area_is_difference_of_circles() {
        let a = annulus_area(0.3, 0.25);
        assert!((a - (circle_area(0.3) - circle_area(0.25))).abs() < 1e-15);
        assert!(a > 0.0);
    }

    #[test]
    fn test_thin_wall_second_moment() {
        // Thin-wall approximation I ≈ π r³ t for r = 0.5 m, t = 1 mm
        let d = 1.0;
        let t = 0.001;
        let exact = tube_second_moment(d, d - 2.0 * t);
        let approx = PI * (0.5_f64 - t / 2.0).powi(3) * t;
        assert!((exact - approx).abs() / exact < 1e-3);
    }

    #[test]
    fn test_polar_is_twice_second_moment() {
        let i = tube_second_moment(0.2, 0.18);
        let j = tube_polar_moment(0.2, 0.18);
        assert!((j - 2.0 * i).abs() < 1e-18);
    }

    #[test]
    fn test_degenerate_denominators() {
        assert!(section_modulus(1.0, 0.0).is_none());
        assert!(radius_of_gyration(1.0, 0.0).is_none());
        assert!((radius_of_gyration(4.0, 1.0).unwrap() - 2.0).abs() < 1e-12);
    }
}
