//! # Yield-Based Strength Limits
//!
//! First-yield capacities of a pipe wall. Each limit is scaled by a
//! multiplicative safety (usage) factor; `1.0` gives the nominal yield value.

/// Axial tension at which the wall reaches yield
///
/// # Formula
/// T = sf × A × σy
#[inline]
pub fn tension_limit(safety_factor: f64, steel_area: f64, yield_stress: f64) -> f64 {
    safety_factor * steel_area * yield_stress
}

/// Bending moment at which the extreme fibre reaches yield
///
/// # Formula
/// M = sf × I × σy / c
#[inline]
pub fn bending_limit(safety_factor: f64, second_moment: f64, yield_stress: f64, extreme_fibre: f64) -> f64 {
    safety_factor * second_moment * yield_stress / extreme_fibre
}

/// Internal pressure at which the hoop stress reaches yield (Barlow)
///
/// # Formula
/// P = sf × 2 × t × σy / D
///
/// # Example
/// ```rust
/// use pipe_core::equations::strength::barlow_pressure;
///
/// let p = barlow_pressure(1.0, 0.01, 100.0e6, 0.5);
/// assert!((p - 4.0e6).abs() < 1e-6);
/// ```
#[inline]
pub fn barlow_pressure(safety_factor: f64, wall_thickness: f64, yield_stress: f64, outer_diameter: f64) -> f64 {
    safety_factor * 2.0 * wall_thickness * yield_stress / outer_diameter
}
