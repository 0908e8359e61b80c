//! # Euler Buckling
//!
//! Elastic critical load of a slender strut. The end-restraint factor `n`
//! multiplies the pin-ended load, so `n = 1/K²` in effective-length terms.

use std::f64::consts::PI;

/// Euler critical load
///
/// # Formula
/// P = n × π² × E × I / L²
///
/// # Example
/// ```rust
/// use pipe_core::equations::buckling::euler_critical_load;
///
/// let p = euler_critical_load(1.0, 200e9, 1e-6, 2.0);
/// assert!((p - std::f64::consts::PI.powi(2) * 50_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn euler_critical_load(restraint_factor: f64, youngs_modulus: f64, second_moment: f64, length: f64) -> f64 {
    restraint_factor * PI.powi(2) * youngs_modulus * second_moment / length.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scales_with_inverse_square_of_length() {
        let short = euler_critical_load(1.0, 200e9, 1e-6, 1.0);
        let long = euler_critical_load(1.0, 200e9, 1e-6, 2.0);
        assert!((short / long - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_restraint_factor_is_multiplicative() {
        let pinned = euler_critical_load(1.0, 200e9, 1e-6, 3.0);
        let fixed = euler_critical_load(4.0, 200e9, 1e-6, 3.0);
        assert!((fixed - 4.0 * pinned).abs() < 1e-6);
    }
}
