//! # Engineering Equations
//!
//! Pure closed-form formulas used by the pipe model. Every function here
//! takes plain SI `f64` values and performs no validation; callers validate
//! geometry first.
//!
//! ## Modules
//!
//! - [`section`] - Circular and hollow circular section properties
//! - [`strength`] - Yield-based tension, bending and pressure limits
//! - [`buckling`] - Euler critical load

pub mod buckling;
pub mod section;
pub mod strength;
