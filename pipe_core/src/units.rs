//! # Unit Types
//!
//! Thin `f64` newtypes for reporting pipe limits in the engineering
//! multiples usually quoted on a data sheet.
//!
//! All stored pipe fields and derived quantities are plain SI (`m`, `Pa`,
//! `N`, `N·m`, `kg/m`); these wrappers only convert at the reporting edge.
//!
//! ## Example
//!
//! ```rust
//! use pipe_core::units::{Kilonewtons, Newtons};
//!
//! let limit: Kilonewtons = Newtons(43_500.0).into();
//! assert_eq!(limit.value(), 43.5);
//! ```

// ============================================================================
// Stress / Pressure Units
// ============================================================================

/// Stress or pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pascals(pub f64);

/// Stress or pressure in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 * 1e-6)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct KilonewtonMeters(pub f64);

impl From<NewtonMeters> for KilonewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KilonewtonMeters(nm.0 / 1000.0)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Megapascals, Kilonewtons, KilonewtonMeters);
