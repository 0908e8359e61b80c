//! # Materials Database
//!
//! Material property records, the built-in pipe material table and the
//! [`MaterialRegistry`] that pipes select their material from.
//!
//! ## Built-in Materials
//!
//! | Name              | Yield (MPa) | Ultimate (MPa) | E (GPa) | ρ (kg/m³) |
//! |-------------------|-------------|----------------|---------|-----------|
//! | `default`         | 358.5       | 394.3          | 205     | 7850      |
//! | `steel x52`       | 358.5       | 394.3          | 205     | 7850      |
//! | `steel`           | 358.5       | 394.3          | 205     | 7850      |
//! | `stainless steel` | 290.0       | 495.0          | 193     | 8030      |
//!
//! ## Example
//!
//! ```rust
//! use pipe_core::materials::{MaterialRecord, MaterialRegistry};
//!
//! let mut registry = MaterialRegistry::new();
//! registry.select("stainless steel")?;
//! assert_eq!(registry.yield_stress()?, 290.0e6);
//!
//! let duplex = MaterialRecord::new(450.0e6, 620.0e6, 200.0e9, 0.3, 7800.0, 1.3e-5)?;
//! registry.add_and_select("duplex", duplex)?;
//! assert_eq!(registry.name()?, "duplex");
//! # Ok::<(), pipe_core::errors::PipeError>(())
//! ```

pub mod reference;
pub mod registry;

pub use reference::{reference_names, youngs_modulus_reference};
pub use registry::MaterialRegistry;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{PipeError, PipeResult};

/// Name of the material every fresh registry starts with selected
pub const DEFAULT_MATERIAL: &str = "default";

/// Physical properties of a pipe material (SI units).
///
/// Records are immutable once built; to change a material, add a new record
/// under the same name.
///
/// ## JSON Example
///
/// ```json
/// {
///   "yield_stress": 290000000.0,
///   "ultimate_stress": 495000000.0,
///   "poissons_ratio": 0.3,
///   "youngs_modulus": 193000000000.0,
///   "density": 8030.0,
///   "thermal_expansion": 1.2e-6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Yield stress (Pa)
    yield_stress: f64,
    /// Ultimate tensile stress (Pa)
    ultimate_stress: f64,
    /// Poisson's ratio (-)
    poissons_ratio: f64,
    /// Young's modulus (Pa)
    youngs_modulus: f64,
    /// Density (kg/m³)
    density: f64,
    /// Coefficient of thermal expansion (-)
    thermal_expansion: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl MaterialRecord {
    /// Build a validated record.
    ///
    /// # Errors
    ///
    /// `InvalidMaterial` if any value is NaN or infinite, or if the density
    /// is not strictly positive.
    pub fn new(
        yield_stress: f64,
        ultimate_stress: f64,
        youngs_modulus: f64,
        poissons_ratio: f64,
        density: f64,
        thermal_expansion: f64,
    ) -> PipeResult<Self> {
        let record = MaterialRecord {
            yield_stress,
            ultimate_stress,
            poissons_ratio,
            youngs_modulus,
            density,
            thermal_expansion,
            notes: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Attach notes to the record
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the record invariants: every value finite, density > 0.
    ///
    /// Deserialized records bypass [`MaterialRecord::new`], so snapshot
    /// loading calls this explicitly.
    pub fn validate(&self) -> PipeResult<()> {
        let fields = [
            ("yield_stress", self.yield_stress),
            ("ultimate_stress", self.ultimate_stress),
            ("poissons_ratio", self.poissons_ratio),
            ("youngs_modulus", self.youngs_modulus),
            ("density", self.density),
            ("thermal_expansion", self.thermal_expansion),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PipeError::invalid_material(field, value.to_string(), "Value must be finite"));
            }
        }
        if self.density <= 0.0 {
            return Err(PipeError::invalid_material(
                "density",
                self.density.to_string(),
                "Density must be positive",
            ));
        }
        Ok(())
    }

    pub fn yield_stress(&self) -> f64 {
        self.yield_stress
    }

    pub fn ultimate_stress(&self) -> f64 {
        self.ultimate_stress
    }

    pub fn poissons_ratio(&self) -> f64 {
        self.poissons_ratio
    }

    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn thermal_expansion(&self) -> f64 {
        self.thermal_expansion
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Carbon steel API 5L X52, shared by `default`, `steel x52` and `steel`
const X52: MaterialRecord = MaterialRecord {
    yield_stress: 358.5e6,
    ultimate_stress: 394.3e6,
    poissons_ratio: 0.3,
    youngs_modulus: 205.0e9,
    density: 7850.0,
    thermal_expansion: 1.2e-6,
    notes: None,
};

const STAINLESS: MaterialRecord = MaterialRecord {
    yield_stress: 290.0e6,
    ultimate_stress: 495.0e6,
    poissons_ratio: 0.3,
    youngs_modulus: 193.0e9,
    density: 8030.0,
    thermal_expansion: 1.2e-6,
    notes: None,
};

static BUILTIN_MATERIALS: Lazy<Vec<(&'static str, MaterialRecord)>> = Lazy::new(|| {
    vec![
        (DEFAULT_MATERIAL, X52.with_notes("Default is Steel x52")),
        ("steel x52", X52),
        ("steel", X52),
        ("stainless steel", STAINLESS),
    ]
});

/// The built-in material table every [`MaterialRegistry::new`] is seeded with.
pub fn builtin_materials() -> &'static [(&'static str, MaterialRecord)] {
    &BUILTIN_MATERIALS
}
