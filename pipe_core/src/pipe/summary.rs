//! Serializable snapshot of a pipe's derived properties.

use serde::{Deserialize, Serialize};

use crate::errors::PipeResult;
use crate::pipe::{EndCondition, PipeModel};
use crate::units::{KilonewtonMeters, Kilonewtons, Megapascals, NewtonMeters, Newtons, Pascals};

/// Derived properties of a pipe at one safety factor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "stainless steel",
///   "outer_diameter_m": 0.0254,
///   "wall_thickness_m": 0.0021082,
///   "area_steel_m2": 0.000154264,
///   "safety_factor": 1.0,
///   "tension_limit_n": 44736.6,
///   "bending_limit_nm": 240.83,
///   "burst_pressure_pa": 48140000.0,
///   "...": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSummary {
    /// Selected material name
    pub material: String,

    pub outer_diameter_m: f64,
    pub wall_thickness_m: f64,
    pub diameter_inner_m: f64,
    pub diameter_external_m: f64,
    pub length_m: f64,

    pub area_steel_m2: f64,
    pub area_external_m2: f64,
    pub second_moment_m4: f64,

    pub mass_steel_kg_per_m: f64,
    pub mass_total_kg_per_m: f64,
    pub mass_buoyant_kg_per_m: f64,

    /// Factor the limits below are scaled by
    pub safety_factor: f64,
    pub tension_limit_n: f64,
    pub bending_limit_nm: f64,
    pub burst_pressure_pa: f64,

    /// Euler load with both ends pinned
    pub euler_load_pin_pin_n: f64,
}

impl PipeSummary {
    pub fn tension_limit_kn(&self) -> f64 {
        Kilonewtons::from(Newtons(self.tension_limit_n)).value()
    }

    pub fn bending_limit_knm(&self) -> f64 {
        KilonewtonMeters::from(NewtonMeters(self.bending_limit_nm)).value()
    }

    pub fn burst_pressure_mpa(&self) -> f64 {
        Megapascals::from(Pascals(self.burst_pressure_pa)).value()
    }
}

impl PipeModel {
    /// Evaluate every derived property at `safety_factor`.
    pub fn summary(&self, safety_factor: f64) -> PipeResult<PipeSummary> {
        Ok(PipeSummary {
            material: self.material_name()?.to_string(),
            outer_diameter_m: self.diameter_outer(),
            wall_thickness_m: self.wall_thickness(),
            diameter_inner_m: self.diameter_inner(),
            diameter_external_m: self.diameter_external(),
            length_m: self.length(),
            area_steel_m2: self.area_steel(),
            area_external_m2: self.area_external(),
            second_moment_m4: self.second_moment_of_area(),
            mass_steel_kg_per_m: self.mass_steel()?,
            mass_total_kg_per_m: self.mass_total()?,
            mass_buoyant_kg_per_m: self.mass_buoyant()?,
            safety_factor,
            tension_limit_n: self.tension_limit(safety_factor)?,
            bending_limit_nm: self.bending_limit(safety_factor)?,
            burst_pressure_pa: self.pressure_internal_limit(safety_factor)?,
            euler_load_pin_pin_n: self.euler_load(EndCondition::PinPin)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialRegistry;

    fn demo_pipe() -> PipeModel {
        PipeModel::new(0.0254, 0.0021082, "stainless steel", MaterialRegistry::new()).unwrap()
    }

    #[test]
    fn test_summary_matches_model() {
        let pipe = demo_pipe();
        let summary = pipe.summary(1.0).unwrap();

        assert_eq!(summary.material, "stainless steel");
        assert_eq!(summary.tension_limit_n, pipe.tension_limit(1.0).unwrap());
        assert_eq!(summary.bending_limit_nm, pipe.bending_limit(1.0).unwrap());
        assert_eq!(summary.burst_pressure_pa, pipe.pressure_internal_limit(1.0).unwrap());
        assert_eq!(summary.euler_load_pin_pin_n, pipe.euler_load("pin-pin").unwrap());
        assert_eq!(summary.mass_buoyant_kg_per_m, pipe.mass_buoyant().unwrap());
    }

    #[test]
    fn test_unit_conversions() {
        let summary = demo_pipe().summary(1.0).unwrap();
        assert!((summary.tension_limit_kn() - 44.7366).abs() < 1e-3);
        assert!((summary.bending_limit_knm() - 0.240834).abs() < 1e-5);
        assert!((summary.burst_pressure_mpa() - 48.14).abs() < 1e-6);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = demo_pipe().summary(0.8).unwrap();
        let json = serde_json::to_string_pretty(&summary).unwrap();
        assert!(json.contains("\"material\": \"stainless steel\""));
        let parsed: PipeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
