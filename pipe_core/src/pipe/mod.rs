//! # Pipe Model
//!
//! A pipe cross-section with coating, contents and surroundings, plus the
//! material registry it takes its material from. All derived quantities are
//! recomputed from the current fields on every call.
//!
//! ## Units
//!
//! SI throughout: lengths in m, areas in m², densities in kg/m³, masses per
//! unit length in kg/m, forces in N, moments in N·m, pressures in Pa.
//!
//! ## Example
//!
//! ```rust
//! use pipe_core::materials::MaterialRegistry;
//! use pipe_core::pipe::PipeModel;
//!
//! // 1" OD, 0.083" wall, stainless
//! let pipe = PipeModel::new(0.0254, 0.0021082, "stainless steel", MaterialRegistry::new())?;
//!
//! assert!((pipe.radius_outer() - 0.0127).abs() < 1e-12);
//! let tension = pipe.tension_limit(1.0)?;
//! assert!((tension - pipe.area_steel() * 290.0e6).abs() < 1e-6);
//!
//! let fixed = pipe.euler_load("fix-fix")?;
//! let pinned = pipe.euler_load("pin-pin")?;
//! assert!((fixed / pinned - 4.0).abs() < 1e-12);
//! # Ok::<(), pipe_core::errors::PipeError>(())
//! ```

pub mod end_condition;
pub mod summary;

pub use end_condition::EndCondition;
pub use summary::PipeSummary;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PipeDefaults;
use crate::equations::{buckling, section, strength};
use crate::errors::{PipeError, PipeResult};
use crate::materials::{MaterialRecord, MaterialRegistry};

/// A named fluid and its density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
    pub name: String,
    /// Density (kg/m³)
    pub density: f64,
}

impl Fluid {
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Fluid {
            name: name.into(),
            density,
        }
    }
}

/// External coating (concrete weight coat, FBE, insulation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coating {
    pub material: String,
    /// Radial thickness (m)
    pub thickness: f64,
    /// Density (kg/m³)
    pub density: f64,
}

impl Default for Coating {
    fn default() -> Self {
        Coating {
            material: "none".to_string(),
            thickness: 0.0,
            density: 0.0,
        }
    }
}

/// Pipe geometry, environment and material.
///
/// Invariant: `outer_diameter > 2 * wall_thickness >= 0`, both finite.
/// Setters reject values that would break it and leave the pipe unchanged.
#[derive(Debug, Clone)]
pub struct PipeModel {
    outer_diameter: f64,
    wall_thickness: f64,
    coating: Coating,
    internal_fluid: Fluid,
    external_fluid: Fluid,
    length: f64,
    gravity: f64,
    registry: MaterialRegistry,
}

impl PipeModel {
    /// Build a pipe with the default environment (water inside, sea water
    /// outside, 1 m long, g = 9.81 m/s²).
    ///
    /// # Errors
    ///
    /// * `InvalidGeometry` - dimensions are not a physical tube
    /// * `NotFound` - `material` is not in `registry`
    pub fn new(
        outer_diameter: f64,
        wall_thickness: f64,
        material: &str,
        registry: MaterialRegistry,
    ) -> PipeResult<Self> {
        Self::with_defaults(outer_diameter, wall_thickness, material, registry, &PipeDefaults::default())
    }

    /// Build a pipe in the environment described by `defaults`.
    pub fn with_defaults(
        outer_diameter: f64,
        wall_thickness: f64,
        material: &str,
        mut registry: MaterialRegistry,
        defaults: &PipeDefaults,
    ) -> PipeResult<Self> {
        validate_geometry(outer_diameter, wall_thickness)?;
        defaults.validate()?;
        registry.select(material)?;

        debug!(outer_diameter, wall_thickness, material, "created pipe");
        Ok(PipeModel {
            outer_diameter,
            wall_thickness,
            coating: Coating::default(),
            internal_fluid: defaults.internal_fluid.clone(),
            external_fluid: defaults.external_fluid.clone(),
            length: defaults.length,
            gravity: defaults.gravity,
            registry,
        })
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_outer_diameter(&mut self, outer_diameter: f64) -> PipeResult<()> {
        validate_geometry(outer_diameter, self.wall_thickness)
            .inspect_err(|e| warn!(error = %e, "rejected outer diameter"))?;
        self.outer_diameter = outer_diameter;
        Ok(())
    }

    pub fn set_wall_thickness(&mut self, wall_thickness: f64) -> PipeResult<()> {
        validate_geometry(self.outer_diameter, wall_thickness)
            .inspect_err(|e| warn!(error = %e, "rejected wall thickness"))?;
        self.wall_thickness = wall_thickness;
        Ok(())
    }

    /// Set the coating. Thickness in m, density in kg/m³.
    pub fn set_coating(&mut self, material: impl Into<String>, thickness: f64, density: f64) -> PipeResult<()> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(PipeError::invalid_geometry(
                "coating_thickness",
                thickness.to_string(),
                "Coating thickness must be zero or positive",
            ));
        }
        check_density("coating_density", density)?;
        self.coating = Coating {
            material: material.into(),
            thickness,
            density,
        };
        Ok(())
    }

    pub fn set_internal_fluid(&mut self, name: impl Into<String>, density: f64) -> PipeResult<()> {
        check_density("internal_fluid_density", density)?;
        self.internal_fluid = Fluid::new(name, density);
        Ok(())
    }

    pub fn set_external_fluid(&mut self, name: impl Into<String>, density: f64) -> PipeResult<()> {
        check_density("external_fluid_density", density)?;
        self.external_fluid = Fluid::new(name, density);
        Ok(())
    }

    /// Set the length between restraints used by [`euler_load`](Self::euler_load).
    pub fn set_length(&mut self, length: f64) -> PipeResult<()> {
        if !length.is_finite() || length <= 0.0 {
            return Err(PipeError::invalid_geometry("length", length.to_string(), "Length must be positive"));
        }
        self.length = length;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: f64) -> PipeResult<()> {
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(PipeError::invalid_input(
                "gravity",
                gravity.to_string(),
                "Gravitational acceleration must be positive",
            ));
        }
        self.gravity = gravity;
        Ok(())
    }

    /// Select another registry material. On `NotFound` the current material stays.
    pub fn set_material(&mut self, name: &str) -> PipeResult<()> {
        self.registry.select(name)
    }

    // ------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------

    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn coating(&self) -> &Coating {
        &self.coating
    }

    pub fn internal_fluid(&self) -> &Fluid {
        &self.internal_fluid
    }

    pub fn external_fluid(&self) -> &Fluid {
        &self.external_fluid
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Name of the pipe's material
    pub fn material_name(&self) -> PipeResult<&str> {
        self.registry.name()
    }

    /// The pipe's material record, looked up now
    pub fn material(&self) -> PipeResult<&MaterialRecord> {
        self.registry.selected()
    }

    pub fn registry(&self) -> &MaterialRegistry {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to add or load materials.
    /// Selecting through it changes the pipe's material.
    pub fn registry_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.registry
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    pub fn radius_inner(&self) -> f64 {
        0.5 * self.diameter_inner()
    }

    pub fn radius_outer(&self) -> f64 {
        0.5 * self.outer_diameter
    }

    /// Outer radius over the coating
    pub fn radius_external(&self) -> f64 {
        0.5 * self.diameter_external()
    }

    pub fn diameter_inner(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness
    }

    pub fn diameter_outer(&self) -> f64 {
        self.outer_diameter
    }

    pub fn diameter_external(&self) -> f64 {
        self.outer_diameter + 2.0 * self.coating.thickness
    }

    /// Bore area
    pub fn area_internal(&self) -> f64 {
        section::circle_area(self.diameter_inner())
    }

    /// Area enclosed by the pipe outer surface
    pub fn area_outer(&self) -> f64 {
        section::circle_area(self.diameter_outer())
    }

    /// Wall (steel) area
    pub fn area_steel(&self) -> f64 {
        section::annulus_area(self.diameter_outer(), self.diameter_inner())
    }

    /// Area enclosed by the coating outer surface
    pub fn area_external(&self) -> f64 {
        section::circle_area(self.diameter_external())
    }

    pub fn area_coatings(&self) -> f64 {
        self.area_external() - self.area_outer()
    }

    /// Bending second moment of area of the wall, (π/64)(D⁴ − Di⁴)
    pub fn second_moment_of_area(&self) -> f64 {
        section::tube_second_moment(self.diameter_outer(), self.diameter_inner())
    }

    /// Polar second moment of area of the wall, (π/32)(D⁴ − Di⁴)
    pub fn polar_moment_of_area(&self) -> f64 {
        section::tube_polar_moment(self.diameter_outer(), self.diameter_inner())
    }

    /// Elastic section modulus I / r_outer
    pub fn section_modulus(&self) -> PipeResult<f64> {
        section::section_modulus(self.second_moment_of_area(), self.radius_outer())
            .ok_or_else(|| PipeError::divide_by_zero("section_modulus"))
    }

    /// √(I / A_steel); `DivideByZero` for a zero-thickness wall
    pub fn radius_of_gyration(&self) -> PipeResult<f64> {
        section::radius_of_gyration(self.second_moment_of_area(), self.area_steel())
            .ok_or_else(|| PipeError::divide_by_zero("radius_of_gyration"))
    }

    // ------------------------------------------------------------------
    // Mass per unit length
    // ------------------------------------------------------------------

    /// Contents mass (kg/m)
    pub fn mass_fluids(&self) -> f64 {
        self.area_internal() * self.internal_fluid.density
    }

    /// Pipe wall mass (kg/m)
    pub fn mass_steel(&self) -> PipeResult<f64> {
        Ok(self.area_steel() * self.registry.density()?)
    }

    /// Coating mass (kg/m)
    pub fn mass_coatings(&self) -> f64 {
        self.area_coatings() * self.coating.density
    }

    /// Wall, coating and contents (kg/m)
    pub fn mass_total(&self) -> PipeResult<f64> {
        Ok(self.mass_fluids() + self.mass_steel()? + self.mass_coatings())
    }

    /// Total mass less the displaced external fluid (kg/m)
    pub fn mass_buoyant(&self) -> PipeResult<f64> {
        Ok(self.mass_total()? - self.area_external() * self.external_fluid.density)
    }

    /// Submerged weight, buoyant mass times gravity (N/m)
    pub fn weight_submerged(&self) -> PipeResult<f64> {
        Ok(self.mass_buoyant()? * self.gravity)
    }

    // ------------------------------------------------------------------
    // Strength limits
    // ------------------------------------------------------------------

    /// Axial tension at first yield (N), scaled by `safety_factor`
    pub fn tension_limit(&self, safety_factor: f64) -> PipeResult<f64> {
        let limit = strength::tension_limit(safety_factor, self.area_steel(), self.registry.yield_stress()?);
        debug!(safety_factor, limit, "tension limit");
        Ok(limit)
    }

    /// Bending moment at first yield (N·m), scaled by `safety_factor`
    pub fn bending_limit(&self, safety_factor: f64) -> PipeResult<f64> {
        let limit = strength::bending_limit(
            safety_factor,
            self.second_moment_of_area(),
            self.registry.yield_stress()?,
            self.radius_outer(),
        );
        debug!(safety_factor, limit, "bending limit");
        Ok(limit)
    }

    /// Internal pressure at first yield (Pa, Barlow), scaled by `safety_factor`
    pub fn pressure_internal_limit(&self, safety_factor: f64) -> PipeResult<f64> {
        let limit = strength::barlow_pressure(
            safety_factor,
            self.wall_thickness,
            self.registry.yield_stress()?,
            self.outer_diameter,
        );
        debug!(safety_factor, limit, "internal pressure limit");
        Ok(limit)
    }

    // ------------------------------------------------------------------
    // Buckling
    // ------------------------------------------------------------------

    /// Euler buckling load over the pipe length (N).
    ///
    /// Accepts an [`EndCondition`] or a tag such as `"fix-fix"`; unknown
    /// tags are treated as pin-pin.
    pub fn euler_load(&self, end_condition: impl Into<EndCondition>) -> PipeResult<f64> {
        let end_condition = end_condition.into();
        let load = buckling::euler_critical_load(
            end_condition.factor(),
            self.registry.youngs()?,
            self.second_moment_of_area(),
            self.length,
        );
        debug!(end_condition = %end_condition, length = self.length, load, "euler load");
        Ok(load)
    }
}

/// Check `outer_diameter > 2 * wall_thickness >= 0` with finite values.
fn validate_geometry(outer_diameter: f64, wall_thickness: f64) -> PipeResult<()> {
    if !outer_diameter.is_finite() || outer_diameter <= 0.0 {
        return Err(PipeError::invalid_geometry(
            "outer_diameter",
            outer_diameter.to_string(),
            "Outer diameter must be positive",
        ));
    }
    if !wall_thickness.is_finite() || wall_thickness < 0.0 {
        return Err(PipeError::invalid_geometry(
            "wall_thickness",
            wall_thickness.to_string(),
            "Wall thickness cannot be negative",
        ));
    }
    if outer_diameter <= 2.0 * wall_thickness {
        return Err(PipeError::invalid_geometry(
            "wall_thickness",
            wall_thickness.to_string(),
            format!("Wall thickness must be less than half the outer diameter ({})", outer_diameter),
        ));
    }
    Ok(())
}

fn check_density(field: &str, density: f64) -> PipeResult<()> {
    if !density.is_finite() || density < 0.0 {
        return Err(PipeError::invalid_input(field, density.to_string(), "Density must be zero or positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const OD: f64 = 0.0254;
    const WT: f64 = 0.0021082;

    fn stainless_pipe() -> PipeModel {
        PipeModel::new(OD, WT, "stainless steel", MaterialRegistry::new()).unwrap()
    }

    fn expected_area_steel() -> f64 {
        PI / 4.0 * (OD.powi(2) - (OD - 2.0 * WT).powi(2))
    }

    #[test]
    fn test_radii_and_diameters() {
        let pipe = stainless_pipe();
        assert!((pipe.radius_outer() - 0.0127).abs() < 1e-12);
        assert!((pipe.diameter_inner() - 0.0211836).abs() < 1e-12);
        assert!((pipe.radius_inner() - 0.0105918).abs() < 1e-12);
        assert_eq!(pipe.diameter_outer(), OD);
        // No coating: external == outer
        assert_eq!(pipe.diameter_external(), OD);
        assert_eq!(pipe.radius_external(), pipe.radius_outer());
    }

    #[test]
    fn test_areas() {
        let pipe = stainless_pipe();
        assert!((pipe.area_steel() - expected_area_steel()).abs() < 1e-15);
        assert!((pipe.area_steel() - (pipe.area_outer() - pipe.area_internal())).abs() < 1e-18);
        assert!(pipe.area_steel() > 0.0);
        assert_eq!(pipe.area_coatings(), 0.0);
    }

    #[test]
    fn test_area_steel_positive_across_valid_sizes() {
        for od in [0.01, 0.1, 0.5, 1.2] {
            for fraction in [0.01, 0.1, 0.3, 0.49] {
                let pipe = PipeModel::new(od, od * fraction, "default", MaterialRegistry::new()).unwrap();
                assert!(pipe.area_steel() > 0.0, "od={} t={}", od, od * fraction);
            }
        }
    }

    #[test]
    fn test_tension_limit_scenario() {
        let pipe = stainless_pipe();
        let tension = pipe.tension_limit(1.0).unwrap();
        assert!((tension - expected_area_steel() * 290.0e6).abs() < 1e-6);
        // ≈ 44.7 kN for a 1" x 0.083" stainless tube
        assert!((tension - 44_736.6).abs() < 1.0);
    }

    #[test]
    fn test_safety_factor_scales_limits() {
        let pipe = stainless_pipe();
        let sf = 0.6;
        assert!((pipe.tension_limit(sf).unwrap() - sf * pipe.tension_limit(1.0).unwrap()).abs() < 1e-6);
        assert!((pipe.bending_limit(sf).unwrap() - sf * pipe.bending_limit(1.0).unwrap()).abs() < 1e-9);
        assert!(
            (pipe.pressure_internal_limit(sf).unwrap() - sf * pipe.pressure_internal_limit(1.0).unwrap()).abs()
                < 1e-3
        );
    }

    #[test]
    fn test_bending_and_pressure_limits() {
        let pipe = stainless_pipe();
        let i = PI / 64.0 * (OD.powi(4) - (OD - 2.0 * WT).powi(4));
        assert!((pipe.second_moment_of_area() - i).abs() < 1e-20);
        assert!((pipe.bending_limit(1.0).unwrap() - i * 290.0e6 / 0.0127).abs() < 1e-6);

        let burst = 2.0 * WT * 290.0e6 / OD;
        assert!((pipe.pressure_internal_limit(1.0).unwrap() - burst).abs() < 1e-3);
        assert!((pipe.section_modulus().unwrap() - i / 0.0127).abs() < 1e-18);
    }

    #[test]
    fn test_radius_of_gyration() {
        let pipe = stainless_pipe();
        let expected = (pipe.second_moment_of_area() / pipe.area_steel()).sqrt();
        assert!((pipe.radius_of_gyration().unwrap() - expected).abs() < 1e-15);
        // Thin tube: r ≈ mean radius / √2
        let thin = PipeModel::new(1.0, 0.001, "default", MaterialRegistry::new()).unwrap();
        assert!((thin.radius_of_gyration().unwrap() - 0.4995 / 2f64.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_zero_wall_is_divide_by_zero() {
        let pipe = PipeModel::new(0.1, 0.0, "default", MaterialRegistry::new()).unwrap();
        assert_eq!(pipe.area_steel(), 0.0);
        assert_eq!(
            pipe.radius_of_gyration().unwrap_err(),
            PipeError::divide_by_zero("radius_of_gyration")
        );
    }

    #[test]
    fn test_invalid_geometry() {
        let registry = MaterialRegistry::new();
        for (od, t) in [(-1.0, -1.0), (0.0, 0.0), (0.1, -0.01), (0.1, 0.05), (0.1, 0.06), (f64::NAN, 0.01)] {
            let err = PipeModel::new(od, t, "default", registry.clone()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_GEOMETRY", "od={} t={}", od, t);
        }
    }

    #[test]
    fn test_unknown_material_at_construction() {
        let err = PipeModel::new(OD, WT, "unobtainium", MaterialRegistry::new()).unwrap_err();
        assert_eq!(err, PipeError::not_found("unobtainium"));
    }

    #[test]
    fn test_rejected_setters_leave_state_unchanged() {
        let mut pipe = stainless_pipe();
        assert!(pipe.set_wall_thickness(0.02).is_err());
        assert!(pipe.set_outer_diameter(0.004).is_err());
        assert!(pipe.set_length(0.0).is_err());
        assert!(pipe.set_gravity(f64::NAN).is_err());
        assert!(pipe.set_coating("concrete", -0.01, 2400.0).is_err());
        assert!(pipe.set_internal_fluid("oil", -870.0).is_err());
        assert_eq!(pipe.wall_thickness(), WT);
        assert_eq!(pipe.outer_diameter(), OD);
        assert_eq!(pipe.length(), 1.0);
        assert_eq!(pipe.gravity(), 9.81);
        assert_eq!(pipe.coating(), &Coating::default());
        assert_eq!(pipe.internal_fluid(), &Fluid::new("water", 1000.0));
    }

    #[test]
    fn test_setters_recompute_on_next_call() {
        let mut pipe = stainless_pipe();
        let before = pipe.area_steel();
        pipe.set_outer_diameter(0.0508).unwrap();
        pipe.set_wall_thickness(0.004).unwrap();
        assert!(pipe.area_steel() > before);
        assert!((pipe.radius_outer() - 0.0254).abs() < 1e-12);
    }

    #[test]
    fn test_set_material_failure_keeps_material() {
        let mut pipe = stainless_pipe();
        assert!(pipe.set_material("nonexistent material").is_err());
        assert_eq!(pipe.material_name().unwrap(), "stainless steel");
        assert_eq!(pipe.material().unwrap().yield_stress(), 290.0e6);

        pipe.set_material("steel x52").unwrap();
        assert!((pipe.tension_limit(1.0).unwrap() - pipe.area_steel() * 358.5e6).abs() < 1e-6);
    }

    #[test]
    fn test_material_read_at_time_of_use() {
        let mut pipe = stainless_pipe();
        let record = MaterialRecord::new(500.0e6, 600.0e6, 193e9, 0.3, 8030.0, 1.2e-6).unwrap();
        pipe.registry_mut().add("stainless steel", record).unwrap();
        assert!((pipe.tension_limit(1.0).unwrap() - pipe.area_steel() * 500.0e6).abs() < 1e-6);
    }

    #[test]
    fn test_masses() {
        let mut pipe = stainless_pipe();
        pipe.set_coating("polypropylene", 0.003, 900.0).unwrap();

        let fluids = pipe.area_internal() * 1000.0;
        let steel = pipe.area_steel() * 8030.0;
        let coatings = pipe.area_coatings() * 900.0;
        assert!((pipe.mass_fluids() - fluids).abs() < 1e-12);
        assert!((pipe.mass_steel().unwrap() - steel).abs() < 1e-12);
        assert!((pipe.mass_coatings() - coatings).abs() < 1e-12);

        let total = fluids + steel + coatings;
        assert!((pipe.mass_total().unwrap() - total).abs() < 1e-12);

        let external = PI / 4.0 * (OD + 0.006).powi(2);
        assert!((pipe.area_external() - external).abs() < 1e-15);
        let buoyant = total - external * 1025.0;
        assert!((pipe.mass_buoyant().unwrap() - buoyant).abs() < 1e-12);
        assert!((pipe.weight_submerged().unwrap() - buoyant * 9.81).abs() < 1e-10);
    }

    #[test]
    fn test_fluids() {
        let mut pipe = stainless_pipe();
        pipe.set_internal_fluid("gas", 0.0).unwrap();
        pipe.set_external_fluid("air", 1.2).unwrap();
        assert_eq!(pipe.mass_fluids(), 0.0);
        assert_eq!(pipe.external_fluid().name, "air");
        let expected = pipe.mass_steel().unwrap() - pipe.area_external() * 1.2;
        assert!((pipe.mass_buoyant().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_euler_load() {
        let mut pipe = stainless_pipe();
        pipe.set_length(2.0).unwrap();
        let pin_pin = pipe.euler_load("pin-pin").unwrap();
        let expected = PI.powi(2) * 193e9 * pipe.second_moment_of_area() / 4.0;
        assert!((pin_pin - expected).abs() < 1e-6);

        assert!((pipe.euler_load("fix-fix").unwrap() - 4.0 * pin_pin).abs() < 1e-6);
        assert!((pipe.euler_load("pin-fix").unwrap() - 2.045 * pin_pin).abs() < 1e-6);
        assert!((pipe.euler_load("free-fix").unwrap() - 0.25 * pin_pin).abs() < 1e-6);
        assert_eq!(pipe.euler_load(EndCondition::PinPin).unwrap(), pin_pin);
    }

    #[test]
    fn test_euler_load_unknown_tag_matches_pin_pin() {
        let pipe = stainless_pipe();
        assert_eq!(pipe.euler_load("fixed").unwrap(), pipe.euler_load("pin-pin").unwrap());
        assert_eq!(pipe.euler_load("clamped").unwrap(), pipe.euler_load("pin-pin").unwrap());
    }

    #[test]
    fn test_uninitialized_material() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unselected.json");
        MaterialRegistry::empty().save(&path).unwrap();

        let mut pipe = stainless_pipe();
        pipe.registry_mut().load(&path).unwrap();
        assert_eq!(pipe.tension_limit(1.0).unwrap_err().error_code(), "UNINITIALIZED");
        assert_eq!(pipe.mass_steel().unwrap_err().error_code(), "UNINITIALIZED");
        assert_eq!(pipe.euler_load("pin-pin").unwrap_err().error_code(), "UNINITIALIZED");
        // Geometry does not depend on the material
        assert!(pipe.area_steel() > 0.0);
    }

    #[test]
    fn test_with_defaults() {
        let defaults = PipeDefaults {
            length: 12.0,
            gravity: 9.80665,
            internal_fluid: Fluid::new("crude oil", 870.0),
            ..PipeDefaults::default()
        };
        let pipe = PipeModel::with_defaults(0.2731, 0.0127, "steel x52", MaterialRegistry::new(), &defaults).unwrap();
        assert_eq!(pipe.length(), 12.0);
        assert_eq!(pipe.gravity(), 9.80665);
        assert_eq!(pipe.internal_fluid().name, "crude oil");
        assert_eq!(pipe.external_fluid().density, 1025.0);
    }
}
