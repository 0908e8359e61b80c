//! Reference Young's moduli for common engineering materials.
//!
//! Handy for sanity-checking user-defined registry entries or for quick
//! stiffness comparisons. Values in Pa, room temperature, typical not
//! design-grade.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static YOUNGS_MODULUS_REFERENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("rubber", 0.05e9),
        ("low-density polyethylene", 0.5e9),
        ("diatom frustules", 2e9),
        ("ptfe", 0.5e9),
        ("hdpe", 0.8e9),
        ("bacteriophage capsids", 2e9),
        ("polypropylene", 1.75e9),
        ("polyethylene terephthalate", 2.2e9),
        ("nylon", 3e9),
        ("polystyrene, solid", 3.25e9),
        ("polystyrene, foam", 0.005e9),
        ("medium-density fiberboard", 4e9),
        ("wood", 11e9),
        ("human cortical bone", 14e9),
        ("glass-reinforced polyester matrix", 17.2e9),
        ("aromatic peptide nanotubes", 24e9),
        ("high-strength concrete", 30e9),
        ("hemp fiber", 35e9),
        ("magnesium metal", 45e9),
        ("glass", 70e9),
        ("flax fiber", 58e9),
        ("aluminum", 69e9),
        ("mother-of-pearl", 70e9),
        ("aramid", 100e9),
        ("tooth enamel", 83e9),
        ("stinging nettle fiber", 87e9),
        ("bronze", 110e9),
        ("brass", 110e9),
        ("titanium", 110.3e9),
        ("titanium alloys", 112e9),
        ("copper", 117e9),
        ("carbon fiber reinforced plastic", 181e9),
        ("silicon single crystal", 160e9),
        ("wrought iron", 200e9),
        ("steel", 209e9),
        ("polycrystalline yttrium iron garnet", 193e9),
        ("single-crystal yttrium iron garnet", 200e9),
        ("cobalt-chrome", 240e9),
        ("aromatic peptide nanospheres", 250e9),
        ("beryllium", 287e9),
        ("molybdenum", 330e9),
        ("tungsten", 405e9),
        ("silicon carbide", 450e9),
        ("tungsten carbide", 550e9),
        ("osmium", 550e9),
        ("single-walled carbon nanotube", 1000e9),
        ("graphene", 1050e9),
        ("diamond", 1100e9),
        ("carbyne", 32100e9),
        ("pvc", 2.9e9),
    ]
    .into_iter()
    .collect()
});

/// Look up a reference Young's modulus (Pa). Case-insensitive.
pub fn youngs_modulus_reference(name: &str) -> Option<f64> {
    YOUNGS_MODULUS_REFERENCE.get(name.to_lowercase().as_str()).copied()
}

/// All names in the reference table, sorted
pub fn reference_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = YOUNGS_MODULUS_REFERENCE.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(youngs_modulus_reference("steel"), Some(209e9));
        assert_eq!(youngs_modulus_reference("PVC"), Some(2.9e9));
        assert_eq!(youngs_modulus_reference("Carbon Fiber Reinforced Plastic"), Some(181e9));
        assert_eq!(youngs_modulus_reference("kryptonite"), None);
    }

    #[test]
    fn test_names_sorted_and_complete() {
        let names = reference_names();
        assert_eq!(names.len(), 50);
        assert_eq!(names.first(), Some(&"aluminum"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
