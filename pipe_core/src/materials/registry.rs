//! Material registry with "current selection" semantics.
//!
//! A [`MaterialRegistry`] maps case-sensitive names to [`MaterialRecord`]s and
//! remembers which one is currently selected. Accessors such as
//! [`MaterialRegistry::yield_stress`] read from the selected record and fail
//! with [`PipeError::Uninitialized`] when nothing has been selected, so a
//! failed selection can never masquerade as a zero-strength material.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::{PipeError, PipeResult};
use crate::file_io::{load_snapshot, save_snapshot, RegistrySnapshot};
use crate::materials::{builtin_materials, MaterialRecord, DEFAULT_MATERIAL};

/// Named material records plus the current selection.
///
/// ## Example
///
/// ```rust
/// use pipe_core::materials::MaterialRegistry;
///
/// let mut registry = MaterialRegistry::new();
/// assert_eq!(registry.name()?, "default");
///
/// // Unknown names leave the selection untouched
/// assert!(registry.select("unobtainium").is_err());
/// assert_eq!(registry.name()?, "default");
/// # Ok::<(), pipe_core::errors::PipeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRegistry {
    selected: Option<String>,
    materials: BTreeMap<String, MaterialRecord>,
}

impl MaterialRegistry {
    /// Create a registry seeded with the built-in materials, with
    /// `"default"` selected.
    pub fn new() -> Self {
        let materials = builtin_materials()
            .iter()
            .map(|(name, record)| (name.to_string(), record.clone()))
            .collect();
        MaterialRegistry {
            selected: Some(DEFAULT_MATERIAL.to_string()),
            materials,
        }
    }

    /// Create a registry with no records and no selection.
    pub fn empty() -> Self {
        MaterialRegistry {
            selected: None,
            materials: BTreeMap::new(),
        }
    }

    /// Create a registry from a snapshot file written by [`MaterialRegistry::save`].
    pub fn from_file(path: &Path) -> PipeResult<Self> {
        let mut registry = MaterialRegistry::empty();
        registry.load(path)?;
        Ok(registry)
    }

    // ------------------------------------------------------------------
    // Lookup and selection
    // ------------------------------------------------------------------

    /// Find a record by exact (case-sensitive) name.
    pub fn lookup(&self, name: &str) -> PipeResult<&MaterialRecord> {
        self.materials.get(name).ok_or_else(|| PipeError::not_found(name))
    }

    /// Make `name` the current material.
    ///
    /// On `NotFound` the previous selection stays in place.
    pub fn select(&mut self, name: &str) -> PipeResult<()> {
        if !self.materials.contains_key(name) {
            warn!(material = name, "material not in registry; selection unchanged");
            return Err(PipeError::not_found(name));
        }
        debug!(material = name, "selected material");
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// Insert or overwrite a record. The selection is not changed.
    ///
    /// Fails with `InvalidMaterial` if the record breaks its invariants
    /// (possible for records deserialized outside [`MaterialRecord::new`]).
    pub fn add(&mut self, name: impl Into<String>, record: MaterialRecord) -> PipeResult<()> {
        record.validate()?;
        let name = name.into();
        debug!(material = %name, "added material");
        self.materials.insert(name, record);
        Ok(())
    }

    /// [`add`](Self::add) followed by [`select`](Self::select).
    pub fn add_and_select(&mut self, name: impl Into<String>, record: MaterialRecord) -> PipeResult<()> {
        let name = name.into();
        self.add(name.clone(), record)?;
        self.select(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.materials.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MaterialRecord)> {
        self.materials.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    // ------------------------------------------------------------------
    // Selected-record accessors
    // ------------------------------------------------------------------

    /// The currently selected record.
    pub fn selected(&self) -> PipeResult<&MaterialRecord> {
        self.selected_for("selected")
    }

    /// Name of the currently selected material
    pub fn name(&self) -> PipeResult<&str> {
        self.selected
            .as_deref()
            .ok_or_else(|| PipeError::uninitialized("name"))
    }

    /// Yield stress of the selected material (Pa)
    pub fn yield_stress(&self) -> PipeResult<f64> {
        Ok(self.selected_for("yield_stress")?.yield_stress())
    }

    /// Ultimate stress of the selected material (Pa)
    pub fn ultimate(&self) -> PipeResult<f64> {
        Ok(self.selected_for("ultimate")?.ultimate_stress())
    }

    /// Young's modulus of the selected material (Pa)
    pub fn youngs(&self) -> PipeResult<f64> {
        Ok(self.selected_for("youngs")?.youngs_modulus())
    }

    /// Poisson's ratio of the selected material
    pub fn poissons(&self) -> PipeResult<f64> {
        Ok(self.selected_for("poissons")?.poissons_ratio())
    }

    /// Density of the selected material (kg/m³)
    pub fn density(&self) -> PipeResult<f64> {
        Ok(self.selected_for("density")?.density())
    }

    /// Thermal expansion coefficient of the selected material
    pub fn thermal_expansion(&self) -> PipeResult<f64> {
        Ok(self.selected_for("thermal_expansion")?.thermal_expansion())
    }

    fn selected_for(&self, accessor: &str) -> PipeResult<&MaterialRecord> {
        let name = self
            .selected
            .as_deref()
            .ok_or_else(|| PipeError::uninitialized(accessor))?;
        // select() and load() only ever store names present in `materials`
        self.lookup(name)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the full registry state (selection and every record) to `path`.
    pub fn save(&self, path: &Path) -> PipeResult<()> {
        let snapshot = RegistrySnapshot::new(self.selected.clone(), self.materials.clone());
        save_snapshot(&snapshot, path)
    }

    /// Replace the in-memory state with the snapshot at `path`.
    ///
    /// On error the registry is left as it was.
    pub fn load(&mut self, path: &Path) -> PipeResult<()> {
        let snapshot = load_snapshot(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected material registry snapshot");
        })?;
        self.selected = snapshot.selected;
        self.materials = snapshot.materials;
        info!(
            path = %path.display(),
            materials = self.materials.len(),
            selected = ?self.selected,
            "loaded material registry"
        );
        Ok(())
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        MaterialRegistry::new()
    }
}
