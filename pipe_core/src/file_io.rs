//! # File I/O Module
//!
//! Snapshot persistence for [`MaterialRegistry`](crate::materials::MaterialRegistry):
//! - **Atomic saves**: Write to a `.tmp` sibling, sync, rename over the target
//! - **Version validation**: Reject snapshots written by an incompatible schema
//!
//! ## File Format
//!
//! A snapshot is pretty-printed JSON:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "saved_at": "2026-01-01T00:00:00Z",
//!   "selected": "stainless steel",
//!   "materials": {
//!     "stainless steel": { "yield_stress": 290000000.0, "...": "..." }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{PipeError, PipeResult};
use crate::materials::MaterialRecord;

/// Current schema version for registry snapshots
pub const SCHEMA_VERSION: &str = "0.1.0";

/// On-disk form of a material registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Schema version (for compatibility checks)
    pub version: String,

    /// When the snapshot was written
    pub saved_at: DateTime<Utc>,

    /// Currently selected material, if any
    pub selected: Option<String>,

    /// All records, keyed by name
    pub materials: BTreeMap<String, MaterialRecord>,
}

impl RegistrySnapshot {
    /// Create a snapshot stamped with the current schema version and time
    pub fn new(selected: Option<String>, materials: BTreeMap<String, MaterialRecord>) -> Self {
        RegistrySnapshot {
            version: SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            selected,
            materials,
        }
    }

    /// Check every record invariant and that the selection names a record.
    pub fn validate(&self) -> PipeResult<()> {
        for (name, record) in &self.materials {
            record.validate().map_err(|e| match e {
                PipeError::InvalidMaterial { field, value, reason } => PipeError::InvalidMaterial {
                    field: format!("{}.{}", name, field),
                    value,
                    reason,
                },
                other => other,
            })?;
        }
        if let Some(selected) = &self.selected {
            if !self.materials.contains_key(selected) {
                return Err(PipeError::not_found(selected.clone()));
            }
        }
        Ok(())
    }
}

/// Save a snapshot to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize snapshot to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk
/// 4. Rename over `path`
pub fn save_snapshot(snapshot: &RegistrySnapshot, path: &Path) -> PipeResult<()> {
    let json = serde_json::to_string_pretty(snapshot)?;

    let tmp_path = tmp_path_for(path);

    let result = write_synced(&tmp_path, json.as_bytes()).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            PipeError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    info!(
        path = %path.display(),
        materials = snapshot.materials.len(),
        "saved material registry snapshot"
    );
    Ok(())
}

/// Load and validate a snapshot from a file.
///
/// # Returns
///
/// * `Ok(RegistrySnapshot)` - Parsed and validated snapshot
/// * `Err(PipeError::VersionMismatch)` - Schema is incompatible
/// * `Err(PipeError::SerializationError)` - Invalid JSON
/// * `Err(PipeError::InvalidMaterial)` / `Err(PipeError::NotFound)` - Invalid content
/// * `Err(PipeError::FileError)` - I/O error
pub fn load_snapshot(path: &Path) -> PipeResult<RegistrySnapshot> {
    let mut file = File::open(path).map_err(|e| {
        PipeError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        PipeError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let snapshot: RegistrySnapshot =
        serde_json::from_str(&contents).map_err(|e| PipeError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&snapshot.version)?;
    snapshot.validate()?;

    debug!(
        path = %path.display(),
        version = %snapshot.version,
        saved_at = %snapshot.saved_at,
        "read material registry snapshot"
    );
    Ok(snapshot)
}

/// Create `path`, write `bytes` and sync them to disk.
fn write_synced(path: &Path, bytes: &[u8]) -> PipeResult<()> {
    let mut file = File::create(path).map_err(|e| {
        PipeError::file_error("create temp file", path.display().to_string(), e.to_string())
    })?;

    file.write_all(bytes).map_err(|e| {
        PipeError::file_error("write temp file", path.display().to_string(), e.to_string())
    })?;

    file.sync_all().map_err(|e| {
        PipeError::file_error("sync temp file", path.display().to_string(), e.to_string())
    })
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Split a dotted version into numeric components; `None` if any component
/// is not a number.
fn parse_version(version: &str) -> Option<Vec<u32>> {
    version.split('.').map(|p| p.parse().ok()).collect()
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> PipeResult<()> {
    let mismatch = || PipeError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts = parse_version(file_version).ok_or_else(mismatch)?;
    let current_parts = parse_version(SCHEMA_VERSION).ok_or_else(mismatch)?;

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
