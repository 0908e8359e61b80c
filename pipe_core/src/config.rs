//! # Configuration
//!
//! TOML-backed settings: the default environment new pipes are built in
//! (fluids, length, gravity) and where the material registry snapshot lives.
//!
//! Every key is optional; missing keys take the built-in defaults.
//!
//! ```toml
//! registry_path = "materials.json"
//!
//! [pipe]
//! length = 12.0
//! gravity = 9.81
//!
//! [pipe.internal_fluid]
//! name = "crude oil"
//! density = 870.0
//!
//! [pipe.external_fluid]
//! name = "sea water"
//! density = 1025.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{PipeError, PipeResult};
use crate::materials::MaterialRegistry;
use crate::pipe::Fluid;

/// Standard gravitational acceleration used by new pipes (m/s²)
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Default pipe length used for buckling (m)
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Environment a new [`PipeModel`](crate::pipe::PipeModel) starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeDefaults {
    /// Length between restraints (m)
    pub length: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Bore contents
    pub internal_fluid: Fluid,
    /// Surrounding medium
    pub external_fluid: Fluid,
}

impl Default for PipeDefaults {
    fn default() -> Self {
        PipeDefaults {
            length: DEFAULT_LENGTH,
            gravity: DEFAULT_GRAVITY,
            internal_fluid: Fluid::new("water", 1000.0),
            external_fluid: Fluid::new("sea water", 1025.0),
        }
    }
}

impl PipeDefaults {
    /// Validate the defaults before any pipe is built from them.
    pub fn validate(&self) -> PipeResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(PipeError::config(format!("pipe.length must be positive, got {}", self.length)));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(PipeError::config(format!("pipe.gravity must be positive, got {}", self.gravity)));
        }
        for (key, fluid) in [("internal_fluid", &self.internal_fluid), ("external_fluid", &self.external_fluid)] {
            if !fluid.density.is_finite() || fluid.density < 0.0 {
                return Err(PipeError::config(format!(
                    "pipe.{}.density must be zero or positive, got {}",
                    key, fluid.density
                )));
            }
        }
        Ok(())
    }
}

/// Top-level toolbox configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Registry snapshot to open instead of the built-in materials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,

    /// Defaults for new pipes
    pub pipe: PipeDefaults,
}

impl ToolboxConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> PipeResult<Self> {
        let config: ToolboxConfig =
            toml::from_str(contents).map_err(|e| PipeError::config(e.to_string()))?;
        config.pipe.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PipeResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PipeError::file_error("read config", path.display().to_string(), e.to_string()))?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "loaded toolbox configuration");
        Ok(config)
    }

    /// Write configuration to a TOML file
    pub fn save(&self, path: &Path) -> PipeResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| PipeError::config(e.to_string()))?;
        fs::write(path, contents)
            .map_err(|e| PipeError::file_error("write config", path.display().to_string(), e.to_string()))
    }

    /// Open the configured registry snapshot, or the built-in registry when
    /// no path is configured.
    pub fn open_registry(&self) -> PipeResult<MaterialRegistry> {
        match &self.registry_path {
            Some(path) => MaterialRegistry::from_file(path),
            None => Ok(MaterialRegistry::new()),
        }
    }
}
