//! # pipe_core - Pipe Property Calculations
//!
//! `pipe_core` derives cross-section geometry, mass per unit length, yield
//! limits and Euler buckling loads of a pipe from its outer diameter, wall
//! thickness and a material taken from a [`MaterialRegistry`].
//!
//! ## Design Philosophy
//!
//! - **No hidden state**: each pipe owns its registry; there is no global material table
//! - **Recompute on demand**: derived quantities are pure functions of the current fields
//! - **Explicit failure**: unknown or unselected materials are errors, never zeros
//! - **JSON-First**: records, summaries, errors and snapshots implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use pipe_core::{MaterialRegistry, PipeModel};
//!
//! let pipe = PipeModel::new(0.0254, 0.0021082, "stainless steel", MaterialRegistry::new())?;
//! let summary = pipe.summary(1.0)?;
//!
//! println!("Tension limit {:.1} kN", summary.tension_limit_kn());
//! let json = serde_json::to_string_pretty(&summary).unwrap();
//! # Ok::<(), pipe_core::PipeError>(())
//! ```
//!
//! ## Modules
//!
//! - [`pipe`] - Pipe model, coatings, fluids, end conditions, summaries
//! - [`materials`] - Material records, built-in table, registry, reference moduli
//! - [`equations`] - Closed-form section, strength and buckling formulas
//! - [`units`] - SI newtype units and conversions
//! - [`config`] - TOML configuration
//! - [`file_io`] - Registry snapshot persistence
//! - [`errors`] - Structured error types

pub mod config;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod pipe;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::{PipeDefaults, ToolboxConfig};
pub use errors::{PipeError, PipeResult};
pub use materials::{MaterialRecord, MaterialRegistry};
pub use pipe::{Coating, EndCondition, Fluid, PipeModel, PipeSummary};
