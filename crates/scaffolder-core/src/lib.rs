//! Scaffolder Core - project generator for Express API backends
//!
//! Given a validated [`ProjectConfig`] (name, typed/untyped variant, optional
//! MongoDB, optional Cloudinary), the library deterministically produces a
//! complete, internally consistent project: `package.json`, `.env`, lint and
//! type-check configuration, and source stubs.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure generation** - configuration model, dependency resolver,
//!   template registry, manifest builder, and the generation plan
//! - **Layer 2: Materialization** - applies a plan through a [`Storage`] backend
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use scaffolder_core::{materialize, Database, LocalStorage, ProjectConfig, Variant};
//! use std::path::Path;
//!
//! let config = ProjectConfig::new("demo", Variant::Typed, Database::DocumentStore, true)?;
//! let report = materialize(&config, Path::new("."), &LocalStorage)?;
//! println!("wrote {} files", report.artifacts.len());
//! # Ok::<(), scaffolder_core::ScaffoldError>(())
//! ```

pub mod config;
pub mod dependencies;
pub mod env;
pub mod error;
pub mod policy;
pub mod project;
pub mod runtime;
pub mod summary;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Database, ProjectConfig, RawAnswers, Variant};
pub use dependencies::{resolve, DependencySet};
pub use env::EnvironmentTemplate;
pub use error::ScaffoldError;
pub use policy::{BodyValidationPolicy, Verdict};
pub use project::{
    materialize, plan, preview, FileArtifact, GenerationPlan, GenerationReport, LocalStorage,
    MemoryStorage, Storage,
};
pub use templates::{build_manifest, render, Manifest, TemplateKind};

#[cfg(feature = "tui")]
pub use tui::run;
