//! Runtime detection
//!
//! This module provides:
//! - Node.js / npm detection for the post-generation summary
//! - Minimum version checks

pub mod check;
pub mod version;

pub use check::{advisories, check_node, check_npm, check_toolchain, RuntimeInfo};
