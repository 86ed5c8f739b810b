//! YAML preset files holding a reusable answer set

use super::RawAnswers;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Read a preset file from disk
pub fn load_preset(path: &Path) -> Result<RawAnswers> {
    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Preset {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_preset(&content).map_err(|e| ScaffoldError::Preset {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse preset YAML; an empty document is an empty answer set
pub fn parse_preset(content: &str) -> Result<RawAnswers, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(RawAnswers::default());
    }
    serde_yaml::from_str(content)
}
