//! Project configuration model
//!
//! Raw answers arrive from prompts, command-line flags, or a preset file as
//! loosely typed strings. [`ProjectConfig::normalize`] validates them once and
//! produces the immutable configuration every generation step reads.

pub mod preset;

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::fmt;

/// Project name offered by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "backend";

/// Typed (TypeScript) or untyped (JavaScript) source output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Typed,
    #[default]
    Untyped,
}

impl Variant {
    /// Parse a user-supplied spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ts" | "typescript" | "typed" => Some(Variant::Typed),
            "js" | "javascript" | "untyped" => Some(Variant::Untyped),
            _ => None,
        }
    }

    /// Source file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Variant::Typed => "ts",
            Variant::Untyped => "js",
        }
    }

    pub fn is_typed(self) -> bool {
        self == Variant::Typed
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Typed => "TypeScript",
            Variant::Untyped => "JavaScript",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional database integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Database {
    #[default]
    None,
    /// MongoDB through mongoose, with request sanitization
    DocumentStore,
}

impl Database {
    /// Parse a user-supplied spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Database::None),
            "mongo" | "mongodb" | "document" => Some(Database::DocumentStore),
            _ => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Database::None
    }

    /// Canonical spelling accepted by [`Database::parse`]
    pub fn key(self) -> &'static str {
        match self {
            Database::None => "none",
            Database::DocumentStore => "mongo",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Database::None => "None",
            Database::DocumentStore => "MongoDB",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unvalidated answer set, as produced by prompts, argv, or a preset file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawAnswers {
    pub name: Option<String>,
    pub variant: Option<String>,
    pub database: Option<String>,
    #[serde(alias = "cloudinary")]
    pub media_cloud: Option<bool>,
}

impl RawAnswers {
    /// Fill every unset field from `fallback`; set fields win
    pub fn or(self, fallback: RawAnswers) -> RawAnswers {
        RawAnswers {
            name: self.name.or(fallback.name),
            variant: self.variant.or(fallback.variant),
            database: self.database.or(fallback.database),
            media_cloud: self.media_cloud.or(fallback.media_cloud),
        }
    }

    /// Answers a user gets by accepting every prompt default
    pub fn defaults() -> RawAnswers {
        RawAnswers {
            name: Some(DEFAULT_PROJECT_NAME.to_string()),
            variant: Some("js".to_string()),
            database: Some("none".to_string()),
            media_cloud: Some(false),
        }
    }
}

/// Validated, immutable project configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    variant: Variant,
    database: Database,
    media_cloud: bool,
}

impl ProjectConfig {
    /// Build a configuration from already-typed choices, validating the name
    pub fn new(
        name: &str,
        variant: Variant,
        database: Database,
        media_cloud: bool,
    ) -> Result<Self> {
        Ok(Self {
            name: validate_name(name)?,
            variant,
            database,
            media_cloud,
        })
    }

    /// Validate raw answers, applying defaults for everything except the name
    pub fn normalize(raw: RawAnswers) -> Result<Self> {
        let name = raw
            .name
            .ok_or_else(|| ScaffoldError::InvalidConfig("project name is required".into()))?;

        let variant = match raw.variant.as_deref() {
            None => Variant::default(),
            Some(s) => Variant::parse(s).ok_or_else(|| {
                ScaffoldError::InvalidConfig(format!(
                    "unknown language '{}' (expected ts or js)",
                    s
                ))
            })?,
        };

        let database = match raw.database.as_deref() {
            None => Database::default(),
            Some(s) => Database::parse(s).ok_or_else(|| {
                ScaffoldError::InvalidConfig(format!(
                    "unknown database '{}' (expected none or mongo)",
                    s
                ))
            })?,
        };

        Self::new(&name, variant, database, raw.media_cloud.unwrap_or(false))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn media_cloud(&self) -> bool {
        self.media_cloud
    }

    /// Source file extension for this configuration
    pub fn extension(&self) -> &'static str {
        self.variant.extension()
    }
}

/// The name becomes a single directory under the invocation root
fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScaffoldError::InvalidConfig(
            "project name must not be empty".into(),
        ));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ScaffoldError::InvalidConfig(format!(
            "project name '{}' must be a single directory name",
            name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> RawAnswers {
        RawAnswers {
            name: Some(name.to_string()),
            ..RawAnswers::default()
        }
    }

    #[test]
    fn test_normalize_applies_defaults() {
        let config = ProjectConfig::normalize(named("demo")).unwrap();
        assert_eq!(config.name(), "demo");
        assert_eq!(config.variant(), Variant::Untyped);
        assert_eq!(config.database(), Database::None);
        assert!(!config.media_cloud());
    }

    #[test]
    fn test_normalize_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = ProjectConfig::normalize(named(name)).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidConfig(_)), "{:?}", name);
        }
    }

    #[test]
    fn test_normalize_rejects_missing_name() {
        let err = ProjectConfig::normalize(RawAnswers::default()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfig(_)));
    }

    #[test]
    fn test_normalize_rejects_path_like_names() {
        for name in [".", "..", "a/b", "a\\b"] {
            assert!(ProjectConfig::normalize(named(name)).is_err(), "{}", name);
        }
    }

    #[test]
    fn test_normalize_trims_name() {
        let config = ProjectConfig::normalize(named("  api  ")).unwrap();
        assert_eq!(config.name(), "api");
    }

    #[test]
    fn test_normalize_parses_all_choices() {
        let raw = RawAnswers {
            name: Some("demo".into()),
            variant: Some("TypeScript".into()),
            database: Some("mongo".into()),
            media_cloud: Some(true),
        };
        let config = ProjectConfig::normalize(raw).unwrap();
        assert_eq!(config.variant(), Variant::Typed);
        assert_eq!(config.database(), Database::DocumentStore);
        assert!(config.media_cloud());
        assert_eq!(config.extension(), "ts");
    }

    #[test]
    fn test_normalize_rejects_unknown_spellings() {
        let raw = RawAnswers {
            database: Some("postgres".into()),
            ..named("demo")
        };
        assert!(matches!(
            ProjectConfig::normalize(raw),
            Err(ScaffoldError::InvalidConfig(_))
        ));

        let raw = RawAnswers {
            variant: Some("python".into()),
            ..named("demo")
        };
        assert!(ProjectConfig::normalize(raw).is_err());
    }

    #[test]
    fn test_or_prefers_set_fields() {
        let flags = RawAnswers {
            variant: Some("ts".into()),
            ..RawAnswers::default()
        };
        let merged = flags.or(RawAnswers::defaults());
        assert_eq!(merged.variant.as_deref(), Some("ts"));
        assert_eq!(merged.name.as_deref(), Some(DEFAULT_PROJECT_NAME));
        assert_eq!(merged.media_cloud, Some(false));
    }
}
