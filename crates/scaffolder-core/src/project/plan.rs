//! Pure computation of everything a run will create

use crate::config::ProjectConfig;
use crate::dependencies::resolve;
use crate::env::EnvironmentTemplate;
use crate::error::Result;
use crate::templates::{self, build_manifest, tooling::render_json, TemplateKind};
use std::path::{Path, PathBuf};

/// Directory skeleton created for every project
pub const SOURCE_DIRECTORIES: [&str; 7] = [
    "src",
    "src/config",
    "src/controllers",
    "src/middlewares/global",
    "src/models",
    "src/routes",
    "src/utils",
];

/// Extra directory for typed projects
pub const INTERFACES_DIRECTORY: &str = "src/interfaces";

pub const MANIFEST_FILE: &str = "package.json";
pub const ENV_FILE: &str = ".env";

/// One generated file: a path relative to the project root and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub path: PathBuf,
    pub contents: String,
}

impl FileArtifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Directories and files for one configuration, both in creation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub directories: Vec<PathBuf>,
    pub artifacts: Vec<FileArtifact>,
}

impl GenerationPlan {
    pub fn artifact(&self, path: impl AsRef<Path>) -> Option<&FileArtifact> {
        self.artifacts.iter().find(|a| a.path == path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.artifact(path).is_some()
    }
}

/// Directories for `config`, relative to the project root
pub fn directories(config: &ProjectConfig) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SOURCE_DIRECTORIES.iter().map(PathBuf::from).collect();
    if config.variant().is_typed() {
        dirs.push(PathBuf::from(INTERFACES_DIRECTORY));
    }
    dirs
}

/// Compute the full plan without side effects.
///
/// Artifact order: manifest, environment, then every enabled
/// [`TemplateKind`] in [`TemplateKind::ALL`] order.
pub fn plan(config: &ProjectConfig) -> Result<GenerationPlan> {
    let dependencies = resolve(config);
    let manifest = build_manifest(config, &dependencies);

    let mut artifacts = vec![
        FileArtifact::new(MANIFEST_FILE, render_json(&manifest)?),
        FileArtifact::new(ENV_FILE, EnvironmentTemplate::for_config(config).render()),
    ];

    for kind in TemplateKind::ALL {
        if kind.is_enabled(config) {
            artifacts.push(FileArtifact::new(
                kind.relative_path(config.variant()),
                templates::render(kind, config)?,
            ));
        }
    }

    Ok(GenerationPlan {
        directories: directories(config),
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Database, Variant};

    fn paths(plan: &GenerationPlan) -> Vec<String> {
        plan.artifacts
            .iter()
            .map(|a| a.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_minimal_plan() {
        let config = ProjectConfig::new("demo", Variant::Untyped, Database::None, false).unwrap();
        let plan = plan(&config).unwrap();
        assert_eq!(
            paths(&plan),
            [
                "package.json",
                ".env",
                ".eslintrc.json",
                "src/middlewares/global/validateBody.js",
                "src/middlewares/global/notFound.js",
                "src/middlewares/global/errorHandler.js",
                "src/app.js",
                "src/index.js",
            ]
        );
        assert_eq!(plan.directories.len(), SOURCE_DIRECTORIES.len());
    }

    #[test]
    fn test_full_plan_order() {
        let config =
            ProjectConfig::new("demo", Variant::Typed, Database::DocumentStore, true).unwrap();
        let plan = plan(&config).unwrap();
        assert_eq!(
            paths(&plan),
            [
                "package.json",
                ".env",
                ".eslintrc.json",
                "tsconfig.json",
                "src/config/db.ts",
                "src/config/cloudinary.ts",
                "src/middlewares/global/validateBody.ts",
                "src/middlewares/global/notFound.ts",
                "src/middlewares/global/errorHandler.ts",
                "src/app.ts",
                "src/index.ts",
                "src/interfaces/MessageResponse.ts",
                "src/interfaces/ErrorResponse.ts",
            ]
        );
        assert_eq!(plan.directories.last(), Some(&PathBuf::from(INTERFACES_DIRECTORY)));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let config =
            ProjectConfig::new("demo", Variant::Typed, Database::DocumentStore, false).unwrap();
        assert_eq!(plan(&config).unwrap(), plan(&config).unwrap());
    }

    #[test]
    fn test_every_artifact_sits_in_a_planned_directory() {
        let config = ProjectConfig::new("demo", Variant::Typed, Database::None, true).unwrap();
        let plan = plan(&config).unwrap();
        for artifact in &plan.artifacts {
            let parent = artifact.path.parent().unwrap();
            assert!(
                parent.as_os_str().is_empty() || plan.directories.iter().any(|d| d == parent),
                "{}",
                artifact.path.display()
            );
        }
    }
}
