//! Template registry for generated project files
//!
//! This module provides:
//! - [`TemplateKind`], one variant per generated source or config file
//! - Gating: which kinds a configuration produces, and where they live
//! - [`render`], dispatching each kind to its template family
//! - The package manifest builder (`manifest`)
//!
//! Every template is a pure function of the configuration slice it reads.

pub mod connectors;
pub mod interfaces;
pub mod manifest;
pub mod middleware;
pub mod server;
pub mod tooling;

use crate::config::{ProjectConfig, Variant};
use crate::error::Result;

pub use manifest::{build_manifest, Manifest};

/// A generated file family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    LintConfig,
    TypeCheckConfig,
    DatabaseConnector,
    MediaCloudConnector,
    ValidateBody,
    NotFound,
    ErrorHandler,
    AppWiring,
    EntryPoint,
    MessageResponse,
    ErrorResponse,
}

impl TemplateKind {
    /// Every kind, in the order the materializer writes them
    pub const ALL: [TemplateKind; 11] = [
        TemplateKind::LintConfig,
        TemplateKind::TypeCheckConfig,
        TemplateKind::DatabaseConnector,
        TemplateKind::MediaCloudConnector,
        TemplateKind::ValidateBody,
        TemplateKind::NotFound,
        TemplateKind::ErrorHandler,
        TemplateKind::AppWiring,
        TemplateKind::EntryPoint,
        TemplateKind::MessageResponse,
        TemplateKind::ErrorResponse,
    ];

    /// Whether `config` produces this file at all
    pub fn is_enabled(self, config: &ProjectConfig) -> bool {
        match self {
            TemplateKind::TypeCheckConfig
            | TemplateKind::MessageResponse
            | TemplateKind::ErrorResponse => config.variant().is_typed(),
            TemplateKind::DatabaseConnector => config.database().is_enabled(),
            TemplateKind::MediaCloudConnector => config.media_cloud(),
            TemplateKind::LintConfig
            | TemplateKind::ValidateBody
            | TemplateKind::NotFound
            | TemplateKind::ErrorHandler
            | TemplateKind::AppWiring
            | TemplateKind::EntryPoint => true,
        }
    }

    /// Path relative to the project root, using `/` separators
    pub fn relative_path(self, variant: Variant) -> String {
        let ext = variant.extension();
        match self {
            TemplateKind::LintConfig => ".eslintrc.json".to_string(),
            TemplateKind::TypeCheckConfig => "tsconfig.json".to_string(),
            TemplateKind::DatabaseConnector => format!("src/config/db.{}", ext),
            TemplateKind::MediaCloudConnector => format!("src/config/cloudinary.{}", ext),
            TemplateKind::ValidateBody => format!("src/middlewares/global/validateBody.{}", ext),
            TemplateKind::NotFound => format!("src/middlewares/global/notFound.{}", ext),
            TemplateKind::ErrorHandler => format!("src/middlewares/global/errorHandler.{}", ext),
            TemplateKind::AppWiring => format!("src/app.{}", ext),
            TemplateKind::EntryPoint => format!("src/index.{}", ext),
            TemplateKind::MessageResponse => "src/interfaces/MessageResponse.ts".to_string(),
            TemplateKind::ErrorResponse => "src/interfaces/ErrorResponse.ts".to_string(),
        }
    }
}

/// Render the content of one file family for `config`
pub fn render(kind: TemplateKind, config: &ProjectConfig) -> Result<String> {
    let variant = config.variant();
    let content = match kind {
        TemplateKind::LintConfig => tooling::render_json(&tooling::lint_config(variant))?,
        TemplateKind::TypeCheckConfig => tooling::render_json(&tooling::type_check_config())?,
        TemplateKind::DatabaseConnector => connectors::database(variant),
        TemplateKind::MediaCloudConnector => connectors::media_cloud(),
        TemplateKind::ValidateBody => middleware::validate_body(variant),
        TemplateKind::NotFound => middleware::not_found(variant),
        TemplateKind::ErrorHandler => middleware::error_handler(variant),
        TemplateKind::AppWiring => server::app_wiring(variant, config.database()),
        TemplateKind::EntryPoint => server::entry_point(variant),
        TemplateKind::MessageResponse => interfaces::MESSAGE_RESPONSE.to_string(),
        TemplateKind::ErrorResponse => interfaces::ERROR_RESPONSE.to_string(),
    };
    Ok(content)
}

/// Import specifier for a generated module, given without extension.
///
/// Compiled TypeScript resolves extensionless imports; native ES modules
/// need the explicit `.js`.
pub(crate) fn module_specifier(variant: Variant, path: &str) -> String {
    match variant {
        Variant::Typed => path.to_string(),
        Variant::Untyped => format!("{}.js", path),
    }
}

/// Express types imported by typed handlers
pub(crate) const EXPRESS_TYPES_IMPORT: &str =
    "import { Request, Response, NextFunction } from 'express';\n\n";

/// Render a handler parameter list, annotated when typed
pub(crate) fn params(variant: Variant, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(name, ty)| match variant {
            Variant::Typed => format!("{}: {}", name, ty),
            Variant::Untyped => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
