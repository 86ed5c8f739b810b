//! Text shown after a run: next-step commands and the module resolution tip

use crate::config::Variant;
use std::path::Path;

/// Commands to get the generated project running
pub fn next_steps(root: &Path, current_dir: Option<&Path>) -> Vec<String> {
    let cd_target = match (root.parent(), root.file_name()) {
        (Some(parent), Some(name)) if Some(parent) == current_dir => {
            name.to_string_lossy().into_owned()
        }
        _ => root.display().to_string(),
    };

    vec![
        format!("cd {}", cd_target),
        "npm install".to_string(),
        "npm run dev".to_string(),
    ]
}

/// How imports between generated files resolve for a variant
pub fn module_tip(variant: Variant) -> &'static str {
    match variant {
        Variant::Typed => {
            "TypeScript compiles to CommonJS and resolves imports without file extensions."
        }
        Variant::Untyped => {
            "Native ES modules (\"type\": \"module\") need explicit '.js' extensions in imports."
        }
    }
}
