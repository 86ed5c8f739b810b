//! Package manifest (`package.json`) types and builder

use crate::config::{ProjectConfig, Variant};
use crate::dependencies::DependencySet;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MANIFEST_VERSION: &str = "1.0.0";
pub const MANIFEST_DESCRIPTION: &str = "basic express api backend";
pub const MANIFEST_LICENSE: &str = "MIT";

/// Scripts for typed projects: run via ts-node, watch, compile, run compiled, type-check
const TYPED_SCRIPTS: [(&str, &str); 5] = [
    ("start", "ts-node src/index.ts"),
    ("dev", "nodemon src/index.ts"),
    ("build", "tsc"),
    ("start:dist", "node dist/src/index.js"),
    ("typecheck", "tsc --noEmit"),
];

const UNTYPED_SCRIPTS: [(&str, &str); 2] = [
    ("dev", "nodemon src/index.js"),
    ("start", "node src/index.js"),
];

/// The generated `package.json`, serialized in field order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Entry point path
    pub main: String,
    pub scripts: IndexMap<String, String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,

    /// `"module"` for untyped projects; typed output compiles to CommonJS
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
}

impl Manifest {
    /// Whether a script name is declared
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}

/// Script set for a variant; nothing else influences it
pub fn scripts_for(variant: Variant) -> IndexMap<String, String> {
    let scripts: &[(&str, &str)] = match variant {
        Variant::Typed => &TYPED_SCRIPTS,
        Variant::Untyped => &UNTYPED_SCRIPTS,
    };
    scripts
        .iter()
        .map(|(name, command)| (name.to_string(), command.to_string()))
        .collect()
}

/// Assemble the manifest from the configuration and its resolved dependencies
pub fn build_manifest(config: &ProjectConfig, dependencies: &DependencySet) -> Manifest {
    let variant = config.variant();
    Manifest {
        name: config.name().to_string(),
        version: MANIFEST_VERSION.to_string(),
        description: MANIFEST_DESCRIPTION.to_string(),
        main: format!("src/index.{}", variant.extension()),
        scripts: scripts_for(variant),
        keywords: Vec::new(),
        author: String::new(),
        license: MANIFEST_LICENSE.to_string(),
        dependencies: dependencies.runtime.clone(),
        dev_dependencies: dependencies.development.clone(),
        module_type: match variant {
            Variant::Untyped => Some("module".to_string()),
            Variant::Typed => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Database;
    use crate::dependencies::resolve;
    use crate::templates::tooling::render_json;

    fn manifest(variant: Variant, database: Database, media_cloud: bool) -> Manifest {
        let config = ProjectConfig::new("demo", variant, database, media_cloud).unwrap();
        build_manifest(&config, &resolve(&config))
    }

    #[test]
    fn test_untyped_manifest() {
        let m = manifest(Variant::Untyped, Database::None, false);
        assert_eq!(m.name, "demo");
        assert_eq!(m.version, "1.0.0");
        assert_eq!(m.main, "src/index.js");
        assert_eq!(m.module_type.as_deref(), Some("module"));
        let scripts: Vec<_> = m.scripts.keys().map(String::as_str).collect();
        assert_eq!(scripts, ["dev", "start"]);
    }

    #[test]
    fn test_typed_manifest_omits_module_type() {
        let m = manifest(Variant::Typed, Database::None, false);
        assert_eq!(m.main, "src/index.ts");
        assert_eq!(m.module_type, None);
        assert!(m.has_script("typecheck"));
        assert_eq!(m.scripts["start:dist"], "node dist/src/index.js");

        let json = render_json(&m).unwrap();
        assert!(!json.contains("\"type\""));
        assert!(json.contains("\"devDependencies\": {"));
    }

    #[test]
    fn test_scripts_depend_only_on_variant() {
        for variant in [Variant::Typed, Variant::Untyped] {
            let expected = scripts_for(variant);
            for database in [Database::None, Database::DocumentStore] {
                for media_cloud in [false, true] {
                    assert_eq!(manifest(variant, database, media_cloud).scripts, expected);
                }
            }
        }
    }

    #[test]
    fn test_manifest_field_order() {
        let json = render_json(&manifest(Variant::Untyped, Database::None, false)).unwrap();
        let fields = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"main\"",
            "\"scripts\"",
            "\"keywords\"",
            "\"author\"",
            "\"license\"",
            "\"dependencies\"",
            "\"devDependencies\"",
            "\"type\": \"module\"",
        ];
        let positions: Vec<_> = fields.iter().map(|f| json.find(f).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }
}
