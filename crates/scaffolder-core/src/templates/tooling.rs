//! Lint and type-check configuration files

use crate::config::Variant;
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Value};

/// `.eslintrc.json`
pub fn lint_config(variant: Variant) -> Value {
    match variant {
        Variant::Typed => json!({
            "root": true,
            "env": {
                "node": true,
                "jest": true
            },
            "parser": "@typescript-eslint/parser",
            "parserOptions": {
                "project": ["./tsconfig.json"]
            },
            "extends": "airbnb-typescript/base",
            "plugins": ["import", "@typescript-eslint"],
            "rules": {
                "comma-dangle": 0,
                "no-underscore-dangle": 0,
                "no-param-reassign": 0,
                "no-return-assign": 0,
                "camelcase": 0,
                "import/extensions": 0,
                "@typescript-eslint/no-redeclare": 0
            },
            "settings": {
                "import/parsers": {
                    "@typescript-eslint/parser": [".ts", ".tsx"]
                },
                "import/resolver": {
                    "typescript": {}
                }
            }
        }),
        Variant::Untyped => json!({
            "env": {
                "node": true,
                "es6": true
            },
            "extends": "eslint:recommended",
            "parserOptions": {
                "sourceType": "module"
            },
            "rules": {
                "no-console": "off"
            }
        }),
    }
}

/// `tsconfig.json`; compiled output uses CommonJS
pub fn type_check_config() -> Value {
    json!({
        "compilerOptions": {
            "outDir": "dist",
            "sourceMap": true,
            "target": "esnext",
            "module": "commonjs",
            "esModuleInterop": true,
            "forceConsistentCasingInFileNames": true,
            "noImplicitAny": true,
            "strict": true,
            "skipLibCheck": true
        },
        "include": ["./*.js", "src/**/*.ts", "test/**/*.ts"]
    })
}

/// Two-space pretty JSON with a trailing newline
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_config_keyed_by_variant() {
        let ts = lint_config(Variant::Typed);
        assert_eq!(ts["parser"], "@typescript-eslint/parser");
        assert_eq!(ts["parserOptions"]["project"][0], "./tsconfig.json");

        let js = lint_config(Variant::Untyped);
        assert_eq!(js["extends"], "eslint:recommended");
        assert_eq!(js["parserOptions"]["sourceType"], "module");
        assert!(js.get("parser").is_none());
    }

    #[test]
    fn test_type_check_config_targets_commonjs() {
        let tsconfig = type_check_config();
        assert_eq!(tsconfig["compilerOptions"]["module"], "commonjs");
        assert_eq!(tsconfig["compilerOptions"]["outDir"], "dist");
    }

    #[test]
    fn test_render_json_keeps_key_order() {
        let rendered = render_json(&lint_config(Variant::Untyped)).unwrap();
        assert!(rendered.starts_with("{\n  \"env\": {\n    \"node\": true,"));
        assert!(rendered.ends_with("}\n"));
        assert!(rendered.find("\"env\"").unwrap() < rendered.find("\"rules\"").unwrap());
    }
}
