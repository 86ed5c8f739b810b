//! Dependency resolution for the generated `package.json`
//!
//! A fixed base set is extended by one package group per enabled feature
//! gate. Groups never share package names, so applying them is idempotent and
//! the order they are applied in does not change the result.

use crate::config::ProjectConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// A static list of `(package, version constraint)` pairs
pub type PackageGroup = &'static [(&'static str, &'static str)];

pub const BASE_DEPENDENCIES: PackageGroup = &[
    ("express", "^4.21.1"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.4.5"),
    ("helmet", "^8.0.0"),
    ("morgan", "^1.10.0"),
];

// eslint stays on 8.x: the generated config is `.eslintrc.json`
pub const BASE_DEV_DEPENDENCIES: PackageGroup = &[("nodemon", "^3.1.7"), ("eslint", "^8.57.0")];

pub const DOCUMENT_STORE_DEPENDENCIES: PackageGroup = &[
    ("mongoose", "^7.3.2"),
    ("express-mongo-sanitize", "^2.2.0"),
];

pub const MEDIA_CLOUD_DEPENDENCIES: PackageGroup = &[("cloudinary", "^1.37.2")];

pub const TYPED_DEV_DEPENDENCIES: PackageGroup = &[
    ("typescript", "^5.6.3"),
    ("ts-node", "^10.9.2"),
    ("@types/express", "^4.17.20"),
    ("@types/cors", "^2.8.17"),
    ("@types/morgan", "^1.9.9"),
    ("@types/node", "^22.7.5"),
    ("@typescript-eslint/eslint-plugin", "^7.16.1"),
    ("@typescript-eslint/parser", "^7.16.1"),
    ("eslint-config-airbnb-typescript", "^18.0.0"),
    ("eslint-plugin-import", "^2.29.1"),
    ("eslint-import-resolver-typescript", "^3.6.1"),
];

/// Which manifest section a package group lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Runtime,
    Development,
}

/// Optional package group switched on by a configuration choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    DocumentStore,
    Typed,
    MediaCloud,
}

impl Gate {
    pub const ALL: [Gate; 3] = [Gate::DocumentStore, Gate::Typed, Gate::MediaCloud];

    pub fn scope(self) -> Scope {
        match self {
            Gate::DocumentStore | Gate::MediaCloud => Scope::Runtime,
            Gate::Typed => Scope::Development,
        }
    }

    pub fn packages(self) -> PackageGroup {
        match self {
            Gate::DocumentStore => DOCUMENT_STORE_DEPENDENCIES,
            Gate::Typed => TYPED_DEV_DEPENDENCIES,
            Gate::MediaCloud => MEDIA_CLOUD_DEPENDENCIES,
        }
    }

    pub fn is_enabled(self, config: &ProjectConfig) -> bool {
        match self {
            Gate::DocumentStore => config.database().is_enabled(),
            Gate::Typed => config.variant().is_typed(),
            Gate::MediaCloud => config.media_cloud(),
        }
    }

    /// Gates switched on by `config`
    pub fn enabled_for(config: &ProjectConfig) -> Vec<Gate> {
        Self::ALL
            .into_iter()
            .filter(|gate| gate.is_enabled(config))
            .collect()
    }
}

/// Runtime and development dependency maps, keyed by package name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencySet {
    pub runtime: BTreeMap<String, String>,
    pub development: BTreeMap<String, String>,
}

impl DependencySet {
    /// The packages every generated project depends on
    pub fn base() -> Self {
        let mut set = Self::default();
        set.union(Scope::Runtime, BASE_DEPENDENCIES);
        set.union(Scope::Development, BASE_DEV_DEPENDENCIES);
        set
    }

    /// Merge a package group into one section
    pub fn union(&mut self, scope: Scope, packages: PackageGroup) {
        let target = match scope {
            Scope::Runtime => &mut self.runtime,
            Scope::Development => &mut self.development,
        };
        for (name, version) in packages {
            target.insert((*name).to_string(), (*version).to_string());
        }
    }

    pub fn apply(&mut self, gate: Gate) {
        self.union(gate.scope(), gate.packages());
    }

    /// Whether a package appears in either section
    pub fn contains(&self, name: &str) -> bool {
        self.runtime.contains_key(name) || self.development.contains_key(name)
    }
}

/// Resolve the full dependency set for a configuration
pub fn resolve(config: &ProjectConfig) -> DependencySet {
    resolve_gates(&Gate::enabled_for(config))
}

/// Base set plus every gate in `gates`, in the given order
pub fn resolve_gates(gates: &[Gate]) -> DependencySet {
    let mut set = DependencySet::base();
    for gate in gates {
        set.apply(*gate);
    }
    set
}
