//! Detection of the Node.js toolchain a generated project needs

use super::version::{check_minimum, MIN_NODE_VERSION};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn missing(name: &'static str) -> Self {
        Self {
            name,
            version: None,
            available: false,
        }
    }
}

/// Run `<binary> --version` and report what came back
fn probe(binary: &str, name: &'static str) -> RuntimeInfo {
    match Command::new(binary).arg("--version").output() {
        Ok(out) if out.status.success() => RuntimeInfo {
            name,
            version: Some(String::from_utf8_lossy(&out.stdout).trim().to_string()),
            available: true,
        },
        _ => RuntimeInfo::missing(name),
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("node", "Node.js")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    // npm ships as npm.cmd on Windows
    if cfg!(windows) {
        probe("npm.cmd", "npm")
    } else {
        probe("npm", "npm")
    }
}

/// Warnings for a set of detection results. Never fatal: the project is
/// generated either way.
pub fn advisories(node: &RuntimeInfo, npm: &RuntimeInfo) -> Vec<String> {
    let mut warnings = Vec::new();

    if !node.available {
        warnings.push("Node.js not found (install from https://nodejs.org)".to_string());
    } else if let Some(warning) = node
        .version
        .as_deref()
        .and_then(|v| check_minimum(v, MIN_NODE_VERSION))
    {
        warnings.push(warning);
    }

    if !npm.available {
        warnings.push("npm not found; install dependencies with your package manager".to_string());
    }

    warnings
}

/// Detect the toolchain and return any warnings
pub fn check_toolchain() -> Vec<String> {
    advisories(&check_node(), &check_npm())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &'static str, version: &str) -> RuntimeInfo {
        RuntimeInfo {
            name,
            version: Some(version.to_string()),
            available: true,
        }
    }

    #[test]
    fn test_no_warnings_for_supported_toolchain() {
        assert!(advisories(&found("Node.js", "v20.11.1"), &found("npm", "10.2.4")).is_empty());
    }

    #[test]
    fn test_missing_tools_warn() {
        let warnings = advisories(&RuntimeInfo::missing("Node.js"), &RuntimeInfo::missing("npm"));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Node.js not found"));
    }

    #[test]
    fn test_old_node_warns() {
        let warnings = advisories(&found("Node.js", "v16.20.0"), &found("npm", "8.19.4"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("18.0.0"));
    }

    #[test]
    fn test_probe_unknown_binary_is_missing() {
        let info = probe("definitely-not-a-real-binary-7f3a", "Nothing");
        assert!(!info.available);
        assert_eq!(info.version, None);
    }
}
