//! Version comparison for detected runtimes

use anyhow::Result;
use semver::Version;

/// Oldest Node.js the generated dependency set supports
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Parse version string, handling a leading `v` as printed by `node --version`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Returns a warning if `installed` is older than `minimum`
pub fn check_minimum(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_version(installed).ok()?; // Can't compare, skip warning
    let minimum_ver = parse_version(minimum).ok()?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Node.js {} is older than the minimum supported version {}",
            installed.trim(),
            minimum
        ))
    } else {
        None
    }
}
