//! The generated `.env` file

use crate::config::ProjectConfig;

/// One `KEY=value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvLine {
    pub key: &'static str,
    pub value: &'static str,
}

const fn line(key: &'static str, value: &'static str) -> EnvLine {
    EnvLine { key, value }
}

const BASE_LINES: [EnvLine; 2] = [line("PORT", "5000"), line("NODE_ENV", "development")];

const DOCUMENT_STORE_LINES: [EnvLine; 1] = [line("MONGODB_URI", "<your mongodb uri here>")];

const MEDIA_CLOUD_LINES: [EnvLine; 3] = [
    line("CLOUD_NAME", ""),
    line("CLOUD_API_KEY", ""),
    line("CLOUD_API_SECRET", ""),
];

/// Ordered environment variables: base, then database, then media cloud
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentTemplate {
    lines: Vec<EnvLine>,
}

impl EnvironmentTemplate {
    pub fn for_config(config: &ProjectConfig) -> Self {
        let mut lines = BASE_LINES.to_vec();
        if config.database().is_enabled() {
            lines.extend(DOCUMENT_STORE_LINES);
        }
        if config.media_cloud() {
            lines.extend(MEDIA_CLOUD_LINES);
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[EnvLine] {
        &self.lines
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().map(|l| l.key)
    }

    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}={}\n", l.key, l.value))
            .collect()
    }
}
