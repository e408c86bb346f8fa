use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_session_ttl_secs() -> u64 {
    300
}

fn default_inline_limit() -> usize {
    1900
}

/// Engine configuration, loaded from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuillConfig {
    /// Template catalog location. Defaults to `templates/` in the working
    /// directory when unset.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// Inactivity threshold after which open sessions are swept.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Longest rendered text the collaborator can deliver inline; beyond it
    /// the rendered document is flagged oversize.
    #[serde(default = "default_inline_limit")]
    pub inline_limit: usize,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            session_ttl_secs: default_session_ttl_secs(),
            inline_limit: default_inline_limit(),
        }
    }
}

impl QuillConfig {
    /// Session TTL as a duration.
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuillConfig::default();
        assert_eq!(config.session_ttl_secs, 300);
        assert_eq!(config.inline_limit, 1900);
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: QuillConfig = toml::from_str("templates_dir = \"catalog\"").unwrap();
        assert_eq!(config.templates_dir, Some(PathBuf::from("catalog")));
        assert_eq!(config.session_ttl_secs, 300);
        assert_eq!(config.inline_limit, 1900);
    }
}
