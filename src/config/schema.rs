// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cj.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cj.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CjConfig {
    /// Jira ticket configuration.
    pub jira: JiraConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CjConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Jira ticket configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JiraConfig {
    /// Default project prefix for bare ticket numbers.
    ///
    /// When set, a bare `1234` in a branch name or answer is read as
    /// `<prefix>-1234`. When unset, only fully-qualified IDs are recognized.
    pub prefix: Option<String>,
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to show hints in prompts.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { hints: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CjConfig::default();
        assert!(config.jira.prefix.is_none());
        assert!(config.ui.hints);
    }

    #[test]
    fn test_config_serialization() {
        let config = CjConfig {
            jira: JiraConfig {
                prefix: Some("JIRAID".to_string()),
            },
            ui: UiConfig::default(),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("prefix"));
        assert!(toml_str.contains("JIRAID"));
    }
}
