// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration content.

use super::schema::CjConfig;

/// Get the default configuration.
pub fn default_config() -> CjConfig {
    CjConfig::default()
}

/// Get an example configuration file with comments, for `cj init`.
pub fn example_config() -> &'static str {
    r#"# CJ Configuration

[jira]
# Default project prefix for bare ticket numbers. With this set, a bare
# "1234" in a branch name or prompt answer is read as "JIRAID-1234".
# Leave unset to accept only fully-qualified IDs like "PROJ-123".
# prefix = "JIRAID"

[ui]
# Show hints in interactive prompts.
hints = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config = crate::config::loader::parse_config(example_config()).unwrap();
        assert!(config.jira.prefix.is_none());
        assert!(config.ui.hints);
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(config.jira.prefix.is_none());
    }
}
