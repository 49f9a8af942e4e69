// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Schema derivation for commit linting.

use super::questions::Prefix;

/// Human-readable template of the message format.
pub const SCHEMA: &str = "<prefix>(<scope>): <subject>\n\n\
                          <body>\n\n\
                          BREAKING CHANGES: <details>\n\
                          Jira-Id: <jiraid>";

/// A documented example message satisfying the schema.
pub const EXAMPLE: &str = "fix(viewer): De-frobulate splines in encabulator\n\n\
                           The encabulator's splines were reticulating when the viewer opened,\n\
                           causing the allocator to fragment the heap. Defrobulating avoids\n\
                           this issue by recalibrating the affinity of the block splitter.\n\n\
                           Jira-Id: JIRAID-1234";

/// Build the regular expression a commit subject must match.
///
/// The pattern covers the header only: one of the enumerated prefixes, an
/// optional parenthesized scope, an optional `!`, a colon, and the subject
/// text. Jira-trailer presence is a separate validation pass and is never
/// part of the acceptance pattern.
pub fn schema_pattern() -> String {
    let prefixes: Vec<&str> = Prefix::all().iter().map(Prefix::as_str).collect();
    format!(r"({})(\(\S+\))?!?:(\s.*)", prefixes.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn anchored() -> Regex {
        Regex::new(&format!("^(?:{})", schema_pattern())).unwrap()
    }

    #[test]
    fn test_pattern_lists_every_prefix() {
        let pattern = schema_pattern();
        for prefix in Prefix::all() {
            assert!(pattern.contains(prefix.as_str()));
        }
    }

    #[test]
    fn test_pattern_matches_example_header() {
        let header = EXAMPLE.lines().next().unwrap();
        assert!(anchored().is_match(header));
    }

    #[test]
    fn test_pattern_matches_plain_header() {
        assert!(anchored().is_match("chore: Bump version"));
    }

    #[test]
    fn test_pattern_matches_breaking_marker() {
        assert!(anchored().is_match("feat(api)!: Drop the legacy endpoint"));
    }

    #[test]
    fn test_pattern_rejects_unknown_prefix() {
        assert!(!anchored().is_match("wip: Not done yet"));
    }

    #[test]
    fn test_pattern_rejects_missing_colon() {
        assert!(!anchored().is_match("fix broken thing"));
    }
}
