//! Matcher configuration.
//!
//! The defaults give the reference semantics: case-sensitive, and `*`/`?`
//! do not match a newline. Configs can also be read from JSON.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// Options passed through to the regex engine when a glob is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobConfig {
    /// Case-insensitive matching, as folded by the regex engine.
    #[serde(rename = "caseInsensitive")]
    pub case_insensitive: bool,
    /// Let `*` and `?` match `\n`.
    #[serde(rename = "dotMatchesNewLine")]
    pub dot_matches_new_line: bool,
    /// Compiled program size limit in bytes; `None` keeps the engine default.
    #[serde(rename = "sizeLimit")]
    pub size_limit: Option<usize>,
}

impl GlobConfig {
    /// Whether a literal glob may be matched by plain string equality.
    pub(crate) fn allows_literal_fast_path(&self) -> bool {
        !self.case_insensitive
    }

    pub(crate) fn regex_builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .dot_matches_new_line(self.dot_matches_new_line);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
    }

    pub(crate) fn apply_to_set(&self, builder: &mut regex::RegexSetBuilder) {
        builder
            .case_insensitive(self.case_insensitive)
            .dot_matches_new_line(self.dot_matches_new_line);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
    }
}

/// Parse a glob config from a JSON string.
pub fn parse_glob_config(json: &str) -> Result<GlobConfig, serde_json::Error> {
    serde_json::from_str(json)
}
