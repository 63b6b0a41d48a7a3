//! Compiled glob matcher.
//!
//! A [`Glob`] is the translated pattern compiled by the `regex` engine and
//! anchored so that it only accepts whole candidates.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::config::GlobConfig;
use crate::error::{PatternError, Result};
use crate::translate::{anchor, is_literal_glob, translate};

/// A compiled glob pattern. Immutable and cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Glob {
    glob: String,
    translated: String,
    regex: Regex,
    /// Set when the glob can be matched by string equality.
    literal: bool,
}

impl Glob {
    /// Compile a glob with the default config.
    pub fn compile(pattern: &str) -> Result<Self> {
        Self::compile_with(pattern, &GlobConfig::default())
    }

    /// Compile a glob, passing `config` through to the regex engine.
    pub fn compile_with(pattern: &str, config: &GlobConfig) -> Result<Self> {
        let translated = translate(pattern);
        let regex = compile_translated(pattern, &translated, config)?;
        let literal = config.allows_literal_fast_path() && is_literal_glob(pattern);
        if literal {
            tracing::trace!(glob = pattern, "literal glob, matching by equality");
        }
        tracing::debug!(glob = pattern, regex = regex.as_str(), "compiled glob");
        Ok(Self {
            glob: pattern.to_string(),
            translated,
            regex,
            literal,
        })
    }

    /// Check whether the whole of `text` matches the glob.
    pub fn is_match(&self, text: &str) -> bool {
        if self.literal {
            return text == self.glob;
        }
        self.regex.is_match(text)
    }

    /// The glob as written.
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// The unanchored regex the glob translated to.
    pub fn translated(&self) -> &str {
        &self.translated
    }

    /// The anchored regex that was compiled.
    pub fn source_pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regex. It is anchored, so it only matches whole
    /// candidates; each `{...}` group is a capture group, numbered from 1.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether matching skips the regex engine.
    pub fn is_literal(&self) -> bool {
        self.literal
    }
}

/// Compile a glob with the default config.
pub fn compile(pattern: &str) -> Result<Glob> {
    Glob::compile(pattern)
}

/// Validate and compile an already translated glob.
///
/// The unanchored body is parsed on its own first: wrapped in the anchoring
/// group, a stray `)` would close the wrapper instead of being rejected.
pub(crate) fn compile_translated(
    glob: &str,
    translated: &str,
    config: &GlobConfig,
) -> Result<Regex> {
    let reject = |cause: &dyn fmt::Display| {
        tracing::debug!(glob, translated, error = %cause, "rejected glob");
        PatternError::new(glob, translated, cause)
    };

    regex_syntax::Parser::new()
        .parse(translated)
        .map_err(|e| reject(&e))?;

    config
        .regex_builder(&anchor(translated))
        .build()
        .map_err(|e| reject(&e))
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

impl FromStr for Glob {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for Glob {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_anything() {
        let glob = compile("*").unwrap();
        assert!(glob.is_match(""));
        assert!(glob.is_match("a"));
        assert!(glob.is_match("anything at all"));
    }

    #[test]
    fn star_stops_at_newline_by_default() {
        let glob = compile("*").unwrap();
        assert!(!glob.is_match("a\nb"));

        let config = GlobConfig {
            dot_matches_new_line: true,
            ..GlobConfig::default()
        };
        let glob = Glob::compile_with("*", &config).unwrap();
        assert!(glob.is_match("a\nb"));
    }

    #[test]
    fn question_mark_matches_one_char() {
        let glob = compile("?").unwrap();
        assert!(glob.is_match("a"));
        assert!(glob.is_match("é"));
        assert!(!glob.is_match(""));
        assert!(!glob.is_match("ab"));
    }

    #[test]
    fn match_is_anchored() {
        let glob = compile("gl*b").unwrap();
        assert!(glob.is_match("glob"));
        assert!(glob.is_match("glb"));
        assert!(!glob.is_match("xglob"));
        assert!(!glob.is_match("globx"));
    }

    #[test]
    fn anchoring_wraps_top_level_alternation() {
        // `{` inside a class still opens a group, so `,` becomes `|` at the
        // top level of the translated body.
        let glob = compile("[{]a,b").unwrap();
        assert_eq!(glob.translated(), "[(]a|b");
        assert!(glob.is_match("(a"));
        assert!(glob.is_match("b"));
        assert!(!glob.is_match("(ab"));
        assert!(!glob.is_match("xb"));
    }

    #[test]
    fn escaped_star_is_literal() {
        let glob = compile("a\\*b").unwrap();
        assert!(glob.is_match("a*b"));
        assert!(!glob.is_match("axb"));
        assert!(!glob.is_match("ab"));
    }

    #[test]
    fn source_pattern_is_anchored() {
        let glob = compile("gl?b").unwrap();
        assert_eq!(glob.as_str(), "gl?b");
        assert_eq!(glob.translated(), "gl.b");
        assert_eq!(glob.source_pattern(), "^(?:gl.b)$");
        assert_eq!(glob.regex().as_str(), glob.source_pattern());
    }

    #[test]
    fn regex_captures_brace_groups_on_whole_candidates() {
        let glob = compile("main{.go,.c}").unwrap();
        let caps = glob.regex().captures("main.go").unwrap();
        assert_eq!(&caps[1], ".go");
        // Anchored: no match inside larger text.
        assert!(glob.regex().find("src/main.go").is_none());
        assert!(glob.regex().captures("main.go.bak").is_none());
    }

    #[test]
    fn literal_fast_path() {
        let glob = compile("main.go").unwrap();
        assert!(glob.is_literal());
        assert!(glob.is_match("main.go"));
        assert!(!glob.is_match("mainxgo"));
        assert!(!glob.is_match("main.go "));

        assert!(!compile("*.go").unwrap().is_literal());
    }

    #[test]
    fn case_insensitive_config() {
        let config = GlobConfig {
            case_insensitive: true,
            ..GlobConfig::default()
        };
        let glob = Glob::compile_with("Main.GO", &config).unwrap();
        assert!(!glob.is_literal());
        assert!(glob.is_match("main.go"));
        assert!(glob.is_match("MAIN.go"));
        assert!(!compile("Main.GO").unwrap().is_match("main.go"));
    }

    #[test]
    fn trailing_backslash_fails_to_compile() {
        let err = compile("gl\\").unwrap_err();
        assert_eq!(err.glob(), "gl\\");
        assert_eq!(err.translated(), "gl\\");
        assert!(!err.message().is_empty());
    }

    #[test]
    fn unbalanced_groups_are_rejected() {
        assert!(compile("{glob").is_err());
        assert!(compile("glob}").is_err());
        // Would balance once wrapped in the anchoring group.
        let err = compile("a}{b").unwrap_err();
        assert_eq!(err.translated(), "a)(b");
    }

    #[test]
    fn unclosed_class_is_rejected() {
        let err = compile("gl[ab").unwrap_err();
        assert_eq!(err.translated(), "gl[ab");
    }

    #[test]
    fn size_limit_is_enforced() {
        let config = GlobConfig {
            size_limit: Some(16),
            ..GlobConfig::default()
        };
        let err = Glob::compile_with("{alpha,beta,gamma,delta}*{one,two,three}", &config)
            .unwrap_err();
        assert_eq!(err.glob(), "{alpha,beta,gamma,delta}*{one,two,three}");
    }

    #[test]
    fn from_str_and_display() {
        let glob: Glob = "main{.go,.c}".parse().unwrap();
        assert_eq!(glob.to_string(), "main{.go,.c}");
        assert_eq!(glob, compile("main{.go,.c}").unwrap());
        assert!("{".parse::<Glob>().is_err());
    }

    #[test]
    fn glob_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Glob>();
    }
}
