//! `glob_regex`: shell-style glob patterns translated to regular expressions.
//!
//! A glob is rewritten into `regex` syntax by a single forward scan and then
//! compiled by the `regex` crate, anchored to match whole candidates.
//!
//! Modules:
//! - `translate`: the glob-to-regex rewriter
//! - `matcher`: `Glob`, a compiled glob with a full-string match
//! - `set`: `GlobSet`, many globs matched in one pass, plus path filters
//! - `config`: options passed through to the regex engine
//! - `error`: `PatternError`
//!
//! ```
//! let glob = glob_regex::compile("main{.go,.c}").unwrap();
//! assert!(glob.is_match("main.go"));
//! assert!(glob.is_match("main.c"));
//! assert!(!glob.is_match("main"));
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod set;
pub mod translate;

pub use config::{parse_glob_config, GlobConfig};
pub use error::{PatternError, Result};
pub use matcher::{compile, Glob};
pub use set::{filter_paths_exclude, glob_match, GlobSet};
pub use translate::{anchor, is_literal_glob, translate};
