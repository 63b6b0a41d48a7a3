//! Matching against many globs at once.
//!
//! Each glob is compiled on its own first so a bad pattern is reported by
//! name; matching then runs one `RegexSet` pass over the candidate.

use regex::{RegexSet, RegexSetBuilder};

use crate::config::GlobConfig;
use crate::error::{PatternError, Result};
use crate::matcher::Glob;
use crate::translate::anchor;

/// A set of compiled globs.
#[derive(Debug, Clone)]
pub struct GlobSet {
    globs: Vec<Glob>,
    set: RegexSet,
}

impl GlobSet {
    /// Compile every pattern in `patterns`.
    pub fn new<I, S>(patterns: I, config: &GlobConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let globs = patterns
            .into_iter()
            .map(|p| Glob::compile_with(p.as_ref(), config))
            .collect::<Result<Vec<_>>>()?;

        let mut builder = RegexSetBuilder::new(globs.iter().map(|g| anchor(g.translated())));
        config.apply_to_set(&mut builder);
        let set = builder.build().map_err(|e| {
            let joined: Vec<&str> = globs.iter().map(Glob::as_str).collect();
            let translated: Vec<&str> = globs.iter().map(Glob::translated).collect();
            PatternError::new(&joined.join(","), &translated.join("|"), e)
        })?;

        tracing::debug!(count = globs.len(), "compiled glob set");
        Ok(Self { globs, set })
    }

    /// Check whether any glob in the set matches `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    /// Indices of every glob that matches `text`, in insertion order.
    pub fn matches(&self, text: &str) -> Vec<usize> {
        self.set.matches(text).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    pub fn globs(&self) -> &[Glob] {
        &self.globs
    }
}

/// Return the paths that match any of `patterns`.
pub fn glob_match(patterns: &[String], paths: &[String]) -> Result<Vec<String>> {
    let set = GlobSet::new(patterns, &GlobConfig::default())?;
    Ok(select_paths(paths, |path| set.is_match(path)))
}

/// Return the paths whose file name (last `/` segment) matches none of
/// `exclude_patterns`.
pub fn filter_paths_exclude(paths: &[String], exclude_patterns: &[String]) -> Result<Vec<String>> {
    let set = GlobSet::new(exclude_patterns, &GlobConfig::default())?;
    Ok(select_paths(paths, |path| !set.is_match(file_name(path))))
}

fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

fn select_paths(paths: &[String], keep: impl Fn(&str) -> bool) -> Vec<String> {
    paths.iter().filter(|p| keep(p.as_str())).cloned().collect()
}
