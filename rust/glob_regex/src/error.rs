//! Error type for glob compilation.

use thiserror::Error;

/// A glob whose translation the regex engine rejected.
///
/// Translation itself never fails, so this is the only error a caller sees.
/// It is deterministic: compiling the same glob again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid glob pattern {glob:?} (translated to {translated:?}): {message}")]
pub struct PatternError {
    glob: String,
    translated: String,
    message: String,
}

pub type Result<T> = std::result::Result<T, PatternError>;

impl PatternError {
    pub(crate) fn new(glob: &str, translated: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            glob: glob.to_string(),
            translated: translated.to_string(),
            message: cause.to_string(),
        }
    }

    /// The glob as the caller wrote it.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// The regex pattern the glob was translated to.
    pub fn translated(&self) -> &str {
        &self.translated
    }

    /// The regex engine's diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }
}
