//! Fixer errors.

use std::path::{Path, PathBuf};

use oyova_tokens::TokensError;

/// A fixer could not process a source unit because its token stream broke
/// a structural precondition (typically an unbalanced delimiter).
#[derive(Debug, thiserror::Error)]
#[error("{fixer}: cannot fix {}: {source}", .path.display())]
pub struct FixError {
    /// Name of the fixer that gave up.
    pub fixer: String,
    /// Source unit the stream came from.
    pub path: PathBuf,
    #[source]
    pub source: TokensError,
}

impl FixError {
    pub fn new(fixer: impl Into<String>, path: &Path, source: TokensError) -> Self {
        FixError {
            fixer: fixer.into(),
            path: path.to_path_buf(),
            source,
        }
    }
}
