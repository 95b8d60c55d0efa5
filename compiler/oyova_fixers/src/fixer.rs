//! The `Fixer` trait.

use std::path::Path;

use oyova_tokens::Tokens;

use crate::{fixer_name, FixError, FixerDefinition};

/// A style rule that edits a token stream in place.
///
/// Implementations are stateless with respect to the streams they fix: one
/// value can fix any number of source units, from any thread.
pub trait Fixer: Send + Sync {
    /// Public, vendor-prefixed name, derived from the implementing type's
    /// name (see [`fixer_name`]).
    fn name(&self) -> String {
        fixer_name(std::any::type_name::<Self>())
    }

    /// Static description for documentation.
    fn definition(&self) -> FixerDefinition;

    /// Cheap pre-filter: can this fixer change `tokens` at all?
    fn is_candidate(&self, tokens: &Tokens) -> bool;

    /// Whether fixing can change the program's behavior.
    fn is_risky(&self) -> bool {
        false
    }

    /// Ordering among fixers; higher runs first.
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this fixer applies to the source unit at `path`.
    fn supports(&self, _path: &Path) -> bool {
        true
    }

    /// Edit `tokens` in place. Callers normally go through [`Fixer::fix`].
    fn apply_fix(&self, path: &Path, tokens: &mut Tokens) -> Result<(), FixError>;

    /// Run [`Fixer::apply_fix`] unless the stream is empty, not a candidate,
    /// or `path` is unsupported.
    fn fix(&self, path: &Path, tokens: &mut Tokens) -> Result<(), FixError> {
        if tokens.is_empty() || !self.is_candidate(tokens) || !self.supports(path) {
            tracing::debug!(fixer = %self.name(), path = %path.display(), "fixer skipped");
            return Ok(());
        }
        self.apply_fix(path, tokens)
    }
}
