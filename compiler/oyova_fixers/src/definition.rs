//! Static fixer descriptions.
//!
//! Purely descriptive: documentation and configuration UIs read these, the
//! fixing algorithms never do.

/// Human-readable description of a fixer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixerDefinition {
    /// One-sentence statement of the rule.
    pub summary: &'static str,
    /// Code that satisfies the rule.
    pub samples: &'static [CodeSample],
}

/// A source snippet illustrating a fixer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeSample {
    pub code: &'static str,
}

impl CodeSample {
    #[inline]
    pub const fn new(code: &'static str) -> Self {
        CodeSample { code }
    }
}
