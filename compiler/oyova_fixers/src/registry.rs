//! Name-keyed lookup of fixers.

use rustc_hash::FxHashMap;

use crate::{Fixer, SpaceInsideParenthesisFixer};

/// Fixers by public name.
///
/// Hosts use the registry to resolve configured rule names and to list rules
/// for documentation. Deciding which rules run on which files stays with the
/// host.
#[derive(Default)]
pub struct FixerRegistry {
    fixers: FxHashMap<String, Box<dyn Fixer>>,
}

impl FixerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in fixer with its default configuration.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SpaceInsideParenthesisFixer::default()));
        registry
    }

    /// Add `fixer` under its name, returning the fixer it replaced.
    pub fn register(&mut self, fixer: Box<dyn Fixer>) -> Option<Box<dyn Fixer>> {
        self.fixers.insert(fixer.name(), fixer)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Fixer> {
        self.fixers.get(name).map(|fixer| &**fixer)
    }

    pub fn len(&self) -> usize {
        self.fixers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixers.is_empty()
    }

    /// All fixers, highest priority first, ties broken by name.
    pub fn sorted(&self) -> Vec<(&str, &dyn Fixer)> {
        let mut fixers: Vec<_> = self
            .fixers
            .iter()
            .map(|(name, fixer)| (name.as_str(), &**fixer))
            .collect();
        fixers.sort_by(|(a_name, a), (b_name, b)| {
            b.priority().cmp(&a.priority()).then_with(|| a_name.cmp(b_name))
        });
        fixers
    }
}
