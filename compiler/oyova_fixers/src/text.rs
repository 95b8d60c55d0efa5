//! String helpers.

/// Whether `haystack` contains `needle`. An empty needle is never contained.
pub(crate) fn str_contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}
