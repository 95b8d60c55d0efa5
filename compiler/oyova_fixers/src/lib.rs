//! Oyova Fixers
//!
//! Token-stream style fixers in the PHP-CS-Fixer tradition.
//!
//! # Architecture
//!
//! A fixer is a stateless value implementing [`Fixer`]. The host tokenizes a
//! source unit into a [`Tokens`](oyova_tokens::Tokens) stream and calls
//! [`Fixer::fix`], which:
//!
//! 1. **Candidacy**: skips the stream if [`Fixer::is_candidate`] says the
//!    fixer has nothing to look at (an O(1) kind lookup)
//! 2. **Rewrite**: otherwise runs [`Fixer::apply_fix`], editing the stream in
//!    place
//!
//! The host serializes the stream back to text afterwards.
//!
//! # Modules
//!
//! - [`fixer`]: the `Fixer` trait
//! - [`definition`]: static descriptions for documentation UIs
//! - [`registry`]: name-keyed lookup of the built-in fixers
//! - [`space_inside_parenthesis`]: one space inside non-empty parentheses

pub mod definition;
mod error;
pub mod fixer;
mod name;
pub mod registry;
pub mod space_inside_parenthesis;
mod text;

pub use definition::{CodeSample, FixerDefinition};
pub use error::FixError;
pub use fixer::Fixer;
pub use name::{fixer_name, VENDOR};
pub use registry::FixerRegistry;
pub use space_inside_parenthesis::{SpaceInsideParenthesisConfig, SpaceInsideParenthesisFixer};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=oyova_fixers=debug` or `RUST_LOG=oyova_fixers=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
