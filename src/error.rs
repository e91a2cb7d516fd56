//! Error types for the storefront UI crate.

use thiserror::Error;

/// Errors that can occur when resolving card presentation.
#[derive(Error, Debug)]
pub enum UiError {
    /// A variant tag with no entry in the style table.
    #[error("Unrecognized card variant: {0}")]
    UnknownVariant(String),
}
