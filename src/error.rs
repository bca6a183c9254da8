//! Structured error types for docview.
//!
//! Every failure in the crate is a typed, non-fatal error: at worst a
//! column is omitted from the header strip or a context menu comes back
//! empty. Nothing here should ever take the hosting process down.

/// All errors that can occur while building header layouts and menus.
#[derive(Debug, thiserror::Error)]
pub enum DocviewError {
    /// Malformed column descriptor (non-finite or negative native size).
    #[error("Invalid column descriptor: {0}")]
    InvalidInput(String),

    /// Menu node with a missing or too-short command identifier.
    #[error("Malformed menu node: {0}")]
    MalformedMenuNode(String),

    /// A menu build filtered out every top-level entry.
    ///
    /// Signaled, not fatal: the caller simply shows no menu.
    #[error("menu build produced no entries")]
    EmptyMenu,

    /// JSON payload parsing error from serde.
    #[error("JSON parsing: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocviewError>;
