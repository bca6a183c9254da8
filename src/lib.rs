//! docview - UI core for a collaborative document viewer
//!
//! Owns the two stateful/algorithmic pieces of the viewer chrome, decoupled
//! from any rendering technology:
//! - Column header layout: converts document-native column sizes into
//!   pixel-aligned header cells and tracks the strip's scroll offset
//! - Context menu construction: filters the backend's raw menu tree
//!   through a per-document-type whitelist into a display-ready tree
//!
//! The rendering host draws cells and menus; the document backend supplies
//! the payloads. This crate only computes.
//!
//! # Usage
//!
//! ```
//! use docview::{DocumentType, HeaderLayout, MenuTreeBuilder, WhitelistPolicy};
//!
//! let mut header = HeaderLayout::new();
//! let columns = docview::parse_column_payload(
//!     r#"[{"size": "100", "text": "A"}, {"size": "200", "text": "B"}]"#,
//! ).unwrap();
//! header.set_columns(&columns, |native| native * 0.05).unwrap();
//!
//! let builder = MenuTreeBuilder::new(WhitelistPolicy::default());
//! let menu = docview::context_menu_from_payload(
//!     r#"{"menu": [{"type": "command", "command": ".uno:Copy", "text": "~Copy"}]}"#,
//!     DocumentType::Text,
//!     &builder,
//! ).unwrap();
//! assert_eq!(menu.len(), 1);
//! ```

pub mod error;
pub mod layout;
pub mod menu;
pub mod types;

pub use error::{DocviewError, Result};
pub use layout::HeaderLayout;
pub use menu::{MenuTreeBuilder, WhitelistPolicy};
pub use types::*;

/// Parse the backend's column payload into descriptors.
///
/// The payload is a JSON array of `{size, text}` objects with sizes encoded
/// as decimal strings.
///
/// # Errors
/// Returns an error if the payload is not valid JSON of that shape.
pub fn parse_column_payload(json: &str) -> Result<Vec<ColumnDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a raw context-menu payload and build the display tree in one call.
///
/// # Errors
/// Returns an error if the payload does not parse, or
/// [`DocviewError::EmptyMenu`] if filtering leaves nothing to show.
pub fn context_menu_from_payload(
    json: &str,
    doc_type: DocumentType,
    builder: &MenuTreeBuilder,
) -> Result<Vec<DisplayMenuNode>> {
    let payload: ContextMenuPayload = serde_json::from_str(json)?;
    builder.build(&payload.menu, doc_type)
}

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
