//! Column header geometry.
//!
//! Converts backend column descriptors into pixel-aligned header cells and
//! tracks the strip's horizontal scroll offset.

mod header_layout;

pub use header_layout::HeaderLayout;
