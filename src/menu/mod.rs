//! Context menu construction.
//!
//! Filters the backend's raw menu tree through a load-once whitelist and
//! produces a display-ready tree with normalized separators.

mod builder;
mod whitelist;

pub use builder::MenuTreeBuilder;
pub use whitelist::WhitelistPolicy;
