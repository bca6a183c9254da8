//! Data types for the viewer UI core.

mod column;
mod menu;

pub use column::*;
pub use menu::*;
