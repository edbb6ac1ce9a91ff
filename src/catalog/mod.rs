//! Tool catalog - descriptors, category classification, and grouping
//!
//! Pure logic only; terminal presentation lives in `crate::view`.

mod category;
mod descriptor;
mod grouping;

pub use category::{Category, DEFAULT_ICON, icon_for_label};
pub use descriptor::{ToolDescriptor, find_tool};
pub use grouping::CategorizedCatalog;
