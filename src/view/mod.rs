//! Terminal views
//!
//! Turns catalog data, server status and probe outcomes into text. Nothing
//! here touches the network or mutates state.

mod catalog;
mod status;

pub use catalog::{CatalogView, CategorySummary, ToolDetail, catalog_json};
pub use status::{outcome_box, status_badge};
