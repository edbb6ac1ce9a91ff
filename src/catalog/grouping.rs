//! Grouping of a tool listing into a categorized catalog

use super::category::Category;
use super::descriptor::ToolDescriptor;

/// Tools grouped by category.
///
/// Categories appear in `Category::ALL` order, empty ones omitted. Within a
/// category tools keep the order of the listing they were built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedCatalog {
    groups: Vec<(Category, Vec<ToolDescriptor>)>,
}

impl CategorizedCatalog {
    /// Build the catalog from a full tool listing
    pub fn build(tools: &[ToolDescriptor]) -> Self {
        let mut groups: Vec<(Category, Vec<ToolDescriptor>)> =
            Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();

        for tool in tools {
            groups[tool.category().index()].1.push(tool.clone());
        }

        groups.retain(|(_, tools)| !tools.is_empty());
        Self { groups }
    }

    /// Non-empty categories in display order
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    /// Tools for one category; empty slice when absent
    pub fn tools_in(&self, category: Category) -> &[ToolDescriptor] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, tools)| tools.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ToolDescriptor])> {
        self.groups.iter().map(|(c, tools)| (*c, tools.as_slice()))
    }

    /// Catalog restricted to a single category
    pub fn only(&self, category: Category) -> Self {
        Self {
            groups: self.groups.iter().filter(|(c, _)| *c == category).cloned().collect(),
        }
    }

    /// Number of non-empty categories
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of tools across all categories
    pub fn tool_count(&self) -> usize {
        self.groups.iter().map(|(_, tools)| tools.len()).sum()
    }
}
