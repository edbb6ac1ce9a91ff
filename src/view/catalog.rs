//! Catalog presentation - category summaries, tool details, text and JSON rendering

use colored::*;
use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::{CategorizedCatalog, Category, ToolDescriptor, find_tool};

/// One card in the catalog grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub icon: &'static str,
    pub count: usize,
    /// Tool names in listing order
    pub tools: Vec<String>,
}

impl CategorySummary {
    pub fn new(category: Category, tools: &[ToolDescriptor]) -> Self {
        Self {
            category,
            icon: category.icon(),
            count: tools.len(),
            tools: tools.iter().map(|t| t.name.clone()).collect(),
        }
    }

    /// Summaries for every non-empty category, in display order
    pub fn from_catalog(catalog: &CategorizedCatalog) -> Vec<Self> {
        catalog.iter().map(|(c, tools)| Self::new(c, tools)).collect()
    }
}

/// Detail view of a single tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDetail {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub input_schema: Value,
    /// Property names the schema marks as required
    pub required: Vec<String>,
}

impl ToolDetail {
    /// Exact-name lookup; `None` when the tool is not in the listing
    pub fn find(tools: &[ToolDescriptor], name: &str) -> Option<Self> {
        find_tool(tools, name).map(Self::from)
    }

    pub fn schema_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.input_schema).unwrap_or_else(|_| self.input_schema.to_string())
    }
}

impl From<&ToolDescriptor> for ToolDetail {
    fn from(tool: &ToolDescriptor) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            category: tool.category(),
            input_schema: tool.input_schema.clone(),
            required: tool.required_params().into_iter().map(str::to_string).collect(),
        }
    }
}

/// Renders catalog data as terminal text
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogView {
    /// Print each tool's description next to its name
    pub show_descriptions: bool,
}

impl CatalogView {
    pub fn new(show_descriptions: bool) -> Self {
        Self { show_descriptions }
    }

    /// Full grid: one card per non-empty category
    pub fn render(&self, catalog: &CategorizedCatalog) -> String {
        if catalog.is_empty() {
            return format!("{}\n", "No tools available".yellow());
        }

        let cards: Vec<String> = catalog
            .iter()
            .map(|(category, tools)| self.render_card(category, tools))
            .collect();

        format!(
            "{}\n\n{}",
            format!(
                "{} tools in {} categories",
                catalog.tool_count(),
                catalog.len()
            )
            .bold(),
            cards.join("\n")
        )
    }

    /// One category card
    pub fn render_card(&self, category: Category, tools: &[ToolDescriptor]) -> String {
        let mut out = format!(
            "{} {}  {}\n",
            category.glyph(),
            category.label().cyan().bold(),
            format!("({} tools available)", tools.len()).dimmed()
        );

        for tool in tools {
            if self.show_descriptions && !tool.description.is_empty() {
                out.push_str(&format!("    {}  {}\n", tool.name, tool.description.dimmed()));
            } else {
                out.push_str(&format!("    {}\n", tool.name));
            }
        }
        out
    }

    /// Category table without tool names
    pub fn render_summaries(&self, summaries: &[CategorySummary]) -> String {
        if summaries.is_empty() {
            return format!("{}\n", "No tools available".yellow());
        }

        let width = summaries
            .iter()
            .map(|s| s.category.label().len())
            .max()
            .unwrap_or(0);

        summaries
            .iter()
            .map(|s| {
                format!(
                    "{} {:<width$}  {:>4}  {}\n",
                    s.category.glyph(),
                    s.category.label(),
                    s.count,
                    s.icon.dimmed(),
                    width = width
                )
            })
            .collect()
    }

    pub fn render_detail(&self, detail: &ToolDetail) -> String {
        let description = if detail.description.is_empty() {
            "(no description)".to_string()
        } else {
            detail.description.clone()
        };

        let required = if detail.required.is_empty() {
            String::new()
        } else {
            format!("{} {}\n\n", "Required:".bold(), detail.required.join(", "))
        };

        format!(
            "{}\n{} {}\n\n{}\n\n{}{}\n{}\n",
            detail.name.bold(),
            "Category:".dimmed(),
            detail.category,
            description,
            required,
            "Input Schema:".bold(),
            detail.schema_pretty()
        )
    }
}

/// Machine-readable catalog for `--json`
pub fn catalog_json(catalog: &CategorizedCatalog) -> Value {
    let categories: Vec<Value> = catalog
        .iter()
        .map(|(category, tools)| {
            json!({
                "category": category,
                "icon": category.icon(),
                "count": tools.len(),
                "tools": tools
                    .iter()
                    .map(|t| json!({ "name": t.name, "description": t.description }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "total": catalog.tool_count(),
        "categories": categories,
    })
}
