//! Hover information for catalogue types

use jeb_catalogue::{word_at, CatalogueContext, CatalogueIndex, Direction, TypeRecord};
use std::sync::Arc;
use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use crate::document::Document;

/// Hover provider backed by the catalogue
#[derive(Debug)]
pub struct HoverProvider {
    context: Arc<CatalogueContext>,
}

impl HoverProvider {
    /// Create a provider reading from `context`
    pub fn new(context: Arc<CatalogueContext>) -> Self {
        Self { context }
    }

    /// Hover for the type name under the cursor, if it is in the catalogue
    pub fn get_hover(&self, document: &Document, position: Position) -> Option<Hover> {
        let (line, offset) = document.line_at(position)?;
        let word = word_at(&line, offset, Direction::Both);
        let index = self.context.snapshot();
        let record = index.record_for_simple_name(word)?;

        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: render_record(&index, record),
            }),
            range: None,
        })
    }
}

fn render_record(index: &CatalogueIndex, record: &TypeRecord) -> String {
    let mut sections = vec![format!(
        "```python\n{} {}\n```",
        record.kind, record.qualified_name
    )];

    if let Some(super_type) = &record.super_type {
        sections.push(format!("**Extends**: `{super_type}`"));
    }
    if !record.interfaces.is_empty() {
        let list: Vec<String> = record.interfaces.iter().map(|i| format!("`{i}`")).collect();
        sections.push(format!("**Implements**: {}", list.join(", ")));
    }
    if !record.methods.is_empty() {
        sections.push(format!("**Methods**: {}", record.methods.len()));
    }
    if let Some(url) = index.documentation_url(&record.qualified_name) {
        sections.push(format!("[API reference]({url})"));
    }

    sections.join("\n\n")
}
