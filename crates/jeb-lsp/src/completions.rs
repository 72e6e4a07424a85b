//! Completion of JEB type names and method signatures

use jeb_catalogue::{Candidate, CatalogueContext, CompletionScope};
use std::sync::Arc;
use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionItemLabelDetails, InsertTextFormat, Position,
};

use crate::document::Document;

/// Turns catalogue candidates into LSP completion items
#[derive(Debug)]
pub struct CompletionProvider {
    context: Arc<CatalogueContext>,
}

impl CompletionProvider {
    /// Create a provider reading from `context`
    pub fn new(context: Arc<CatalogueContext>) -> Self {
        Self { context }
    }

    /// Completions for the cursor at `position`
    pub fn get_completions(&self, document: &Document, position: Position) -> Vec<CompletionItem> {
        let Some((line, offset)) = document.line_at(position) else {
            return Vec::new();
        };
        let scope = CompletionScope::at(&line, offset);
        let index = self.context.snapshot();

        index
            .candidates_for(scope)
            .iter()
            .map(|candidate| to_completion_item(candidate, scope))
            .collect()
    }
}

/// LSP form of a catalogue candidate
pub fn to_completion_item(candidate: &Candidate, scope: CompletionScope) -> CompletionItem {
    let kind = match scope {
        CompletionScope::Types => CompletionItemKind::CLASS,
        CompletionScope::Members => CompletionItemKind::METHOD,
    };
    let insert_text_format = if candidate.is_snippet {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    CompletionItem {
        label: candidate.trigger.clone(),
        label_details: Some(CompletionItemLabelDetails {
            detail: None,
            description: Some(candidate.annotation.clone()),
        }),
        kind: Some(kind),
        detail: Some(candidate.annotation.clone()),
        insert_text: Some(candidate.insertion.clone()),
        insert_text_format: Some(insert_text_format),
        ..Default::default()
    }
}
