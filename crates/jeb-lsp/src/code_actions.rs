//! Code actions: add an import, open the API reference
//!
//! Both act on the type name under the cursor, resolved through the
//! catalogue's simple-name map.

use jeb_catalogue::{import_edit, word_at, CatalogueContext, Direction};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, Command, Position, Range, TextEdit,
    WorkspaceEdit,
};

use crate::document::Document;

/// Command that opens a documentation URL in the browser
pub const OPEN_DOCUMENTATION_COMMAND: &str = "jeb.openDocumentation";

/// Command that re-reads the catalogue
pub const RELOAD_CATALOGUE_COMMAND: &str = "jeb.reloadCatalogue";

/// All commands the server executes
pub fn supported_commands() -> Vec<String> {
    vec![
        OPEN_DOCUMENTATION_COMMAND.to_string(),
        RELOAD_CATALOGUE_COMMAND.to_string(),
    ]
}

/// Code action provider
#[derive(Debug)]
pub struct CodeActionProvider {
    context: Arc<CatalogueContext>,
}

impl CodeActionProvider {
    /// Create a provider reading from `context`
    pub fn new(context: Arc<CatalogueContext>) -> Self {
        Self { context }
    }

    /// Actions for the word at `position`
    pub fn get_code_actions(&self, document: &Document, position: Position) -> Vec<CodeActionOrCommand> {
        let Some((line, offset)) = document.line_at(position) else {
            return Vec::new();
        };
        let word = word_at(&line, offset, Direction::Both);
        if word.is_empty() {
            return Vec::new();
        }

        let index = self.context.snapshot();
        let mut actions = Vec::new();

        if let Some(import) = index.import_for_word(word) {
            if let Some(edit) = import_edit(&document.text, &import) {
                let at = document.position_of(edit.offset);
                let mut changes = HashMap::new();
                changes.insert(
                    document.uri.clone(),
                    vec![TextEdit {
                        range: Range { start: at, end: at },
                        new_text: edit.text,
                    }],
                );

                actions.push(CodeActionOrCommand::CodeAction(CodeAction {
                    title: format!("Add `{import}`"),
                    kind: Some(CodeActionKind::QUICKFIX),
                    edit: Some(WorkspaceEdit {
                        changes: Some(changes),
                        ..Default::default()
                    }),
                    ..Default::default()
                }));
            }
        }

        if let Some(url) = index.documentation_url_for_word(word) {
            actions.push(CodeActionOrCommand::Command(Command {
                title: format!("Open documentation for {word}"),
                command: OPEN_DOCUMENTATION_COMMAND.to_string(),
                arguments: Some(vec![Value::String(url)]),
            }));
        }

        actions
    }
}
