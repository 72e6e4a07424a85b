//! Document management

use dashmap::DashMap;
use ropey::Rope;
use tower_lsp::lsp_types::{Position, Url};

/// A document in the workspace
#[derive(Debug, Clone)]
pub struct Document {
    /// Document URI
    pub uri: Url,

    /// Document version
    pub version: i32,

    /// Document text
    pub text: String,

    /// Rope for position conversions
    pub rope: Rope,
}

impl Document {
    /// Create a new document
    pub fn new(uri: Url, version: i32, text: String) -> Self {
        let rope = Rope::from(text.as_str());
        Self {
            uri,
            version,
            text,
            rope,
        }
    }

    /// Update document text
    pub fn update(&mut self, version: i32, text: String) {
        self.version = version;
        self.text = text;
        self.rope = Rope::from(self.text.as_str());
    }

    /// Line under `position` without its line break, plus the cursor's byte
    /// offset inside it
    pub fn line_at(&self, position: Position) -> Option<(String, usize)> {
        let line_idx = position.line as usize;
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let utf16 = (position.character as usize).min(line.len_utf16_cu());
        let byte = line.char_to_byte(line.utf16_cu_to_char(utf16));

        let text = line.to_string();
        let text = text.trim_end_matches(['\n', '\r']).to_string();
        Some((text.clone(), byte.min(text.len())))
    }

    /// LSP position of a byte offset into [`Self::text`]
    pub fn position_of(&self, byte: usize) -> Position {
        let char_idx = self.rope.byte_to_char(byte.min(self.rope.len_bytes()));
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        let character =
            self.rope.char_to_utf16_cu(char_idx) - self.rope.char_to_utf16_cu(line_start);

        Position {
            line: u32::try_from(line).unwrap_or(u32::MAX),
            character: u32::try_from(character).unwrap_or(u32::MAX),
        }
    }
}

/// Document store
#[derive(Debug, Default)]
pub struct DocumentStore {
    /// Documents indexed by URI
    documents: DashMap<Url, Document>,
}

impl DocumentStore {
    /// Create a new document store
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open a document
    pub fn open_document(&self, uri: Url, version: i32, text: String) {
        let document = Document::new(uri.clone(), version, text);
        self.documents.insert(uri, document);
    }

    /// Update a document
    pub fn update_document(&self, uri: &Url, version: i32, text: String) {
        if let Some(mut doc) = self.documents.get_mut(uri) {
            doc.update(version, text);
        }
    }

    /// Close a document
    pub fn close_document(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a document
    pub fn get_document(&self, uri: &Url) -> Option<Document> {
        self.documents.get(uri).map(|doc| doc.clone())
    }
}
