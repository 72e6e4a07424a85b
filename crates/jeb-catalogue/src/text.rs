//! Editing helpers: words under the cursor, completion scope, import placement
//!
//! Offsets are byte offsets into the line or buffer. Identifier characters are
//! ASCII, so scanning never splits a multi-byte character as long as the
//! starting offset is on a character boundary.

use serde::Serialize;

/// Letters, digits and underscore
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Which way to grow a word from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Maximal run on both sides of the cursor
    #[default]
    Both,
    /// Only the run ending at the cursor
    Left,
    /// Only the run starting at the cursor
    Right,
}

/// Identifier run touching `offset` in `line`
///
/// Returns an empty string when there is none, or when a one-sided scan would
/// cut a word in half.
pub fn word_at(line: &str, offset: usize, direction: Direction) -> &str {
    let bytes = line.as_bytes();
    let offset = offset.min(bytes.len());
    if !line.is_char_boundary(offset) {
        return "";
    }
    let is_ident = |i: usize| is_identifier_char(char::from(bytes[i]));

    let mut end = offset;
    if direction == Direction::Left {
        if offset < bytes.len() && is_ident(offset) {
            return "";
        }
    } else {
        while end < bytes.len() && is_ident(end) {
            end += 1;
        }
    }

    let mut start = offset;
    if direction == Direction::Right {
        if start > 0 && is_ident(start - 1) {
            return "";
        }
    } else {
        while start > 0 && is_ident(start - 1) {
            start -= 1;
        }
    }

    &line[start..end]
}

/// Which candidate list a completion request should get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionScope {
    /// Type names
    Types,
    /// Method signatures after a member access
    Members,
}

impl CompletionScope {
    /// Decide the scope for a cursor at `offset` in `line`
    ///
    /// A line without `.`, or a cursor right after a space or tab, asks for
    /// types. Everything else is treated as member access.
    pub fn at(line: &str, offset: usize) -> Self {
        if !line.contains('.') {
            return Self::Types;
        }
        let before = line.get(..offset.min(line.len())).and_then(|s| s.chars().next_back());
        match before {
            None | Some(' ' | '\t') => Self::Types,
            Some(_) => Self::Members,
        }
    }
}

/// Text to insert into a buffer to add an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEdit {
    /// Byte offset of the insertion point
    pub offset: usize,
    /// Text to insert there
    pub text: String,
}

impl ImportEdit {
    /// Buffer with the edit applied
    pub fn apply(&self, buffer: &str) -> String {
        let mut out = String::with_capacity(buffer.len() + self.text.len());
        out.push_str(&buffer[..self.offset]);
        out.push_str(&self.text);
        out.push_str(&buffer[self.offset..]);
        out
    }
}

fn is_import(line: &str) -> bool {
    line.starts_with("from ") || line.starts_with("import ")
}

/// Where and what to insert so `import_line` joins the leading import block
///
/// Returns `None` when the exact import is already present in that block.
pub fn import_edit(buffer: &str, import_line: &str) -> Option<ImportEdit> {
    let mut found_import = false;
    let mut insert_at = 0;

    for line in buffer.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if found_import {
                break;
            }
            insert_at += line.len();
        } else if is_import(trimmed) {
            if trimmed == import_line {
                return None;
            }
            found_import = true;
            insert_at += line.len();
        } else {
            break;
        }
    }

    let needs_break = insert_at > 0 && insert_at == buffer.len() && !buffer.ends_with('\n');
    let text = if needs_break {
        format!("\n{import_line}\n")
    } else {
        format!("{import_line}\n")
    };
    Some(ImportEdit {
        offset: insert_at,
        text,
    })
}
