//! Lookup index and query operations over a parsed catalogue

use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

use crate::error::CatalogueResult;
use crate::model::{Candidate, TypeRecord};
use crate::parser::{parse_catalogue, ParsedCatalogue};
use crate::text::CompletionScope;

/// Root of the hosted API reference
pub const DEFAULT_DOC_BASE_URL: &str = "https://www.pnfsoftware.com/jeb/apidoc";

/// Immutable lookup structures built from one catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueIndex {
    simple_name_to_qualified: HashMap<String, String>,
    qualified_to_record: IndexMap<String, TypeRecord>,
    type_candidates: Vec<Candidate>,
    method_candidates: Vec<Candidate>,
    doc_base_url: String,
}

impl CatalogueIndex {
    /// Parse `text` and index it
    pub fn build(text: &str) -> CatalogueResult<Self> {
        Ok(Self::from_parsed(parse_catalogue(text)?))
    }

    /// Index an already parsed catalogue
    pub fn from_parsed(parsed: ParsedCatalogue) -> Self {
        let mut simple_name_to_qualified = HashMap::with_capacity(parsed.records.len());
        let mut qualified_to_record = IndexMap::with_capacity(parsed.records.len());
        let mut type_candidates = Vec::with_capacity(parsed.records.len());

        for record in parsed.records {
            type_candidates.push(Candidate::for_type(&record));

            // Simple names may collide across packages; the last one wins
            if let Some(previous) = simple_name_to_qualified
                .insert(record.simple_name.clone(), record.qualified_name.clone())
            {
                if previous != record.qualified_name {
                    debug!(
                        simple_name = %record.simple_name,
                        replaced = %previous,
                        by = %record.qualified_name,
                        "simple name collision"
                    );
                }
            }
            qualified_to_record.insert(record.qualified_name.clone(), record);
        }

        let method_candidates = parsed.signatures.iter().map(Candidate::for_method).collect();

        Self {
            simple_name_to_qualified,
            qualified_to_record,
            type_candidates,
            method_candidates,
            doc_base_url: DEFAULT_DOC_BASE_URL.to_string(),
        }
    }

    /// Use a different documentation root (no trailing slash needed)
    #[must_use]
    pub fn with_doc_base_url(mut self, base: &str) -> Self {
        self.doc_base_url = base.trim_end_matches('/').to_string();
        self
    }

    /// Documentation root in use
    pub fn doc_base_url(&self) -> &str {
        &self.doc_base_url
    }

    /// Number of indexed types
    pub fn len(&self) -> usize {
        self.qualified_to_record.len()
    }

    /// True when the catalogue had no records
    pub fn is_empty(&self) -> bool {
        self.qualified_to_record.is_empty()
    }

    /// Records in catalogue order
    pub fn records(&self) -> impl Iterator<Item = &TypeRecord> {
        self.qualified_to_record.values()
    }

    /// Qualified name for a simple name
    pub fn resolve_simple_name(&self, name: &str) -> Option<&str> {
        self.simple_name_to_qualified.get(name).map(String::as_str)
    }

    /// Record for a qualified name
    pub fn record(&self, qualified_name: &str) -> Option<&TypeRecord> {
        self.qualified_to_record.get(qualified_name)
    }

    /// Record for a simple name, via [`Self::resolve_simple_name`]
    pub fn record_for_simple_name(&self, name: &str) -> Option<&TypeRecord> {
        self.resolve_simple_name(name).and_then(|q| self.record(q))
    }

    /// Type completions, catalogue order
    pub fn type_candidates(&self) -> &[Candidate] {
        &self.type_candidates
    }

    /// Method completions, first-seen order
    pub fn method_candidates(&self) -> &[Candidate] {
        &self.method_candidates
    }

    /// Candidate list matching a completion scope
    pub fn candidates_for(&self, scope: CompletionScope) -> &[Candidate] {
        match scope {
            CompletionScope::Types => self.type_candidates(),
            CompletionScope::Members => self.method_candidates(),
        }
    }

    /// `<base>/reference/<package/path>/<LocalName>.html`
    pub fn documentation_url(&self, qualified_name: &str) -> Option<String> {
        let record = self.record(qualified_name)?;
        let package_path = record.package_name.replace('.', "/");
        Some(format!(
            "{}/reference/{package_path}/{}.html",
            self.doc_base_url,
            record.local_name()
        ))
    }

    /// `from <package> import <Name>` for an indexed type
    pub fn import_statement(&self, qualified_name: &str) -> Option<String> {
        self.record(qualified_name)?;
        import_line(qualified_name)
    }

    /// Import statement for the type a word under the cursor names
    pub fn import_for_word(&self, word: &str) -> Option<String> {
        self.resolve_simple_name(word)
            .and_then(|q| self.import_statement(q))
    }

    /// Documentation URL for the type a word under the cursor names
    pub fn documentation_url_for_word(&self, word: &str) -> Option<String> {
        self.resolve_simple_name(word)
            .and_then(|q| self.documentation_url(q))
    }
}

/// Split a qualified name at its last dot into an import line
///
/// For nested types the "package" part includes the outer type, which is
/// what the scripting bridge expects.
pub fn import_line(qualified_name: &str) -> Option<String> {
    let (package, name) = qualified_name.rsplit_once('.')?;
    if package.is_empty() || name.is_empty() {
        return None;
    }
    Some(format!("from {package} import {name}"))
}
