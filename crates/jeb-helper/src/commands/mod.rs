//! Command implementations

pub mod doc;
pub mod import;
pub mod lsp;
pub mod query;
pub mod script;
pub mod update;
pub mod version;

use anyhow::{Context, Result};
use jeb_catalogue::{CatalogueContext, CatalogueIndex, CatalogueSource, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Settings from `path`, or the platform default location
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    Settings::load_or_default(path).context("Failed to load settings")
}

/// Loaded catalogue plus where it came from
#[derive(Debug)]
pub struct Session {
    /// Shared catalogue handle
    pub context: Arc<CatalogueContext>,
    /// Source used for reloads
    pub source: CatalogueSource,
}

impl Session {
    /// Load the catalogue, preferring `catalogue_override` over settings
    pub fn open(settings: &Settings, catalogue_override: Option<PathBuf>) -> Result<Self> {
        let source = CatalogueSource::new(catalogue_override.or_else(|| settings.user_catalogue_path()));
        let context = CatalogueContext::load(&source, Some(&settings.doc_base_url))
            .context("Failed to load the API catalogue")?;

        Ok(Self {
            context: Arc::new(context),
            source,
        })
    }

    /// Current index
    pub fn index(&self) -> Arc<CatalogueIndex> {
        self.context.snapshot()
    }
}

/// Qualified name for either a qualified or a simple type name
pub fn lookup<'a>(index: &'a CatalogueIndex, name: &'a str) -> Option<&'a str> {
    if index.record(name).is_some() {
        Some(name)
    } else {
        index.resolve_simple_name(name)
    }
}

/// Like [`lookup`], with a user-facing error on a miss
pub fn require<'a>(index: &'a CatalogueIndex, name: &'a str) -> Result<&'a str> {
    lookup(index, name).with_context(|| format!("`{name}` is not a type in the API catalogue"))
}
