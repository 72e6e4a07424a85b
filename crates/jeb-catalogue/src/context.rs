//! Shared, reloadable handle on the current index

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::CatalogueResult;
use crate::index::CatalogueIndex;
use crate::source::{CatalogueOrigin, CatalogueSource};

/// Owns the installed [`CatalogueIndex`]
///
/// Readers take an `Arc` snapshot and never see a half-built index. Reloads
/// build the replacement first and swap it in only on success.
#[derive(Debug)]
pub struct CatalogueContext {
    current: RwLock<Arc<CatalogueIndex>>,
    doc_base_url: Option<String>,
}

impl CatalogueContext {
    /// Wrap an already built index
    pub fn new(index: CatalogueIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            doc_base_url: None,
        }
    }

    /// Load from `source`, applying `doc_base_url` to this and later indexes
    pub fn load(source: &CatalogueSource, doc_base_url: Option<&str>) -> CatalogueResult<Self> {
        let loaded = source.load()?;
        let mut index = CatalogueIndex::build(&loaded.text)?;
        if let Some(base) = doc_base_url {
            index = index.with_doc_base_url(base);
        }
        info!(origin = %loaded.origin, types = index.len(), "catalogue loaded");

        Ok(Self {
            current: RwLock::new(Arc::new(index)),
            doc_base_url: doc_base_url.map(str::to_string),
        })
    }

    /// Current index
    pub fn snapshot(&self) -> Arc<CatalogueIndex> {
        Arc::clone(&*self.current.read())
    }

    /// Rebuild from text and install the result
    ///
    /// On error the previously installed index stays in place.
    pub fn reload_from_text(&self, text: &str) -> CatalogueResult<Arc<CatalogueIndex>> {
        let mut index = match CatalogueIndex::build(text) {
            Ok(index) => index,
            Err(e) => {
                warn!(error = %e, "catalogue reload failed, keeping previous index");
                return Err(e);
            }
        };
        if let Some(base) = &self.doc_base_url {
            index = index.with_doc_base_url(base);
        }

        let index = Arc::new(index);
        *self.current.write() = Arc::clone(&index);
        Ok(index)
    }

    /// Re-read `source` and reload
    pub fn reload(&self, source: &CatalogueSource) -> CatalogueResult<CatalogueOrigin> {
        let loaded = source.load()?;
        let index = self.reload_from_text(&loaded.text)?;
        info!(origin = %loaded.origin, types = index.len(), "catalogue reloaded");
        Ok(loaded.origin)
    }
}
