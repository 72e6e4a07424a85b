//! Where catalogue text comes from
//!
//! A user copy (hand edited or downloaded by `update`) takes precedence over
//! the catalogue compiled into the library, which is likely older.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{CatalogueError, CatalogueResult};
use crate::settings::APP_DIR_NAME;

/// Well-known catalogue file name, locally and on the documentation site
pub const CATALOGUE_FILE_NAME: &str = "jeb-api.txt";

/// Catalogue shipped with the helper
pub const BUNDLED_CATALOGUE: &str = include_str!("../data/jeb-api.txt");

/// Platform location of the user catalogue
pub fn default_user_catalogue_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CATALOGUE_FILE_NAME))
}

/// Origin of loaded catalogue text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueOrigin {
    /// User override file
    User(PathBuf),
    /// Compiled-in default
    Bundled,
}

impl fmt::Display for CatalogueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(path) => write!(f, "user catalogue {}", path.display()),
            Self::Bundled => f.write_str("bundled catalogue"),
        }
    }
}

/// Catalogue text together with where it was read from
#[derive(Debug, Clone)]
pub struct LoadedCatalogue {
    /// Source of the text
    pub origin: CatalogueOrigin,
    /// Raw catalogue
    pub text: String,
}

/// Catalogue lookup order
#[derive(Debug, Clone, Default)]
pub struct CatalogueSource {
    user_override: Option<PathBuf>,
}

impl CatalogueSource {
    /// Prefer `user_override` when it exists
    pub fn new(user_override: Option<PathBuf>) -> Self {
        Self { user_override }
    }

    /// Bundled catalogue only
    pub fn bundled() -> Self {
        Self::default()
    }

    /// Override path being consulted
    pub fn user_override(&self) -> Option<&Path> {
        self.user_override.as_deref()
    }

    /// Read the preferred catalogue text
    pub fn load(&self) -> CatalogueResult<LoadedCatalogue> {
        if let Some(path) = &self.user_override {
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    info!(path = %path.display(), "using user catalogue");
                    return Ok(LoadedCatalogue {
                        origin: CatalogueOrigin::User(path.clone()),
                        text,
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(CatalogueError::io(path, e)),
            }
        }

        info!("using bundled catalogue");
        Ok(LoadedCatalogue {
            origin: CatalogueOrigin::Bundled,
            text: BUNDLED_CATALOGUE.to_string(),
        })
    }
}
