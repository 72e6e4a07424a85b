//! User settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CatalogueError, CatalogueResult};
use crate::index::DEFAULT_DOC_BASE_URL;
use crate::source::{default_user_catalogue_path, CATALOGUE_FILE_NAME};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "jeb-helper";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Helper settings, all optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log what the helper does
    #[serde(default)]
    pub verbose: bool,

    /// Root of the API reference pages
    #[serde(default = "default_doc_base_url")]
    pub doc_base_url: String,

    /// Where `update` downloads the catalogue from
    #[serde(default = "default_catalogue_url")]
    pub catalogue_url: String,

    /// User catalogue that overrides the bundled one
    #[serde(default)]
    pub catalogue_path: Option<PathBuf>,
}

fn default_doc_base_url() -> String {
    DEFAULT_DOC_BASE_URL.to_string()
}

fn default_catalogue_url() -> String {
    format!("{DEFAULT_DOC_BASE_URL}/{CATALOGUE_FILE_NAME}")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            doc_base_url: default_doc_base_url(),
            catalogue_url: default_catalogue_url(),
            catalogue_path: None,
        }
    }
}

impl Settings {
    /// Platform location of the settings file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Parse settings from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> CatalogueResult<Self> {
        toml::from_str(text).map_err(|source| CatalogueError::Settings {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> CatalogueResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(CatalogueError::io(path, e)),
        }
    }

    /// Load from the given path, or the platform default location
    pub fn load_or_default(path: Option<&Path>) -> CatalogueResult<Self> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Override catalogue location, explicit or platform default
    pub fn user_catalogue_path(&self) -> Option<PathBuf> {
        self.catalogue_path
            .clone()
            .or_else(default_user_catalogue_path)
    }
}
