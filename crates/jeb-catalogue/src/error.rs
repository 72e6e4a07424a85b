//! Error types for catalogue loading and script scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Errors raised while loading a catalogue or preparing helper output
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// A catalogue record could not be parsed; the whole load is aborted
    #[error("corrupt catalogue entry at line {line}: {reason}")]
    Corrupt {
        /// 1-based line number of the offending record
        line: usize,
        /// What was wrong with it
        reason: CorruptEntry,
    },

    /// Reading or writing a file failed
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`crate::Settings`]
    #[error("invalid settings in {}: {source}", path.display())]
    Settings {
        /// Settings file
        path: PathBuf,
        /// Decoder error
        #[source]
        source: toml::de::Error,
    },

    /// Script names must be a letter followed by letters and digits
    #[error("illegal script name `{0}`: it must be a legal Python class name, consisting of letters and digits only")]
    InvalidScriptName(String),
}

/// Reasons a single catalogue record is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptEntry {
    /// Method or constructor string without an opening parenthesis
    #[error("bad method `{0}`: missing `(`")]
    MissingParen(String),

    /// Fewer than the ten expected `;`-separated fields
    #[error("expected 10 fields, found {0}")]
    MissingFields(usize),

    /// Group id is not an integer
    #[error("invalid group id `{0}`")]
    InvalidGroupId(String),
}

impl CatalogueError {
    pub(crate) fn corrupt(line: usize, reason: CorruptEntry) -> Self {
        Self::Corrupt { line, reason }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error came from malformed catalogue content
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
