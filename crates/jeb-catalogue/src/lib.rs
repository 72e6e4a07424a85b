//! JEB scripting API catalogue
//!
//! This crate parses the flat `jeb-api.txt` catalogue that describes the JEB
//! decompiler's scripting API and builds the lookup structures editor helpers
//! need:
//!
//! - **Parser**: record and method-signature extraction (`parser` module)
//! - **Index**: name resolution, completion lists, import and documentation
//!   queries (`index` module)
//! - **Context**: the reloadable, shareable handle on the current index
//!   (`context` module)
//!
//! Smaller helpers cover catalogue sourcing, settings, cursor text handling
//! and new-script scaffolding.

pub mod context;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod scaffold;
pub mod settings;
pub mod source;
pub mod text;

pub use context::CatalogueContext;
pub use error::{CatalogueError, CatalogueResult, CorruptEntry};
pub use index::{import_line, CatalogueIndex, DEFAULT_DOC_BASE_URL};
pub use model::{Candidate, MethodSignature, TypeKind, TypeRecord};
pub use parser::{parse_catalogue, split_list, ParsedCatalogue};
pub use settings::Settings;
pub use source::{CatalogueOrigin, CatalogueSource, LoadedCatalogue, CATALOGUE_FILE_NAME};
pub use text::{import_edit, word_at, CompletionScope, Direction, ImportEdit};

/// Version information for the jeb-catalogue crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
