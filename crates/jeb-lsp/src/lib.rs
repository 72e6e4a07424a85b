//! Language Server Protocol front end for JEB script development
//!
//! Serves catalogue-backed completions, hovers and code actions (add import,
//! open API reference) to any LSP-capable editor.

pub mod backend;
pub mod capabilities;
pub mod code_actions;
pub mod completions;
pub mod document;
pub mod hover;
pub mod server;

// Re-export main types
pub use backend::JebLanguageBackend;
pub use server::run_lsp_server;
