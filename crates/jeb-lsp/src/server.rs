//! Main LSP server implementation

use anyhow::Result;
use jeb_catalogue::{CatalogueContext, CatalogueSource};
use std::sync::Arc;
use tower_lsp::{LspService, Server};
use tracing::info;

use crate::backend::JebLanguageBackend;

/// Serve the language protocol on stdin/stdout until the client exits
pub async fn run_lsp_server(context: Arc<CatalogueContext>, source: CatalogueSource) -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| JebLanguageBackend::new(client, context, source));

    info!("language server listening on stdio");
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
