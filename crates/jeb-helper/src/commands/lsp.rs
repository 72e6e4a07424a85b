//! Language server command

use anyhow::Result;

use super::Session;

/// Serve LSP on stdio with the session's catalogue
pub async fn start(session: Session) -> Result<()> {
    jeb_lsp::run_lsp_server(session.context, session.source).await
}
