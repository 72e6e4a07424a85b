//! LSP backend implementation

use jeb_catalogue::{CatalogueContext, CatalogueSource};
use serde_json::Value;
use std::sync::Arc;
use tower_lsp::jsonrpc::{Error as RpcError, Result as LspResult};
use tower_lsp::lsp_types::{
    CodeActionParams, CodeActionResponse, CompletionParams, CompletionResponse,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    ExecuteCommandParams, Hover, HoverParams, InitializeParams, InitializeResult,
    InitializedParams, MessageType, ServerInfo, ShowDocumentParams, Url,
};
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, warn};

use crate::capabilities;
use crate::code_actions::{CodeActionProvider, OPEN_DOCUMENTATION_COMMAND, RELOAD_CATALOGUE_COMMAND};
use crate::completions::CompletionProvider;
use crate::document::DocumentStore;
use crate::hover::HoverProvider;

/// The JEB script language backend
#[derive(Debug)]
pub struct JebLanguageBackend {
    /// LSP client
    pub client: Client,

    /// Document store
    pub documents: Arc<DocumentStore>,

    /// Installed catalogue
    pub context: Arc<CatalogueContext>,

    /// Where reloads read from
    pub source: CatalogueSource,

    /// Completion provider
    pub completion_provider: CompletionProvider,

    /// Hover provider
    pub hover_provider: HoverProvider,

    /// Code actions provider
    pub code_action_provider: CodeActionProvider,
}

impl JebLanguageBackend {
    /// Create a new backend
    pub fn new(client: Client, context: Arc<CatalogueContext>, source: CatalogueSource) -> Self {
        Self {
            client,
            documents: Arc::new(DocumentStore::new()),
            completion_provider: CompletionProvider::new(Arc::clone(&context)),
            hover_provider: HoverProvider::new(Arc::clone(&context)),
            code_action_provider: CodeActionProvider::new(Arc::clone(&context)),
            context,
            source,
        }
    }

    async fn open_documentation(&self, arguments: &[Value]) -> LspResult<Option<Value>> {
        let url = arguments
            .first()
            .and_then(Value::as_str)
            .and_then(|s| Url::parse(s).ok())
            .ok_or_else(|| RpcError::invalid_params("expected a documentation URL"))?;

        debug!(%url, "navigating to documentation");
        let shown = self
            .client
            .show_document(ShowDocumentParams {
                uri: url,
                external: Some(true),
                take_focus: Some(true),
                selection: None,
            })
            .await?;
        Ok(Some(Value::Bool(shown)))
    }

    async fn reload_catalogue(&self) -> LspResult<Option<Value>> {
        match self.context.reload(&self.source) {
            Ok(origin) => {
                self.client
                    .log_message(MessageType::INFO, format!("Reloaded {origin}"))
                    .await;
                Ok(Some(Value::Bool(true)))
            }
            Err(e) => {
                warn!(error = %e, "catalogue reload failed");
                self.client
                    .show_message(
                        MessageType::ERROR,
                        format!("Catalogue reload failed, keeping the current one: {e}"),
                    )
                    .await;
                Ok(Some(Value::Bool(false)))
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for JebLanguageBackend {
    async fn initialize(&self, _: InitializeParams) -> LspResult<InitializeResult> {
        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "jeb-helper".to_string(),
                version: Some(jeb_catalogue::VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let types = self.context.snapshot().len();
        self.client
            .log_message(
                MessageType::INFO,
                format!("JEB script helper initialized with {types} API types"),
            )
            .await;
    }

    async fn shutdown(&self) -> LspResult<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.documents.open_document(doc.uri, doc.version, doc.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // Full sync: the last change carries the whole text
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents.update_document(&uri, version, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close_document(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> LspResult<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        Ok(self.documents.get_document(uri).map(|document| {
            CompletionResponse::Array(self.completion_provider.get_completions(&document, position))
        }))
    }

    async fn hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        Ok(self
            .documents
            .get_document(uri)
            .and_then(|document| self.hover_provider.get_hover(&document, position)))
    }

    async fn code_action(&self, params: CodeActionParams) -> LspResult<Option<CodeActionResponse>> {
        let Some(document) = self.documents.get_document(&params.text_document.uri) else {
            return Ok(None);
        };
        let actions = self
            .code_action_provider
            .get_code_actions(&document, params.range.start);
        Ok((!actions.is_empty()).then_some(actions))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> LspResult<Option<Value>> {
        match params.command.as_str() {
            OPEN_DOCUMENTATION_COMMAND => self.open_documentation(&params.arguments).await,
            RELOAD_CATALOGUE_COMMAND => self.reload_catalogue().await,
            other => Err(RpcError::invalid_params(format!("unknown command `{other}`"))),
        }
    }
}
