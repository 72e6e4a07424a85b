//! jeb-helper - editor helpers for JEB decompiler scripts
//!
//! Entry point for the CLI: catalogue queries, import insertion, API docs,
//! script scaffolding, catalogue updates and the language server.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands::Session;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let settings = commands::load_settings(cli.config.as_deref())?;

    // The settings flag counts as one -v
    init_logging(cli.verbose.max(u8::from(settings.verbose)));

    let catalogue = cli.catalogue;
    let open = || Session::open(&settings, catalogue.clone());

    match cli.command {
        Commands::Resolve { name } => commands::query::resolve(&open()?, &name),
        Commands::Info { name } => commands::query::info(&open()?, &name),
        Commands::Complete { line, offset, json } => {
            commands::query::complete(&open()?, &line, offset, json)
        }
        Commands::Import { name, file, write } => {
            commands::import::execute(&open()?, &name, file.as_deref(), write)
        }
        Commands::Doc { name, open: launch } => commands::doc::execute(&open()?, &name, launch),
        Commands::NewScript { name, dir, force } => commands::script::new_script(&name, &dir, force),
        Commands::Update { url, output } => {
            let url = url.unwrap_or_else(|| settings.catalogue_url.clone());
            let output = output
                .or_else(|| catalogue.clone())
                .or_else(|| settings.user_catalogue_path());
            commands::update::execute(&url, output).await
        }
        Commands::Lsp => commands::lsp::start(open()?).await,
        Commands::Version => commands::version::execute(),
    }
}

/// Initialize logging/tracing based on verbosity level
///
/// Output goes to stderr so the language server's stdout stays clean.
fn init_logging(verbose: u8) {
    let filter_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
