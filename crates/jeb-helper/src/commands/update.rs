//! Catalogue download

use anyhow::{Context, Result};
use colored::Colorize;
use jeb_catalogue::CatalogueIndex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fetch the catalogue at `url` and store it as the user copy
///
/// The download is parsed before anything is written, so a broken file never
/// replaces a working one.
pub async fn execute(url: &str, output: Option<PathBuf>) -> Result<()> {
    let output = output.context("No user catalogue location; pass --output")?;

    info!(%url, "downloading catalogue");
    let text = fetch(url).await?;

    let index = CatalogueIndex::build(&text)
        .with_context(|| format!("Downloaded catalogue from {url} is corrupt; nothing written"))?;

    store(&output, &text)?;
    println!(
        "{} {} ({} types)",
        "✓ Updated to latest version:".bright_green(),
        output.display(),
        index.len()
    );
    Ok(())
}

async fn fetch(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to download {url}"))?
        .error_for_status()
        .with_context(|| format!("Server refused {url}"))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))
}

fn store(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
