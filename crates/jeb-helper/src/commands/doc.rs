//! API reference navigation

use anyhow::{Context, Result};
use std::process::Command;
use tracing::info;

use super::{require, Session};

/// Print the documentation URL for `name`, optionally opening it
pub fn execute(session: &Session, name: &str, open: bool) -> Result<()> {
    let index = session.index();
    let qualified = require(&index, name)?;
    let url = index
        .documentation_url(qualified)
        .with_context(|| format!("No documentation page for {qualified}"))?;

    println!("{url}");
    if open {
        info!(%url, "navigating to documentation");
        open_in_browser(&url)?;
    }
    Ok(())
}

fn open_in_browser(url: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    let status = command
        .arg(url)
        .status()
        .context("Failed to launch the system browser")?;
    anyhow::ensure!(status.success(), "Browser launcher exited with {status}");
    Ok(())
}
