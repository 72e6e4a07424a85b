//! Import statement insertion

use anyhow::{Context, Result};
use colored::Colorize;
use jeb_catalogue::import_edit;
use std::fs;
use std::path::Path;
use tracing::info;

use super::{require, Session};

/// Print the import for `name`, or add it to `file`
pub fn execute(session: &Session, name: &str, file: Option<&Path>, write: bool) -> Result<()> {
    let index = session.index();
    let qualified = require(&index, name)?;
    let import = index
        .import_statement(qualified)
        .with_context(|| format!("Cannot build an import for {qualified}"))?;

    let Some(file) = file else {
        println!("{import}");
        return Ok(());
    };

    let buffer = fs::read_to_string(file)
        .with_context(|| format!("Failed to read script: {}", file.display()))?;

    let Some(edit) = import_edit(&buffer, &import) else {
        eprintln!("{} {}", "Already imported:".bright_yellow(), import);
        if !write {
            print!("{buffer}");
        }
        return Ok(());
    };

    let updated = edit.apply(&buffer);
    if write {
        fs::write(file, &updated)
            .with_context(|| format!("Failed to write script: {}", file.display()))?;
        info!(file = %file.display(), %import, "import added");
        eprintln!("{} {}", "Added:".bright_green(), import);
    } else {
        print!("{updated}");
    }
    Ok(())
}
