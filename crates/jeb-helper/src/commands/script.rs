//! New script scaffolding

use anyhow::{Context, Result};
use colored::Colorize;
use jeb_catalogue::scaffold::{render_script, script_file_name};
use std::fs;
use std::path::Path;

/// Write `<dir>/<name>.py` from the script template
pub fn new_script(name: &str, dir: &Path, force: bool) -> Result<()> {
    let contents = render_script(name)?;
    let path = dir.join(script_file_name(name));

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "✓ Created".bright_green(), path.display());
    Ok(())
}
