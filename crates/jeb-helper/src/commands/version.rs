//! Version command implementation

use anyhow::Result;
use colored::Colorize;

/// Display version information
pub fn execute() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    println!("{}", "JEB Script Helper".bright_blue().bold());
    println!("{}: {}", "Version".bright_cyan(), VERSION);
    println!("{}: {}", "Catalogue library".bright_cyan(), jeb_catalogue::VERSION);
    println!();
    println!("{}", DESCRIPTION.dimmed());
    println!();
    println!("{}", "Features:".bright_green());
    println!("  • Type and method autocompletion");
    println!("  • Import statement insertion");
    println!("  • API reference navigation");
    println!("  • Script scaffolding");
    println!("  • Language Server Protocol");

    Ok(())
}
