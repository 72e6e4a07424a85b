//! Command-line interface definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JEB script development helper
#[derive(Parser, Debug)]
#[command(name = "jeb-helper")]
#[command(version)]
#[command(about = "Autocompletion, imports and API docs for JEB decompiler scripts")]
#[command(long_about = "
Helpers for writing Python scripts against the JEB decompiler API.

The API catalogue is read from the user copy (see `update`) when present,
otherwise from the catalogue bundled with this tool.
")]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(short = 'c', long, global = true, env = "JEB_HELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// User catalogue file overriding the bundled one
    #[arg(long, global = true, env = "JEB_HELPER_CATALOGUE")]
    pub catalogue: Option<PathBuf>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the qualified name of a type
    Resolve {
        /// Simple type name, e.g. IScript
        name: String,
    },

    /// Print a type's catalogue record as JSON
    Info {
        /// Simple or qualified type name
        name: String,
    },

    /// List completion candidates for a cursor position
    Complete {
        /// Text of the current line
        line: String,

        /// Cursor byte offset in the line (defaults to end of line)
        #[arg(short, long)]
        offset: Option<usize>,

        /// Emit JSON instead of tab-separated labels
        #[arg(long)]
        json: bool,
    },

    /// Print or insert the import statement for a type
    Import {
        /// Simple or qualified type name
        name: String,

        /// Script to add the import to
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Modify the file in place instead of printing the result
        #[arg(short, long, requires = "file")]
        write: bool,
    },

    /// Print (or open) the API reference URL for a type
    Doc {
        /// Simple or qualified type name
        name: String,

        /// Open the page in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Create a new script from the template
    NewScript {
        /// Class name, also used as the file name
        #[arg(default_value = jeb_catalogue::scaffold::DEFAULT_SCRIPT_NAME)]
        name: String,

        /// Directory to create the script in
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Download the latest API catalogue into the user copy
    Update {
        /// Catalogue URL (defaults to the settings value)
        #[arg(long)]
        url: Option<String>,

        /// Destination (defaults to the user catalogue path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the Language Server Protocol (LSP) server on stdio
    Lsp,

    /// Display version information
    Version,
}
