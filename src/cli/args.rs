//! CLI argument definitions using clap.
//!
//! Glean is a single-purpose tool, so the surface is a flat set of flags
//! rather than subcommands. Every flag except `--dir` has a built-in default
//! that can also be supplied through `.gleanrc.json`; command-line values win
//! over the config file.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Comma-separated locale identifiers to register in the catalog
    /// (overrides config file) [default: en,zh]
    #[arg(short, long)]
    pub languages: Option<String>,

    /// Translation marker function name. The name is spliced into the
    /// extraction pattern verbatim, so escape any regex metacharacters
    /// yourself (overrides config file) [default: _]
    #[arg(short = 'k', long)]
    pub marker: Option<String>,

    /// Directory to scan
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Path of the message catalog file to update
    /// (overrides config file) [default: messages.json]
    #[arg(short, long)]
    pub messages: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Check that a scan directory was provided, otherwise print help and
    /// return None.
    ///
    /// The missing-directory path deliberately reports success to the shell
    /// (usage plus an error line, exit status 0), matching the tool's
    /// long-standing behavior that downstream scripts rely on.
    pub fn with_dir_or_help(self) -> Option<Self> {
        if self.dir.is_none() {
            Self::command().print_help().ok();
            eprintln!("\nError: missing --dir argument");
            None
        } else {
            Some(self)
        }
    }
}
