//! Scan orchestration: configuration resolution, catalog load/save, and the
//! user-facing summary lines.

use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::catalog::Catalog;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::extract::Extractor;
use crate::scanner::scan_dir;

/// Success mark for consistent output formatting.
const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Effective settings after merging CLI flags over the config file.
struct Settings {
    languages: Vec<String>,
    marker: String,
    messages: PathBuf,
}

impl Settings {
    fn resolve(args: &Arguments, config: Config) -> Self {
        let languages = match &args.languages {
            Some(list) => split_languages(list),
            None => config.languages,
        };
        let marker = args.marker.clone().unwrap_or(config.marker);
        let messages = args
            .messages
            .clone()
            .unwrap_or_else(|| PathBuf::from(config.messages));

        Self {
            languages,
            marker,
            messages,
        }
    }
}

/// Split a comma-separated locale list, dropping empty segments so that a
/// stray trailing comma never registers an empty locale.
fn split_languages(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|locale| !locale.is_empty())
        .map(String::from)
        .collect()
}

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(dir) = args.dir.clone() else {
        bail!("No scan directory provided. Use --help to see usage.")
    };

    let loaded = load_config(&dir)?;
    if args.verbose && loaded.from_file {
        eprintln!("Using configuration from {}", CONFIG_FILE_NAME);
    }
    let settings = Settings::resolve(&args, loaded.config);

    // Built before any catalog I/O so a bad marker aborts with nothing
    // partially written.
    let extractor = Extractor::new(&settings.marker)?;

    let mut catalog = if settings.messages.exists() {
        match Catalog::load(&settings.messages) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!(
                    "{} {:#}; starting with an empty catalog",
                    "warning:".bold().yellow(),
                    err
                );
                Catalog::new()
            }
        }
    } else {
        Catalog::new()
    };

    for locale in &settings.languages {
        catalog.add_locale(locale);
    }

    let outcome = scan_dir(&dir, &extractor, &mut catalog, args.verbose);

    catalog.save(&settings.messages)?;

    println!("Found {} messages", outcome.messages_found);
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Catalog saved to {}", settings.messages.display()).green()
    );

    Ok(ExitStatus::Success)
}
