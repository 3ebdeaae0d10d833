//! Directory traversal feeding file contents through the extractor into the
//! catalog.
//!
//! Every regular file under the root is scanned, whatever its extension;
//! the extractor is permissive text matching, so there is nothing to gain
//! from guessing which files might contain marker calls. Unreadable entries
//! are logged and skipped, never fatal.

use std::fs;
use std::path::Path;

use colored::Colorize;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::extract::Extractor;

/// Counters accumulated over one scan pass.
///
/// `messages_found` counts every extracted occurrence, duplicates included;
/// the catalog deduplicates on insertion.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files_scanned: usize,
    pub messages_found: usize,
}

/// Walk `root`, extract marker-call literals from each regular file, and
/// fold them into the catalog.
pub fn scan_dir(
    root: &Path,
    extractor: &Extractor,
    catalog: &mut Catalog,
    verbose: bool,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!(
                    "{} Unable to read file {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    err
                );
                continue;
            }
        };

        if verbose {
            eprintln!("Parsing {}", path.display());
        }

        // Lossy conversion keeps binary-ish files scannable instead of
        // skipping them on the first invalid byte.
        let content = String::from_utf8_lossy(&raw);
        for key in extractor.extract(&content) {
            catalog.add(&key);
            outcome.messages_found += 1;
        }
        outcome.files_scanned += 1;
    }

    outcome
}
