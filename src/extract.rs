//! Marker-call literal extraction.
//!
//! The extractor is deliberately not a language parser. It pattern-matches
//! call-like text (`marker("...")` / `marker('...')`) over raw file content,
//! whatever the file type, which keeps it useful across templates, scripts
//! and markup at the cost of ignoring escape sequences inside literals.

use anyhow::{Context, Result};
use regex::Regex;

#[derive(Debug)]
pub struct Extractor {
    double_quoted: Regex,
    single_quoted: Regex,
}

impl Extractor {
    /// Compile the extraction patterns for one marker name.
    ///
    /// The marker is spliced in verbatim, not escaped: callers who use a
    /// marker containing regex metacharacters must escape it themselves. An
    /// unbalanced marker fails compilation and is reported as a
    /// configuration error.
    pub fn new(marker: &str) -> Result<Self> {
        // Matches _("bla")
        let double_quoted = Regex::new(&format!(r#"{marker}\([ ]*"(.+)"[ ]*[,)]"#))
            .with_context(|| pattern_error(marker))?;

        // Matches _('bla')
        let single_quoted = Regex::new(&format!(r"{marker}\([ ]*'(.+)'[ ]*[,)]"))
            .with_context(|| pattern_error(marker))?;

        Ok(Self {
            double_quoted,
            single_quoted,
        })
    }

    /// Extract every marker-call literal from `text`.
    ///
    /// The double-quote pattern runs over the whole input first, then the
    /// single-quote pattern; each pass yields its matches in source order
    /// and the two result sets are concatenated. Duplicates are preserved,
    /// deduplication is the catalog's job. Captures are greedy within a
    /// line, so a literal containing its own quote character ends at the
    /// last candidate quote, not the first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut keys = Vec::new();
        for pattern in [&self.double_quoted, &self.single_quoted] {
            for captures in pattern.captures_iter(text) {
                if let Some(literal) = captures.get(1) {
                    keys.push(literal.as_str().to_string());
                }
            }
        }
        keys
    }
}

fn pattern_error(marker: &str) -> String {
    format!(
        "Unable to compile extraction pattern for marker {:?}; check for special regex characters in the marker name",
        marker
    )
}
