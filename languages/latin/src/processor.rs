use verba_core::grammar::ListGrammar;
use verba_types::VocabEntry;

use crate::entry;
use crate::heading;

/// Latin vocabulary list grammar
pub struct LatinGrammar;

impl LatinGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LatinGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl ListGrammar for LatinGrammar {
    fn language_code(&self) -> &str {
        "la"
    }

    fn heading(&self, line: &str) -> Option<String> {
        if !heading::is_heading(line) {
            return None;
        }
        let title = heading::normalize_title(line);
        tracing::debug!("chapter heading: {}", title);
        Some(title)
    }

    fn entry(&self, line: &str) -> Option<VocabEntry> {
        entry::parse_entry(line)
    }
}
