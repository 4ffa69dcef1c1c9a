use verba_types::VocabEntry;

/// Line classification interface for vocabulary list grammars.
///
/// A grammar looks at one trimmed, non-empty line at a time and decides
/// what it is. Headings take precedence over entries; a line matching
/// neither is dropped by the caller.
pub trait ListGrammar: Send + Sync {
    /// Language identifier (ISO 639-1 code: "la", "el", etc.)
    fn language_code(&self) -> &str;

    /// Recognize a chapter heading and return its normalized title
    fn heading(&self, line: &str) -> Option<String>;

    /// Parse a vocabulary line into an entry
    fn entry(&self, line: &str) -> Option<VocabEntry>;
}
