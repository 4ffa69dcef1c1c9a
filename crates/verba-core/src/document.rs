use verba_types::{ChapterGroup, VocabEntry};

use crate::grammar::ListGrammar;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Heading(String),
    Entry(VocabEntry),
    Unrecognized,
}

/// Classify one trimmed, non-empty line. Headings are tried first.
pub fn classify(grammar: &dyn ListGrammar, line: &str) -> LineKind {
    if let Some(title) = grammar.heading(line) {
        return LineKind::Heading(title);
    }
    match grammar.entry(line) {
        Some(entry) => LineKind::Entry(entry),
        None => LineKind::Unrecognized,
    }
}

/// Accumulator for the single pass over the input.
///
/// Each step takes the builder by value and returns it, so the state
/// transition per line is explicit and testable on its own. A heading
/// closes the open chapter and starts a new one; entries append to the
/// open chapter and are dropped when none is open yet.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    chapters: Vec<ChapterGroup>,
    current: Option<ChapterGroup>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(mut self, kind: LineKind) -> Self {
        match kind {
            LineKind::Heading(title) => {
                if let Some(done) = self.current.take() {
                    self.chapters.push(done);
                }
                self.current = Some(ChapterGroup::new(title));
            }
            LineKind::Entry(entry) => match self.current.as_mut() {
                Some(chapter) => chapter.words.push(entry),
                None => {
                    tracing::debug!("dropping entry before first heading: {}", entry.latin);
                }
            },
            LineKind::Unrecognized => {}
        }
        self
    }

    /// Close the open chapter, if any, and hand back the chapter sequence.
    pub fn finish(mut self) -> Vec<ChapterGroup> {
        if let Some(done) = self.current.take() {
            self.chapters.push(done);
        }
        self.chapters
    }
}

/// Run the whole conversion: preprocess each line, skip blanks, classify,
/// and fold into the ordered chapter sequence.
pub fn convert<'a, I>(grammar: &dyn ListGrammar, lines: I) -> Vec<ChapterGroup>
where
    I: IntoIterator<Item = &'a str>,
{
    let preprocessor = DefaultPreprocessor;

    lines
        .into_iter()
        .map(|line| preprocessor.process(line))
        .filter(|line| !line.is_empty())
        .fold(DocumentBuilder::new(), |builder, line| {
            builder.feed(classify(grammar, &line))
        })
        .finish()
}
