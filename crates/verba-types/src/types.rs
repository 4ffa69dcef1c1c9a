use serde::{Deserialize, Serialize};

/// One vocabulary item parsed from a single input line.
///
/// `pos` and `gender` stay empty when the line carried no recognizable tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub latin: String,
    pub translation: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub gender: String,
}

/// A chapter heading together with the entries that followed it,
/// in input order. Field names are what the study page reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterGroup {
    pub chapter: String,
    pub words: Vec<VocabEntry>,
}

impl ChapterGroup {
    pub fn new(chapter: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            words: Vec::new(),
        }
    }
}
