mod types;

pub use types::{ChapterGroup, VocabEntry};
