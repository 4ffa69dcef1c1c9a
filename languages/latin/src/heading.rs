use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// English number names the source lists spell out in headings.
/// Anything outside this closed set (TWENTY, digits) passes through.
const NUMBER_WORDS: &[(&str, &str)] = &[
    ("ONE", "1"),
    ("TWO", "2"),
    ("THREE", "3"),
    ("FOUR", "4"),
    ("FIVE", "5"),
    ("SIX", "6"),
    ("SEVEN", "7"),
    ("EIGHT", "8"),
    ("NINE", "9"),
    ("TEN", "10"),
    ("ELEVEN", "11"),
    ("TWELVE", "12"),
    ("THIRTEEN", "13"),
    ("FOURTEEN", "14"),
    ("FIFTEEN", "15"),
    ("SIXTEEN", "16"),
    ("SEVENTEEN", "17"),
    ("EIGHTEEN", "18"),
    ("NINETEEN", "19"),
];

static HEADING_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^chapter\b").expect("valid regex"));

static CHAPTER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bchapter\b").expect("valid regex"));

static VOCABULARY_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bvocabulary\b").expect("valid regex"));

static NUMBER_WORD: Lazy<Regex> = Lazy::new(|| {
    let names = NUMBER_WORDS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({names})\b")).expect("valid regex")
});

/// A trimmed line is a heading iff it starts with the whole word "chapter",
/// case-insensitively. "CHAPTERS ..." is not a heading.
pub fn is_heading(line: &str) -> bool {
    HEADING_START.is_match(line)
}

/// Normalize a heading line into a chapter title:
/// canonical "Chapter", spelled-out numbers to digits, the word
/// "vocabulary" removed, surrounding whitespace trimmed.
pub fn normalize_title(line: &str) -> String {
    let title = CHAPTER_WORD.replace_all(line, "Chapter");
    let title = NUMBER_WORD.replace_all(&title, |caps: &Captures| {
        match digit_for(&caps[1]) {
            Some(digit) => digit.to_string(),
            None => caps[1].to_string(),
        }
    });
    let title = VOCABULARY_WORD.replace_all(&title, "");
    title.trim().to_string()
}

fn digit_for(name: &str) -> Option<&'static str> {
    let upper = name.to_ascii_uppercase();
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == upper)
        .map(|(_, digit)| *digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_detection_is_case_insensitive() {
        assert!(is_heading("CHAPTER ONE VOCABULARY"));
        assert!(is_heading("chapter two"));
        assert!(is_heading("Chapter 12"));
    }

    #[test]
    fn test_heading_requires_word_boundary() {
        assert!(!is_heading("CHAPTERS OF ROME"));
        assert!(!is_heading("THE CHAPTER ONE"));
        assert!(!is_heading("amō - I love"));
    }

    #[test]
    fn test_normalize_canonical_title() {
        assert_eq!(normalize_title("CHAPTER ONE VOCABULARY"), "Chapter 1");
    }

    #[test]
    fn test_normalize_keeps_digits_and_large_numbers() {
        assert_eq!(normalize_title("CHAPTER 12 VOCABULARY"), "Chapter 12");
        assert_eq!(normalize_title("CHAPTER TWENTY"), "Chapter TWENTY");
    }

    #[test]
    fn test_normalize_replaces_teen_names() {
        assert_eq!(normalize_title("chapter nineteen vocabulary"), "Chapter 19");
        assert_eq!(normalize_title("CHAPTER SEVENTEEN"), "Chapter 17");
    }

    #[test]
    fn test_number_word_inside_another_word_is_kept() {
        assert_eq!(
            normalize_title("CHAPTER ONEROUS VOCABULARY"),
            "Chapter ONEROUS"
        );
    }

    #[test]
    fn test_normalize_preserves_extra_words() {
        assert_eq!(
            normalize_title("CHAPTER FOUR VOCABULARY REVIEW"),
            "Chapter 4  REVIEW"
        );
    }
}
