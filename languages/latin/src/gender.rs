/// Gender abbreviations that may close a comma-separated Latin field.
/// Matched exactly, case-sensitive, after trimming.
pub const GENDER_TAGS: &[&str] = &[
    "m.", "f.", "n.", "c.", "m/f", "m./f.", "pl.", "m. pl.", "f. pl.", "n. pl.",
];

/// Split a trailing gender tag off a comma-separated Latin field.
///
/// Only the last comma-separated token is ever inspected; a
/// principal-parts field whose last token is not a known tag is left
/// intact, commas and all. The remaining tokens are rejoined with ", ".
pub fn split_gender(latin: &str) -> (String, String) {
    if let Some((rest, last)) = latin.rsplit_once(',') {
        let last = last.trim();
        if GENDER_TAGS.contains(&last) {
            let base = rest
                .split(',')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(", ");
            return (base.trim().to_string(), last.to_string());
        }
    }
    (latin.to_string(), String::new())
}
