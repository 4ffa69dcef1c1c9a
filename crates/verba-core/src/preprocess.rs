use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default line preprocessor
    fn process(&self, line: &str) -> String {
        let line = line.trim();

        if line.is_empty() {
            return String::new();
        }

        // NFC so macron vowels reach the study page in composed form
        line.nfc().collect::<String>().trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
