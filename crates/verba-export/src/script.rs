use std::io;

use anyhow::Result;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::Formatter;

/// Renders chapter data as a script the study page includes directly,
/// with no separate data fetch: `var <name> = <json>;`.
///
/// The wrapper text is byte-stable; the page that consumes it matches on
/// the variable name.
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    pub var_name: String,
}

impl ScriptTemplate {
    /// Template for the default `wordsData` variable
    pub fn default_words() -> Self {
        Self {
            var_name: "wordsData".to_string(),
        }
    }

    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = format!("var {} = ", self.var_name).into_bytes();

        let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter);
        value.serialize(&mut serializer)?;

        buf.extend_from_slice(b";");
        Ok(String::from_utf8(buf)?)
    }
}

/// Compact JSON with every non-ASCII character escaped to its UTF-16
/// units as \uXXXX, surrogate pairs included, so the artifact survives
/// any byte-level handling between here and the browser.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
