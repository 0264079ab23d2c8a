use regex_lite::Regex;
use static_init::dynamic;

use crate::errors::{MensaError, MensaResult};

pub mod stwno_fetcher;
pub mod stwno_parser;

// the online file has line breaks inside some records, always right before a semicolon.
// Runs of breaks are eaten as a whole so a second pass finds nothing.
#[dynamic]
static SPLIT_RECORD: Regex = Regex::new(r"(?:\r?\n)+;").unwrap();

/// The CSV is Windows-1252 encoded, but strings and the cache are UTF-8.
pub fn windows1252_to_utf8(raw: &[u8]) -> MensaResult<String> {
    encoding_rs::WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(|text| text.into_owned())
        .ok_or(MensaError::Decode)
}

/// Joins records that were split over two lines.
pub fn fix_csv_formatting(input: &str) -> String {
    SPLIT_RECORD.replace_all(input, ";").into_owned()
}

pub fn strip_bracket_artifacts(input: &str, strip_chars: &str) -> String {
    if strip_chars.is_empty() {
        return input.to_string();
    }
    input.chars().filter(|c| !strip_chars.contains(*c)).collect()
}

/// Downloaded bytes -> text the parser can read. Decoding has to come first,
/// the other fixes work on text.
pub fn repair(raw: &[u8], strip_chars: &str) -> MensaResult<String> {
    let text = windows1252_to_utf8(raw)?;
    let text = fix_csv_formatting(&text);
    Ok(strip_bracket_artifacts(&text, strip_chars))
}
