//! Input gating for submitted text.
//!
//! Text is capped at `MAX_CHARS` (extra characters are dropped, as the input box
//! does) and must then carry at least `MIN_CHARS` characters with some
//! non-whitespace content. Lengths are counted in Unicode scalar values, after
//! line breaks are normalized to a single `\n` (browsers submit textarea breaks
//! as CRLF but count each one as one character).

use crate::errors::AppError;

pub const MIN_CHARS: usize = 50;
pub const MAX_CHARS: usize = 5000;

pub const MIN_LENGTH_MESSAGE: &str =
    "Please enter at least 50 characters for a reliable analysis.";

/// Normalizes line breaks to `\n` and caps the result at `MAX_CHARS` characters.
pub fn normalize_input(raw: &str) -> String {
    let text = if raw.contains('\r') {
        raw.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        raw.to_string()
    };
    truncate_input(&text).to_string()
}

/// Drops everything past the first `MAX_CHARS` characters.
pub fn truncate_input(raw: &str) -> &str {
    match raw.char_indices().nth(MAX_CHARS) {
        Some((cut, _)) => &raw[..cut],
        None => raw,
    }
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Whether `text` is long enough to be submitted.
pub fn meets_minimum(text: &str) -> bool {
    !text.trim().is_empty() && char_count(text) >= MIN_CHARS
}

/// Text that has been capped and has passed the minimum-length check.
/// The only way to hand text to the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedText<'a>(&'a str);

impl<'a> SubmittedText<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, AppError> {
        let text = truncate_input(raw);
        if !meets_minimum(text) {
            return Err(AppError::Validation(MIN_LENGTH_MESSAGE.to_string()));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn char_count(&self) -> usize {
        char_count(self.0)
    }
}
