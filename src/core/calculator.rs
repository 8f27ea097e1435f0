//! Delimiter-aware summing of integer strings.
//!
//! Input is split on the default delimiters (comma and space) plus an optional
//! custom delimiter declared with a `//<delimiter>\n` prefix:
//!
//! ```
//! use string_calculator::StringCalculator;
//!
//! let calc = StringCalculator::new();
//! assert_eq!(calc.add(Some("1,2 3")).unwrap(), 6);
//! assert_eq!(calc.add(Some("//;\n1;2;3")).unwrap(), 6);
//! assert_eq!(calc.add(Some("1,2,100,101")).unwrap(), 103);
//! ```

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::errors::ValidationError;

/// Delimiters active on every call.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", " "];

/// Largest value that still contributes to the sum.
pub const MAX_SUMMED_VALUE: u64 = 100;

const CUSTOM_DELIMITER_PREFIX: &str = "//";

/// Compiled size allowed for a splitter; long custom delimiters grow it linearly.
const SPLITTER_SIZE_LIMIT: usize = 256 * (1 << 20);

static DEFAULT_SPLITTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&delimiter_pattern(DEFAULT_DELIMITERS.iter().copied()))
        .expect("static regex compile")
});

/// Stateless calculator; construct one wherever it is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCalculator;

impl StringCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh copy of the default delimiters.
    #[must_use]
    pub fn default_delimiters(&self) -> Vec<String> {
        DEFAULT_DELIMITERS.iter().map(|d| (*d).to_string()).collect()
    }

    /// Sums the integers in `numbers`.
    ///
    /// Absent or empty input sums to zero. Values above [`MAX_SUMMED_VALUE`]
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns the error for the first token that is not an integer or is
    /// negative, and [`ValidationError::MalformedDelimiter`] when a `//` prefix
    /// is not terminated by a newline.
    pub fn add(&self, numbers: Option<&str>) -> Result<u64, ValidationError> {
        let Some(numbers) = numbers.filter(|n| !n.is_empty()) else {
            return Ok(0);
        };

        let (custom, body) = split_custom_delimiter(numbers)?;
        let tokens: Vec<&str> = match custom {
            Some(delimiter) => {
                let mut delimiters = self.default_delimiters();
                delimiters.push(delimiter.to_string());
                let pattern = delimiter_pattern(delimiters.iter().map(String::as_str));
                // Escaped literals always parse, so the only failure left is a
                // delimiter whose compiled form exceeds the size limit.
                let splitter = RegexBuilder::new(&pattern)
                    .size_limit(SPLITTER_SIZE_LIMIT)
                    .build()
                    .map_err(|e| {
                        debug!(error = %e, "Custom delimiter pattern rejected");
                        ValidationError::MalformedDelimiter
                    })?;
                splitter.split(body).collect()
            }
            None => DEFAULT_SPLITTER.split(body).collect(),
        };

        let mut total = 0;
        for token in tokens.into_iter().filter(|t| !t.is_empty()) {
            if let Some(value) = parse_token(token)? {
                if value <= MAX_SUMMED_VALUE {
                    total += value;
                } else {
                    debug!(value, "Skipping value above limit");
                }
            }
        }

        debug!(total, "Summed input");
        Ok(total)
    }
}

/// Sums `numbers` with a throwaway [`StringCalculator`].
///
/// # Errors
///
/// See [`StringCalculator::add`].
pub fn add(numbers: Option<&str>) -> Result<u64, ValidationError> {
    StringCalculator::new().add(numbers)
}

/// Separates a `//<delimiter>\n` header from the text to tokenize.
///
/// An empty declared delimiter is treated as no custom delimiter.
fn split_custom_delimiter(numbers: &str) -> Result<(Option<&str>, &str), ValidationError> {
    let Some(rest) = numbers.strip_prefix(CUSTOM_DELIMITER_PREFIX) else {
        return Ok((None, numbers));
    };
    let Some((delimiter, body)) = rest.split_once('\n') else {
        return Err(ValidationError::MalformedDelimiter);
    };
    Ok(((!delimiter.is_empty()).then_some(delimiter), body))
}

fn delimiter_pattern<'a>(delimiters: impl Iterator<Item = &'a str>) -> String {
    delimiters.map(regex::escape).collect::<Vec<_>>().join("|")
}

/// Parses one token, returning `None` for integers too large to represent.
fn parse_token(token: &str) -> Result<Option<u64>, ValidationError> {
    match token.trim().parse::<i64>() {
        Ok(value) if value < 0 => Err(ValidationError::Negative),
        Ok(value) => Ok(Some(value.unsigned_abs())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(None),
            IntErrorKind::NegOverflow => Err(ValidationError::Negative),
            _ => Err(ValidationError::NonInteger),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_header_is_split_from_body() {
        assert_eq!(split_custom_delimiter("//;\n1;2"), Ok((Some(";"), "1;2")));
        assert_eq!(split_custom_delimiter("//\n1,2"), Ok((None, "1,2")));
        assert_eq!(split_custom_delimiter("1,2"), Ok((None, "1,2")));
        assert_eq!(
            split_custom_delimiter("//;1;2"),
            Err(ValidationError::MalformedDelimiter)
        );
    }

    #[test]
    fn delimiters_are_escaped_literals() {
        let pattern = delimiter_pattern([",", ".", "*"].into_iter());
        assert_eq!(pattern, r",|\.|\*");
    }

    #[test]
    fn token_parsing_classifies_values() {
        assert_eq!(parse_token("42"), Ok(Some(42)));
        assert_eq!(parse_token(" 7\n"), Ok(Some(7)));
        assert_eq!(parse_token("-0"), Ok(Some(0)));
        assert_eq!(parse_token("-3"), Err(ValidationError::Negative));
        assert_eq!(parse_token("3.14"), Err(ValidationError::NonInteger));
        assert_eq!(parse_token("\n"), Err(ValidationError::NonInteger));
        assert_eq!(parse_token("99999999999999999999"), Ok(None));
        assert_eq!(
            parse_token("-99999999999999999999"),
            Err(ValidationError::Negative)
        );
    }
}
