use crate::culture::Culture;
use crate::style::ParseStyle;
use chrono::NaiveDateTime;
use std::slice;

/// Why a parse operation failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was empty or all whitespace.
    #[error("Empty date string")]
    EmptyInput,
    /// No (pattern, style) combination and no free-form attempt matched.
    #[error("Could not parse date: {0:?}")]
    Unrecognized(String),
}

/// Interprets `input` as a date by trying every candidate pattern against the
/// applicable styles, in order, then falling back to the culture's free-form
/// recognition per style.
///
/// `patterns` are strftime-style layouts tried strictly in the order given;
/// the first match wins. Passing `None` for `style` tries every member of
/// [`ParseStyle::ALL`]. An empty `patterns` slice leaves only the free-form
/// fallback.
///
/// # Errors
/// Returns [`ParseError::EmptyInput`] when `input` is empty or all whitespace,
/// and [`ParseError::Unrecognized`] (naming the input) when nothing matched.
pub fn parse_exact<C: Culture>(
    input: &str,
    culture: &C,
    style: Option<ParseStyle>,
    patterns: &[&str],
) -> Result<NaiveDateTime, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    parse_any(input, culture, style, patterns)
        .ok_or_else(|| ParseError::Unrecognized(input.to_owned()))
}

/// [`parse_exact`] without a style restriction.
///
/// # Errors
/// Same failure channels as [`parse_exact`].
pub fn parse_exact_any_style<C: Culture>(
    input: &str,
    culture: &C,
    patterns: &[&str],
) -> Result<NaiveDateTime, ParseError> {
    parse_exact(input, culture, None, patterns)
}

/// Non-failing variant of [`parse_exact`]: empty input and total parse failure
/// both collapse to `None`.
pub fn try_parse<C: Culture>(
    input: &str,
    culture: &C,
    style: Option<ParseStyle>,
    patterns: &[&str],
) -> Option<NaiveDateTime> {
    if input.trim().is_empty() {
        return None;
    }
    parse_any(input, culture, style, patterns)
}

/// [`try_parse`] without a style restriction.
pub fn try_parse_any_style<C: Culture>(
    input: &str,
    culture: &C,
    patterns: &[&str],
) -> Option<NaiveDateTime> {
    try_parse(input, culture, None, patterns)
}

/// Shared core: pattern loop outer, style loop inner, so the first pattern in
/// the caller's list gets every style tried before the next pattern is
/// considered.
fn parse_any<C: Culture>(
    input: &str,
    culture: &C,
    style: Option<ParseStyle>,
    patterns: &[&str],
) -> Option<NaiveDateTime> {
    let styles: &[ParseStyle] = match &style {
        Some(single) => slice::from_ref(single),
        None => ParseStyle::ALL,
    };

    for pattern in patterns {
        for &s in styles {
            if let Some(parsed) = culture.parse_pattern(input, pattern, s) {
                return Some(parsed);
            }
        }
    }

    // The free-form fallback ignores the pattern, so one attempt per style
    // after the exact passes covers every combination.
    for &s in styles {
        if let Some(parsed) = culture.parse_default(input, s) {
            return Some(parsed);
        }
    }

    None
}
