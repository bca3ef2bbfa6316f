use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How lenient a single parse attempt is about whitespace in the input.
///
/// Each style admits exactly its own allowance: input carrying whitespace a
/// style does not permit fails that attempt. Styles form a closed set; a parse
/// call that does not restrict the style tries every member of
/// [`ParseStyle::ALL`] in its declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ParseStyle {
    /// No whitespace allowance at either end of the input.
    #[display(fmt = "strict")]
    Strict,
    /// Leading whitespace is ignored; trailing whitespace is still rejected.
    #[display(fmt = "allow-leading-whitespace")]
    AllowLeadingWhitespace,
    /// Trailing whitespace is ignored; leading whitespace is still rejected.
    #[display(fmt = "allow-trailing-whitespace")]
    AllowTrailingWhitespace,
    /// Leading and trailing whitespace is ignored.
    #[display(fmt = "allow-surrounding-whitespace")]
    AllowSurroundingWhitespace,
    /// Runs of whitespace between tokens count as a single space; the ends of
    /// the input must still be clean.
    #[display(fmt = "allow-inner-whitespace")]
    AllowInnerWhitespace,
    /// Combination of the surrounding and inner allowances.
    #[display(fmt = "allow-any-whitespace")]
    AllowAnyWhitespace,
}

impl ParseStyle {
    /// Every style, in enumeration order. Strict comes first so that an
    /// unrestricted parse prefers the least lenient interpretation.
    pub const ALL: &'static [Self] = &[
        Self::Strict,
        Self::AllowLeadingWhitespace,
        Self::AllowTrailingWhitespace,
        Self::AllowSurroundingWhitespace,
        Self::AllowInnerWhitespace,
        Self::AllowAnyWhitespace,
    ];

    /// Normalizes `input` according to this style's whitespace allowances.
    ///
    /// Returns the text a pattern match should run against, or `None` when the
    /// input carries whitespace the style does not permit.
    pub fn normalize(self, input: &str) -> Option<Cow<'_, str>> {
        let leading = input.starts_with(char::is_whitespace);
        let trailing = input.ends_with(char::is_whitespace);
        match self {
            Self::Strict => (!leading && !trailing).then(|| Cow::Borrowed(input)),
            Self::AllowLeadingWhitespace => {
                (!trailing).then(|| Cow::Borrowed(input.trim_start()))
            }
            Self::AllowTrailingWhitespace => (!leading).then(|| Cow::Borrowed(input.trim_end())),
            Self::AllowSurroundingWhitespace => Some(Cow::Borrowed(input.trim())),
            Self::AllowInnerWhitespace => (!leading && !trailing).then(|| collapse_inner(input)),
            Self::AllowAnyWhitespace => Some(collapse_inner(input.trim())),
        }
    }
}

/// Collapses whitespace runs to a single space each.
fn collapse_inner(input: &str) -> Cow<'_, str> {
    if !input.contains(char::is_whitespace) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    Cow::Owned(out)
}
