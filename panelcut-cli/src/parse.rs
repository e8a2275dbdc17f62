//! Parsing of free-form `WxH` size text as typed by users.

use panelcut::CutError;
use panelcut::geometry::Dimension;
use regex::Regex;
use std::sync::LazyLock;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([-+]?[0-9]+(?:\.[0-9]+)?)\s*[xX×*]\s*([-+]?[0-9]+(?:\.[0-9]+)?)\s*$")
        .expect("size pattern should compile")
});

/// Parses `WxH` text into a [`Dimension`].
///
/// Accepts `x`, `X`, `×` and `*` as separator, whitespace around the numbers,
/// and Persian or Arabic-Indic digits (`۱۸۳x۳۶۶`).
/// Text of any other shape is [`CutError::MalformedInput`],
/// well-formed but non-positive sizes are [`CutError::InvalidDimension`].
pub fn parse_dimension(text: &str) -> Result<Dimension, CutError> {
    let normalized = normalize_digits(text);
    let malformed = |reason: &str| CutError::MalformedInput {
        input: text.to_owned(),
        reason: reason.to_owned(),
    };

    let captures = SIZE_PATTERN
        .captures(&normalized)
        .ok_or_else(|| malformed("expected two numbers separated by 'x', e.g. 183x366"))?;

    let width = captures[1]
        .parse::<f32>()
        .map_err(|_| malformed("width is not a number"))?;
    let height = captures[2]
        .parse::<f32>()
        .map_err(|_| malformed("height is not a number"))?;

    Dimension::try_new(width, height)
}

/// Maps Persian and Arabic-Indic digits (and the Arabic decimal separator) to ASCII
fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
            '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
            '٫' => '.',
            _ => c,
        })
        .collect()
}
