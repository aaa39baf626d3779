//! # Display Indexes
//!
//! Users address flashcards and decks by the 1-based number shown next to them
//! in `list` and `decks`. Internally everything works on zero-based positions,
//! so every raw index string passes through [`parse_list_index`] first.
//!
//! Validation happens in a fixed order: blank input, non-numeric input, then
//! range. Numbers are parsed as signed so that `-1` reports as out of bounds
//! rather than as "not a number".

use crate::error::{FlashError, Result};

/// Converts a raw 1-based index into a zero-based position in a list of `len`
/// entries.
pub fn parse_list_index(input: &str, len: usize) -> Result<usize> {
    let index = parse_number(input)?;
    check_bounds(index, len)
}

/// Like [`parse_list_index`], but an empty list is reported as
/// [`FlashError::EmptyList`] once the input itself is known to be a number.
pub fn parse_card_index(input: &str, len: usize) -> Result<usize> {
    let index = parse_number(input)?;
    if len == 0 {
        return Err(FlashError::EmptyList);
    }
    check_bounds(index, len)
}

/// Splits `"3 /q ... /a ..."` into the index part and the remainder.
pub fn split_index_args(raw: &str) -> (&str, &str) {
    let trimmed = raw.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((index, rest)) => (index, rest),
        None => (trimmed, ""),
    }
}

fn parse_number(input: &str) -> Result<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FlashError::MissingIndex);
    }
    input
        .parse::<i64>()
        .map_err(|_| FlashError::InvalidIndexInput(input.to_string()))
}

fn check_bounds(index: i64, len: usize) -> Result<usize> {
    if index < 1 || index as u64 > len as u64 {
        return Err(FlashError::IndexOutOfBounds { index, len });
    }
    Ok(index as usize - 1)
}
