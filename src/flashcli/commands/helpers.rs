use crate::error::{FlashError, Result};
use crate::index::parse_list_index;
use crate::model::{Deck, Flashcard};

/// Resolves a raw 1-based index to a card of `deck`.
pub fn card_by_index<'a>(deck: &'a Deck, index: &str) -> Result<&'a Flashcard> {
    let len = deck.len();
    let position = parse_list_index(index, len)?;
    deck.card(position).ok_or_else(|| out_of_bounds(position, len))
}

pub fn card_by_index_mut<'a>(deck: &'a mut Deck, index: &str) -> Result<&'a mut Flashcard> {
    let len = deck.len();
    let position = parse_list_index(index, len)?;
    deck.card_mut(position)
        .ok_or_else(|| out_of_bounds(position, len))
}

fn out_of_bounds(position: usize, len: usize) -> FlashError {
    FlashError::IndexOutOfBounds {
        index: position as i64 + 1,
        len,
    }
}
