use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::parse_list_index;
use crate::messages;
use crate::model::Deck;
use log::debug;

/// Removes one card; every card after it moves up by one index.
pub fn run(deck: &mut Deck, index: &str) -> Result<CmdResult> {
    let len = deck.len();
    let position = parse_list_index(index, len)?;
    let removed = deck
        .remove_card(position)
        .ok_or(FlashError::IndexOutOfBounds {
            index: position as i64 + 1,
            len,
        })?;

    debug!("deleted flashcard {} from deck {}", removed.index, deck.name);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::deleted(&removed)))
        .with_affected_cards(vec![removed]))
}
