use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::parse_card_index;
use crate::messages;
use crate::model::{Deck, LearnedState};
use log::debug;

/// Sets the learned flag of one card. Marking a card with the state it
/// already has is reported as [`FlashError::NoChangeNeeded`]; any number
/// given for an empty deck is reported as [`FlashError::EmptyList`].
pub fn mark(deck: &mut Deck, index: &str, state: LearnedState) -> Result<CmdResult> {
    let len = deck.len();
    let position = parse_card_index(index, len)?;
    let card = deck
        .card_mut(position)
        .ok_or(FlashError::IndexOutOfBounds {
            index: position as i64 + 1,
            len,
        })?;
    if card.learned_state() == state {
        return Err(FlashError::NoChangeNeeded(state));
    }

    card.is_learned = state.is_learned();
    let card = card.clone();

    debug!("flashcard {} marked {}", card.index, state);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::learned_changed(card.index, state)))
        .with_affected_cards(vec![card]))
}
