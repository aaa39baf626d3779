//! Read-only views of a single card.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::messages;
use crate::model::Deck;

use super::helpers::card_by_index;

/// Shows the question, the learned marker and the code snippet if any.
pub fn question(deck: &Deck, index: &str) -> Result<CmdResult> {
    let card = card_by_index(deck, index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(messages::view_question(card)))
        .with_listed_cards(vec![card.clone()]))
}

pub fn answer(deck: &Deck, index: &str) -> Result<CmdResult> {
    let card = card_by_index(deck, index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(messages::view_answer(card)))
        .with_listed_cards(vec![card.clone()]))
}
