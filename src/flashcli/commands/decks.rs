//! Deck lifecycle commands.
//!
//! These operate on the [`DeckManager`] rather than on one deck. Deck numbers
//! given by the user are the 1-based positions shown by [`view`].

use crate::commands::search::SearchFilter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::manager::DeckManager;
use crate::messages;
use crate::model::Deck;
use log::info;

/// Registers a new, empty deck. The selection is left alone.
pub fn create(manager: &mut DeckManager, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FlashError::MissingName);
    }
    if manager.contains_name(name) {
        return Err(FlashError::DuplicateName(name.to_string()));
    }

    manager.insert(Deck::new(name.to_string()));
    info!("created deck {}", name);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deck_created(name))))
}

/// Renames the current deck in place; its position and selection are kept.
pub fn rename(manager: &mut DeckManager, new_name: &str) -> Result<CmdResult> {
    let new_name = new_name.trim();
    let current = manager.current().ok_or(FlashError::NoDeck)?;
    if new_name.is_empty() {
        return Err(FlashError::EmptyName);
    }
    if current.name == new_name {
        return Err(FlashError::UnchangedName);
    }
    if manager.contains_name(new_name) {
        return Err(FlashError::DuplicateName(new_name.to_string()));
    }

    let deck = manager.current_mut().ok_or(FlashError::NoDeck)?;
    let old_name = std::mem::replace(&mut deck.name, new_name.to_string());
    info!("renamed deck {} to {}", old_name, new_name);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deck_renamed(
        &old_name, new_name,
    ))))
}

pub fn select(manager: &mut DeckManager, input: &str) -> Result<CmdResult> {
    if manager.is_empty() {
        return Err(FlashError::NoDeckToSwitch);
    }
    let position = manager.check_and_get_list_index(input)?;
    let deck = &manager.decks()[position];
    let (id, name) = (deck.id, deck.name.clone());

    manager.set_current(id);
    info!("selected deck {}", name);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deck_selected(&name))))
}

/// Deletes the deck at a zero-based position.
pub fn delete(manager: &mut DeckManager, position: usize) -> Result<CmdResult> {
    let removed = manager.remove(position).ok_or(FlashError::NoSuchDeck)?;
    info!("deleted deck {}", removed.name);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deck_deleted(
        &removed.name,
    ))))
}

/// Deletes the deck named by a raw 1-based number.
pub fn delete_by_input(manager: &mut DeckManager, input: &str) -> Result<CmdResult> {
    let position = manager.check_and_get_list_index(input)?;
    delete(manager, position)
}

pub fn unselect(manager: &mut DeckManager) -> Result<CmdResult> {
    let id = manager.clear_current().ok_or(FlashError::NoDeck)?;
    let name = manager
        .get(id)
        .map(|deck| deck.name.clone())
        .unwrap_or_default();
    info!("unselected deck {}", name);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::deck_unselected(&name))))
}

pub fn view(manager: &DeckManager) -> Result<CmdResult> {
    if manager.is_empty() {
        return Err(FlashError::NoDeckToView);
    }
    let lines = manager
        .decks()
        .iter()
        .enumerate()
        .map(|(i, deck)| format!("{}. {}", i + 1, deck.name))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CmdResult::default().with_message(CmdMessage::info(messages::decks_listed(&lines))))
}

/// Runs one search filter against every deck. Matches are grouped by deck in
/// registry order.
pub fn global_search(manager: &DeckManager, raw: &str) -> Result<CmdResult> {
    let filter = SearchFilter::parse(raw)?;

    let mut blocks = Vec::new();
    let mut matched = Vec::new();
    for deck in manager.decks() {
        for card in deck.flashcards().iter().filter(|card| filter.matches(card)) {
            blocks.push(messages::global_search_block(&deck.name, card));
            matched.push(card.clone());
        }
    }
    if matched.is_empty() {
        return Err(FlashError::EmptyList);
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(messages::search_results(
            &blocks.join("\n\n"),
        )))
        .with_listed_cards(matched))
}
