//! # Session Context
//!
//! [`DeckManager`] owns every deck for one run plus the "current deck"
//! selection. It is an ordinary value: each front end (or test) builds its own
//! and passes it to the commands, so independent sessions never share state.
//!
//! Decks are kept in creation order, which is also the order `decks` lists
//! them and `select` numbers them. The current deck is tracked by its
//! [`Uuid`], so renaming a deck never invalidates the selection.

use crate::error::Result;
use crate::index::parse_list_index;
use crate::model::Deck;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct DeckManager {
    decks: Vec<Deck>,
    current: Option<Uuid>,
}

impl DeckManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn decks_mut(&mut self) -> &mut [Deck] {
        &mut self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.decks.iter().any(|deck| deck.name == name)
    }

    pub fn get(&self, id: Uuid) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|deck| deck.id == id)
    }

    pub fn insert(&mut self, deck: Deck) -> Uuid {
        let id = deck.id;
        self.decks.push(deck);
        id
    }

    /// Removes the deck at a zero-based position, dropping the selection if it
    /// pointed at that deck.
    pub fn remove(&mut self, position: usize) -> Option<Deck> {
        if position >= self.decks.len() {
            return None;
        }
        let removed = self.decks.remove(position);
        if self.current == Some(removed.id) {
            self.current = None;
        }
        Some(removed)
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current
    }

    pub fn current(&self) -> Option<&Deck> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn current_mut(&mut self) -> Option<&mut Deck> {
        let id = self.current?;
        self.get_mut(id)
    }

    /// Selects a deck. Ids not present in the registry clear the selection.
    pub fn set_current(&mut self, id: Uuid) {
        self.current = self.get(id).map(|deck| deck.id);
    }

    pub fn clear_current(&mut self) -> Option<Uuid> {
        self.current.take()
    }

    /// Validates a 1-based deck number and returns its zero-based position.
    pub fn check_and_get_list_index(&self, input: &str) -> Result<usize> {
        parse_list_index(input, self.decks.len())
    }
}
