//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every flashcli operation, whatever front end drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Resolves the current deck** for deck-scoped operations, failing with
//!   [`FlashError::NoDeck`] when nothing is selected
//! - **Normalizes inputs** (splits `"3 /q .. /a .."` into index and fields)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdin, stdout or stderr
//! - **Presentation**: messages come back as data, the caller prints them
//!
//! ## Testing Strategy
//!
//! API tests check that calls reach the right command and that deck-scoped
//! calls require a selection. Command behaviour is tested in the command
//! modules.

use crate::commands;
use crate::error::{FlashError, Result};
use crate::index::split_index_args;
use crate::manager::DeckManager;
use crate::model::{Deck, LearnedState};
use crate::quiz::{AnswerOutcome, QuizSession};
use log::error;

/// One study session: a deck registry plus its current selection.
#[derive(Debug, Default)]
pub struct FlashApi {
    manager: DeckManager,
}

impl FlashApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manager(&self) -> &DeckManager {
        &self.manager
    }

    pub fn has_current_deck(&self) -> bool {
        self.manager.current().is_some()
    }

    fn current(&self) -> Result<&Deck> {
        self.manager.current().ok_or(FlashError::NoDeck)
    }

    fn current_mut(&mut self) -> Result<&mut Deck> {
        self.manager.current_mut().ok_or(FlashError::NoDeck)
    }

    // Flashcards in the current deck

    pub fn create_flashcard(&mut self, raw: &str) -> Result<commands::CmdResult> {
        commands::create::run(self.current_mut()?, raw)
    }

    pub fn view_question(&self, index: &str) -> Result<commands::CmdResult> {
        commands::view::question(self.current()?, index)
    }

    pub fn view_answer(&self, index: &str) -> Result<commands::CmdResult> {
        commands::view::answer(self.current()?, index)
    }

    /// `args` is `"{INDEX} /q .. /a .."`.
    pub fn edit_flashcard(&mut self, args: &str) -> Result<commands::CmdResult> {
        let (index, raw) = split_index_args(args);
        commands::edit::run(self.current_mut()?, index, raw)
    }

    pub fn delete_flashcard(&mut self, index: &str) -> Result<commands::CmdResult> {
        commands::delete::run(self.current_mut()?, index)
    }

    pub fn list_flashcards(&self) -> Result<commands::CmdResult> {
        commands::list::run(self.current()?)
    }

    /// `args` is `"{INDEX} /c .."`.
    pub fn insert_code(&mut self, args: &str) -> Result<commands::CmdResult> {
        let (index, raw) = split_index_args(args);
        commands::code::run(self.current_mut()?, index, raw)
    }

    pub fn mark_learned(&mut self, index: &str) -> Result<commands::CmdResult> {
        commands::learned::mark(self.current_mut()?, index, LearnedState::Learned)
    }

    pub fn mark_unlearned(&mut self, index: &str) -> Result<commands::CmdResult> {
        commands::learned::mark(self.current_mut()?, index, LearnedState::Unlearned)
    }

    pub fn search_flashcards(&self, raw: &str) -> Result<commands::CmdResult> {
        commands::search::run(self.current()?, raw)
    }

    // Quiz

    pub fn start_quiz(&self) -> Result<(QuizSession, commands::CmdResult)> {
        commands::quiz::start(self.current()?)
    }

    pub fn answer_quiz(
        &self,
        session: &mut QuizSession,
        input: &str,
    ) -> Result<(AnswerOutcome, commands::CmdResult)> {
        commands::quiz::answer(session, input)
    }

    pub fn complete_quiz(&mut self, session: QuizSession) -> Result<commands::CmdResult> {
        commands::quiz::complete(&mut self.manager, session)
    }

    pub fn quiz_results(&self) -> Result<commands::CmdResult> {
        commands::quiz::results(self.current()?)
    }

    /// Drops stored quiz results of the current deck after a broken invariant
    /// was detected in them.
    pub fn discard_quiz_results(&mut self) {
        if let Some(deck) = self.manager.current_mut() {
            error!("discarding quiz results of deck {}", deck.name);
            deck.clear_quiz_results();
        }
    }

    // Decks

    pub fn create_deck(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::decks::create(&mut self.manager, name)
    }

    pub fn rename_deck(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::decks::rename(&mut self.manager, name)
    }

    pub fn select_deck(&mut self, index: &str) -> Result<commands::CmdResult> {
        commands::decks::select(&mut self.manager, index)
    }

    pub fn delete_deck(&mut self, index: &str) -> Result<commands::CmdResult> {
        commands::decks::delete_by_input(&mut self.manager, index)
    }

    pub fn unselect_deck(&mut self) -> Result<commands::CmdResult> {
        commands::decks::unselect(&mut self.manager)
    }

    pub fn view_decks(&self) -> Result<commands::CmdResult> {
        commands::decks::view(&self.manager)
    }

    pub fn global_search(&self, raw: &str) -> Result<commands::CmdResult> {
        commands::decks::global_search(&self.manager, raw)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    fn api_with_deck() -> FlashApi {
        let mut api = FlashApi::new();
        api.create_deck("java").unwrap();
        api.select_deck("1").unwrap();
        api
    }

    #[test]
    fn deck_scoped_calls_need_selection() {
        let mut api = FlashApi::new();
        api.create_deck("java").unwrap();
        assert!(!api.has_current_deck());
        assert!(matches!(
            api.create_flashcard("/q a /a b").unwrap_err(),
            FlashError::NoDeck
        ));
        assert!(matches!(api.list_flashcards().unwrap_err(), FlashError::NoDeck));
        assert!(matches!(api.start_quiz().unwrap_err(), FlashError::NoDeck));
        assert!(matches!(api.rename_deck("x").unwrap_err(), FlashError::NoDeck));
    }

    #[test]
    fn edit_splits_index_from_fields() {
        let mut api = api_with_deck();
        api.create_flashcard("/q What is Java? /a A language.").unwrap();
        api.edit_flashcard("1 /q What is Rust? /a Another.").unwrap();
        let deck = api.manager().current().unwrap();
        assert_eq!(deck.flashcards()[0].question, "What is Rust?");
    }

    #[test]
    fn insert_code_splits_index_from_fields() {
        let mut api = api_with_deck();
        api.create_flashcard("/q Q /a A").unwrap();
        api.insert_code("1 /c x;").unwrap();
        let deck = api.manager().current().unwrap();
        assert_eq!(deck.flashcards()[0].code_snippet.as_deref(), Some("x;"));
    }

    #[test]
    fn learned_calls_dispatch_target_state() {
        let mut api = api_with_deck();
        api.create_flashcard("/q Q /a A").unwrap();
        api.mark_learned("1").unwrap();
        assert!(api.manager().current().unwrap().flashcards()[0].is_learned);
        api.mark_unlearned("1").unwrap();
        assert!(!api.manager().current().unwrap().flashcards()[0].is_learned);
    }

    #[test]
    fn quiz_round_trip_through_api() {
        let mut api = api_with_deck();
        api.create_flashcard("/q Q /a A").unwrap();
        let (mut session, _) = api.start_quiz().unwrap();
        api.answer_quiz(&mut session, "A").unwrap();
        api.complete_quiz(session).unwrap();
        assert!(api.quiz_results().unwrap().text().contains("1/1"));

        api.discard_quiz_results();
        assert!(matches!(
            api.quiz_results().unwrap_err(),
            FlashError::IncompleteQuiz
        ));
    }
}
