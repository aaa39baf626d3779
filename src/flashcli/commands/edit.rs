use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{Tag, EDIT_FIELDS};
use crate::messages;
use crate::model::Deck;
use log::debug;

use super::helpers::card_by_index_mut;

/// Replaces question and answer of one card. Learned state and code snippet
/// are kept.
pub fn run(deck: &mut Deck, index: &str, raw: &str) -> Result<CmdResult> {
    let card = card_by_index_mut(deck, index)?;
    let fields = EDIT_FIELDS.extract(raw)?;
    let question = fields.require(Tag::Question)?;
    let answer = fields.require(Tag::Answer)?;

    let old_question = std::mem::replace(&mut card.question, question.to_string());
    let old_answer = std::mem::replace(&mut card.answer, answer.to_string());
    let card = card.clone();

    debug!("edited flashcard {}", card.index);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::edited(
            &old_question,
            &card.question,
            &old_answer,
            &card.answer,
        )))
        .with_affected_cards(vec![card]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{code, create, learned};
    use crate::error::FlashError;
    use crate::model::LearnedState;

    fn java_deck() -> Deck {
        let mut deck = Deck::new("java".into());
        create::run(&mut deck, "/q What is Java? /a A programming language.").unwrap();
        deck
    }

    #[test]
    fn replaces_question_and_answer() {
        let mut deck = java_deck();
        let result = run(
            &mut deck,
            "1",
            "/q What is Python? /a A different programming language.",
        )
        .unwrap();

        let card = &deck.flashcards()[0];
        assert_eq!(card.question, "What is Python?");
        assert_eq!(card.answer, "A different programming language.");
        assert_eq!(
            result.messages[0].content,
            messages::edited(
                "What is Java?",
                "What is Python?",
                "A programming language.",
                "A different programming language."
            )
        );
    }

    #[test]
    fn keeps_learned_state_and_code() {
        let mut deck = java_deck();
        learned::mark(&mut deck, "1", LearnedState::Learned).unwrap();
        code::run(&mut deck, "1", "/c int x = 1;").unwrap();
        let before = deck.flashcards()[0].clone();

        run(&mut deck, "1", "/q New? /a Yes.").unwrap();

        let after = &deck.flashcards()[0];
        assert!(after.is_learned);
        assert_eq!(after.code_snippet, before.code_snippet);
        assert_eq!(after.index, before.index);
    }

    #[test]
    fn validates_index_before_fields() {
        let mut deck = java_deck();
        assert!(matches!(
            run(&mut deck, "4", "/q a /a b").unwrap_err(),
            FlashError::IndexOutOfBounds { index: 4, len: 1 }
        ));
        assert!(matches!(
            run(&mut deck, "sjd", "/q a /a b").unwrap_err(),
            FlashError::InvalidIndexInput(_)
        ));
        assert!(matches!(
            run(&mut deck, "", "/q a /a b").unwrap_err(),
            FlashError::MissingIndex
        ));
    }

    #[test]
    fn invalid_fields_leave_card_unchanged() {
        let mut deck = java_deck();
        assert!(matches!(
            run(&mut deck, "1", "/q only a question").unwrap_err(),
            FlashError::MissingField(_)
        ));
        assert_eq!(deck.flashcards()[0].question, "What is Java?");
    }
}
