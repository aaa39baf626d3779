use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::fields::{format_code_snippet, Tag, CODE_FIELDS};
use crate::messages;
use crate::model::Deck;
use log::debug;

use super::helpers::card_by_index_mut;

/// Attaches a formatted code snippet to a card, replacing any previous one.
pub fn run(deck: &mut Deck, index: &str, raw: &str) -> Result<CmdResult> {
    let card = card_by_index_mut(deck, index)?;
    let fields = CODE_FIELDS.extract(raw).map_err(|err| match err {
        FlashError::MissingDescription(_) => FlashError::MissingCode,
        other => other,
    })?;
    let code = format_code_snippet(fields.require(Tag::Code)?);

    card.code_snippet = Some(code.clone());
    let card = card.clone();

    debug!("inserted code into flashcard {}", card.index);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::code_inserted(&card, &code)))
        .with_affected_cards(vec![card]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;

    fn java_deck() -> Deck {
        let mut deck = Deck::new("java".into());
        create::run(&mut deck, "/q What is Java? /a A programming language.").unwrap();
        deck
    }

    #[test]
    fn inserts_formatted_code() {
        let mut deck = java_deck();
        let result = run(
            &mut deck,
            "1",
            "/c Class Java { void method() {...} }",
        )
        .unwrap();

        let expected = "Class Java {\n    void method() {\n      ...\n   } \n}";
        assert_eq!(deck.flashcards()[0].code_snippet.as_deref(), Some(expected));
        assert_eq!(
            result.messages[0].content,
            messages::code_inserted(&deck.flashcards()[0], expected)
        );
    }

    #[test]
    fn replaces_existing_code() {
        let mut deck = java_deck();
        run(&mut deck, "1", "/c a;").unwrap();
        run(&mut deck, "1", "/c b").unwrap();
        assert_eq!(deck.flashcards()[0].code_snippet.as_deref(), Some("b"));
    }

    #[test]
    fn blank_code_is_missing_code() {
        let mut deck = java_deck();
        assert!(matches!(
            run(&mut deck, "1", "/c   ").unwrap_err(),
            FlashError::MissingCode
        ));
        assert!(deck.flashcards()[0].code_snippet.is_none());
    }

    #[test]
    fn missing_marker_is_missing_field() {
        let mut deck = java_deck();
        assert!(matches!(
            run(&mut deck, "1", "int x = 1;").unwrap_err(),
            FlashError::MissingField(_)
        ));
    }

    #[test]
    fn index_is_checked_first() {
        let mut deck = java_deck();
        assert!(matches!(
            run(&mut deck, "5", "").unwrap_err(),
            FlashError::IndexOutOfBounds { index: 5, len: 1 }
        ));
    }
}
