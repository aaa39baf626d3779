use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{format_code_snippet, Tag, CARD_FIELDS};
use crate::messages;
use crate::model::Deck;
use log::debug;

pub fn run(deck: &mut Deck, raw: &str) -> Result<CmdResult> {
    let fields = CARD_FIELDS.extract(raw)?;
    let question = fields.require(Tag::Question)?.to_string();
    let answer = fields.require(Tag::Answer)?.to_string();

    let card = deck.push_card(question, answer);
    card.code_snippet = fields.code.as_deref().map(format_code_snippet);
    let card = card.clone();

    debug!("created flashcard {} in deck {}", card.index, deck.name);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(messages::created(&card)))
        .with_affected_cards(vec![card]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashError;

    #[test]
    fn appends_card_with_next_index() {
        let mut deck = Deck::new("java".into());
        let result = run(&mut deck, "/q What is Java? /a A programming language.").unwrap();

        assert_eq!(deck.len(), 1);
        let card = &deck.flashcards()[0];
        assert_eq!(card.index, 1);
        assert_eq!(card.question, "What is Java?");
        assert_eq!(card.answer, "A programming language.");
        assert!(!card.is_learned);
        assert_eq!(result.affected_cards[0], *card);
        assert_eq!(result.messages[0].content, messages::created(card));

        run(&mut deck, "/q Second? /a Yes.").unwrap();
        assert_eq!(deck.flashcards()[1].index, 2);
    }

    #[test]
    fn stores_formatted_code() {
        let mut deck = Deck::new("java".into());
        run(&mut deck, "/q Swap? /a tmp /c int t = a; a = b; b = t;").unwrap();
        assert_eq!(
            deck.flashcards()[0].code_snippet.as_deref(),
            Some("int t = a;\n a = b;\n b = t;")
        );
    }

    #[test]
    fn parse_failures_leave_deck_untouched() {
        let mut deck = Deck::new("java".into());
        let err = run(&mut deck, "/q /a A programming language.").unwrap_err();
        assert!(matches!(err, FlashError::MissingDescription(_)));
        let err = run(&mut deck, "/a A programming language. /q What is Java?").unwrap_err();
        assert!(matches!(err, FlashError::InvalidOrder(_)));
        assert!(deck.is_empty());
    }
}
