use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::messages;
use crate::model::Deck;

pub fn run(deck: &Deck) -> Result<CmdResult> {
    if deck.is_empty() {
        return Err(FlashError::EmptyList);
    }

    let lines = deck
        .flashcards()
        .iter()
        .map(messages::list_line)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(messages::listed(&lines)))
        .with_listed_cards(deck.flashcards().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, learned};
    use crate::model::LearnedState;

    #[test]
    fn lists_cards_with_learned_markers() {
        let mut deck = Deck::new("java".into());
        create::run(&mut deck, "/q What is Java? /a A language.").unwrap();
        create::run(&mut deck, "/q What is Rust? /a Another one.").unwrap();
        learned::mark(&mut deck, "2", LearnedState::Learned).unwrap();

        let result = run(&deck).unwrap();
        assert_eq!(
            result.text(),
            "Here is a list of your flashcards:\n1. [ ] What is Java?\n2. [X] What is Rust?"
        );
        assert_eq!(result.listed_cards.len(), 2);
    }

    #[test]
    fn empty_deck_is_an_error() {
        let deck = Deck::new("java".into());
        assert!(matches!(run(&deck).unwrap_err(), FlashError::EmptyList));
    }
}
