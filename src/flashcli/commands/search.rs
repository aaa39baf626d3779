//! Substring search over flashcards.
//!
//! A search is written with the same tags as `add`, but both are optional:
//! `/q Java` matches every card whose question contains `Java`, `/a VM` does the
//! same for answers, and giving both requires both to match. Matching is a
//! case-sensitive substring test.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::fields::{Tag, TagList, SEARCH_FIELDS};
use crate::messages;
use crate::model::{Deck, Flashcard};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl SearchFilter {
    pub fn parse(raw: &str) -> Result<Self> {
        let fields = SEARCH_FIELDS.extract(raw)?;
        Ok(Self {
            question: fields.question,
            answer: fields.answer,
        })
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        let question_ok = self
            .question
            .as_deref()
            .map_or(true, |q| card.question.contains(q));
        let answer_ok = self
            .answer
            .as_deref()
            .map_or(true, |a| card.answer.contains(a));
        question_ok && answer_ok
    }
}

/// Blank input is a missing field and an empty deck is reported before the
/// filter itself is checked.
pub fn run(deck: &Deck, raw: &str) -> Result<CmdResult> {
    if raw.trim().is_empty() {
        return Err(FlashError::MissingField(TagList(vec![
            Tag::Question,
            Tag::Answer,
        ])));
    }
    if deck.is_empty() {
        return Err(FlashError::EmptyDeck);
    }
    let filter = SearchFilter::parse(raw)?;

    let matched: Vec<Flashcard> = deck
        .flashcards()
        .iter()
        .filter(|card| filter.matches(card))
        .cloned()
        .collect();
    if matched.is_empty() {
        return Err(FlashError::SearchResultEmpty);
    }

    let blocks = matched
        .iter()
        .map(messages::search_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(messages::search_results(&blocks)))
        .with_listed_cards(matched))
}
