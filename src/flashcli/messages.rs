//! User-facing message templates.
//!
//! Commands pick a template and fill it; they never build prose inline. Error
//! texts live on [`crate::error::FlashError`] instead.

use crate::model::{Flashcard, LearnedState};
use crate::quiz::CANCEL_SENTINEL;
use once_cell::sync::Lazy;

pub const QUIZ_NO_ANSWER: &str = "No answer detected. Input your answer again:";
pub const QUIZ_CORRECT: &str = "Correct!";
pub const QUIZ_INCORRECT: &str = "Incorrect.";
pub const QUIZ_LAST_QUESTION: &str = "You have 1 question left:";
pub const QUIZ_ALL_CORRECT: &str = "You answered every question correctly!";

pub static QUIZ_START: Lazy<String> = Lazy::new(|| {
    format!(
        "Entering quiz mode... get ready!\n\
         Type '{}' to cancel the quiz and leave at anytime\n\
         Cancelling the quiz would not save your results",
        CANCEL_SENTINEL
    )
});

pub fn created(card: &Flashcard) -> String {
    format!(
        "Flashcard created:\nQuestion: {}\nAnswer: {}\nIndex: {}",
        card.question, card.answer, card.index
    )
}

pub fn edited(old_question: &str, new_question: &str, old_answer: &str, new_answer: &str) -> String {
    format!(
        "Updated flashcard:\nQuestion: {} -> {}\nAnswer: {} -> {}",
        old_question, new_question, old_answer, new_answer
    )
}

pub fn deleted(card: &Flashcard) -> String {
    format!(
        "Deleted flashcard {}:\nQuestion: {}\nAnswer: {}",
        card.index, card.question, card.answer
    )
}

pub fn list_line(card: &Flashcard) -> String {
    format!("{}. {} {}", card.index, card.learned_marker(), card.question)
}

pub fn listed(lines: &str) -> String {
    format!("Here is a list of your flashcards:\n{}", lines)
}

pub fn view_question(card: &Flashcard) -> String {
    let code = card
        .code_snippet
        .as_deref()
        .map(|code| format!("\n{}", code))
        .unwrap_or_default();
    format!(
        "Question {} {}: {}{}",
        card.index,
        card.learned_marker(),
        card.question,
        code
    )
}

pub fn view_answer(card: &Flashcard) -> String {
    format!("Answer of flashcard {}: {}", card.index, card.answer)
}

pub fn code_inserted(card: &Flashcard, code: &str) -> String {
    format!("Inserted code snippet into flashcard {}:\n{}", card.index, code)
}

pub fn learned_changed(index: usize, state: LearnedState) -> String {
    format!("Flashcard {} is now marked as {}.", index, state)
}

pub fn search_block(card: &Flashcard) -> String {
    format!("Question: {}\nAnswer: {}", card.question, card.answer)
}

pub fn search_results(blocks: &str) -> String {
    format!("Matching flashcards:\n{}", blocks)
}

pub fn global_search_block(deck: &str, card: &Flashcard) -> String {
    format!("Deck: {}\n{}", deck, search_block(card))
}

pub fn deck_created(name: &str) -> String {
    format!("Created new deck: {}", name)
}

pub fn deck_renamed(old: &str, new: &str) -> String {
    format!("Renamed deck {} to {}", old, new)
}

pub fn deck_selected(name: &str) -> String {
    format!("Switched to deck: {}", name)
}

pub fn deck_deleted(name: &str) -> String {
    format!("Deleted deck: {}", name)
}

pub fn deck_unselected(name: &str) -> String {
    format!("Unselected deck: {}", name)
}

pub fn decks_listed(lines: &str) -> String {
    format!("List of decks:\n{}", lines)
}

pub fn quiz_finished(elapsed_seconds: i64) -> String {
    format!(
        "You finished the test! You took: {} seconds!\nType view_res to check your test result",
        elapsed_seconds
    )
}

pub fn quiz_questions_left(remaining: usize) -> String {
    if remaining == 1 {
        QUIZ_LAST_QUESTION.to_string()
    } else {
        format!("You have {} questions left:", remaining)
    }
}

pub fn quiz_score(correct: usize, total: usize, elapsed_seconds: i64) -> String {
    format!(
        "Your result: {}/{} correct in {} seconds",
        correct, total, elapsed_seconds
    )
}

pub fn quiz_incorrect(index: usize, card: &Flashcard, user_answer: &str) -> String {
    format!(
        "Flashcard {}:\nQuestion: {}\nYour answer: {}\nCorrect answer: {}",
        index, card.question, user_answer, card.answer
    )
}
