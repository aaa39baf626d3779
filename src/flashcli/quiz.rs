//! # Quiz Sessions
//!
//! A quiz walks a snapshot of a deck's flashcards in deck order. The session
//! is an explicit state machine driven one answer at a time through
//! [`QuizSession::submit_answer`], so any front end (the REPL, a test) can
//! feed it without the session ever reading input itself.
//!
//! ```text
//!   start ──► InProgress ──(last answer)──► Completed ──► finish() → QuizResults
//!                 │
//!                 └──("exit_quiz")──► Cancelled
//! ```
//!
//! A deck with no completed quiz has no session and no results; that is the
//! "not started" state. Cancelling drops everything recorded so far.

use crate::error::{FlashError, Result};
use crate::model::{Deck, Flashcard};
use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

/// Answer text that aborts a running quiz.
pub const CANCEL_SENTINEL: &str = "exit_quiz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Blank answer; the same question is still pending.
    AskAgain,
    Correct,
    Incorrect { expected: String },
    /// No question is pending because the quiz already completed.
    Finished,
}

#[derive(Debug)]
pub struct QuizSession {
    deck_id: Uuid,
    questions: Vec<Flashcard>,
    position: usize,
    state: QuizState,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    outcomes: Vec<bool>,
    incorrect: QuizResults,
}

impl QuizSession {
    /// Snapshots `deck` and enters `InProgress`.
    pub fn start(deck: &Deck) -> Result<Self> {
        if deck.is_empty() {
            return Err(FlashError::EmptyList);
        }
        debug!("quiz started on deck {} ({} cards)", deck.name, deck.len());
        Ok(Self {
            deck_id: deck.id,
            questions: deck.flashcards().to_vec(),
            position: 0,
            state: QuizState::InProgress,
            started_at: Utc::now(),
            finished_at: None,
            outcomes: Vec::with_capacity(deck.len()),
            incorrect: QuizResults::empty(deck.len()),
        })
    }

    pub fn deck_id(&self) -> Uuid {
        self.deck_id
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Questions not yet answered, including the current one.
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.position
    }

    pub fn current(&self) -> Option<&Flashcard> {
        match self.state {
            QuizState::InProgress => self.questions.get(self.position),
            _ => None,
        }
    }

    /// Per-question correctness, in the order the questions were answered.
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome> {
        match self.state {
            QuizState::Cancelled => return Err(FlashError::QuizCancelled),
            QuizState::Completed => return Ok(AnswerOutcome::Finished),
            QuizState::InProgress => {}
        }

        if answer.trim().is_empty() {
            return Ok(AnswerOutcome::AskAgain);
        }

        if answer == CANCEL_SENTINEL {
            debug!("quiz cancelled at question {}", self.position + 1);
            self.state = QuizState::Cancelled;
            self.outcomes.clear();
            self.incorrect = QuizResults::empty(self.questions.len());
            return Err(FlashError::QuizCancelled);
        }

        let card = &self.questions[self.position];
        let is_correct = answer.trim() == card.answer.trim();
        let outcome = if is_correct {
            AnswerOutcome::Correct
        } else {
            self.incorrect.record_incorrect(card, answer);
            AnswerOutcome::Incorrect {
                expected: card.answer.clone(),
            }
        };

        self.outcomes.push(is_correct);
        self.position += 1;
        if self.position == self.questions.len() {
            self.state = QuizState::Completed;
            self.finished_at = Some(Utc::now());
            debug!("quiz completed");
        }

        Ok(outcome)
    }

    /// Consumes a completed session and returns its results.
    pub fn finish(self) -> Result<QuizResults> {
        let finished_at = match (self.state, self.finished_at) {
            (QuizState::Completed, Some(at)) => at,
            _ => return Err(FlashError::IncompleteQuiz),
        };

        let mut results = self.incorrect;
        results.correct = self.outcomes.iter().filter(|ok| **ok).count();
        results.elapsed_seconds = (finished_at - self.started_at).num_seconds();
        results.completed_at = Some(finished_at);
        Ok(results)
    }
}

/// One wrongly answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectRecord<'a> {
    pub index: usize,
    pub flashcard: &'a Flashcard,
    pub user_answer: &'a str,
}

/// The outcome of a completed quiz.
///
/// Incorrect answers are kept as three parallel lists that always grow
/// together; [`QuizResults::incorrect_records`] refuses to read them if their
/// lengths ever disagree.
#[derive(Debug, Clone)]
pub struct QuizResults {
    total: usize,
    correct: usize,
    elapsed_seconds: i64,
    completed_at: Option<DateTime<Utc>>,
    incorrect_indices: Vec<usize>,
    incorrect_flashcards: Vec<Flashcard>,
    incorrect_answers: Vec<String>,
}

impl QuizResults {
    fn empty(total: usize) -> Self {
        Self {
            total,
            correct: 0,
            elapsed_seconds: 0,
            completed_at: None,
            incorrect_indices: Vec::new(),
            incorrect_flashcards: Vec::new(),
            incorrect_answers: Vec::new(),
        }
    }

    fn record_incorrect(&mut self, card: &Flashcard, user_answer: &str) {
        self.incorrect_indices.push(card.index);
        self.incorrect_flashcards.push(card.clone());
        self.incorrect_answers.push(user_answer.to_string());
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_seconds
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn incorrect_records(&self) -> Result<Vec<IncorrectRecord<'_>>> {
        let (indices, flashcards, answers) = (
            self.incorrect_indices.len(),
            self.incorrect_flashcards.len(),
            self.incorrect_answers.len(),
        );
        if indices != flashcards || flashcards != answers {
            return Err(FlashError::MismatchedResults {
                indices,
                flashcards,
                answers,
            });
        }

        Ok(self
            .incorrect_indices
            .iter()
            .zip(&self.incorrect_flashcards)
            .zip(&self.incorrect_answers)
            .map(|((index, flashcard), user_answer)| IncorrectRecord {
                index: *index,
                flashcard,
                user_answer,
            })
            .collect())
    }
}
