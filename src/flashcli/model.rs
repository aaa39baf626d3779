use crate::quiz::QuizResults;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnedState {
    Learned,
    Unlearned,
}

impl LearnedState {
    pub fn from_flag(is_learned: bool) -> Self {
        if is_learned {
            LearnedState::Learned
        } else {
            LearnedState::Unlearned
        }
    }

    pub fn is_learned(&self) -> bool {
        matches!(self, LearnedState::Learned)
    }
}

impl fmt::Display for LearnedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnedState::Learned => write!(f, "learned"),
            LearnedState::Unlearned => write!(f, "unlearned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    /// 1-based position inside the owning deck.
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub code_snippet: Option<String>,
    pub is_learned: bool,
}

impl Flashcard {
    pub fn new(index: usize, question: String, answer: String) -> Self {
        Self {
            index,
            question,
            answer,
            code_snippet: None,
            is_learned: false,
        }
    }

    pub fn learned_state(&self) -> LearnedState {
        LearnedState::from_flag(self.is_learned)
    }

    /// `[X]` for learned cards, `[ ]` otherwise.
    pub fn learned_marker(&self) -> &'static str {
        if self.is_learned {
            "[X]"
        } else {
            "[ ]"
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    flashcards: Vec<Flashcard>,
    quiz_results: Option<QuizResults>,
}

impl Deck {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            flashcards: Vec::new(),
            quiz_results: None,
        }
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn card(&self, position: usize) -> Option<&Flashcard> {
        self.flashcards.get(position)
    }

    pub fn card_mut(&mut self, position: usize) -> Option<&mut Flashcard> {
        self.flashcards.get_mut(position)
    }

    /// Appends a card at the end of the deck and returns it.
    pub fn push_card(&mut self, question: String, answer: String) -> &mut Flashcard {
        let index = self.flashcards.len() + 1;
        self.flashcards.push(Flashcard::new(index, question, answer));
        let last = self.flashcards.len() - 1;
        &mut self.flashcards[last]
    }

    /// Removes the card at a zero-based position and renumbers the suffix.
    pub fn remove_card(&mut self, position: usize) -> Option<Flashcard> {
        if position >= self.flashcards.len() {
            return None;
        }
        let removed = self.flashcards.remove(position);
        self.renumber_from(position);
        Some(removed)
    }

    fn renumber_from(&mut self, position: usize) {
        for (offset, card) in self.flashcards[position..].iter_mut().enumerate() {
            card.index = position + offset + 1;
        }
    }

    pub fn quiz_results(&self) -> Option<&QuizResults> {
        self.quiz_results.as_ref()
    }

    pub fn store_quiz_results(&mut self, results: QuizResults) {
        self.quiz_results = Some(results);
    }

    pub fn clear_quiz_results(&mut self) {
        self.quiz_results = None;
    }
}
