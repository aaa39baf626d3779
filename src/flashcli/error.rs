use crate::fields::TagList;
use crate::model::LearnedState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashError {
    #[error("Missing {0} in input.")]
    MissingField(TagList),

    #[error("Field {0} cannot be empty.")]
    MissingDescription(&'static str),

    #[error("Fields are out of order, expected: {0}")]
    InvalidOrder(TagList),

    #[error("Input must start with a field tag ({0}).")]
    InvalidInput(TagList),

    #[error("Please provide an index.")]
    MissingIndex,

    #[error("Index must be a number, got \"{0}\".")]
    InvalidIndexInput(String),

    #[error("Index {index} is out of bounds, there are {len} entries.")]
    IndexOutOfBounds { index: i64, len: usize },

    #[error("Invalid: List is empty.")]
    EmptyList,

    #[error("Cannot search an empty deck.")]
    EmptyDeck,

    #[error("The code snippet cannot be empty.")]
    MissingCode,

    #[error("Flashcard is already {0}, no change needed.")]
    NoChangeNeeded(LearnedState),

    #[error("No flashcards match your search.")]
    SearchResultEmpty,

    #[error("Deck must have a name.")]
    MissingName,

    #[error("Deck name must not be empty!")]
    EmptyName,

    #[error("Deck name already exists: {0}")]
    DuplicateName(String),

    #[error("Deck name is unchanged!")]
    UnchangedName,

    #[error("Deck does not exist!")]
    NoSuchDeck,

    #[error("Select a deck first!")]
    NoDeck,

    #[error("No decks available. Create a deck before selecting.")]
    NoDeckToSwitch,

    #[error("No decks available. Create a deck to start.")]
    NoDeckToView,

    #[error("Quiz stopped! Exiting quiz...")]
    QuizCancelled,

    #[error("Complete a quiz first")]
    IncompleteQuiz,

    #[error(
        "Quiz results are inconsistent: {indices} indices, {flashcards} flashcards, {answers} answers"
    )]
    MismatchedResults {
        indices: usize,
        flashcards: usize,
        answers: usize,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlashError {
    /// Broken internal invariants, as opposed to bad user input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FlashError::MismatchedResults { .. })
    }
}

pub type Result<T> = std::result::Result<T, FlashError>;
