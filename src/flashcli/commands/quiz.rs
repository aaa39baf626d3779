use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::manager::DeckManager;
use crate::messages;
use crate::model::Deck;
use crate::quiz::{AnswerOutcome, QuizSession};
use log::{debug, info};

pub fn start(deck: &Deck) -> Result<(QuizSession, CmdResult)> {
    let session = QuizSession::start(deck)?;
    info!("quiz started on deck {}", deck.name);
    let result = CmdResult::default().with_message(CmdMessage::info(messages::QUIZ_START.as_str()));
    Ok((session, result))
}

/// Feeds one line of user input to a running quiz.
///
/// Returns the outcome alongside its feedback message so the caller can decide
/// whether to re-ask the same question.
pub fn answer(session: &mut QuizSession, input: &str) -> Result<(AnswerOutcome, CmdResult)> {
    let outcome = session.submit_answer(input)?;
    let message = match &outcome {
        AnswerOutcome::AskAgain => CmdMessage::warning(messages::QUIZ_NO_ANSWER),
        AnswerOutcome::Correct => CmdMessage::success(messages::QUIZ_CORRECT),
        AnswerOutcome::Incorrect { .. } => CmdMessage::error(messages::QUIZ_INCORRECT),
        AnswerOutcome::Finished => return Ok((outcome, CmdResult::default())),
    };
    Ok((outcome, CmdResult::default().with_message(message)))
}

/// Stores the results of a completed quiz on the deck it was taken from,
/// replacing any earlier results.
pub fn complete(manager: &mut DeckManager, session: QuizSession) -> Result<CmdResult> {
    let deck_id = session.deck_id();
    let results = session.finish()?;
    let elapsed = results.elapsed_seconds();

    let deck = manager.get_mut(deck_id).ok_or(FlashError::NoSuchDeck)?;
    deck.store_quiz_results(results);
    info!("quiz completed on deck {} in {}s", deck.name, elapsed);
    Ok(CmdResult::default().with_message(CmdMessage::success(messages::quiz_finished(elapsed))))
}

/// Reports the last completed quiz of `deck`.
pub fn results(deck: &Deck) -> Result<CmdResult> {
    let results = deck.quiz_results().ok_or(FlashError::IncompleteQuiz)?;
    let records = results.incorrect_records()?;
    debug!("viewing {} incorrect answers", records.len());

    let mut result = CmdResult::default().with_message(CmdMessage::info(messages::quiz_score(
        results.correct(),
        results.total(),
        results.elapsed_seconds(),
    )));
    if records.is_empty() {
        result.add_message(CmdMessage::success(messages::QUIZ_ALL_CORRECT));
    }
    for record in &records {
        result.add_message(CmdMessage::warning(messages::quiz_incorrect(
            record.index,
            record.flashcard,
            record.user_answer,
        )));
    }
    Ok(result.with_listed_cards(
        records.iter().map(|record| record.flashcard.clone()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, decks};
    use crate::quiz::{QuizState, CANCEL_SENTINEL};

    fn manager_with_deck() -> DeckManager {
        let mut manager = DeckManager::new();
        decks::create(&mut manager, "java").unwrap();
        decks::select(&mut manager, "1").unwrap();
        let deck = manager.current_mut().unwrap();
        create::run(deck, "/q What is Java? /a A programming language.").unwrap();
        create::run(deck, "/q What is Rust? /a A systems language.").unwrap();
        manager
    }

    #[test]
    fn full_quiz_stores_results() {
        let mut manager = manager_with_deck();
        let (mut session, banner) = start(manager.current().unwrap()).unwrap();
        assert!(banner.text().contains(CANCEL_SENTINEL));

        let (outcome, feedback) = answer(&mut session, "A programming language.").unwrap();
        assert_eq!(outcome, AnswerOutcome::Correct);
        assert_eq!(feedback.text(), messages::QUIZ_CORRECT);
        let (_, feedback) = answer(&mut session, "dummy response").unwrap();
        assert_eq!(feedback.text(), messages::QUIZ_INCORRECT);
        assert_eq!(session.state(), QuizState::Completed);

        complete(&mut manager, session).unwrap();
        let report = results(manager.current().unwrap()).unwrap();
        let text = report.text();
        assert!(text.starts_with("Your result: 1/2 correct"));
        assert!(text.contains("Flashcard 2:\nQuestion: What is Rust?\nYour answer: dummy response"));
        assert_eq!(report.listed_cards.len(), 1);
    }

    #[test]
    fn perfect_quiz() {
        let mut manager = manager_with_deck();
        let (mut session, _) = start(manager.current().unwrap()).unwrap();
        answer(&mut session, "A programming language.").unwrap();
        answer(&mut session, "A systems language.").unwrap();
        complete(&mut manager, session).unwrap();

        let report = results(manager.current().unwrap()).unwrap();
        assert!(report.text().ends_with(messages::QUIZ_ALL_CORRECT));
    }

    #[test]
    fn blank_answer_asks_again() {
        let manager = manager_with_deck();
        let (mut session, _) = start(manager.current().unwrap()).unwrap();
        let (outcome, feedback) = answer(&mut session, "").unwrap();
        assert_eq!(outcome, AnswerOutcome::AskAgain);
        assert_eq!(feedback.text(), messages::QUIZ_NO_ANSWER);
    }

    #[test]
    fn cancelled_quiz_stores_nothing() {
        let manager = manager_with_deck();
        let (mut session, _) = start(manager.current().unwrap()).unwrap();
        answer(&mut session, "A programming language.").unwrap();
        let err = answer(&mut session, CANCEL_SENTINEL).unwrap_err();
        assert_eq!(err.to_string(), "Quiz stopped! Exiting quiz...");
        assert!(manager.current().unwrap().quiz_results().is_none());
        assert!(matches!(
            results(manager.current().unwrap()).unwrap_err(),
            FlashError::IncompleteQuiz
        ));
    }

    #[test]
    fn unfinished_quiz_cannot_complete() {
        let mut manager = manager_with_deck();
        let (mut session, _) = start(manager.current().unwrap()).unwrap();
        answer(&mut session, "A programming language.").unwrap();
        assert!(matches!(
            complete(&mut manager, session).unwrap_err(),
            FlashError::IncompleteQuiz
        ));
        assert!(manager.current().unwrap().quiz_results().is_none());
    }

    #[test]
    fn empty_deck_cannot_quiz() {
        let deck = Deck::new("empty".into());
        assert!(matches!(start(&deck).unwrap_err(), FlashError::EmptyList));
    }

    #[test]
    fn results_are_per_deck() {
        let mut manager = manager_with_deck();
        decks::create(&mut manager, "other").unwrap();
        let (mut session, _) = start(manager.current().unwrap()).unwrap();
        answer(&mut session, "x").unwrap();
        answer(&mut session, "y").unwrap();
        complete(&mut manager, session).unwrap();

        decks::select(&mut manager, "2").unwrap();
        assert!(matches!(
            results(manager.current().unwrap()).unwrap_err(),
            FlashError::IncompleteQuiz
        ));
    }
}
