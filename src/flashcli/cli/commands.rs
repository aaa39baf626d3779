//! # CLI Layer
//!
//! This module is **one possible UI client** for flashcli. It is the only
//! place in the codebase that:
//! - Reads stdin and writes stdout
//! - Parses startup flags and sets up logging
//! - Turns `CmdResult`s and errors into terminal text
//!
//! ## Structure
//!
//! - `run()`: startup (flags, config, logger, colors), then the session loop
//! - [`Repl`]: reads one command per line and dispatches it to [`FlashApi`];
//!   generic over its input and output so tests can drive it in memory
//! - `run_quiz()`: the nested answer loop of the `quiz` keyword
//!
//! Errors never end the session. Each one is printed and the next line is
//! read; a fatal error additionally drops the current deck's quiz results.

use super::print::{disable_color, render_error, render_messages};
use super::setup::{help_text, split_command, Cli, Keyword};
use clap::Parser;
use env_logger::{Builder, Env};
use flashcli::api::{CmdResult, FlashApi};
use flashcli::config::{resolve_config_dir, FlashConfig};
use flashcli::error::{FlashError, Result};
use flashcli::messages;
use flashcli::quiz::{AnswerOutcome, CANCEL_SENTINEL};
use log::{debug, error, warn};
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to flashcli! Type help to see what you can do.";
const GOODBYE: &str = "Goodbye, see you next time!";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = resolve_config_dir(cli.config.clone());
    let (config, config_error) = match config_dir.as_deref().map(FlashConfig::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (FlashConfig::default(), Some(err)),
        None => (FlashConfig::default(), None),
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Some(err) = config_error {
        warn!("ignoring unreadable config: {}", err);
    }
    debug!("config directory: {:?}", config_dir);

    if cli.no_color || !config.color {
        disable_color();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(FlashApi::new(), stdin.lock(), stdout.lock())
        .with_quiz_progress(config.quiz_progress);
    repl.run()
}

enum Flow {
    Continue,
    Exit,
}

pub struct Repl<R, W> {
    api: FlashApi,
    input: R,
    out: W,
    quiz_progress: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(api: FlashApi, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            quiz_progress: true,
        }
    }

    pub fn with_quiz_progress(mut self, enabled: bool) -> Self {
        self.quiz_progress = enabled;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        self.write_line(WELCOME)?;
        while let Some(line) = self.read_line()? {
            let (keyword, args) = split_command(&line);
            if keyword.is_empty() {
                continue;
            }
            match self.dispatch(keyword, args) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => self.report(err)?,
            }
        }
        self.write_line(GOODBYE)?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, keyword: &str, args: &str) -> Result<Flow> {
        let Some(keyword) = Keyword::from_name(keyword) else {
            return Err(FlashError::UnknownCommand(keyword.to_string()));
        };
        if keyword.needs_deck() && !self.api.has_current_deck() {
            return Err(FlashError::NoDeck);
        }
        debug!("dispatching {}", keyword.name());

        let result = match keyword {
            Keyword::Add => self.api.create_flashcard(args)?,
            Keyword::ViewQuestion => self.api.view_question(args)?,
            Keyword::ViewAnswer => self.api.view_answer(args)?,
            Keyword::Edit => self.api.edit_flashcard(args)?,
            Keyword::Delete => self.api.delete_flashcard(args)?,
            Keyword::List => self.api.list_flashcards()?,
            Keyword::InsertCode => self.api.insert_code(args)?,
            Keyword::MarkLearned => self.api.mark_learned(args)?,
            Keyword::MarkUnlearned => self.api.mark_unlearned(args)?,
            Keyword::Search => self.api.search_flashcards(args)?,
            Keyword::Quiz => {
                self.run_quiz()?;
                return Ok(Flow::Continue);
            }
            Keyword::ViewResults => self.api.quiz_results()?,
            Keyword::Rename => self.api.rename_deck(args)?,
            Keyword::Unselect => self.api.unselect_deck()?,
            Keyword::New => self.api.create_deck(args)?,
            Keyword::Select => self.api.select_deck(args)?,
            Keyword::Decks => self.api.view_decks()?,
            Keyword::DeleteDeck => self.api.delete_deck(args)?,
            Keyword::SearchAll => self.api.global_search(args)?,
            Keyword::Help => {
                self.write_line(&help_text())?;
                return Ok(Flow::Continue);
            }
            Keyword::Exit => return Ok(Flow::Exit),
        };
        self.print(&result)?;
        Ok(Flow::Continue)
    }

    fn run_quiz(&mut self) -> Result<()> {
        let (mut session, banner) = self.api.start_quiz()?;
        self.print(&banner)?;

        while let Some(card) = session.current().cloned() {
            if self.quiz_progress {
                self.write_line(&messages::quiz_questions_left(session.remaining()))?;
            }
            self.write_line(&messages::view_question(&card))?;

            loop {
                // end of input cancels the quiz
                let line = self
                    .read_line()?
                    .unwrap_or_else(|| CANCEL_SENTINEL.to_string());
                let (outcome, feedback) = self.api.answer_quiz(&mut session, &line)?;
                self.print(&feedback)?;
                if outcome != AnswerOutcome::AskAgain {
                    break;
                }
            }
        }

        let done = self.api.complete_quiz(session)?;
        self.print(&done)
    }

    fn report(&mut self, err: FlashError) -> Result<()> {
        if err.is_fatal() {
            error!("{}", err);
            self.api.discard_quiz_results();
        }
        let text = render_error(&err);
        self.out.write_all(text.as_bytes())?;
        if matches!(err, FlashError::UnknownCommand(_)) {
            self.write_line(&help_text())?;
        }
        Ok(())
    }

    fn print(&mut self, result: &CmdResult) -> Result<()> {
        let text = render_messages(&result.messages);
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Next line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
