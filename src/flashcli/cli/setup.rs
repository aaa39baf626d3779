use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcli", bin_name = "flashcli", version)]
#[command(about = "Deck-based flashcards and quizzes in the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding config.json
    #[arg(long, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Log filter passed to env_logger (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", help_heading = "Options")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,
}

/// Command keywords understood by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Add,
    ViewQuestion,
    ViewAnswer,
    Edit,
    Delete,
    List,
    InsertCode,
    MarkLearned,
    MarkUnlearned,
    Search,
    Quiz,
    ViewResults,
    Rename,
    Unselect,
    New,
    Select,
    Decks,
    DeleteDeck,
    SearchAll,
    Help,
    Exit,
}

impl Keyword {
    pub const ALL: [Keyword; 21] = [
        Keyword::New,
        Keyword::Decks,
        Keyword::Select,
        Keyword::Rename,
        Keyword::Unselect,
        Keyword::DeleteDeck,
        Keyword::Add,
        Keyword::List,
        Keyword::ViewQuestion,
        Keyword::ViewAnswer,
        Keyword::Edit,
        Keyword::Delete,
        Keyword::InsertCode,
        Keyword::MarkLearned,
        Keyword::MarkUnlearned,
        Keyword::Search,
        Keyword::SearchAll,
        Keyword::Quiz,
        Keyword::ViewResults,
        Keyword::Help,
        Keyword::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Keyword::Add => "add",
            Keyword::ViewQuestion => "view_qn",
            Keyword::ViewAnswer => "view_ans",
            Keyword::Edit => "edit",
            Keyword::Delete => "delete",
            Keyword::List => "list",
            Keyword::InsertCode => "insert_code",
            Keyword::MarkLearned => "mark_learned",
            Keyword::MarkUnlearned => "mark_unlearned",
            Keyword::Search => "search",
            Keyword::Quiz => "quiz",
            Keyword::ViewResults => "view_res",
            Keyword::Rename => "rename",
            Keyword::Unselect => "unselect",
            Keyword::New => "new",
            Keyword::Select => "select",
            Keyword::Decks => "decks",
            Keyword::DeleteDeck => "delete_deck",
            Keyword::SearchAll => "search_all",
            Keyword::Help => "help",
            Keyword::Exit => "exit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kw| kw.name() == name)
    }

    /// Whether the keyword acts on the currently selected deck.
    pub fn needs_deck(&self) -> bool {
        !matches!(
            self,
            Keyword::New
                | Keyword::Select
                | Keyword::Decks
                | Keyword::DeleteDeck
                | Keyword::SearchAll
                | Keyword::Help
                | Keyword::Exit
        )
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Keyword::Add => "add /q {QUESTION} /a {ANSWER} [/c {CODE}]",
            Keyword::ViewQuestion => "view_qn {INDEX}",
            Keyword::ViewAnswer => "view_ans {INDEX}",
            Keyword::Edit => "edit {INDEX} /q {QUESTION} /a {ANSWER}",
            Keyword::Delete => "delete {INDEX}",
            Keyword::List => "list",
            Keyword::InsertCode => "insert_code {INDEX} /c {CODE}",
            Keyword::MarkLearned => "mark_learned {INDEX}",
            Keyword::MarkUnlearned => "mark_unlearned {INDEX}",
            Keyword::Search => "search [/q {QUESTION}] [/a {ANSWER}]",
            Keyword::Quiz => "quiz",
            Keyword::ViewResults => "view_res",
            Keyword::Rename => "rename {NAME}",
            Keyword::Unselect => "unselect",
            Keyword::New => "new {NAME}",
            Keyword::Select => "select {DECK NUMBER}",
            Keyword::Decks => "decks",
            Keyword::DeleteDeck => "delete_deck {DECK NUMBER}",
            Keyword::SearchAll => "search_all [/q {QUESTION}] [/a {ANSWER}]",
            Keyword::Help => "help",
            Keyword::Exit => "exit",
        }
    }
}

/// One usage line per keyword, deck commands first.
pub fn help_text() -> String {
    let mut out = String::from("Possible commands:\n");
    for keyword in Keyword::ALL {
        out.push_str("  ");
        out.push_str(keyword.usage());
        out.push('\n');
    }
    out.push_str("Commands on flashcards need a selected deck (select {DECK NUMBER}).");
    out
}

/// Splits an input line into its keyword and the raw argument text.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (line, ""),
    }
}
