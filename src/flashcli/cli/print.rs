use colored::Colorize;
use flashcli::api::{CmdMessage, MessageLevel};
use flashcli::error::FlashError;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub(super) fn render_error(err: &FlashError) -> String {
    if err.is_fatal() {
        format!("{}\n", format!("Internal error: {}", err).red().bold())
    } else {
        format!("{}\n", err.to_string().red())
    }
}

/// Disables ANSI colors for the whole process.
pub(super) fn disable_color() {
    colored::control::set_override(false);
}
