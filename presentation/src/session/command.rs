//! Slash commands understood by the interactive session

use std::path::PathBuf;

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Re-render the stored plan
    Show,
    /// Turn visuals on or off; `None` reports the current setting
    Visuals(Option<bool>),
    /// Export the stored plan, optionally to a specific directory
    Save(Option<PathBuf>),
    /// Forget the stored plan
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        let command = match name {
            "show" | "s" => ReplCommand::Show,
            "visuals" | "images" => match arg {
                None => ReplCommand::Visuals(None),
                Some("on") => ReplCommand::Visuals(Some(true)),
                Some("off") => ReplCommand::Visuals(Some(false)),
                Some(_) => ReplCommand::Unknown(line.to_string()),
            },
            "save" => ReplCommand::Save(arg.map(PathBuf::from)),
            "clear" => ReplCommand::Clear,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        };
        Some(command)
    }
}
