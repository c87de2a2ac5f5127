//! Bot commands recognised in incoming text.

/// A slash command at the start of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Cancel,
    Help,
    /// Any other command; never consumed as list input.
    Unknown(String),
}

impl Command {
    /// Parses the leading `/command` (optionally `/command@botname`, trailing arguments ignored).
    /// Returns None for plain text.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.trim_start().split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);

        Some(match name {
            "start" => Command::Start,
            "cancel" => Command::Cancel,
            "help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        })
    }
}
