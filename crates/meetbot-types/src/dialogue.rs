//! Inbound conversation events as seen by the dialogue controller.
//!
//! The transport parses slash commands; the controller only ever sees these
//! already-tokenized values.

use std::fmt;
use std::str::FromStr;

/// Bot commands understood by the dialogue controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Create,
    List,
    Cancel,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Start,
        Command::Help,
        Command::Create,
        Command::List,
        Command::Cancel,
    ];

    /// Short description shown in the client's command menu.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Start => "Начать работу с ботом",
            Command::Help => "Показать справку",
            Command::Create => "Создать новую встречу",
            Command::List => "Показать все встречи",
            Command::Cancel => "Отменить создание встречи",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Start => write!(f, "start"),
            Command::Help => write!(f, "help"),
            Command::Create => write!(f, "create"),
            Command::List => write!(f, "list"),
            Command::Cancel => write!(f, "cancel"),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    /// Accepts the bare name with or without the leading slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/').to_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "create" => Ok(Command::Create),
            "list" => Ok(Command::List),
            "cancel" => Ok(Command::Cancel),
            other => Err(format!("unknown command: '{other}'")),
        }
    }
}

/// One inbound event from a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    Text(String),
}

impl From<Command> for Inbound {
    fn from(command: Command) -> Self {
        Inbound::Command(command)
    }
}

impl From<&str> for Inbound {
    fn from(text: &str) -> Self {
        Inbound::Text(text.to_string())
    }
}
