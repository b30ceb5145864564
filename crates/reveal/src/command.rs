//! Console-style entry points: `reveal [hell]`, `unreveal`, `revtoggle`.

use std::str::FromStr;

use mapreveal_kernel::Host;

use crate::engine::{RevealMode, RevealReport};
use crate::session::{RevealSession, ToggleOutcome};

/// Name and help text of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub help: &'static str,
}

/// Commands offered to the host console.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "reveal",
        help: "Reveal the map. 'reveal hell' will also reveal hell.",
    },
    CommandSpec {
        name: "unreveal",
        help: "Revert the map to its previous state.",
    },
    CommandSpec {
        name: "revtoggle",
        help: "Reveal/unreveal depending on state.",
    },
];

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal(RevealMode),
    Unreveal,
    Toggle,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' does not take argument '{arg}'")]
    UnexpectedArgument { command: String, arg: String },
}

impl Command {
    /// Parse a command name and its parameters.
    pub fn parse(name: &str, params: &[&str]) -> Result<Self, CommandParseError> {
        let unexpected = |arg: &str| CommandParseError::UnexpectedArgument {
            command: name.to_string(),
            arg: arg.to_string(),
        };
        match (name, params) {
            ("reveal", []) => Ok(Command::Reveal(RevealMode::Safe)),
            ("reveal", ["hell"]) => Ok(Command::Reveal(RevealMode::Full)),
            ("reveal", ["hell", extra, ..]) => Err(unexpected(extra)),
            ("reveal", [arg, ..]) => Err(unexpected(arg)),
            ("unreveal", []) => Ok(Command::Unreveal),
            ("revtoggle", []) => Ok(Command::Toggle),
            ("unreveal" | "revtoggle", [arg, ..]) => Err(unexpected(arg)),
            ("", _) => Err(CommandParseError::Empty),
            (other, _) => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandParseError::Empty)?;
        let params: Vec<&str> = words.collect();
        Command::parse(name, &params)
    }
}

/// Whether a command succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    Failure,
}

/// Result of running a command: status plus the lines to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: CommandStatus,
    pub lines: Vec<String>,
}

impl CommandOutput {
    fn ok(lines: Vec<String>) -> Self {
        Self {
            status: CommandStatus::Ok,
            lines,
        }
    }

    fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            status: CommandStatus::Failure,
            lines: vec![capitalize(&message.to_string())],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CommandStatus::Ok
    }
}

impl std::fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn revealed_lines(report: &RevealReport) -> Vec<String> {
    let mut lines = vec!["Map revealed.".to_string()];
    if report.mode == RevealMode::Full {
        lines.push(
            "Unpausing can unleash the forces of hell, so it has been temporarily disabled."
                .to_string(),
        );
    }
    lines.push("Run 'unreveal' to revert to previous state.".to_string());
    lines
}

impl RevealSession {
    /// Run a command against `host` and describe the outcome.
    pub fn execute<H: Host + ?Sized>(&mut self, host: &mut H, command: Command) -> CommandOutput {
        match command {
            Command::Reveal(mode) => match self.reveal(host, mode) {
                Ok(report) => CommandOutput::ok(revealed_lines(&report)),
                Err(err) => CommandOutput::failure(err),
            },
            Command::Unreveal => match self.unreveal(host) {
                Ok(_) => CommandOutput::ok(vec!["Map hidden!".to_string()]),
                Err(err) => CommandOutput::failure(err),
            },
            Command::Toggle => match self.toggle(host) {
                Ok(ToggleOutcome::Revealed(report)) => CommandOutput::ok(revealed_lines(&report)),
                Ok(ToggleOutcome::Restored(_)) => CommandOutput::ok(vec!["Map hidden!".to_string()]),
                Err(err) => CommandOutput::failure(err),
            },
        }
    }
}
