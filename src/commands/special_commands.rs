//! Special commands parser for the practice session
//!
//! Lines starting with `/` control the interview; every other line is part of
//! the answer being written. Command names are case-insensitive, arguments
//! keep their case.

use crate::models::Difficulty;
use crate::routes::Route;
use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// Commands available while practicing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Start a new interview; omitted values come from configuration
    Start {
        topic: Option<String>,
        difficulty: Option<Difficulty>,
        questions: Option<u32>,
    },

    /// Send the answer draft
    Submit,

    /// Discard the answer draft
    Clear,

    /// Print the answer draft
    ShowAnswer,

    /// Fetch the current question again
    Reload,

    /// Finish the interview and show the summary
    End,

    /// Show question, progress and draft
    ShowStatus,

    /// Switch screen
    Go(Route),

    /// Show what the service reports about itself
    Info,

    /// Display help information
    Help,

    /// Exit the session
    Exit,

    /// Not a special command
    ///
    /// The input is a line of the answer.
    None,
}

fn unsupported(command: &str, arg: &str) -> CommandError {
    CommandError::UnsupportedArgument {
        command: command.to_string(),
        arg: arg.to_string(),
    }
}

fn parse_start(args: &[&str]) -> Result<SpecialCommand, CommandError> {
    if args.len() > 3 {
        return Err(unsupported("/start", args[3]));
    }

    let topic = args.first().map(|t| t.to_string());
    let difficulty = match args.get(1) {
        Some(raw) => Some(Difficulty::parse_str(raw).ok_or_else(|| unsupported("/start", raw))?),
        None => None,
    };
    let questions = match args.get(2) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => Some(n),
            _ => return Err(unsupported("/start", raw)),
        },
        None => None,
    };

    Ok(SpecialCommand::Start {
        topic,
        difficulty,
        questions,
    })
}

/// Parse a user input line into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is not a valid command.
/// Returns `CommandError::UnsupportedArgument` if a command receives an invalid argument.
/// Returns `CommandError::MissingArgument` if a command requires an argument but none was provided.
///
/// # Examples
///
/// ```
/// use interviewer::commands::special_commands::{parse_special_command, SpecialCommand};
/// use interviewer::models::Difficulty;
///
/// let cmd = parse_special_command("/start rust-ownership senior").unwrap();
/// assert_eq!(
///     cmd,
///     SpecialCommand::Start {
///         topic: Some("rust-ownership".to_string()),
///         difficulty: Some(Difficulty::Advanced),
///         questions: None,
///     }
/// );
///
/// let cmd = parse_special_command("A closure captures its scope").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if lower == "exit" || lower == "quit" {
        return Ok(SpecialCommand::Exit);
    }
    if !trimmed.starts_with('/') {
        return Ok(SpecialCommand::None);
    }

    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or(trimmed).to_lowercase();
    let args: Vec<&str> = parts.collect();

    let no_args = |cmd: SpecialCommand| match args.first() {
        Some(arg) => Err(unsupported(&command, arg)),
        None => Ok(cmd),
    };

    match command.as_str() {
        "/start" | "/new" => parse_start(&args),
        "/submit" | "/send" => no_args(SpecialCommand::Submit),
        "/clear" => no_args(SpecialCommand::Clear),
        "/answer" | "/draft" => no_args(SpecialCommand::ShowAnswer),
        "/reload" | "/next" => no_args(SpecialCommand::Reload),
        "/end" | "/finish" => no_args(SpecialCommand::End),
        "/status" => no_args(SpecialCommand::ShowStatus),
        "/info" => no_args(SpecialCommand::Info),
        "/help" | "/?" => no_args(SpecialCommand::Help),
        "/exit" | "/quit" => no_args(SpecialCommand::Exit),
        "/go" => match args.as_slice() {
            [] => Err(CommandError::MissingArgument {
                command: "/go".to_string(),
                usage: "/go <interview|history|profile>".to_string(),
            }),
            [screen] => Route::from_path(screen)
                .map(SpecialCommand::Go)
                .ok_or_else(|| unsupported("/go", screen)),
            [_, extra, ..] => Err(unsupported("/go", extra)),
        },
        "/history" => no_args(SpecialCommand::Go(Route::History)),
        "/profile" => no_args(SpecialCommand::Go(Route::Profile)),
        "/interview" => no_args(SpecialCommand::Go(Route::Interview)),
        _ => Err(CommandError::UnknownCommand(command.clone())),
    }
}

/// Parse a line typed while an answer is being written
///
/// Same as [`parse_special_command`], except that a bare `exit` or `quit`
/// is taken as answer text. Only `/exit` and `/quit` leave the session.
///
/// # Errors
///
/// Returns the same errors as [`parse_special_command`].
pub fn parse_draft_input(input: &str) -> Result<SpecialCommand, CommandError> {
    if input.trim().starts_with('/') {
        parse_special_command(input)
    } else {
        Ok(SpecialCommand::None)
    }
}

/// Display help text for special commands
pub fn print_help() {
    println!(
        r#"
Practice Session Commands
=========================

INTERVIEW:
  /start [topic] [difficulty] [count]
                  - Start a new interview (difficulty: junior|middle|senior)
  /submit         - Send your answer for evaluation
  /clear          - Discard the answer written so far
  /answer         - Show the answer written so far
  /reload         - Load the current question again
  /end            - Finish the interview and show the result
  /status         - Show question, progress and answer

NAVIGATION:
  /go interview   - Interview screen
  /go history     - History screen
  /go profile     - Profile screen

OTHER:
  /info           - Show service information
  /help           - Show this help message
  exit, quit      - Leave the session (/exit or /quit while answering)

Any line that is not a command is added to your answer.
"#
    );
}
