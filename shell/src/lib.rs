//! A command shell over the simulation engines.
//!
//! Lines typed by a user are parsed into a command and its arguments and
//! dispatched to the [`filesystem`], [`scheduler`] and [`memory`] crates
//! through a [`Session`].

mod command;
mod error;
mod session;

pub mod commands;

pub use crate::command::{Args, CommandContext};
pub use crate::commands::{all_commands, find_command, Command};
pub use crate::error::{Result, ShellError};
pub use crate::session::{Session, SessionOptions};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Text to show the user.
    Text(String),

    /// Nothing to show.
    Empty,

    /// The user asked to leave the shell.
    Exit,
}

impl Output {
    pub fn text(text: impl Into<String>) -> Output {
        Output::Text(text.into())
    }
}

/// Parses `line` and runs the command it names against `session`.
///
/// ## Example
///
/// ```rust
/// use shell::{execute, Output, Session};
///
/// let mut session = Session::default();
/// execute(&mut session, "createdir docs").unwrap();
/// execute(&mut session, "cd docs").unwrap();
/// assert_eq!(execute(&mut session, "pwd"), Ok(Output::text("/docs")));
/// ```
pub fn execute(session: &mut Session, line: &str) -> Result<Output> {
    let Some(ctx) = CommandContext::parse(line) else {
        return Ok(Output::Empty);
    };
    let cmd = find_command(ctx.command).ok_or(ShellError::UnknownCommand)?;
    log::debug!("{} {:?}", cmd.name(), ctx.args_raw);
    cmd.execute(&ctx, session)
}
