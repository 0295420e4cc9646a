//! Command registry - static command registration and lookup.
//!
//! To add a new command:
//! 1. Implement the [`Command`] trait in one of the files of this module
//! 2. Export a static instance
//! 3. Add it to the `COMMANDS` array

use crate::command::CommandContext;
use crate::error::{Result, ShellError};
use crate::{Output, Session};

mod allocation;
mod files;
mod general;
mod scheduling;

/// Trait for implementing commands.
pub trait Command: Sync {
    /// Primary command name.
    fn name(&self) -> &'static str;

    /// Alternative names for this command.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Short description (shown in help list).
    fn description(&self) -> &'static str;

    /// Detailed usage information.
    fn usage(&self) -> &'static str {
        self.description()
    }

    /// Command category for grouping in help.
    fn category(&self) -> &'static str {
        "general"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output>;
}

static COMMANDS: &[&dyn Command] = &[
    &general::HELP,
    &general::ECHO,
    &general::EXIT,
    &files::CREATE_FILE,
    &files::READ_FILE,
    &files::APPEND_FILE,
    &files::UPDATE_FILE,
    &files::DELETE_FILE,
    &files::CREATE_DIR,
    &files::DELETE_DIR,
    &files::CD,
    &files::LS,
    &files::PWD,
    &scheduling::CPU_SCHEDULING,
    &allocation::MEMORY,
];

/// Find a command by name or alias.
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    COMMANDS
        .iter()
        .copied()
        .find(|cmd| cmd.name() == name || cmd.aliases().contains(&name))
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// Largest burst or arrival time `cpuscd` accepts.
///
/// The simulation idles one unit at a time while nothing has arrived, so
/// arrivals have to stay small enough to finish promptly.
pub const MAX_TIME: usize = 1_000_000;

/// Parses a non-negative integer argument.
fn parse_number(arg: &str) -> Result<usize> {
    arg.parse()
        .map_err(|_| ShellError::InvalidNumber(arg.to_string()))
}

/// Parses a time value no larger than [`MAX_TIME`].
fn parse_time(arg: &str, what: &'static str) -> Result<usize> {
    match parse_number(arg)? {
        time if time > MAX_TIME => Err(ShellError::TimeTooLarge {
            what,
            value: arg.to_string(),
        }),
        time => Ok(time),
    }
}
