//! Commands that do not touch any engine.

use std::fmt::Write;

use crate::command::CommandContext;
use crate::commands::{all_commands, find_command, Command};
use crate::error::{Result, ShellError};
use crate::{Output, Session};

pub static HELP: HelpCommand = HelpCommand;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cmd"]
    }

    fn description(&self) -> &'static str {
        "List available commands"
    }

    fn usage(&self) -> &'static str {
        "Usage: help [command]"
    }

    fn execute(&self, ctx: &CommandContext<'_>, _session: &mut Session) -> Result<Output> {
        if let Some(name) = ctx.args.get(0) {
            let cmd = find_command(name).ok_or(ShellError::UnknownCommand)?;
            return Ok(Output::Text(format!(
                "{} - {}\n{}",
                cmd.name(),
                cmd.description(),
                cmd.usage()
            )));
        }

        let mut text = String::from("Available commands:");
        let mut categories: Vec<&str> = Vec::new();
        for cmd in all_commands() {
            if !categories.contains(&cmd.category()) {
                categories.push(cmd.category());
            }
        }
        for category in categories {
            let _ = write!(text, "\n[{category}]");
            for cmd in all_commands().iter().filter(|cmd| cmd.category() == category) {
                let _ = write!(text, "\n  {:<12}{}", cmd.name(), cmd.description());
            }
        }
        Ok(Output::Text(text))
    }
}

pub static ECHO: EchoCommand = EchoCommand;

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Print the given text"
    }

    fn usage(&self) -> &'static str {
        "Usage: echo <text>"
    }

    fn execute(&self, ctx: &CommandContext<'_>, _session: &mut Session) -> Result<Output> {
        Ok(Output::Text(ctx.args_raw.to_string()))
    }
}

pub static EXIT: ExitCommand = ExitCommand;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }

    fn description(&self) -> &'static str {
        "Leave the shell"
    }

    fn execute(&self, _ctx: &CommandContext<'_>, _session: &mut Session) -> Result<Output> {
        Ok(Output::Exit)
    }
}
