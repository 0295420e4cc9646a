use memory::{allocate, Strategy};

use crate::command::CommandContext;
use crate::commands::{parse_number, Command};
use crate::error::{Result, ShellError};
use crate::{Output, Session};

/// Places processes into memory blocks with one of the fit strategies.
pub static MEMORY: MemoryCommand = MemoryCommand;

pub struct MemoryCommand;

impl Command for MemoryCommand {
    fn name(&self) -> &'static str {
        "mem"
    }

    fn description(&self) -> &'static str {
        "Simulate contiguous memory allocation"
    }

    fn usage(&self) -> &'static str {
        "Usage: mem <first|best|worst> <block,sizes,...> <process,sizes,...>"
    }

    fn category(&self) -> &'static str {
        "memory"
    }

    fn execute(&self, ctx: &CommandContext<'_>, _session: &mut Session) -> Result<Output> {
        let (Some(name), Some(blocks), Some(processes), None) = (
            ctx.args.get(0),
            ctx.args.get(1),
            ctx.args.get(2),
            ctx.args.get(3),
        ) else {
            return Err(ShellError::Usage(self.usage()));
        };

        let strategy = match name.to_ascii_lowercase().as_str() {
            "first" | "firstfit" => Strategy::FirstFit,
            "best" | "bestfit" => Strategy::BestFit,
            "worst" | "worstfit" => Strategy::WorstFit,
            _ => return Err(ShellError::UnknownStrategy(name.to_string())),
        };
        let blocks = parse_sizes(blocks, "block")?;
        let processes = parse_sizes(processes, "process")?;
        if processes.is_empty() {
            return Err(ShellError::Usage(self.usage()));
        }

        Ok(Output::Text(allocate(&blocks, &processes, strategy).to_string()))
    }
}

/// Parses a comma separated list of positive sizes.
fn parse_sizes(list: &str, what: &'static str) -> Result<Vec<usize>> {
    list.split(',')
        .filter(|size| !size.is_empty())
        .map(|size| match parse_number(size)? {
            0 => Err(ShellError::ZeroSize(what)),
            size => Ok(size),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sizes_are_comma_separated() {
        assert_eq!(parse_sizes("100,500,200", "block"), Ok(vec![100, 500, 200]));
        assert_eq!(parse_sizes("100,", "block"), Ok(vec![100]));
    }

    #[test]
    fn sizes_must_be_positive_numbers() {
        assert_eq!(parse_sizes("100,0", "block"), Err(ShellError::ZeroSize("block")));
        assert_eq!(
            parse_sizes("100,ten", "process"),
            Err(ShellError::InvalidNumber("ten".to_string()))
        );
    }
}
