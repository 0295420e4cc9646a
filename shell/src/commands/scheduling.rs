use std::num::NonZeroUsize;

use scheduler::{run_schedule, Algorithm, ProcessRecord};

use crate::command::CommandContext;
use crate::commands::{parse_number, parse_time, Command};
use crate::error::{Result, ShellError};
use crate::{Output, Session};

/// Runs one of the scheduling policies over processes given on the command line.
pub static CPU_SCHEDULING: CpuSchedulingCommand = CpuSchedulingCommand;

pub struct CpuSchedulingCommand;

impl Command for CpuSchedulingCommand {
    fn name(&self) -> &'static str {
        "cpuscd"
    }

    fn description(&self) -> &'static str {
        "Simulate CPU scheduling"
    }

    fn usage(&self) -> &'static str {
        "Usage: cpuscd <fcfs|sjf|rr|rrq|priority> [quantum] <burst:arrival[:priority]>..."
    }

    fn category(&self) -> &'static str {
        "scheduling"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let mut args = ctx.args.iter().peekable();
        let name = args.next().ok_or(ShellError::Usage(self.usage()))?;

        let algorithm = match name.to_ascii_lowercase().as_str() {
            "fcfs" => Algorithm::Fcfs,
            "sjf" => Algorithm::Sjf,
            "priority" => Algorithm::Priority,
            "rr" | "rrq" => {
                let quantum = match args.next_if(|arg| !arg.contains(':')) {
                    Some(arg) => NonZeroUsize::new(parse_number(arg)?)
                        .ok_or(ShellError::ZeroQuantum)?,
                    None => session.default_quantum(),
                };
                if name.eq_ignore_ascii_case("rr") {
                    Algorithm::RoundRobin { quantum }
                } else {
                    Algorithm::QueuedRoundRobin { quantum }
                }
            }
            _ => return Err(ShellError::UnknownAlgorithm(name.to_string())),
        };

        let processes = args.map(parse_process).collect::<Result<Vec<_>>>()?;
        if processes.is_empty() {
            return Err(ShellError::Usage(self.usage()));
        }

        Ok(Output::Text(run_schedule(&processes, algorithm).to_string()))
    }
}

/// Parses `burst:arrival[:priority]`.
fn parse_process(token: &str) -> Result<ProcessRecord> {
    let invalid = || ShellError::InvalidProcess(token.to_string());

    let mut fields = token.split(':');
    let burst = fields.next().ok_or_else(invalid)?;
    let arrival = fields.next().ok_or_else(invalid)?;
    let priority = fields.next();
    if fields.next().is_some() {
        return Err(invalid());
    }

    let priority = match priority {
        Some(priority) => priority
            .parse::<i32>()
            .map_err(|_| ShellError::InvalidNumber(priority.to_string()))?,
        None => 0,
    };
    Ok(ProcessRecord::new(
        parse_time(burst, "burst")?,
        parse_time(arrival, "arrival")?,
        priority,
    ))
}
