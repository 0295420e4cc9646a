//! Interactive shell for the scheduling, allocation and file system simulators.

use std::io::{self, IsTerminal, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use filesystem::PrefixMatch;
use shell::Session;

mod config;
mod repl;

use config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "osim",
    version,
    about = "Teaching OS simulator shell",
    long_about = "Runs CPU scheduling, memory allocation and in-memory file system commands.\n\nExamples:\n  osim\n  osim -c 'cpuscd rr 3 10:0 5:0 8:0'\n  osim --segment-paths -c 'createdir a' -c ls"
)]
struct Cli {
    /// Configuration file. Defaults to ./osim.toml when it exists.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Treat only whole path segments as lying under a directory.
    #[arg(long)]
    segment_paths: bool,

    /// Round robin quantum used when a command does not give one.
    #[arg(long)]
    quantum: Option<NonZeroUsize>,

    /// Run this line instead of reading from stdin. May be repeated.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Do not print the banner.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = try_main(Cli::parse()) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn try_main(cli: Cli) -> Result<(), RunError> {
    let config = Config::load(cli.config.as_deref())?;
    let mut options = config.session_options();
    if cli.segment_paths {
        options.prefix_match = PrefixMatch::Segment;
    }
    if let Some(quantum) = cli.quantum {
        options.default_quantum = quantum;
    }
    log::debug!("session options: {options:?}");

    let mut session = Session::new(options);
    let mut stdout = io::stdout().lock();

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            if !repl::run_line(&mut session, line, &mut stdout)? {
                break;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && config.shell.banner && !cli.quiet {
        writeln!(stdout, "OS simulator shell. Type 'help' to list commands.")?;
    }
    repl::run(&mut session, stdin.lock(), &mut stdout, interactive)?;
    if interactive {
        writeln!(stdout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
