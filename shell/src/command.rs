//! Command line parsing.

/// Whitespace separated arguments following the command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext<'a> {
    /// The command name that was invoked.
    pub command: &'a str,
    /// Parsed arguments (excluding command name).
    pub args: Args<'a>,
    /// Everything after the command name, untouched apart from leading spaces.
    pub args_raw: &'a str,
}

impl<'a> CommandContext<'a> {
    /// Parses a line. Blank lines give [`None`].
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (command, args_raw) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (line, ""),
        };

        Some(Self {
            command,
            args: Args::new(args_raw.split_whitespace().collect()),
            args_raw,
        })
    }

    /// The raw text after the first `skip` arguments, with inner spacing kept.
    pub fn rest(&self, skip: usize) -> &'a str {
        let mut rest = self.args_raw;
        for _ in 0..skip {
            rest = rest.trim_start();
            match rest.find(char::is_whitespace) {
                Some(end) => rest = &rest[end..],
                None => return "",
            }
        }
        rest.trim_start()
    }
}
