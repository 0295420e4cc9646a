use filesystem::FsError;

/// Errors reported by shell commands.
///
/// The engines never validate their input, so every malformed value is
/// rejected here before it reaches them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command, type 'help' to see available commands")]
    UnknownCommand,

    #[error("{0}")]
    Usage(&'static str),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("invalid process '{0}', expected burst:arrival[:priority]")]
    InvalidProcess(String),

    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown fit strategy: {0}")]
    UnknownStrategy(String),

    #[error("{what} time {value} is above the limit of {}", crate::commands::MAX_TIME)]
    TimeTooLarge { what: &'static str, value: String },

    #[error("time quantum must be positive")]
    ZeroQuantum,

    #[error("{0} sizes must be positive")]
    ZeroSize(&'static str),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error(transparent)]
    Filesystem(#[from] FsError),
}

pub type Result<T> = std::result::Result<T, ShellError>;
