use std::fmt::{self, Display};

/// What kind of entry an error is about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "File"),
            EntryKind::Directory => write!(f, "Directory"),
        }
    }
}

/// The category of a [`FsError`], for callers that branch on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
}

/// Errors returned by [`crate::FileSystem`] operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{entry} already exists: {path}")]
    AlreadyExists { entry: EntryKind, path: String },

    #[error("{entry} not found: {path}")]
    NotFound { entry: EntryKind, path: String },
}

impl FsError {
    pub(crate) fn already_exists(entry: EntryKind, path: &str) -> FsError {
        FsError::AlreadyExists {
            entry,
            path: path.to_string(),
        }
    }

    pub(crate) fn not_found(entry: EntryKind, path: &str) -> FsError {
        FsError::NotFound {
            entry,
            path: path.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            FsError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn entry(&self) -> EntryKind {
        match self {
            FsError::AlreadyExists { entry, .. } | FsError::NotFound { entry, .. } => *entry,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FsError::AlreadyExists { path, .. } | FsError::NotFound { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
