//! An in-memory hierarchical file system.
//!
//! Paths are plain strings. There is no inode table and no notion of a
//! current directory; see [`path::resolve`] for turning relative input into
//! the absolute paths every operation expects.
//!

mod error;
mod filesystem;

pub mod path;

pub use crate::error::{EntryKind, ErrorKind, FsError, Result};
pub use crate::filesystem::FileSystem;
pub use crate::path::PrefixMatch;
