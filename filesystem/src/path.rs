//! Path string helpers.
//!
//! The file system only understands absolute paths. Relative paths are
//! resolved by the caller against its own current directory.

use serde::Deserialize;

pub const SEPARATOR: char = '/';

/// The root directory. It always exists.
pub const ROOT: &str = "/";

/// Turns `path` into an absolute path.
///
/// Paths starting with the separator are returned unchanged, anything else
/// is appended to `cwd`. No `.`/`..` folding happens here.
pub fn resolve(cwd: &str, path: &str) -> String {
    if path.starts_with(SEPARATOR) {
        path.to_string()
    } else if cwd == ROOT {
        format!("{ROOT}{path}")
    } else {
        format!("{cwd}{SEPARATOR}{path}")
    }
}

/// Returns the directory containing `path`, cutting at the last separator.
///
/// The parent of a top level entry, and of the root, is the root.
pub fn parent(path: &str) -> String {
    match path.rfind(SEPARATOR) {
        Some(0) | None => ROOT.to_string(),
        Some(index) => path[..index].to_string(),
    }
}

/// How directory deletion and listing decide that a path lies under another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMatch {
    /// Plain string prefix. `/ab.txt` counts as being under `/a`.
    ///
    /// Known hazard, kept for compatibility: deleting `/a` also deletes
    /// `/ab.txt`.
    #[default]
    Literal,

    /// The path itself, or anything continuing after a separator.
    Segment,
}

impl PrefixMatch {
    /// Whether `candidate` lies under `path`.
    pub fn contains(self, path: &str, candidate: &str) -> bool {
        match self {
            PrefixMatch::Literal => candidate.starts_with(path),
            PrefixMatch::Segment => match candidate.strip_prefix(path) {
                Some(rest) => {
                    rest.is_empty() || path.ends_with(SEPARATOR) || rest.starts_with(SEPARATOR)
                }
                None => false,
            },
        }
    }
}
