use std::num::NonZeroUsize;

use filesystem::{path, FileSystem, PrefixMatch};

use crate::error::{Result, ShellError};

/// Settings a [`Session`] starts with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// How directory deletion and listing match paths.
    pub prefix_match: PrefixMatch,

    /// Quantum used by round robin when a command does not give one.
    pub default_quantum: NonZeroUsize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            prefix_match: PrefixMatch::Literal,
            default_quantum: NonZeroUsize::MIN.saturating_add(1),
        }
    }
}

/// Everything one user of the shell works with: the current directory and
/// the file system it points into.
///
/// Sessions share nothing, so independent sessions can live side by side.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: String,
    fs: FileSystem,
    default_quantum: NonZeroUsize,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Session {
        Session {
            cwd: path::ROOT.to_string(),
            fs: FileSystem::with_prefix_match(options.prefix_match),
            default_quantum: options.default_quantum,
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn fs(&self) -> &FileSystem {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut FileSystem {
        &mut self.fs
    }

    pub fn default_quantum(&self) -> NonZeroUsize {
        self.default_quantum
    }

    /// Resolves `path` against the current directory.
    pub fn resolve(&self, path: &str) -> String {
        path::resolve(&self.cwd, path)
    }

    /// Moves to `target`. `..` goes to the parent; anything else has to be
    /// an existing directory.
    pub fn change_directory(&mut self, target: &str) -> Result<()> {
        if target == ".." {
            self.cwd = path::parent(&self.cwd);
            return Ok(());
        }

        let full = self.resolve(target);
        if !self.fs.directory_exists(&full) {
            return Err(ShellError::DirectoryNotFound(target.to_string()));
        }
        log::debug!("cd {} -> {}", self.cwd, full);
        self.cwd = full;
        Ok(())
    }

    /// The prompt shown before each command.
    pub fn prompt(&self) -> String {
        format!("{} $ ", self.cwd)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_root() {
        let session = Session::default();

        assert_eq!(session.cwd(), "/");
        assert_eq!(session.prompt(), "/ $ ");
        assert_eq!(session.default_quantum().get(), 2);
    }

    #[test]
    fn change_directory_follows_existing_directories() {
        let mut session = Session::default();
        session.fs_mut().create_directory("/home").unwrap();
        session.fs_mut().create_directory("/home/user").unwrap();

        session.change_directory("home").unwrap();
        session.change_directory("user").unwrap();
        assert_eq!(session.cwd(), "/home/user");
        assert_eq!(session.resolve("notes.txt"), "/home/user/notes.txt");

        session.change_directory("..").unwrap();
        assert_eq!(session.cwd(), "/home");
        session.change_directory("..").unwrap();
        session.change_directory("..").unwrap();
        assert_eq!(session.cwd(), "/");
    }

    #[test]
    fn change_directory_rejects_unknown_paths() {
        let mut session = Session::default();
        session.fs_mut().create_file("/file", "").unwrap();

        assert_eq!(
            session.change_directory("nowhere"),
            Err(ShellError::DirectoryNotFound("nowhere".to_string()))
        );
        assert!(session.change_directory("/file").is_err());
        assert_eq!(session.cwd(), "/");
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = Session::default();
        let second = Session::default();
        first.fs_mut().create_directory("/only-here").unwrap();
        first.change_directory("/only-here").unwrap();

        assert!(!second.fs().directory_exists("/only-here"));
        assert_eq!(second.cwd(), "/");
    }
}
