use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::error::{EntryKind, FsError, Result};
use crate::path::{PrefixMatch, ROOT};

/// An in-memory file system keyed by absolute path strings.
///
/// Directories are a set of paths and files are a map from path to text
/// content. Nothing stops the same path from being both a file and a
/// directory; callers that care have to check before creating.
///
/// A `FileSystem` is mutated in place. Share it between threads only
/// behind a lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystem {
    files: BTreeMap<String, String>,
    directories: BTreeSet<String>,
    prefix_match: PrefixMatch,
}

impl Default for FileSystem {
    fn default() -> Self {
        FileSystem::new()
    }
}

impl FileSystem {
    /// Creates a file system holding only the root directory.
    pub fn new() -> FileSystem {
        FileSystem::with_prefix_match(PrefixMatch::default())
    }

    pub fn with_prefix_match(prefix_match: PrefixMatch) -> FileSystem {
        FileSystem {
            files: BTreeMap::new(),
            directories: BTreeSet::from([ROOT.to_string()]),
            prefix_match,
        }
    }

    pub fn prefix_match(&self) -> PrefixMatch {
        self.prefix_match
    }

    pub fn create_file(&mut self, path: &str, content: &str) -> Result<()> {
        if self.files.contains_key(path) {
            return Err(FsError::already_exists(EntryKind::File, path));
        }
        trace!("create file {path}");
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<&str> {
        self.files
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| FsError::not_found(EntryKind::File, path))
    }

    pub fn append_to_file(&mut self, path: &str, content: &str) -> Result<()> {
        let file = self.file_mut(path)?;
        file.push_str(content);
        trace!("append {} bytes to {path}", content.len());
        Ok(())
    }

    pub fn update_file(&mut self, path: &str, content: &str) -> Result<()> {
        let file = self.file_mut(path)?;
        *file = content.to_string();
        trace!("update file {path}");
        Ok(())
    }

    pub fn delete_file(&mut self, path: &str) -> Result<()> {
        self.files
            .remove(path)
            .map(|_| trace!("delete file {path}"))
            .ok_or_else(|| FsError::not_found(EntryKind::File, path))
    }

    pub fn create_directory(&mut self, path: &str) -> Result<()> {
        if !self.directories.insert(path.to_string()) {
            return Err(FsError::already_exists(EntryKind::Directory, path));
        }
        trace!("create directory {path}");
        Ok(())
    }

    /// Removes `path` and every directory and file under it.
    ///
    /// "Under" follows the configured [`PrefixMatch`]. With the default
    /// literal matching, deleting `/a` also removes `/ab.txt`.
    ///
    /// Deleting the root empties the file system but the root itself stays.
    pub fn delete_directory(&mut self, path: &str) -> Result<()> {
        if !self.directories.contains(path) {
            return Err(FsError::not_found(EntryKind::Directory, path));
        }

        let mode = self.prefix_match;
        let (directories, files) = (self.directories.len(), self.files.len());
        self.directories
            .retain(|directory| !mode.contains(path, directory));
        self.files.retain(|file, _| !mode.contains(path, file));
        self.directories.insert(ROOT.to_string());

        trace!(
            "delete directory {path}: {} directories, {} files removed",
            directories - self.directories.len(),
            files - self.files.len()
        );
        Ok(())
    }

    pub fn directory_exists(&self, path: &str) -> bool {
        self.directories.contains(path)
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Returns every directory (other than `path` itself) and every file
    /// under `path`, directories first, each group sorted.
    pub fn list_directory(&self, path: &str) -> Vec<String> {
        let mode = self.prefix_match;
        let directories = self
            .directories
            .iter()
            .filter(|directory| directory.as_str() != path && mode.contains(path, directory));
        let files = self
            .files
            .keys()
            .filter(|file| mode.contains(path, file));
        directories.chain(files).cloned().collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    fn file_mut(&mut self, path: &str) -> Result<&mut String> {
        self.files
            .get_mut(path)
            .ok_or_else(|| FsError::not_found(EntryKind::File, path))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn root_exists_from_the_start() {
        let fs = FileSystem::new();

        assert_eq!(fs.prefix_match(), PrefixMatch::Literal);
        assert!(fs.directory_exists("/"));
        assert_eq!(fs.directory_count(), 1);
        assert_eq!(
            fs.clone().create_directory("/").map_err(|e| e.kind()),
            Err(ErrorKind::AlreadyExists)
        );
    }

    #[test]
    fn creating_a_file_twice_fails() {
        let mut fs = FileSystem::new();
        fs.create_file("/a", "first").unwrap();

        let error = fs.create_file("/a", "second").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
        assert_eq!(error.entry(), EntryKind::File);
        assert_eq!(error.to_string(), "File already exists: /a");
        assert_eq!(fs.read_file("/a"), Ok("first"));
    }

    #[test]
    fn create_update_append_round_trip() {
        let mut fs = FileSystem::new();

        fs.create_file("/notes.txt", "hello").unwrap();
        assert_eq!(fs.read_file("/notes.txt"), Ok("hello"));

        fs.update_file("/notes.txt", "goodbye").unwrap();
        assert_eq!(fs.read_file("/notes.txt"), Ok("goodbye"));

        fs.append_to_file("/notes.txt", " world").unwrap();
        assert_eq!(fs.read_file("/notes.txt"), Ok("goodbye world"));
    }

    #[test]
    fn missing_files_are_not_found() {
        let mut fs = FileSystem::new();

        for error in [
            fs.read_file("/missing").map(|_| ()).unwrap_err(),
            fs.append_to_file("/missing", "x").unwrap_err(),
            fs.update_file("/missing", "x").unwrap_err(),
            fs.delete_file("/missing").unwrap_err(),
        ] {
            assert_eq!(error.kind(), ErrorKind::NotFound);
            assert_eq!(error.path(), "/missing");
        }
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn delete_file_removes_only_that_file() {
        let mut fs = FileSystem::new();
        fs.create_file("/a", "").unwrap();
        fs.create_file("/ab", "").unwrap();

        fs.delete_file("/a").unwrap();
        assert!(!fs.file_exists("/a"));
        assert!(fs.file_exists("/ab"));
    }

    #[test]
    fn deleting_unknown_directory_fails() {
        let mut fs = FileSystem::new();

        let error = fs.delete_directory("/nope").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.to_string(), "Directory not found: /nope");
    }

    // Regression test for the literal prefix semantics: `/ab.txt` is not
    // inside `/a`, but it shares its leading characters and goes with it.
    #[test]
    fn literal_delete_takes_prefix_siblings() {
        let mut fs = FileSystem::new();
        fs.create_directory("/a").unwrap();
        fs.create_directory("/a/b").unwrap();
        fs.create_directory("/abc").unwrap();
        fs.create_file("/a/b/c.txt", "c").unwrap();
        fs.create_file("/ab.txt", "ab").unwrap();
        fs.create_file("/b.txt", "b").unwrap();

        fs.delete_directory("/a").unwrap();

        assert!(!fs.directory_exists("/a"));
        assert!(!fs.directory_exists("/a/b"));
        assert!(!fs.directory_exists("/abc"));
        assert!(!fs.file_exists("/a/b/c.txt"));
        assert!(!fs.file_exists("/ab.txt"));
        assert!(fs.file_exists("/b.txt"));
        assert!(fs.directory_exists("/"));
    }

    #[test]
    fn segment_delete_respects_separators() {
        let mut fs = FileSystem::with_prefix_match(PrefixMatch::Segment);
        assert_eq!(fs.prefix_match(), PrefixMatch::Segment);
        fs.create_directory("/a").unwrap();
        fs.create_file("/a/x.txt", "x").unwrap();
        fs.create_file("/ab.txt", "ab").unwrap();

        fs.delete_directory("/a").unwrap();

        assert!(!fs.file_exists("/a/x.txt"));
        assert!(fs.file_exists("/ab.txt"));
    }

    #[test]
    fn deleting_root_keeps_root() {
        let mut fs = FileSystem::new();
        fs.create_directory("/a").unwrap();
        fs.create_file("/a.txt", "").unwrap();

        fs.delete_directory("/").unwrap();

        assert!(fs.directory_exists("/"));
        assert_eq!(fs.directory_count(), 1);
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn listing_is_prefix_based_and_excludes_self() {
        let mut fs = FileSystem::new();
        fs.create_directory("/docs").unwrap();
        fs.create_directory("/docs/old").unwrap();
        fs.create_file("/docs/a.txt", "").unwrap();
        fs.create_file("/docsearch", "").unwrap();
        fs.create_file("/readme", "").unwrap();

        assert_eq!(
            fs.list_directory("/docs"),
            vec!["/docs/old", "/docs/a.txt", "/docsearch"]
        );
        assert_eq!(
            fs.list_directory("/"),
            vec!["/docs", "/docs/old", "/docs/a.txt", "/docsearch", "/readme"]
        );
    }

    #[test]
    fn file_and_directory_may_share_a_path() {
        let mut fs = FileSystem::new();
        fs.create_directory("/x").unwrap();

        assert!(fs.create_file("/x", "data").is_ok());
        assert!(fs.directory_exists("/x"));
        assert!(fs.file_exists("/x"));
    }
}
