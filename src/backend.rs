//! File backend: the load/save surface and the durable writer.
//!
//! The backend holds nothing but the target path. Every load reads and
//! parses the file from scratch; every save serializes the whole tree and
//! publishes it atomically, so a reader never observes a half-written file.
//! Concurrent writers are not arbitrated: two saves race on the final rename
//! and the last one wins.

use crate::encode::serialize;
use crate::error::BackendError;
use crate::parser::parse;
use crate::value::Group;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A configuration storage backend over one plain-text file.
///
/// The file is not opened at construction time; it is read on every call to
/// [`load`](FileBackend::load) and replaced on every call to
/// [`save`](FileBackend::save).
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend storing its data at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this backend reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backend's file into a fresh configuration tree.
    ///
    /// A file that does not exist yet is not an error: it loads as an empty
    /// mapping. Any other read failure, and any parse failure, aborts the
    /// whole load with no partial result.
    pub fn load(&self) -> Result<Group, BackendError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Group::new()),
            Err(error) => return Err(BackendError::Read(error)),
        };
        Ok(parse(&contents)?)
    }

    /// Serialize a configuration tree and durably replace the backend's file
    /// with it.
    pub fn save(&self, data: &Group) -> Result<(), BackendError> {
        let contents = serialize(data);
        write_durably(&self.path, contents.as_bytes()).map_err(BackendError::Write)
    }
}

/// Write `contents` to `path` without ever leaving a partially written file
/// at that path.
///
/// The parent directory chain is created if absent. The bytes go to a
/// uniquely named temporary file beside the target, created with restrictive
/// permissions, and are then published over the target path by rename. On
/// platforms without atomic overwrite-by-rename the publish step falls back
/// to replacing the target, trading atomicity for compatibility. A leftover
/// temporary file from a failed save is not cleaned up; later saves use
/// fresh names.
fn write_durably(path: &Path, contents: &[u8]) -> io::Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("missing.conf"));
        assert_eq!(backend.load().unwrap(), Group::new());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("settings.conf");
        let backend = FileBackend::new(&path);
        let mut tree = Group::new();
        tree.insert("name".to_string(), Value::String("value".to_string()));
        backend.save(&tree).unwrap();
        assert!(path.is_file());
        assert_eq!(backend.load().unwrap(), tree);
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("settings.conf"));
        let mut first = Group::new();
        first.insert("a".to_string(), Value::String("1".to_string()));
        backend.save(&first).unwrap();
        let mut second = Group::new();
        second.insert("b".to_string(), Value::String("2".to_string()));
        backend.save(&second).unwrap();
        assert_eq!(backend.load().unwrap(), second);
    }

    #[test]
    fn test_load_propagates_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.conf");
        fs::write(&path, "no separator here\n").unwrap();
        let backend = FileBackend::new(&path);
        match backend.load() {
            Err(BackendError::Parse(error)) => assert_eq!(error.line(), 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
