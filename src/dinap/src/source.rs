//! Bounded random-access reads over save file bytes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("save file not found: {0}")]
    NotFound(PathBuf),

    #[error("save file not readable: {0}")]
    Unreadable(PathBuf),

    #[error("failed to read save file: {0}")]
    Io(#[from] io::Error),
}

/// Read-only, randomly addressable view of a save file's bytes.
///
/// Every read is explicitly addressed; there is no cursor. A read that
/// extends past the end of the data returns whatever bytes exist, which
/// may be fewer than requested (or none at all).
pub struct ByteSource {
    bytes: Vec<u8>,
}

impl ByteSource {
    /// Open a save file and load its bytes.
    ///
    /// Missing files and permission failures map to distinct error kinds
    /// so the caller can report them precisely.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Self { bytes }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(path.to_path_buf()))
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(SourceError::Unreadable(path.to_path_buf()))
            }
            Err(e) => Err(SourceError::Io(e)),
        }
    }

    /// Wrap an in-memory buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Total number of bytes in the source.
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read up to `size` bytes starting at `offset`.
    ///
    /// The returned slice is shorter than `size` when the source ends
    /// early, and empty when `offset` is at or past the end.
    pub fn read(&self, offset: u64, size: usize) -> &[u8] {
        if offset >= self.len() {
            return &[];
        }
        let start = offset as usize;
        let end = start.saturating_add(size).min(self.bytes.len());
        &self.bytes[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_within_bounds() {
        let source = ByteSource::from_bytes(vec![1, 2, 3, 4, 5]);
        assert_eq!(source.len(), 5);
        assert_eq!(source.read(0, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(source.read(2, 2), &[3, 4]);
    }

    #[test]
    fn test_read_past_end_is_short() {
        let source = ByteSource::from_bytes(vec![1, 2, 3]);
        assert_eq!(source.read(1, 10), &[2, 3]);
    }

    #[test]
    fn test_read_at_or_after_end_is_empty() {
        let source = ByteSource::from_bytes(vec![1, 2, 3]);
        assert_eq!(source.read(3, 1), &[] as &[u8]);
        assert_eq!(source.read(100, 16), &[] as &[u8]);
    }

    #[test]
    fn test_read_is_idempotent() {
        let source = ByteSource::from_bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        let first = source.read(1, 2).to_vec();
        let second = source.read(1, 2).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_source() {
        let source = ByteSource::from_bytes(Vec::new());
        assert!(source.is_empty());
        assert_eq!(source.read(0, 16), &[] as &[u8]);
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.sav");

        match ByteSource::open(&missing) {
            Err(SourceError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_open_reads_file_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("slot.sav");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"DINAP\x01rest").unwrap();
        drop(file);

        let source = ByteSource::open(&path).unwrap();
        assert_eq!(source.len(), 10);
        assert_eq!(source.read(0, 5), b"DINAP");
    }
}
