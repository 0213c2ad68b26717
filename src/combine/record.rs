use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A matching file read into memory, dropped once appended to the buffer
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
    pub content: Vec<u8>,
}

impl FileRecord {
    /// Read the whole file at `path`
    pub fn read(path: &Path) -> io::Result<Self> {
        let content = fs::read(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            size: content.len() as u64,
            content,
        })
    }

    /// Path as written in the delimiter line
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_captures_size_and_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, b"hello\n").unwrap();

        let record = FileRecord::read(&path).unwrap();
        assert_eq!(record.size, 6);
        assert_eq!(record.content, b"hello\n");
        assert_eq!(record.path, path);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileRecord::read(&temp_dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
