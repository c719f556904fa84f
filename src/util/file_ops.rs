// File Operations for message input and output
// Reads plaintext or ciphertext from disk and writes results back

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("file {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

fn io_error(path: &Path, source: io::Error) -> FileError {
    FileError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a whole text file.
///
/// One trailing newline is dropped so that files written by editors
/// do not pick up an extra character.
pub fn read_message(path: &Path) -> FileResult<String> {
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let mut text =
        String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(path.display().to_string()))?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}

/// Write text to a file, followed by a newline.
pub fn write_message(path: &Path, text: &str) -> FileResult<()> {
    fs::write(path, format!("{}\n", text)).map_err(|e| io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.txt");

        write_message(&path, "2041 1972").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2041 1972\n");
        assert_eq!(read_message(&path).unwrap(), "2041 1972");
    }

    #[test]
    fn test_read_keeps_inner_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.txt");
        fs::write(&path, "hi\nthere\r\n").unwrap();

        assert_eq!(read_message(&path).unwrap(), "hi\nthere");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_message(&dir.path().join("missing.txt"));

        assert!(matches!(result, Err(FileError::Io { .. })));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(read_message(&path), Err(FileError::InvalidUtf8(_))));
    }
}
