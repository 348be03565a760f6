//! Text loading from files and in-memory uploads

use crate::error::Result;
use std::path::PathBuf;
use tokio::fs;

/// Where a document's bytes come from. Callers resolve the variant up
/// front: the CLI hands over paths, the web form hands over upload bytes.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl DocumentSource {
    /// Read and decode the document as UTF-8, consuming the source.
    /// Undecodable byte sequences are dropped rather than failing; a
    /// missing file propagates the underlying IO error.
    pub async fn read(self) -> Result<String> {
        let bytes = match self {
            DocumentSource::Path(path) => fs::read(path).await?,
            DocumentSource::Bytes(bytes) => bytes,
        };
        Ok(decode_lossy(&bytes))
    }
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_in_memory_bytes() {
        let source = DocumentSource::Bytes(b"Senior Rust Engineer".to_vec());
        assert_eq!(source.read().await.unwrap(), "Senior Rust Engineer");
    }

    #[tokio::test]
    async fn invalid_utf8_is_dropped_not_fatal() {
        let source = DocumentSource::Bytes(vec![b'a', 0xff, 0xfe, b'b']);
        assert_eq!(source.read().await.unwrap(), "ab");
    }

    #[tokio::test]
    async fn missing_file_propagates_io_error() {
        let source = DocumentSource::Path(PathBuf::from("does/not/exist.txt"));
        assert!(matches!(
            source.read().await,
            Err(crate::ScreenerError::Io(_))
        ));
    }

    #[tokio::test]
    async fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Python developer").unwrap();

        let source = DocumentSource::Path(path);
        assert_eq!(source.read().await.unwrap(), "Python developer");
    }
}
