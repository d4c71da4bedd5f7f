use std::path::Path;
use todo_core::TodoResult;
use tokio::fs;

/// Write-to-temp-file then rename, so readers never see a half-written value
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TodoResult<()> {
        // Temp file must live on the same filesystem for the rename to be atomic
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).await?;
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// `None` when the file does not exist
    pub async fn read_optional(path: &Path) -> TodoResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("value.json");

        AtomicWriter::write_atomic(&file_path, b"First").await.unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").await.unwrap();

        let read_data = AtomicWriter::read_optional(&file_path).await.unwrap();
        assert_eq!(read_data.as_deref(), Some(&b"Second"[..]));
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("value.json");

        AtomicWriter::write_atomic(&file_path, b"[]").await.unwrap();
        assert!(file_path.exists());
    }

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let read = AtomicWriter::read_optional(&dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(read.is_none());
    }
}
