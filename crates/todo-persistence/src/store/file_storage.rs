use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use std::path::{Path, PathBuf};
use todo_core::{TodoError, TodoResult};

/// Directory-backed key-value store: key `K` lives in `<dir>/K.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> TodoResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TodoError::Validation(format!(
                "invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStorage {
    async fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        let path = self.path_for(key)?;
        match AtomicWriter::read_optional(&path).await? {
            Some(bytes) => {
                let value = String::from_utf8(bytes).map_err(|e| {
                    TodoError::Serialization(format!("{} is not UTF-8: {}", path.display(), e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> TodoResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes()).await?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
