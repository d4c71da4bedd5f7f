use crate::traits::KeyValueStore;
use std::collections::HashMap;
use todo_core::TodoResult;
use tokio::sync::RwLock;

/// Non-durable store, used when no data directory is wanted and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> TodoResult<()> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
