use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use std::sync::Arc;
use todo_core::TodoResult;
use todo_domain::commands::{AddTask, Command, CommandContext, RemoveTask, RenameTask, ToggleTask};
use todo_domain::{sort_newest_first, Task, TaskId};

/// Storage key holding the whole task list
pub const STORAGE_KEY: &str = "TodoApp";

/// Owns the canonical task list and keeps it in sync with storage.
///
/// Every mutation rewrites the full list under [`STORAGE_KEY`]. Storage
/// failures are logged and never returned: a failed load yields an empty
/// list, a failed write keeps the in-memory state.
pub struct TaskStore {
    storage: Arc<dyn KeyValueStore>,
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            tasks: Vec::new(),
        }
    }

    /// Create a store and load the persisted list
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut store = Self::new(storage);
        store.load().await;
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Look a task up by the textual id carried in a route
    pub fn find_by_param(&self, param: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id.to_string() == param)
    }

    /// Replace the in-memory list with the stored one, newest first
    pub async fn load(&mut self) {
        self.tasks = match self.read_tasks().await {
            Ok(tasks) => {
                tracing::info!("Loaded {} tasks", tasks.len());
                tasks
            }
            Err(e) => {
                tracing::error!("Failed to load tasks: {}", e);
                Vec::new()
            }
        };
    }

    /// Pick up the stored list, keeping the in-memory one if it cannot be read
    pub async fn reload(&mut self) {
        match self.read_tasks().await {
            Ok(tasks) => {
                tracing::debug!("Reloaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(e) => {
                tracing::error!("Failed to reload tasks, keeping {}: {}", self.tasks.len(), e);
            }
        }
    }

    async fn read_tasks(&self) -> TodoResult<Vec<Task>> {
        let Some(raw) = self.storage.get_item(STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };
        let mut tasks: Vec<Task> = JsonSerializer.deserialize(&raw)?;
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    /// Returns the new task's id, or `None` when the trimmed title is empty
    /// or no id is left to assign
    pub async fn add(&mut self, title: &str) -> Option<TaskId> {
        if title.trim().is_empty() {
            return None;
        }
        let command = AddTask {
            title: title.to_string(),
        };
        if !self.execute(&command).await {
            return None;
        }
        self.tasks.first().map(|t| t.id)
    }

    pub async fn toggle_completed(&mut self, id: TaskId) {
        self.execute(&ToggleTask { task_id: id }).await;
    }

    pub async fn remove(&mut self, id: TaskId) {
        self.execute(&RemoveTask { task_id: id }).await;
    }

    /// Blank titles are stored as given
    pub async fn rename(&mut self, id: TaskId, new_title: &str) {
        let command = RenameTask {
            task_id: id,
            title: new_title.to_string(),
        };
        self.execute(&command).await;
    }

    /// Overwrite the stored list with the in-memory one
    pub async fn persist(&self) {
        if let Err(e) = self.write_tasks().await {
            tracing::error!("Failed to persist {} tasks: {}", self.tasks.len(), e);
        }
    }

    async fn write_tasks(&self) -> TodoResult<()> {
        let raw = JsonSerializer.serialize(&self.tasks)?;
        self.storage.set_item(STORAGE_KEY, &raw).await
    }

    async fn execute(&mut self, command: &dyn Command) -> bool {
        let mut context = CommandContext {
            tasks: &mut self.tasks,
        };
        if let Err(e) = command.execute(&mut context) {
            tracing::warn!("{} failed: {}", command.description(), e);
            return false;
        }
        tracing::debug!("{}", command.description());
        self.persist().await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStorage, MemoryStorage};
    use async_trait::async_trait;
    use tempfile::tempdir;
    use todo_core::TodoError;

    /// Reads succeed, every write fails
    struct ReadOnlyStorage(MemoryStorage);

    #[async_trait]
    impl KeyValueStore for ReadOnlyStorage {
        async fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
            self.0.get_item(key).await
        }

        async fn set_item(&self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn ids(store: &TaskStore) -> Vec<TaskId> {
        store.tasks().iter().map(|t| t.id).collect()
    }

    async fn stored_raw(storage: &Arc<MemoryStorage>) -> Option<String> {
        storage.get_item(STORAGE_KEY).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_to_empty_store() {
        let mut store = TaskStore::open(Arc::new(MemoryStorage::new())).await;

        let id = store.add("Buy milk").await;

        assert_eq!(id, Some(1));
        assert_eq!(store.tasks(), &[Task::new(1, "Buy milk".to_string())]);
    }

    #[tokio::test]
    async fn test_ids_strictly_decreasing_and_unique() {
        let mut store = TaskStore::open(Arc::new(MemoryStorage::new())).await;
        for title in ["one", "two", "three", "four", "five"] {
            store.add(title).await;
        }
        store.remove(3).await;
        store.add("six").await;

        let ids = ids(&store);
        assert_eq!(ids, vec![6, 5, 4, 2, 1]);
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn test_add_after_existing_ids() {
        let storage = Arc::new(MemoryStorage::with_item(
            STORAGE_KEY,
            r#"[{"id":1,"title":"a","completed":false},{"id":3,"title":"c","completed":true},{"id":2,"title":"b","completed":false}]"#,
        ));
        let mut store = TaskStore::open(storage).await;
        assert_eq!(ids(&store), vec![3, 2, 1]);

        assert_eq!(store.add("New").await, Some(4));
        assert_eq!(ids(&store), vec![4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn test_blank_add_does_not_touch_list_or_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;

        assert_eq!(store.add("").await, None);
        assert_eq!(store.add("   ").await, None);

        assert!(store.is_empty());
        assert!(stored_raw(&storage).await.is_none());
    }

    #[tokio::test]
    async fn test_add_trims_title() {
        let mut store = TaskStore::open(Arc::new(MemoryStorage::new())).await;
        store.add("  padded  ").await;
        assert_eq!(store.tasks()[0].title, "padded");
    }

    #[tokio::test]
    async fn test_toggle_persists_and_missing_id_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;
        store.add("a").await;

        store.toggle_completed(1).await;
        assert!(store.tasks()[0].completed);
        assert_eq!(
            stored_raw(&storage).await.as_deref(),
            Some(r#"[{"id":1,"title":"a","completed":true}]"#)
        );

        let before = store.tasks().to_vec();
        store.toggle_completed(99).await;
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[tokio::test]
    async fn test_add_when_ids_exhausted_skips_write() {
        let seeded = r#"[{"id":18446744073709551615,"title":"last","completed":false}]"#;
        let storage = Arc::new(MemoryStorage::with_item(STORAGE_KEY, seeded));
        let mut store = TaskStore::open(storage.clone()).await;

        assert_eq!(store.add("next").await, None);

        assert_eq!(ids(&store), vec![TaskId::MAX]);
        assert_eq!(stored_raw(&storage).await.as_deref(), Some(seeded));
    }

    #[tokio::test]
    async fn test_remove_twice_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;
        store.add("a").await;
        store.add("b").await;

        store.remove(2).await;
        let after_first = store.tasks().to_vec();
        assert_eq!(
            stored_raw(&storage).await.as_deref(),
            Some(r#"[{"id":1,"title":"a","completed":false}]"#)
        );
        store.remove(2).await;

        assert_eq!(store.tasks(), after_first.as_slice());
        assert_eq!(ids(&store), vec![1]);
        assert_eq!(
            stored_raw(&storage).await.as_deref(),
            Some(r#"[{"id":1,"title":"a","completed":false}]"#)
        );
    }

    #[tokio::test]
    async fn test_rename_changes_only_target() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;
        store.add("one").await;
        store.add("two").await;
        store.add("three").await;

        store.rename(2, "Updated").await;

        let titles: Vec<_> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "Updated", "one"]);
        assert_eq!(ids(&store), vec![3, 2, 1]);
        assert_eq!(
            stored_raw(&storage).await.as_deref(),
            Some(concat!(
                r#"[{"id":3,"title":"three","completed":false},"#,
                r#"{"id":2,"title":"Updated","completed":false},"#,
                r#"{"id":1,"title":"one","completed":false}]"#
            ))
        );
    }

    #[tokio::test]
    async fn test_rename_keeps_blank_title() {
        let mut store = TaskStore::open(Arc::new(MemoryStorage::new())).await;
        store.add("one").await;
        store.rename(1, "").await;
        assert_eq!(store.find(1).map(|t| t.title.as_str()), Some(""));
    }

    #[tokio::test]
    async fn test_persist_then_load_round_trip() {
        for count in [0usize, 1, 7] {
            let storage = Arc::new(MemoryStorage::new());
            let mut store = TaskStore::open(storage.clone()).await;
            for i in 0..count {
                store.add(&format!("task {}", i)).await;
            }
            if count > 0 {
                store.toggle_completed(1).await;
            }
            store.persist().await;

            let reloaded = TaskStore::open(storage).await;
            let mut expected = store.tasks().to_vec();
            let mut actual = reloaded.tasks().to_vec();
            expected.sort_by_key(|t| t.id);
            actual.sort_by_key(|t| t.id);
            assert_eq!(actual, expected, "round trip of {} tasks", count);
        }
    }

    #[tokio::test]
    async fn test_round_trip_through_files() {
        let dir = tempdir().unwrap();
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStorage::new(dir.path()));

        let mut store = TaskStore::open(storage.clone()).await;
        store.add("Buy milk").await;
        store.add("Walk dog").await;
        store.toggle_completed(1).await;

        let reloaded = TaskStore::open(storage).await;
        assert_eq!(reloaded.tasks(), store.tasks());
        assert!(dir.path().join("TodoApp.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_storage_loads_empty() {
        let storage = Arc::new(MemoryStorage::with_item(STORAGE_KEY, "{ invalid json"));
        let store = TaskStore::open(storage).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_state() {
        let storage = Arc::new(ReadOnlyStorage(MemoryStorage::new()));
        let mut store = TaskStore::open(storage).await;

        assert_eq!(store.add("kept").await, Some(1));
        store.toggle_completed(1).await;

        assert_eq!(store.len(), 1);
        assert!(store.tasks()[0].completed);
    }

    #[tokio::test]
    async fn test_reload_picks_up_stored_list() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;
        store.add("stale").await;

        storage
            .set_item(STORAGE_KEY, r#"[{"id":1,"title":"fresh","completed":true}]"#)
            .await
            .unwrap();
        store.reload().await;

        assert_eq!(store.find(1).map(|t| t.title.as_str()), Some("fresh"));
        assert!(store.tasks()[0].completed);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_list() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = TaskStore::open(storage.clone()).await;
        store.add("a").await;
        store.add("b").await;

        storage.set_item(STORAGE_KEY, "{ invalid json").await.unwrap();
        store.reload().await;
        assert_eq!(ids(&store), vec![2, 1]);

        // the next write restores the full list rather than a truncated one
        store.toggle_completed(1).await;
        assert_eq!(
            stored_raw(&storage).await.as_deref(),
            Some(concat!(
                r#"[{"id":2,"title":"b","completed":false},"#,
                r#"{"id":1,"title":"a","completed":true}]"#
            ))
        );
    }

    #[tokio::test]
    async fn test_find_by_param() {
        let mut store = TaskStore::open(Arc::new(MemoryStorage::new())).await;
        store.add("a").await;
        store.add("b").await;

        assert_eq!(store.find_by_param("2").map(|t| t.title.as_str()), Some("b"));
        assert!(store.find_by_param("02").is_none());
        assert!(store.find_by_param("x").is_none());
    }
}
