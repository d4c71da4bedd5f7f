use async_trait::async_trait;
use todo_core::TodoResult;

/// String key-value storage local to the device.
/// Every write replaces the whole value stored under the key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if nothing was ever written
    async fn get_item(&self, key: &str) -> TodoResult<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value
    async fn set_item(&self, key: &str, value: &str) -> TodoResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to a string suitable for a `KeyValueStore`
    fn serialize(&self, data: &T) -> TodoResult<String>;

    /// Deserialize data from a stored string
    fn deserialize(&self, raw: &str) -> TodoResult<T>;
}
