use crate::traits::Serializer;
use todo_core::{TodoError, TodoResult};

/// Compact JSON, one line per stored value
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> TodoResult<String> {
        serde_json::to_string(data).map_err(|e| TodoError::Serialization(e.to_string()))
    }

    fn deserialize(&self, raw: &str) -> TodoResult<T> {
        serde_json::from_str(raw).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}
