pub mod serialization;
pub mod store;
pub mod task_store;
pub mod traits;

pub use serialization::*;
pub use store::*;
pub use task_store::{TaskStore, STORAGE_KEY};
pub use traits::*;
