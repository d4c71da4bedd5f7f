pub mod atomic_writer;
pub mod file_storage;
pub mod memory_storage;

pub use atomic_writer::AtomicWriter;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
