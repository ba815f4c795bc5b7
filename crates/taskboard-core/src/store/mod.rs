pub mod backend;
pub mod task_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore, default_data_dir};
pub use task_store::{TASKS_KEY, TaskStore};
