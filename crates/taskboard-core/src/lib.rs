/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskboard-core crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod insights;
pub mod scoring;
pub mod store;
pub mod types;
pub mod view;

pub use error::{ParseLabelError, Result, StoreError};
pub use insights::{Insights, summarize};
pub use scoring::{days_left, days_until, level, score, today};
pub use store::{FileStore, KeyValueStore, MemoryStore, TASKS_KEY, TaskStore};
pub use view::{SortDirection, SortState, ViewOptions};

// Re-export all types
pub use types::*;
