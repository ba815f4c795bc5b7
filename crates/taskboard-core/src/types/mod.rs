/*
[INPUT]:  Persisted task schema and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions shared across the workspace
[UPDATE]: When the task schema changes or new types are added
*/

pub mod enums;
pub mod models;

pub use enums::*;
pub use models::*;
