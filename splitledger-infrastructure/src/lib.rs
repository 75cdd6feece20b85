#![warn(clippy::uninlined_format_args)]

pub mod snapshot;

pub use snapshot::{GroupSnapshot, JsonExpenseSource, SnapshotError};
