pub mod board;
pub mod column;
pub mod filter;
pub mod task;

pub use board::{Board, BoardConfig, ColumnConfig, NoOpReason, Operation, Outcome, SeedTask};
pub use column::{Column, ColumnId, Direction};
pub use filter::{filter_columns, SearchQuery};
pub use task::{Task, TaskId};
