//! # Quadro Core
//!
//! State model for the Quadro kanban board: three fixed columns of task
//! cards that can be added, edited, deleted, searched and moved.
//!
//! The crate holds no rendering, gesture or storage code. A view renders
//! [`BoardSnapshot`]s and feeds user events to an [`InteractionSession`] or
//! directly to the [`TaskBoardStore`]; either move trigger (drag or buttons)
//! goes through the same store operations.

pub mod domain;
pub mod error;
pub mod interaction;
pub mod snapshot;
pub mod store;
pub mod triggers;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, ColumnConfig, NoOpReason, Operation, Outcome, SeedTask},
    column::{Column, ColumnId, Direction},
    filter::SearchQuery,
    task::{Task, TaskId},
};
pub use error::{BoardError, Result};
pub use interaction::{Confirmation, InteractionSession, InteractionState};
pub use snapshot::{BoardSnapshot, ColumnSnapshot};
pub use store::TaskBoardStore;
pub use triggers::{DragGesture, MoveRequest, StepButton};
