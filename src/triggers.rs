//! Move triggers.
//!
//! Both interaction modes reduce to a [`MoveRequest`] executed by
//! [`TaskBoardStore::request_move`](crate::store::TaskBoardStore::request_move):
//! a drag gesture resolves to [`MoveRequest::Drop`], a directional button to
//! [`MoveRequest::Step`].

use crate::domain::{ColumnId, Direction, Operation, TaskId};

/// A move requested by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    /// A card dropped onto a column
    Drop {
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    /// A card shifted one column by a button
    Step {
        task_id: TaskId,
        column: ColumnId,
        direction: Direction,
    },
}

impl MoveRequest {
    pub fn into_operation(self) -> Operation {
        match self {
            Self::Drop { task_id, from, to } => Operation::MoveTask { task_id, from, to },
            Self::Step {
                task_id,
                column,
                direction,
            } => Operation::MoveTaskDirectional {
                task_id,
                column,
                direction,
            },
        }
    }
}

/// What a dragged card carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub from: ColumnId,
}

/// Tracks one drag gesture from pick-up to drop.
#[derive(Debug, Default)]
pub struct DragGesture {
    payload: Option<DragPayload>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up a card. A gesture already in flight is replaced.
    pub fn start(&mut self, task_id: TaskId, from: ColumnId) {
        tracing::debug!(task_id = %task_id, from = %from, "Drag started");
        self.payload = Some(DragPayload { task_id, from });
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// Ends the gesture over `to`, yielding the move to perform.
    /// Returns `None` if nothing was being dragged.
    pub fn drop_on(&mut self, to: ColumnId) -> Option<MoveRequest> {
        self.payload
            .take()
            .map(|DragPayload { task_id, from }| MoveRequest::Drop { task_id, from, to })
    }

    /// Abandons the gesture without moving anything
    pub fn cancel(&mut self) {
        if self.payload.take().is_some() {
            tracing::debug!("Drag cancelled");
        }
    }
}

/// A previous/next button rendered on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepButton {
    pub task_id: TaskId,
    pub column: ColumnId,
    pub direction: Direction,
}

impl StepButton {
    pub fn new(task_id: TaskId, column: ColumnId, direction: Direction) -> Self {
        Self {
            task_id,
            column,
            direction,
        }
    }

    /// Whether the button leads anywhere; views hide it at the board edges
    pub fn is_enabled(&self) -> bool {
        self.column.step(self.direction).is_some()
    }

    pub fn press(&self) -> MoveRequest {
        MoveRequest::Step {
            task_id: self.task_id.clone(),
            column: self.column,
            direction: self.direction,
        }
    }
}
