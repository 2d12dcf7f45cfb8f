use crate::domain::{
    Board, BoardConfig, ColumnId, Direction, Operation, Outcome, SearchQuery, TaskId,
};
use crate::error::Result;
use crate::snapshot::BoardSnapshot;
use crate::triggers::MoveRequest;

/// Render callback, invoked with the filtered board after every change
pub type RenderListener = Box<dyn FnMut(&BoardSnapshot)>;

/// Single source of truth for the board and the active search.
///
/// Every mutation goes through [`Board::apply`], so a declined operation
/// leaves the board untouched and fires no render callback.
pub struct TaskBoardStore {
    board: Board,
    query: SearchQuery,
    listeners: Vec<RenderListener>,
}

impl TaskBoardStore {
    /// Creates a store whose board is built from `config`
    pub fn new(config: BoardConfig) -> Result<Self> {
        Ok(Self::from_board(Board::new(config)?))
    }

    pub fn from_board(board: Board) -> Self {
        tracing::info!(
            board = %board.name,
            tasks = board.task_count(),
            "Task board store initialized"
        );
        Self {
            board,
            query: SearchQuery::default(),
            listeners: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registers a render callback
    pub fn subscribe(&mut self, listener: impl FnMut(&BoardSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a task at the head of the intake column.
    ///
    /// Returns the new task's id, or `None` when the text is blank.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = TaskId::generate();
        self.dispatch(Operation::AddTask {
            id: id.clone(),
            text: text.to_string(),
        })
        .is_applied()
        .then_some(id)
    }

    pub fn edit_task(&mut self, column: ColumnId, task_id: &TaskId, text: &str) -> Outcome {
        self.dispatch(Operation::EditTask {
            column,
            task_id: task_id.clone(),
            text: text.to_string(),
        })
    }

    /// Removes a task. Callers must have obtained the user's confirmation
    /// first; see [`InteractionSession`](crate::interaction::InteractionSession).
    pub fn delete_task(&mut self, column: ColumnId, task_id: &TaskId) -> Outcome {
        self.dispatch(Operation::DeleteTask {
            column,
            task_id: task_id.clone(),
        })
    }

    pub fn move_task(&mut self, task_id: &TaskId, from: ColumnId, to: ColumnId) -> Outcome {
        self.dispatch(Operation::MoveTask {
            task_id: task_id.clone(),
            from,
            to,
        })
    }

    pub fn move_task_directional(
        &mut self,
        task_id: &TaskId,
        column: ColumnId,
        direction: Direction,
    ) -> Outcome {
        self.dispatch(Operation::MoveTaskDirectional {
            task_id: task_id.clone(),
            column,
            direction,
        })
    }

    /// Executes a move produced by either trigger adapter
    pub fn request_move(&mut self, request: MoveRequest) -> Outcome {
        self.dispatch(request.into_operation())
    }

    /// Applies an operation and, if it took effect, re-renders
    pub fn dispatch(&mut self, op: Operation) -> Outcome {
        let outcome = self.board.apply(&op);
        if outcome.is_applied() {
            self.notify();
        }
        outcome
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Replaces the active search and re-renders if it changed
    pub fn set_query(&mut self, raw: &str) {
        let query = SearchQuery::new(raw);
        if query == self.query {
            return;
        }
        tracing::debug!(query = %query.as_str(), "Search query changed");
        self.query = query;
        self.notify();
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// The board filtered by an arbitrary query, independent of the active one
    pub fn filter(&self, query: &str) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, &SearchQuery::new(query))
    }

    /// The board filtered by the active query, as the view renders it
    pub fn visible(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, &self.query)
    }

    /// The full, unfiltered board
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, &SearchQuery::default())
    }

    /// Column currently holding `task_id`
    pub fn locate(&self, task_id: &TaskId) -> Option<ColumnId> {
        self.board.locate(task_id)
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.visible();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for TaskBoardStore {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}
