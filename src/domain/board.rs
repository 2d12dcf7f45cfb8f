use crate::domain::column::{Column, ColumnId, Direction};
use crate::domain::task::{normalize_text, Task, TaskId};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display configuration for one of the fixed columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub display_name: String,
}

impl ColumnConfig {
    pub fn new(id: ColumnId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A task the board starts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    pub column: ColumnId,
    pub id: TaskId,
    pub text: String,
}

impl SeedTask {
    fn new(column: ColumnId, id: &str, text: &str) -> Self {
        Self {
            column,
            id: TaskId(id.to_string()),
            text: text.to_string(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
    #[serde(default)]
    pub seed: Vec<SeedTask>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Meu Quadro Kanban".to_string(),
            columns: ColumnId::ALL
                .into_iter()
                .map(|id| ColumnConfig::new(id, id.default_display_name()))
                .collect(),
            seed: vec![
                SeedTask::new(ColumnId::Todo, "1", "Testar a rolagem horizontal"),
                SeedTask::new(ColumnId::Todo, "2", "Testar o long press para arrastar"),
                SeedTask::new(ColumnId::InProgress, "3", "Finalizar os ajustes de UX"),
                SeedTask::new(ColumnId::Done, "4", "Beber um café ☕"),
            ],
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every fixed column is configured exactly once and that
    /// seed tasks are well formed.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id) {
                return Err(BoardError::ConfigError(format!(
                    "column '{}' is configured more than once",
                    column.id
                )));
            }
            if column.display_name.trim().is_empty() {
                return Err(BoardError::ConfigError(format!(
                    "column '{}' has a blank display name",
                    column.id
                )));
            }
        }
        if let Some(missing) = ColumnId::ALL.into_iter().find(|id| !seen.contains(id)) {
            return Err(BoardError::ConfigError(format!(
                "column '{}' is not configured",
                missing
            )));
        }

        let mut ids = HashSet::new();
        for task in &self.seed {
            if task.id.as_str().trim().is_empty() {
                return Err(BoardError::ConfigError("seed task has a blank id".to_string()));
            }
            if !ids.insert(&task.id) {
                return Err(BoardError::ConfigError(format!(
                    "seed task id '{}' is used more than once",
                    task.id
                )));
            }
            if normalize_text(&task.text).is_none() {
                return Err(BoardError::ConfigError(format!(
                    "seed task '{}' has blank text",
                    task.id
                )));
            }
        }
        Ok(())
    }

    fn display_name(&self, id: ColumnId) -> String {
        self.columns
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| id.default_display_name().to_string())
    }
}

/// A board mutation, fully determined by its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    AddTask {
        id: TaskId,
        text: String,
    },
    EditTask {
        column: ColumnId,
        task_id: TaskId,
        text: String,
    },
    DeleteTask {
        column: ColumnId,
        task_id: TaskId,
    },
    MoveTask {
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    MoveTaskDirectional {
        task_id: TaskId,
        column: ColumnId,
        direction: Direction,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::EditTask { .. } => "edit_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveTask { .. } => "move_task",
            Self::MoveTaskDirectional { .. } => "move_task_directional",
        }
    }
}

/// Why a mutation was declined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    EmptyText,
    TaskNotFound,
    DuplicateTask,
    SameColumn,
    OutOfRange,
}

/// Result of applying an [`Operation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NoOp(NoOpReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Kanban board state: the fixed columns, each owning its tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub name: String,
    columns: Vec<Column>,
}

impl Board {
    /// Builds a board from a validated configuration
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// A board with the configured columns and no tasks
    pub fn empty(config: BoardConfig) -> Result<Self> {
        Self::new(BoardConfig {
            seed: Vec::new(),
            ..config
        })
    }

    fn build(config: BoardConfig) -> Self {
        let mut columns: Vec<Column> = ColumnId::ALL
            .into_iter()
            .map(|id| Column::new(id, config.display_name(id)))
            .collect();
        for seed in config.seed {
            columns[seed.column.index()]
                .tasks
                .push(Task::new(seed.id, seed.text.trim().to_string()));
        }
        Self {
            name: config.name,
            columns,
        }
    }

    /// Columns in the fixed order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.index()]
    }

    /// Finds which column currently owns a task
    pub fn locate(&self, task_id: &TaskId) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|c| c.contains(task_id))
            .map(|c| c.id)
    }

    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|c| c.get(task_id))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Number of tasks per column, in column order
    pub fn counts(&self) -> Vec<(ColumnId, usize)> {
        self.columns.iter().map(|c| (c.id, c.len())).collect()
    }

    /// Every task id in board order (column order, then position)
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id.clone()))
            .collect()
    }

    /// Applies an operation in place.
    ///
    /// Invalid input never errors: the board is left untouched and the
    /// reason is reported as [`Outcome::NoOp`].
    pub fn apply(&mut self, op: &Operation) -> Outcome {
        let outcome = match op {
            Operation::AddTask { id, text } => self.add(id, text),
            Operation::EditTask {
                column,
                task_id,
                text,
            } => self.edit(*column, task_id, text),
            Operation::DeleteTask { column, task_id } => self.delete(*column, task_id),
            Operation::MoveTask { task_id, from, to } => self.transfer(task_id, *from, *to),
            Operation::MoveTaskDirectional {
                task_id,
                column,
                direction,
            } => match column.step(*direction) {
                Some(to) => self.transfer(task_id, *column, to),
                None => Outcome::NoOp(NoOpReason::OutOfRange),
            },
        };

        match outcome {
            Outcome::Applied => tracing::debug!(operation = op.name(), "Board updated"),
            Outcome::NoOp(reason) => {
                tracing::debug!(operation = op.name(), ?reason, "Operation declined")
            }
        }
        outcome
    }

    /// Pure form of [`Board::apply`]: returns the next board, leaving `self` as is
    pub fn applied(&self, op: &Operation) -> (Board, Outcome) {
        let mut next = self.clone();
        let outcome = next.apply(op);
        (next, outcome)
    }

    fn add(&mut self, id: &TaskId, raw: &str) -> Outcome {
        let Some(text) = normalize_text(raw) else {
            return Outcome::NoOp(NoOpReason::EmptyText);
        };
        if self.locate(id).is_some() {
            return Outcome::NoOp(NoOpReason::DuplicateTask);
        }
        tracing::debug!(task_id = %id, column = %ColumnId::INTAKE, "Adding task");
        self.columns[ColumnId::INTAKE.index()].prepend(Task::new(id.clone(), text.to_string()));
        Outcome::Applied
    }

    fn edit(&mut self, column: ColumnId, task_id: &TaskId, raw: &str) -> Outcome {
        let Some(task) = self.columns[column.index()].get_mut(task_id) else {
            return Outcome::NoOp(NoOpReason::TaskNotFound);
        };
        if task.set_text(raw) {
            Outcome::Applied
        } else {
            Outcome::NoOp(NoOpReason::EmptyText)
        }
    }

    fn delete(&mut self, column: ColumnId, task_id: &TaskId) -> Outcome {
        match self.columns[column.index()].take(task_id) {
            Some(_) => {
                tracing::debug!(task_id = %task_id, column = %column, "Deleted task");
                Outcome::Applied
            }
            None => Outcome::NoOp(NoOpReason::TaskNotFound),
        }
    }

    /// Removal and insertion happen under the same `&mut self`, so no caller
    /// can observe a task in both columns or in neither.
    fn transfer(&mut self, task_id: &TaskId, from: ColumnId, to: ColumnId) -> Outcome {
        if from == to {
            return Outcome::NoOp(NoOpReason::SameColumn);
        }
        let Some(task) = self.columns[from.index()].take(task_id) else {
            return Outcome::NoOp(NoOpReason::TaskNotFound);
        };
        tracing::debug!(task_id = %task_id, from = %from, to = %to, "Moving task");
        self.columns[to.index()].prepend(task);
        Outcome::Applied
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(BoardConfig::default())
    }
}
