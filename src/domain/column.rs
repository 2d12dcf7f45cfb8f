use crate::domain::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the fixed board columns, in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// Every column, in the fixed left-to-right order
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// The column new tasks are created in
    pub const INTAKE: ColumnId = ColumnId::Todo;

    /// Position of this column in the fixed order
    pub fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The neighbouring column in `direction`, or `None` at either edge
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Previous => self.index().checked_sub(1).and_then(Self::from_index),
            Direction::Next => Self::from_index(self.index() + 1),
        }
    }

    /// Wire name used by views and config files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Label shown when no config overrides it
    pub fn default_display_name(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::InProgress => "Em Andamento",
            Self::Done => "Concluído",
        }
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| crate::error::BoardError::InvalidColumnId(s.to_string()))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a button-driven move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

impl FromStr for Direction {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "previous" | "prev" | "left" => Ok(Self::Previous),
            "next" | "right" => Ok(Self::Next),
            _ => Err(crate::error::BoardError::InvalidDirection(s.to_string())),
        }
    }
}

/// A column and the tasks it currently owns, head first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub display_name: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId, display_name: String) -> Self {
        Self {
            id,
            display_name,
            tasks: Vec::new(),
        }
    }

    pub fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == task_id)
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.position(task_id).is_some()
    }

    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == task_id)
    }

    pub(crate) fn get_mut(&mut self, task_id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == task_id)
    }

    pub(crate) fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub(crate) fn take(&mut self, task_id: &TaskId) -> Option<Task> {
        self.position(task_id).map(|pos| self.tasks.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
