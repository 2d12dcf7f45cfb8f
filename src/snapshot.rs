use crate::domain::{filter_columns, Board, Column, ColumnId, SearchQuery, Task};
use crate::error::Result;
use serde::Serialize;

/// Read-only view of one column handed to the render layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSnapshot {
    pub id: ColumnId,
    pub display_name: String,
    pub tasks: Vec<Task>,
}

impl From<Column> for ColumnSnapshot {
    fn from(column: Column) -> Self {
        Self {
            id: column.id,
            display_name: column.display_name,
            tasks: column.tasks,
        }
    }
}

/// Immutable copy of the board as a view should render it.
///
/// Only [`BoardSnapshot::capture`] builds one, so every fixed column is
/// present and listed in board order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    name: String,
    query: String,
    columns: Vec<ColumnSnapshot>,
}

impl BoardSnapshot {
    /// Captures the board as filtered by `query`
    pub fn capture(board: &Board, query: &SearchQuery) -> Self {
        Self {
            name: board.name.clone(),
            query: query.as_str().to_string(),
            columns: filter_columns(board, query)
                .into_iter()
                .map(ColumnSnapshot::from)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The query the columns were filtered by
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Columns in the fixed order
    pub fn columns(&self) -> &[ColumnSnapshot] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> &ColumnSnapshot {
        &self.columns[id.index()]
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_unfiltered() {
        let board = Board::default();
        let snapshot = BoardSnapshot::capture(&board, &SearchQuery::default());

        assert_eq!(snapshot.name(), "Meu Quadro Kanban");
        assert_eq!(snapshot.query(), "");
        assert_eq!(snapshot.task_count(), 4);
        let order: Vec<ColumnId> = snapshot.columns().iter().map(|c| c.id).collect();
        assert_eq!(order, ColumnId::ALL.to_vec());
    }

    #[test]
    fn test_capture_filtered() {
        let board = Board::default();
        let snapshot = BoardSnapshot::capture(&board, &SearchQuery::new("ux"));

        assert_eq!(snapshot.query(), "ux");
        assert_eq!(snapshot.task_count(), 1);
        assert_eq!(
            snapshot.column(ColumnId::InProgress).tasks[0].text,
            "Finalizar os ajustes de UX"
        );
    }

    #[test]
    fn test_column_lookup_matches_id() {
        let board = Board::default();
        let snapshot = BoardSnapshot::capture(&board, &SearchQuery::new("nothing"));

        assert_eq!(snapshot.columns().len(), ColumnId::ALL.len());
        for id in ColumnId::ALL {
            assert_eq!(snapshot.column(id).id, id);
            assert!(snapshot.column(id).tasks.is_empty());
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let board = Board::default();
        let json = BoardSnapshot::capture(&board, &SearchQuery::default())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["columns"][1]["id"], "inProgress");
        assert_eq!(value["columns"][1]["display_name"], "Em Andamento");
        assert_eq!(value["columns"][0]["tasks"][0]["id"], "1");
        assert_eq!(value["columns"][2]["tasks"][0]["text"], "Beber um café ☕");
    }
}
