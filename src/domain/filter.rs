use crate::domain::board::Board;
use crate::domain::column::Column;
use crate::domain::task::Task;

/// A search over task labels.
///
/// A blank query matches everything. Otherwise the raw query (not trimmed)
/// is matched case-insensitively as a substring of each label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: Option<String>,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = (!raw.trim().is_empty()).then(|| raw.to_lowercase());
        Self { raw, needle }
    }

    /// The query as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the query does not filter anything out
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        match &self.needle {
            Some(needle) => task.matches(needle),
            None => true,
        }
    }
}

/// Projects the board through a query: every column is kept, holding only
/// its matching tasks in their original order.
///
/// The board is only read; the result is computed fresh on every call.
pub fn filter_columns(board: &Board, query: &SearchQuery) -> Vec<Column> {
    board
        .columns()
        .iter()
        .map(|column| Column {
            id: column.id,
            display_name: column.display_name.clone(),
            tasks: column
                .tasks
                .iter()
                .filter(|task| query.matches(task))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::Operation;
    use crate::domain::column::ColumnId;
    use crate::domain::task::TaskId;

    fn texts(columns: &[Column], id: ColumnId) -> Vec<&str> {
        columns[id.index()]
            .tasks
            .iter()
            .map(|t| t.text.as_str())
            .collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let board = Board::default();
        for raw in ["", "   ", "\t"] {
            let query = SearchQuery::new(raw);
            assert!(query.is_blank());
            assert_eq!(filter_columns(&board, &query), board.columns().to_vec());
        }
    }

    #[test]
    fn test_query_matches_across_columns() {
        let board = Board::default();
        let filtered = filter_columns(&board, &SearchQuery::new("café"));

        assert_eq!(filtered.len(), 3);
        assert!(filtered[ColumnId::Todo.index()].tasks.is_empty());
        assert!(filtered[ColumnId::InProgress.index()].tasks.is_empty());
        assert_eq!(texts(&filtered, ColumnId::Done), vec!["Beber um café ☕"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let board = Board::default();
        let filtered = filter_columns(&board, &SearchQuery::new("TESTAR"));
        assert_eq!(
            texts(&filtered, ColumnId::Todo),
            vec!["Testar a rolagem horizontal", "Testar o long press para arrastar"]
        );
    }

    #[test]
    fn test_query_keeps_original_order() {
        let mut board = Board::default();
        board.apply(&Operation::AddTask {
            id: TaskId::generate(),
            text: "Testar primeiro".to_string(),
        });

        let filtered = filter_columns(&board, &SearchQuery::new("testar"));
        assert_eq!(
            texts(&filtered, ColumnId::Todo),
            vec![
                "Testar primeiro",
                "Testar a rolagem horizontal",
                "Testar o long press para arrastar"
            ]
        );
    }

    #[test]
    fn test_filter_does_not_mutate_board() {
        let board = Board::default();
        let before = board.clone();

        let filtered = filter_columns(&board, &SearchQuery::new("nothing matches this"));

        assert!(filtered.iter().all(|c| c.tasks.is_empty()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_query_keeps_inner_whitespace() {
        let board = Board::default();
        let filtered = filter_columns(&board, &SearchQuery::new("long press"));
        assert_eq!(texts(&filtered, ColumnId::Todo), vec!["Testar o long press para arrastar"]);

        let query = SearchQuery::new(" Café ");
        assert_eq!(query.as_str(), " Café ");
        assert!(!query.is_blank());
    }
}
