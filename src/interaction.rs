use crate::domain::{ColumnId, NoOpReason, Outcome, TaskId};
use crate::store::TaskBoardStore;

/// What the user is in the middle of doing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// The edit dialog is open for a task
    Editing {
        task_id: TaskId,
        column: ColumnId,
        draft: String,
    },
    /// The delete confirmation is showing
    ConfirmingDelete { task_id: TaskId, column: ColumnId },
}

/// The user's answer to a delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Couples the store with the view's transient input state.
///
/// Deletion is a two-step protocol: [`request_delete`](Self::request_delete)
/// opens the confirmation, and only
/// [`resolve_delete`](Self::resolve_delete) with [`Confirmation::Confirmed`]
/// reaches the store.
pub struct InteractionSession {
    store: TaskBoardStore,
    composer: String,
    state: InteractionState,
}

impl InteractionSession {
    pub fn new(store: TaskBoardStore) -> Self {
        Self {
            store,
            composer: String::new(),
            state: InteractionState::Idle,
        }
    }

    pub fn store(&self) -> &TaskBoardStore {
        &self.store
    }

    /// Direct access for searches and moves, which need no dialog
    pub fn store_mut(&mut self) -> &mut TaskBoardStore {
        &mut self.store
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Text currently in the "new task" input
    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: &str) {
        self.composer = text.to_string();
    }

    /// Submits the "new task" input. The input is cleared only when a task
    /// was actually created.
    pub fn submit_composer(&mut self) -> Option<TaskId> {
        let id = self.store.add_task(&self.composer)?;
        self.composer.clear();
        Some(id)
    }

    /// Opens the editor for a task, seeding the draft with its current text.
    pub fn begin_edit(&mut self, column: ColumnId, task_id: &TaskId) -> bool {
        if !self.is_idle("begin_edit") {
            return false;
        }
        let Some(task) = self.store.board().column(column).get(task_id) else {
            tracing::debug!(task_id = %task_id, column = %column, "Edit requested for unknown task");
            return false;
        };
        self.state = InteractionState::Editing {
            task_id: task_id.clone(),
            column,
            draft: task.text.clone(),
        };
        true
    }

    pub fn update_draft(&mut self, text: &str) -> bool {
        match &mut self.state {
            InteractionState::Editing { draft, .. } => {
                *draft = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Saves the draft.
    ///
    /// A blank draft keeps the editor open; any other outcome closes it.
    /// Returns `None` when no edit was in progress.
    pub fn save_edit(&mut self) -> Option<Outcome> {
        let InteractionState::Editing {
            task_id,
            column,
            draft,
        } = &self.state
        else {
            return None;
        };
        let outcome = self.store.edit_task(*column, task_id, draft);
        if outcome != Outcome::NoOp(NoOpReason::EmptyText) {
            self.state = InteractionState::Idle;
        }
        Some(outcome)
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.state, InteractionState::Editing { .. }) {
            self.state = InteractionState::Idle;
        }
    }

    /// Asks the user to confirm deleting a task
    pub fn request_delete(&mut self, column: ColumnId, task_id: &TaskId) -> bool {
        if !self.is_idle("request_delete") {
            return false;
        }
        if !self.store.board().column(column).contains(task_id) {
            tracing::debug!(task_id = %task_id, column = %column, "Delete requested for unknown task");
            return false;
        }
        self.state = InteractionState::ConfirmingDelete {
            task_id: task_id.clone(),
            column,
        };
        true
    }

    /// Closes the confirmation. The store is only touched on
    /// [`Confirmation::Confirmed`]; otherwise `None` is returned.
    pub fn resolve_delete(&mut self, answer: Confirmation) -> Option<Outcome> {
        let InteractionState::ConfirmingDelete { task_id, column } =
            std::mem::take(&mut self.state)
        else {
            return None;
        };
        match answer {
            Confirmation::Confirmed => Some(self.store.delete_task(column, &task_id)),
            Confirmation::Cancelled => {
                tracing::debug!(task_id = %task_id, "Delete cancelled");
                None
            }
        }
    }

    fn is_idle(&self, event: &'static str) -> bool {
        let idle = matches!(self.state, InteractionState::Idle);
        if !idle {
            tracing::debug!(event, state = ?self.state, "Ignoring event while busy");
        }
        idle
    }
}

impl Default for InteractionSession {
    fn default() -> Self {
        Self::new(TaskBoardStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn id(s: &str) -> TaskId {
        TaskId::from_str(s).unwrap()
    }

    fn ids(session: &InteractionSession) -> Vec<TaskId> {
        session.store().board().task_ids()
    }

    #[test]
    fn test_confirmed_delete_removes_task() {
        let mut session = InteractionSession::default();

        assert!(session.request_delete(ColumnId::Done, &id("4")));
        assert_eq!(session.store().board().task_count(), 4);

        let outcome = session.resolve_delete(Confirmation::Confirmed);
        assert_eq!(outcome, Some(Outcome::Applied));
        assert_eq!(session.store().locate(&id("4")), None);
        assert_eq!(session.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_cancelled_delete_leaves_board_identical() {
        let mut session = InteractionSession::default();
        let before = ids(&session);

        assert!(session.request_delete(ColumnId::Todo, &id("1")));
        assert_eq!(session.resolve_delete(Confirmation::Cancelled), None);

        assert_eq!(ids(&session), before);
        assert_eq!(session.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_resolve_without_request_is_ignored() {
        let mut session = InteractionSession::default();
        assert_eq!(session.resolve_delete(Confirmation::Confirmed), None);
        assert_eq!(session.store().board().task_count(), 4);
    }

    #[test]
    fn test_request_delete_for_unknown_task() {
        let mut session = InteractionSession::default();
        assert!(!session.request_delete(ColumnId::Todo, &id("4")));
        assert_eq!(session.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_composer_clears_only_on_success() {
        let mut session = InteractionSession::default();

        session.set_composer("   ");
        assert_eq!(session.submit_composer(), None);
        assert_eq!(session.composer(), "   ");

        session.set_composer("Buy milk");
        let new_id = session.submit_composer().unwrap();
        assert_eq!(session.composer(), "");
        assert_eq!(
            session.store().board().column(ColumnId::Todo).tasks[0].id,
            new_id
        );
    }

    #[test]
    fn test_edit_flow() {
        let mut session = InteractionSession::default();

        assert!(session.begin_edit(ColumnId::InProgress, &id("3")));
        assert_eq!(
            session.state(),
            &InteractionState::Editing {
                task_id: id("3"),
                column: ColumnId::InProgress,
                draft: "Finalizar os ajustes de UX".to_string(),
            }
        );

        assert!(session.update_draft("Finalizar UX"));
        assert_eq!(session.save_edit(), Some(Outcome::Applied));
        assert_eq!(session.state(), &InteractionState::Idle);
        assert_eq!(
            session.store().board().task(&id("3")).unwrap().text,
            "Finalizar UX"
        );
    }

    #[test]
    fn test_blank_draft_keeps_editor_open() {
        let mut session = InteractionSession::default();

        session.begin_edit(ColumnId::Todo, &id("1"));
        session.update_draft("  ");

        assert_eq!(
            session.save_edit(),
            Some(Outcome::NoOp(NoOpReason::EmptyText))
        );
        assert!(matches!(session.state(), InteractionState::Editing { .. }));
        assert_eq!(
            session.store().board().task(&id("1")).unwrap().text,
            "Testar a rolagem horizontal"
        );

        session.cancel_edit();
        assert_eq!(session.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_edit_of_task_moved_away_closes_editor() {
        let mut session = InteractionSession::default();

        session.begin_edit(ColumnId::Todo, &id("1"));
        session
            .store_mut()
            .move_task(&id("1"), ColumnId::Todo, ColumnId::Done);
        session.update_draft("Too late");

        assert_eq!(
            session.save_edit(),
            Some(Outcome::NoOp(NoOpReason::TaskNotFound))
        );
        assert_eq!(session.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_events_ignored_while_busy() {
        let mut session = InteractionSession::default();

        session.begin_edit(ColumnId::Todo, &id("1"));
        assert!(!session.request_delete(ColumnId::Todo, &id("2")));
        assert!(!session.begin_edit(ColumnId::Todo, &id("2")));

        session.cancel_edit();
        session.request_delete(ColumnId::Todo, &id("2"));
        assert!(!session.begin_edit(ColumnId::Todo, &id("1")));
        assert!(!session.update_draft("nope"));
        assert_eq!(session.save_edit(), None);
    }

    #[test]
    fn test_add_then_confirmed_delete_round_trip() {
        let mut session = InteractionSession::default();
        let before = ids(&session);

        session.set_composer("Temporary");
        let new_id = session.submit_composer().unwrap();
        session.request_delete(ColumnId::Todo, &new_id);
        session.resolve_delete(Confirmation::Confirmed);

        assert_eq!(ids(&session), before);
    }
}
