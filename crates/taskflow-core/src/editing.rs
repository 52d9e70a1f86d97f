//! Editor Slot
//!
//! Holds the one task currently in edit mode for a mounted task list,
//! together with its draft. Keeping the draft inside the slot makes the
//! single-editor rule structural: there is nowhere for a second draft to live.

use chrono::TimeZone;

use crate::due::DueDraft;
use crate::error::{DomainError, DomainResult};
use crate::task::{Task, TaskId};

/// Unsaved edits shadowing one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    pub due: DueDraft,
}

impl EditDraft {
    /// Seed a draft from the task's current fields
    pub fn seed<Tz: TimeZone>(task: &Task, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            task_id: task.id,
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due: DueDraft::from_due(task.due_date.as_deref(), tz),
        }
    }

    /// Merge the draft into `task`. Either every edited field is applied or
    /// an error is returned and nothing is.
    ///
    /// A blank description clears the field (`None`); any other description
    /// is kept exactly as typed, surrounding whitespace included.
    pub fn apply(&self, task: &Task) -> DomainResult<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        let due_date = self.due.compose()?;
        let description = if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        };

        Ok(Task {
            title: title.to_string(),
            description,
            due_date,
            ..task.clone()
        })
    }
}

/// Shared "currently editing" slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSlot {
    draft: Option<EditDraft>,
}

impl EditorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.draft.as_ref().map(|d| d.task_id)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft, only for the task that owns the slot
    pub fn draft_mut(&mut self, id: TaskId) -> Option<&mut EditDraft> {
        self.draft.as_mut().filter(|d| d.task_id == id)
    }

    /// Put `task` in edit mode.
    ///
    /// Whatever draft held the slot before is evicted without being saved and
    /// handed back to the caller. Re-entering edit on the task that already
    /// holds the slot keeps its draft.
    pub fn begin<Tz: TimeZone>(&mut self, task: &Task, tz: &Tz) -> Option<EditDraft>
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.is_editing(task.id) {
            return None;
        }
        let evicted = self.draft.replace(EditDraft::seed(task, tz));
        if let Some(previous) = &evicted {
            tracing::debug!(evicted = previous.task_id, editing = task.id, "editor slot taken over");
        }
        evicted
    }

    /// Leave edit mode for `id`, discarding its draft
    pub fn cancel(&mut self, id: TaskId) -> Option<EditDraft> {
        if self.is_editing(id) {
            self.draft.take()
        } else {
            None
        }
    }

    /// Release the slot when the owning item goes away
    pub fn release(&mut self, id: TaskId) -> bool {
        self.cancel(id).is_some()
    }

    /// Validate and merge the draft into `task`, clearing the slot.
    /// On failure the slot and the draft stay untouched.
    pub fn commit(&mut self, task: &Task) -> DomainResult<Task> {
        let draft = self
            .draft
            .as_ref()
            .filter(|d| d.task_id == task.id)
            .ok_or(DomainError::NotEditing(task.id))?;
        let merged = draft.apply(task)?;
        self.draft = None;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(id: TaskId, title: &str) -> Task {
        Task::new(id, title)
    }

    #[test]
    fn test_begin_seeds_draft_from_task() {
        let mut slot = EditorSlot::new();
        let t = Task {
            description: Some("details".into()),
            due_date: Some("2024-05-01T09:30:00".into()),
            ..task(1, "Buy milk")
        };
        assert!(slot.begin(&t, &Utc).is_none());

        let draft = slot.draft().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, "details");
        assert_eq!(draft.due, DueDraft::new("2024-05-01", "09:30"));
    }

    #[test]
    fn test_begin_on_other_task_evicts_previous_draft() {
        let mut slot = EditorSlot::new();
        let a = task(1, "A");
        let b = task(2, "B");

        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().title = "A edited".into();

        let evicted = slot.begin(&b, &Utc).unwrap();
        assert_eq!(evicted.task_id, 1);
        assert_eq!(evicted.title, "A edited");
        assert!(slot.is_editing(2));
        assert!(!slot.is_editing(1));
        assert!(slot.draft_mut(1).is_none());
    }

    #[test]
    fn test_begin_twice_on_same_task_keeps_draft() {
        let mut slot = EditorSlot::new();
        let a = task(1, "A");
        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().title = "typed".into();
        assert!(slot.begin(&a, &Utc).is_none());
        assert_eq!(slot.draft().unwrap().title, "typed");
    }

    #[test]
    fn test_cancel_only_affects_owner() {
        let mut slot = EditorSlot::new();
        slot.begin(&task(1, "A"), &Utc);
        assert!(slot.cancel(2).is_none());
        assert!(slot.is_editing(1));
        assert!(slot.cancel(1).is_some());
        assert_eq!(slot.editing_id(), None);
    }

    #[test]
    fn test_commit_with_blank_title_keeps_slot() {
        let mut slot = EditorSlot::new();
        let a = task(1, "A");
        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().title = "   ".into();

        assert_eq!(slot.commit(&a), Err(DomainError::EmptyTitle));
        assert!(slot.is_editing(1));
        assert_eq!(slot.draft().unwrap().title, "   ");
    }

    #[test]
    fn test_commit_merges_all_fields_and_clears() {
        let mut slot = EditorSlot::new();
        let a = Task {
            due_date: Some("2024-01-01T08:00:00".into()),
            ..task(1, "A")
        };
        slot.begin(&a, &Utc);
        {
            let draft = slot.draft_mut(1).unwrap();
            draft.title = "  Renamed  ".into();
            draft.description = "now with notes".into();
            draft.due = DueDraft::new("2024-05-01", "");
        }

        let saved = slot.commit(&a).unwrap();
        assert_eq!(saved.title, "Renamed");
        assert_eq!(saved.description.as_deref(), Some("now with notes"));
        assert_eq!(saved.due_date.as_deref(), Some("2024-05-01T00:00:00"));
        assert_eq!(slot.editing_id(), None);
    }

    #[test]
    fn test_blank_description_clears_field() {
        let mut slot = EditorSlot::new();
        let a = Task {
            description: Some("old".into()),
            ..task(1, "A")
        };
        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().description = "   ".into();
        assert_eq!(slot.commit(&a).unwrap().description, None);

        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().description = " padded ".into();
        assert_eq!(slot.commit(&a).unwrap().description.as_deref(), Some(" padded "));
    }

    #[test]
    fn test_commit_clearing_date_removes_due() {
        let mut slot = EditorSlot::new();
        let a = Task {
            due_date: Some("2024-01-01T08:00:00".into()),
            ..task(1, "A")
        };
        slot.begin(&a, &Utc);
        slot.draft_mut(1).unwrap().due = DueDraft::new("", "09:30");
        assert_eq!(slot.commit(&a).unwrap().due_date, None);
    }

    #[test]
    fn test_commit_for_non_owner_is_rejected() {
        let mut slot = EditorSlot::new();
        slot.begin(&task(1, "A"), &Utc);
        assert_eq!(slot.commit(&task(2, "B")), Err(DomainError::NotEditing(2)));
        assert!(slot.is_editing(1));
    }
}
