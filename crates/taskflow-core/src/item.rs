//! Task Item Lifecycle
//!
//! Per-item state machine: Viewing, Editing, Toggling and Saving. Edit mode
//! itself lives in the shared [`EditorSlot`]; the machine only tracks the
//! transient phases owned by one item.

use chrono::TimeZone;

use crate::editing::{EditDraft, EditorSlot};
use crate::error::{DomainError, DomainResult};
use crate::liveness::Liveness;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Viewing,
    Editing,
    /// Completion animation running, update not yet sent
    Toggling,
    /// Update callback in progress
    Saving,
}

/// Keyboard shortcuts understood while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Save,
    Cancel,
}

impl KeyIntent {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(KeyIntent::Save),
            "Escape" | "Esc" => Some(KeyIntent::Cancel),
            _ => None,
        }
    }
}

/// A completion toggle waiting for its animation delay.
///
/// The flipped task is computed when the toggle starts; committing after the
/// owner is gone yields nothing.
#[derive(Debug, Clone)]
#[must_use = "a pending toggle does nothing until committed"]
pub struct PendingToggle {
    updated: Task,
    owner: Liveness,
}

impl PendingToggle {
    pub fn task_id(&self) -> TaskId {
        self.updated.id
    }

    /// The task to send, or `None` if the item has been torn down
    pub fn commit(self) -> Option<Task> {
        if self.owner.is_alive() {
            Some(self.updated)
        } else {
            tracing::debug!(task = self.updated.id, "item gone before toggle delay elapsed; dropping update");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMachine {
    task_id: TaskId,
    toggling: bool,
    saving: bool,
    mirror: bool,
}

impl ItemMachine {
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            toggling: false,
            saving: false,
            mirror: false,
        }
    }

    /// Machine for a repeated row of a task already shown higher up the
    /// list. A mirror never enters edit mode and never touches the slot, so
    /// the draft belongs to the first row only.
    pub fn mirror(task_id: TaskId) -> Self {
        Self {
            mirror: true,
            ..Self::new(task_id)
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn is_mirror(&self) -> bool {
        self.mirror
    }

    pub fn phase(&self, slot: &EditorSlot) -> ItemPhase {
        if self.saving {
            ItemPhase::Saving
        } else if self.toggling {
            ItemPhase::Toggling
        } else if !self.mirror && slot.is_editing(self.task_id) {
            ItemPhase::Editing
        } else {
            ItemPhase::Viewing
        }
    }

    /// Viewing -> Editing. Ignored while toggling or saving.
    /// Returns the draft evicted from another item, if any.
    pub fn request_edit<Tz: TimeZone>(&self, slot: &mut EditorSlot, task: &Task, tz: &Tz) -> Option<EditDraft>
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.toggling || self.saving || self.mirror {
            return None;
        }
        slot.begin(task, tz)
    }

    /// Editing -> Viewing, draft discarded. Covers the cancel button, Escape
    /// and pointer-down outside the item.
    pub fn cancel(&self, slot: &mut EditorSlot) -> bool {
        !self.mirror && slot.cancel(self.task_id).is_some()
    }

    /// The item is being torn down: give up the slot if this row holds it
    pub fn release(&self, slot: &mut EditorSlot) -> bool {
        !self.mirror && slot.release(self.task_id)
    }

    /// Editing -> Saving. On success the slot is cleared and the merged task
    /// returned for the update callback; call [`finish_save`](Self::finish_save)
    /// once the callback has run. On failure nothing changes.
    pub fn save(&mut self, slot: &mut EditorSlot, task: &Task) -> DomainResult<Task> {
        if self.mirror || !slot.is_editing(self.task_id) || task.id != self.task_id {
            return Err(DomainError::NotEditing(task.id));
        }
        let merged = slot.commit(task)?;
        self.saving = true;
        Ok(merged)
    }

    /// Saving -> Viewing
    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    /// Viewing -> Toggling. Ignored while editing, saving, or when a toggle
    /// is already running.
    pub fn begin_toggle(&mut self, slot: &EditorSlot, task: &Task, owner: &Liveness) -> Option<PendingToggle> {
        if self.toggling || self.saving || slot.is_editing(self.task_id) {
            return None;
        }
        self.toggling = true;
        Some(PendingToggle {
            updated: task.with_completion_flipped(),
            owner: owner.clone(),
        })
    }

    /// Toggling -> Viewing
    pub fn finish_toggle(&mut self) {
        self.toggling = false;
    }
}

/// Collapsible section header state. Starts collapsed.
///
/// Collapsing unmounts the wrapped list, so any edit in progress inside it is
/// lost without warning when the items release the editor slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: bool,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip and return the new state
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_key_intents() {
        assert_eq!(KeyIntent::from_key("Enter"), Some(KeyIntent::Save));
        assert_eq!(KeyIntent::from_key("Escape"), Some(KeyIntent::Cancel));
        assert_eq!(KeyIntent::from_key("a"), None);
    }

    #[test]
    fn test_initial_phase_is_viewing() {
        let slot = EditorSlot::new();
        assert_eq!(ItemMachine::new(1).phase(&slot), ItemPhase::Viewing);
    }

    #[test]
    fn test_repeated_row_leaves_draft_to_first_row() {
        let mut slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let first = ItemMachine::new(1);
        let mut repeat = ItemMachine::mirror(1);

        assert!(repeat.request_edit(&mut slot, &task, &Utc).is_none());
        assert!(!slot.is_editing(1));

        first.request_edit(&mut slot, &task, &Utc);
        assert_eq!(first.phase(&slot), ItemPhase::Editing);
        assert_eq!(repeat.phase(&slot), ItemPhase::Viewing);

        assert!(!repeat.cancel(&mut slot));
        assert_eq!(repeat.save(&mut slot, &task), Err(DomainError::NotEditing(1)));
        assert!(!repeat.release(&mut slot));
        assert!(slot.is_editing(1));

        assert!(first.release(&mut slot));
        assert!(!slot.is_editing(1));
    }

    #[test]
    fn test_edit_then_cancel() {
        let mut slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let item = ItemMachine::new(1);

        item.request_edit(&mut slot, &task, &Utc);
        assert_eq!(item.phase(&slot), ItemPhase::Editing);
        assert!(item.cancel(&mut slot));
        assert_eq!(item.phase(&slot), ItemPhase::Viewing);
        assert!(!item.cancel(&mut slot));
    }

    #[test]
    fn test_save_passes_through_saving() {
        let mut slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let mut item = ItemMachine::new(1);

        item.request_edit(&mut slot, &task, &Utc);
        slot.draft_mut(1).unwrap().title = "B".into();
        let saved = item.save(&mut slot, &task).unwrap();
        assert_eq!(saved.title, "B");
        assert_eq!(item.phase(&slot), ItemPhase::Saving);
        item.finish_save();
        assert_eq!(item.phase(&slot), ItemPhase::Viewing);
    }

    #[test]
    fn test_save_without_edit_is_rejected() {
        let mut slot = EditorSlot::new();
        let mut item = ItemMachine::new(1);
        assert_eq!(item.save(&mut slot, &Task::new(1, "A")), Err(DomainError::NotEditing(1)));
        assert_eq!(item.phase(&slot), ItemPhase::Viewing);
    }

    #[test]
    fn test_toggle_ignored_while_editing() {
        let mut slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let mut item = ItemMachine::new(1);
        let owner = Liveness::new();

        item.request_edit(&mut slot, &task, &Utc);
        assert!(item.begin_toggle(&slot, &task, &owner).is_none());
        assert_eq!(item.phase(&slot), ItemPhase::Editing);
    }

    #[test]
    fn test_toggle_flips_value_from_start() {
        let slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let mut item = ItemMachine::new(1);
        let owner = Liveness::new();

        let pending = item.begin_toggle(&slot, &task, &owner).unwrap();
        assert_eq!(item.phase(&slot), ItemPhase::Toggling);
        // second trigger during the animation is swallowed
        assert!(item.begin_toggle(&slot, &task, &owner).is_none());

        let updated = pending.commit().unwrap();
        assert!(updated.is_completed);
        item.finish_toggle();
        assert_eq!(item.phase(&slot), ItemPhase::Viewing);
    }

    #[test]
    fn test_edit_request_ignored_while_toggling() {
        let mut slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let mut item = ItemMachine::new(1);
        let _pending = item.begin_toggle(&slot, &task, &Liveness::new()).unwrap();
        item.request_edit(&mut slot, &task, &Utc);
        assert_eq!(slot.editing_id(), None);
    }

    #[test]
    fn test_pending_toggle_dropped_after_teardown() {
        let slot = EditorSlot::new();
        let task = Task::new(1, "A");
        let mut item = ItemMachine::new(1);
        let owner = Liveness::new();

        let pending = item.begin_toggle(&slot, &task, &owner).unwrap();
        owner.end();
        assert!(pending.commit().is_none());
    }

    #[test]
    fn test_accordion_starts_collapsed() {
        let mut accordion = Accordion::new();
        assert!(!accordion.is_expanded());
        assert!(accordion.toggle());
        assert!(!accordion.toggle());
    }
}
