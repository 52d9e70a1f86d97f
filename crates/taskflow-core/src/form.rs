//! Creation Form
//!
//! Collapsed -> Expanded -> Submitting -> reset. Expansion happens on focus
//! or via the leading icon; collapsing is manual only.

use crate::due::DueDraft;
use crate::error::{DomainError, DomainResult};
use crate::task::{NewTask, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Collapsed,
    Expanded,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
    pub due: DueDraft,
    pub priority: Priority,
    expanded: bool,
    focused: bool,
    submitting: bool,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.expanded {
            FormPhase::Expanded
        } else {
            FormPhase::Collapsed
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Card gets the raised look while expanded or focused
    pub fn is_highlighted(&self) -> bool {
        self.expanded || self.focused
    }

    /// Title field focused: expands the form
    pub fn focus(&mut self) {
        self.focused = true;
        self.expanded = true;
    }

    /// Blur never collapses
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Leading icon clicked
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.title.trim().is_empty()
    }

    /// Enter in the title or description field attempts a submit
    pub fn wants_submit(key: &str) -> bool {
        key == "Enter"
    }

    /// Validate and enter `Submitting`, returning the payload to send.
    /// A blank title leaves the form untouched.
    pub fn begin_submit(&mut self) -> DomainResult<NewTask> {
        if self.submitting {
            return Err(DomainError::SubmitInProgress);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        let due_date = self.due.compose()?;
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let payload = NewTask {
            title: title.to_string(),
            description,
            due_date,
            priority: self.priority,
        };
        self.submitting = true;
        Ok(payload)
    }

    /// Backend accepted the task: back to the initial empty form
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Backend rejected the task: fields stay for a manual retry
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Cancel button
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_expands_and_blur_keeps_expanded() {
        let mut form = CreateForm::new();
        assert_eq!(form.phase(), FormPhase::Collapsed);
        form.focus();
        assert_eq!(form.phase(), FormPhase::Expanded);
        form.blur();
        assert_eq!(form.phase(), FormPhase::Expanded);
        assert!(form.is_highlighted());
    }

    #[test]
    fn test_icon_toggles_expansion() {
        let mut form = CreateForm::new();
        form.toggle_expanded();
        assert!(form.is_expanded());
        form.toggle_expanded();
        assert!(!form.is_expanded());
    }

    #[test]
    fn test_blank_title_blocks_submit() {
        let mut form = CreateForm::new();
        form.title = "  ".into();
        assert!(!form.can_submit());
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, DomainError::EmptyTitle);
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert_eq!(form.phase(), FormPhase::Collapsed);
    }

    #[test]
    fn test_second_submit_is_dropped_quietly() {
        let mut form = CreateForm::new();
        form.title = "Pay rent".into();
        assert!(form.begin_submit().is_ok());
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err, DomainError::SubmitInProgress);
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_submit_payload_and_reset_on_success() {
        let mut form = CreateForm::new();
        form.focus();
        form.title = " Pay rent ".into();
        form.description = "before the 5th".into();
        form.due = DueDraft::new("2024-05-01", "09:30");
        form.priority = Priority::High;

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.title, "Pay rent");
        assert_eq!(payload.description.as_deref(), Some("before the 5th"));
        assert_eq!(payload.due_date.as_deref(), Some("2024-05-01T09:30:00"));
        assert_eq!(payload.priority, Priority::High);
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(!form.can_submit());

        form.submit_succeeded();
        assert_eq!(form, CreateForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = CreateForm::new();
        form.focus();
        form.title = "Pay rent".into();
        form.begin_submit().unwrap();
        form.submit_failed();

        assert_eq!(form.title, "Pay rent");
        assert_eq!(form.phase(), FormPhase::Expanded);
        assert!(form.can_submit());
    }

    #[test]
    fn test_enter_wants_submit() {
        assert!(CreateForm::wants_submit("Enter"));
        assert!(!CreateForm::wants_submit("Tab"));
    }
}
