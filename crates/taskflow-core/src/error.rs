//! Domain Errors
//!
//! Client-side validation failures. None of them is fatal: the action is
//! blocked and the caller's state stays as it was.

use crate::task::TaskId;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trimmed title is empty
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid due date: {0}")]
    InvalidDate(String),

    #[error("Invalid due time: {0}")]
    InvalidTime(String),

    #[error("A submission is already in progress")]
    SubmitInProgress,

    /// Save requested for a task that does not hold the editor slot
    #[error("Task {0} is not being edited")]
    NotEditing(TaskId),
}

impl DomainError {
    /// Validation failures the user can fix; the others mean the action is
    /// already running or no longer applies and are dropped silently.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyTitle | DomainError::InvalidDate(_) | DomainError::InvalidTime(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_user_facing() {
        assert!(DomainError::EmptyTitle.is_user_facing());
        assert!(DomainError::InvalidDate("2024-13-01".into()).is_user_facing());
        assert!(DomainError::InvalidTime("25:00".into()).is_user_facing());
        assert!(!DomainError::SubmitInProgress.is_user_facing());
        assert!(!DomainError::NotEditing(3).is_user_facing());
    }
}
