//! TaskFlow Core
//!
//! Client-side state for the task views, kept free of any rendering or
//! browser dependency so it can be exercised on the host:
//! - task: the Task entity and its creation payload
//! - due: splitting/composing due dates into date + time drafts
//! - editing: the shared single-editor slot and edit drafts
//! - item: per-task view/edit/toggle lifecycle
//! - form: the creation form
//! - feed: paged task feeds merged into one ordered sequence
//! - calendar: day grids and per-day cell projection

mod calendar;
mod due;
mod editing;
mod error;
mod feed;
mod form;
mod item;
mod liveness;
mod task;

pub use calendar::{
    build_cells, month_days, shift_month, shift_week, tasks_on, week_days, CalendarDay, CellRing,
    DayCell, WeekStart, PREVIEW_LIMIT,
};
pub use due::{parse_due, DueDraft, DUE_FORMAT};
pub use editing::{EditDraft, EditorSlot};
pub use error::{DomainError, DomainResult};
pub use feed::{Feed, FeedStatus, Page, PageRequest};
pub use form::{CreateForm, FormPhase};
pub use item::{Accordion, ItemMachine, ItemPhase, KeyIntent, PendingToggle};
pub use liveness::Liveness;
pub use task::{Entity, NewTask, Priority, Task, TaskId};
