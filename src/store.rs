//! Task State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The two task
//! feeds, quick stats, calendar range and analytics snapshot live here so
//! every page reads the same data.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;
use taskflow_core::Feed;

use crate::models::{AnalyticsSnapshot, Task, TaskId, TaskStats};

/// Which paged feed a view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Incomplete tasks
    Inbox,
    Completed,
}

impl FeedKind {
    pub fn completed(&self) -> bool {
        matches!(self, FeedKind::Completed)
    }

    /// The feed a task belongs in
    pub fn of(task: &Task) -> Self {
        if task.is_completed {
            FeedKind::Completed
        } else {
            FeedKind::Inbox
        }
    }

    pub fn other(&self) -> Self {
        match self {
            FeedKind::Inbox => FeedKind::Completed,
            FeedKind::Completed => FeedKind::Inbox,
        }
    }
}

/// Global task state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    pub inbox: Feed<Task>,
    pub completed: Feed<Task>,
    pub stats: Option<TaskStats>,
    /// Tasks of the visible calendar range
    pub calendar: Vec<Task>,
    pub calendar_range: Option<(NaiveDate, NaiveDate)>,
    pub calendar_loading: bool,
    pub analytics: Option<AnalyticsSnapshot>,
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read a feed, tracking it
pub fn store_read_feed<R>(store: &TaskStore, kind: FeedKind, f: impl FnOnce(&Feed<Task>) -> R) -> R {
    match kind {
        FeedKind::Inbox => f(&*store.inbox().read()),
        FeedKind::Completed => f(&*store.completed().read()),
    }
}

/// Read a feed without tracking
pub fn store_peek_feed<R>(store: &TaskStore, kind: FeedKind, f: impl FnOnce(&Feed<Task>) -> R) -> R {
    match kind {
        FeedKind::Inbox => f(&*store.inbox().read_untracked()),
        FeedKind::Completed => f(&*store.completed().read_untracked()),
    }
}

/// Mutate a feed, notifying readers
pub fn store_write_feed<R>(store: &TaskStore, kind: FeedKind, f: impl FnOnce(&mut Feed<Task>) -> R) -> R {
    match kind {
        FeedKind::Inbox => f(&mut *store.inbox().write()),
        FeedKind::Completed => f(&mut *store.completed().write()),
    }
}

/// Apply an edited or toggled task before the server confirms it. A task
/// whose completion flipped moves to the top of the other feed.
pub fn store_apply_update(store: &TaskStore, task: Task) {
    let target = FeedKind::of(&task);
    let moved = store_write_feed(store, target.other(), |feed| feed.remove(task.id)).is_some();
    if moved {
        store_write_feed(store, target, |feed| feed.prepend(task.clone()));
    } else {
        store_write_feed(store, target, |feed| feed.replace(task.clone()));
    }
    store_replace_calendar_task(store, task);
}

/// Remove a task from every view
pub fn store_remove_task(store: &TaskStore, id: TaskId) {
    store_write_feed(store, FeedKind::Inbox, |feed| feed.remove(id));
    store_write_feed(store, FeedKind::Completed, |feed| feed.remove(id));
    store.calendar().write().retain(|task| task.id != id);
}

pub fn store_replace_calendar_task(store: &TaskStore, updated: Task) {
    if let Some(task) = store.calendar().write().iter_mut().find(|task| task.id == updated.id) {
        *task = updated;
    }
}

pub fn store_set_stats(store: &TaskStore, stats: TaskStats) {
    store.stats().set(Some(stats));
}

pub fn store_stats(store: &TaskStore) -> Option<TaskStats> {
    store.stats().get()
}

pub fn store_set_analytics(store: &TaskStore, snapshot: AnalyticsSnapshot) {
    store.analytics().set(Some(snapshot));
}

pub fn store_analytics(store: &TaskStore) -> Option<AnalyticsSnapshot> {
    store.analytics().get()
}

/// Record the range being fetched; returns `false` if it is already loaded
pub fn store_begin_calendar(store: &TaskStore, range: (NaiveDate, NaiveDate), force: bool) -> bool {
    if !force && store.calendar_range().get_untracked() == Some(range) {
        return false;
    }
    store.calendar_range().set(Some(range));
    store.calendar_loading().set(true);
    true
}

/// Store fetched calendar tasks unless the visible range moved on meanwhile
pub fn store_finish_calendar(store: &TaskStore, range: (NaiveDate, NaiveDate), tasks: Option<Vec<Task>>) {
    if store.calendar_range().get_untracked() != Some(range) {
        return;
    }
    if let Some(tasks) = tasks {
        store.calendar().set(tasks);
    }
    store.calendar_loading().set(false);
}

pub fn store_calendar_tasks(store: &TaskStore) -> Vec<Task> {
    store.calendar().get()
}

pub fn store_calendar_loading(store: &TaskStore) -> bool {
    store.calendar_loading().get()
}

pub fn store_calendar_range(store: &TaskStore) -> Option<(NaiveDate, NaiveDate)> {
    store.calendar_range().get_untracked()
}

/// Clear everything on sign-out
pub fn store_reset(store: &TaskStore) {
    store.set(TaskState::default());
}
