//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use taskflow_core::{EditorSlot, TaskId};

use crate::config::AppConfig;

/// Top-level screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Tasks,
    Calendar,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Tasks, Page::Calendar, Page::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Tasks => "My Tasks",
            Page::Calendar => "Calendar",
            Page::Analytics => "Analytics",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
    /// Trigger to reload task data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload task data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: AppConfig,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Trigger a reload of task data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// The single-editor slot shared by every task item in one list section.
/// At most one task is in edit mode; starting an edit elsewhere discards the
/// current draft.
#[derive(Clone, Copy)]
pub struct TaskEditContext {
    slot: RwSignal<EditorSlot>,
}

impl TaskEditContext {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(EditorSlot::new()),
        }
    }

    pub fn slot(&self) -> RwSignal<EditorSlot> {
        self.slot
    }

    /// Drop the draft of `id` if it still owns the slot. Safe to call from
    /// cleanup after the slot itself is gone.
    pub fn release(&self, id: TaskId) {
        self.slot.try_update(|slot| slot.release(id));
    }
}

impl Default for TaskEditContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_task_edit() -> TaskEditContext {
    expect_context::<TaskEditContext>()
}
