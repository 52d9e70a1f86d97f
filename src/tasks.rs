//! Task Queries and Mutations
//!
//! Fetching and mutating tasks on top of the store. Updates are applied to
//! the store optimistically; after every mutation every page already loaded
//! in both feeds is fetched again and stats refreshed, which also reverts a
//! failed change.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ApiResult};
use crate::auth::{use_auth, AuthContext};
use crate::context::use_app_context;
use crate::models::{NewTask, Task, TaskId};
use crate::notify::{use_notifier, Notifier};
use crate::store::{
    store_apply_update, store_begin_calendar, store_calendar_range, store_finish_calendar,
    store_peek_feed, store_read_feed, store_remove_task, store_set_analytics, store_set_stats,
    store_write_feed, use_task_store, FeedKind, TaskStore,
};

#[derive(Clone, Copy)]
pub struct TaskQueries {
    store: TaskStore,
    auth: AuthContext,
    notifier: Notifier,
    page_size: u32,
}

pub fn use_tasks() -> TaskQueries {
    TaskQueries {
        store: use_task_store(),
        auth: use_auth(),
        notifier: use_notifier(),
        page_size: use_app_context().config().api.page_size,
    }
}

impl TaskQueries {
    // ========================
    // Feed reads (tracked)
    // ========================

    pub fn items(&self, kind: FeedKind) -> Vec<Task> {
        store_read_feed(&self.store, kind, |feed| feed.items().to_vec())
    }

    pub fn len(&self, kind: FeedKind) -> usize {
        store_read_feed(&self.store, kind, |feed| feed.len())
    }

    pub fn is_loading(&self, kind: FeedKind) -> bool {
        store_read_feed(&self.store, kind, |feed| feed.is_loading())
    }

    /// Error of the first page; a failed next page keeps the list visible
    pub fn error(&self, kind: FeedKind) -> Option<String> {
        store_read_feed(&self.store, kind, |feed| {
            feed.error().filter(|_| feed.is_empty()).map(str::to_string)
        })
    }

    pub fn has_next_page(&self, kind: FeedKind) -> bool {
        store_read_feed(&self.store, kind, |feed| feed.has_next_page())
    }

    pub fn is_fetching_next(&self, kind: FeedKind) -> bool {
        store_read_feed(&self.store, kind, |feed| feed.is_fetching_next())
    }

    // ========================
    // Fetching
    // ========================

    /// Load page 1 unless the feed already has data
    pub fn ensure_loaded(&self, kind: FeedKind) {
        if !store_peek_feed(&self.store, kind, |feed| feed.is_loaded()) {
            let request = store_write_feed(&self.store, kind, |feed| feed.begin_refresh());
            self.run_page(kind, request);
        }
    }

    /// Fetch every loaded page again, in order, and swap them in together
    pub fn refetch(&self, kind: FeedKind) {
        let requests = store_write_feed(&self.store, kind, |feed| feed.begin_refresh_all());
        let this = *self;
        spawn_local(async move {
            let client = this.auth.client();
            let mut pages = Vec::with_capacity(requests.len());
            for request in &requests {
                match api::list_tasks(&client, kind.completed(), request.page, this.page_size).await {
                    Ok(page) => {
                        let last = page.next_page.is_none();
                        pages.push(page);
                        if last {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(?kind, page = request.page, %err, "failed reloading tasks");
                        this.auth.expire(&err);
                        store_write_feed(&this.store, kind, |feed| feed.fail(*request, err.to_string()));
                        return;
                    }
                }
            }
            tracing::debug!(?kind, pages = pages.len(), "reloaded task pages");
            store_write_feed(&this.store, kind, |feed| feed.complete_refresh(&requests, pages));
        });
    }

    /// Append the next page, if any and none is in flight
    pub fn fetch_next_page(&self, kind: FeedKind) {
        if let Some(request) = store_write_feed(&self.store, kind, |feed| feed.next_request()) {
            tracing::debug!(?kind, page = request.page, "fetching next page");
            self.run_page(kind, request);
        }
    }

    fn run_page(&self, kind: FeedKind, request: taskflow_core::PageRequest) {
        let this = *self;
        spawn_local(async move {
            let client = this.auth.client();
            match api::list_tasks(&client, kind.completed(), request.page, this.page_size).await {
                Ok(page) => {
                    store_write_feed(&this.store, kind, |feed| feed.complete(request, page));
                }
                Err(err) => {
                    tracing::warn!(?kind, page = request.page, %err, "failed loading tasks");
                    this.auth.expire(&err);
                    store_write_feed(&this.store, kind, |feed| feed.fail(request, err.to_string()));
                }
            }
        });
    }

    pub fn refresh_stats(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_stats(&this.auth.client()).await {
                Ok(stats) => store_set_stats(&this.store, stats),
                Err(err) => {
                    tracing::warn!(%err, "failed loading stats");
                    this.auth.expire(&err);
                }
            }
        });
    }

    /// Load tasks due within `[from, to]`; a range already shown is only
    /// refetched when `force` is set
    pub fn load_calendar(&self, from: NaiveDate, to: NaiveDate, force: bool) {
        let range = (from, to);
        if !store_begin_calendar(&self.store, range, force) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let result = api::list_tasks_between(&this.auth.client(), from, to).await;
            if let Err(err) = &result {
                tracing::warn!(%from, %to, %err, "failed loading calendar tasks");
                this.auth.expire(err);
            }
            store_finish_calendar(&this.store, range, result.ok());
        });
    }

    pub fn load_analytics(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_analytics(&this.auth.client()).await {
                Ok(snapshot) => store_set_analytics(&this.store, snapshot),
                Err(err) => {
                    tracing::warn!(%err, "failed loading analytics");
                    this.auth.expire(&err);
                    this.notifier.error(err.to_string());
                }
            }
        });
    }

    /// Refetch everything derived from the task list
    pub fn invalidate(&self) {
        self.refetch(FeedKind::Inbox);
        self.refetch(FeedKind::Completed);
        self.refresh_stats();
        if let Some((from, to)) = store_calendar_range(&self.store) {
            self.load_calendar(from, to, true);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Create a task. The caller reports the outcome.
    pub async fn add_task(&self, task: NewTask) -> ApiResult<Task> {
        let result = api::create_task(&self.auth.client(), &task).await;
        match &result {
            Ok(created) => tracing::info!(task = created.id, "task created"),
            Err(err) => self.report_failure("create", err, None),
        }
        self.invalidate();
        result
    }

    /// Persist an edited or toggled task, showing it immediately
    pub fn update_task(&self, task: Task) {
        store_apply_update(&self.store, task.clone());
        let this = *self;
        spawn_local(async move {
            if let Err(err) = api::update_task(&this.auth.client(), &task).await {
                this.report_failure("update", &err, Some("Failed to update task."));
            }
            this.invalidate();
        });
    }

    pub fn delete_task(&self, id: TaskId) {
        store_remove_task(&self.store, id);
        let this = *self;
        spawn_local(async move {
            match api::delete_task(&this.auth.client(), id).await {
                Ok(()) => this.notifier.success("Task deleted"),
                Err(err) => this.report_failure("delete", &err, Some("Failed to delete task.")),
            }
            this.invalidate();
        });
    }

    fn report_failure(&self, action: &str, err: &ApiError, toast: Option<&str>) {
        tracing::error!(action, %err, "task mutation failed");
        if err.is_unauthorized() {
            self.auth.expire(err);
        } else if let Some(message) = toast {
            self.notifier.error(message);
        }
    }
}
