//! Task endpoints

use chrono::NaiveDate;

use super::{fetch_empty, fetch_json, ApiClient, ApiResult};
use crate::models::{NewTask, Page, Task, TaskId};

/// One page of the completed or incomplete feed
pub async fn list_tasks(client: &ApiClient, completed: bool, page: u32, limit: u32) -> ApiResult<Page<Task>> {
    tracing::debug!(completed, page, limit, "fetching task page");
    let request = client.get("tasks").query(&[
        ("completed", completed.to_string()),
        ("page", page.to_string()),
        ("limit", limit.to_string()),
    ]);
    fetch_json(request).await
}

/// All tasks due within `[from, to]`, for the calendar
pub async fn list_tasks_between(client: &ApiClient, from: NaiveDate, to: NaiveDate) -> ApiResult<Vec<Task>> {
    let request = client.get("tasks").query(&[
        ("from", from.format("%Y-%m-%d").to_string()),
        ("to", to.format("%Y-%m-%d").to_string()),
    ]);
    fetch_json(request).await
}

pub async fn create_task(client: &ApiClient, task: &NewTask) -> ApiResult<Task> {
    fetch_json(client.post("tasks").json(task)).await
}

pub async fn update_task(client: &ApiClient, task: &Task) -> ApiResult<Task> {
    fetch_json(client.put(&format!("tasks/{}", task.id)).json(task)).await
}

pub async fn delete_task(client: &ApiClient, id: TaskId) -> ApiResult<()> {
    fetch_empty(client.delete(&format!("tasks/{}", id))).await
}
