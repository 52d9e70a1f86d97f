//! Stats and analytics endpoints

use super::{fetch_json, ApiClient, ApiResult};
use crate::models::{AnalyticsSnapshot, TaskStats};

pub async fn fetch_stats(client: &ApiClient) -> ApiResult<TaskStats> {
    fetch_json(client.get("tasks/stats")).await
}

pub async fn fetch_analytics(client: &ApiClient) -> ApiResult<AnalyticsSnapshot> {
    fetch_json(client.get("tasks/analytics")).await
}
