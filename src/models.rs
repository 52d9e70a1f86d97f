//! Frontend Models
//!
//! Data structures exchanged with the TaskFlow backend. Task types come from
//! the core crate; the rest are view payloads only the UI needs.

use serde::{Deserialize, Serialize};

pub use taskflow_core::{NewTask, Page, Task, TaskId};

/// Signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Name shown in the navbar, falling back to the email
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Single upper-case letter for the avatar bubble
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Quick stats shown next to the calendar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub overdue: u32,
    #[serde(alias = "dueToday")]
    pub due_today: u32,
}

impl TaskStats {
    /// Completed share in whole percent
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((f64::from(self.completed) / f64::from(self.total)) * 100.0).round() as u32
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSplit {
    pub completed: u32,
    pub uncompleted: u32,
}

impl StatusSplit {
    /// Completed and uncompleted shares in percent, `(0, 0)` when empty
    pub fn percentages(&self) -> (f64, f64) {
        let total = f64::from(self.completed + self.uncompleted);
        if total == 0.0 {
            return (0.0, 0.0);
        }
        (
            f64::from(self.completed) / total * 100.0,
            f64::from(self.uncompleted) / total * 100.0,
        )
    }
}

/// One labelled count in a series (date or month)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(alias = "date", alias = "month")]
    pub label: String,
    pub count: u32,
}

/// Response of `GET /tasks/analytics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    pub status: StatusSplit,
    pub average_per_day: f64,
    pub growth: Vec<SeriesPoint>,
    pub deadlines: Vec<SeriesPoint>,
    pub task_per_month: Vec<SeriesPoint>,
}

impl AnalyticsSnapshot {
    /// Formatted "Avg. Tasks / Day" card value
    pub fn average_label(&self) -> String {
        format!("{:.2}", self.average_per_day)
    }
}

/// Bar widths in percent of the largest count
pub fn bar_ratios(points: &[SeriesPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0);
    points
        .iter()
        .map(|p| {
            if max == 0 {
                0.0
            } else {
                f64::from(p.count) / f64::from(max) * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_wire_shape() {
        let raw = r#"{
            "status": {"completed": 3, "uncompleted": 1},
            "average_per_day": 1.456,
            "growth": [{"date": "2024-05-01", "count": 2}],
            "deadlines": [],
            "task_per_month": [{"month": "May", "count": 4}]
        }"#;
        let snapshot: AnalyticsSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.status.completed, 3);
        assert_eq!(snapshot.growth[0].label, "2024-05-01");
        assert_eq!(snapshot.task_per_month[0].label, "May");
        assert_eq!(snapshot.average_label(), "1.46");
        assert_eq!(snapshot.status.percentages(), (75.0, 25.0));
    }

    #[test]
    fn test_bar_ratios_relative_to_max() {
        let points = vec![
            SeriesPoint { label: "Apr".into(), count: 2 },
            SeriesPoint { label: "May".into(), count: 8 },
        ];
        assert_eq!(bar_ratios(&points), vec![25.0, 100.0]);
        assert_eq!(bar_ratios(&[SeriesPoint { label: "x".into(), count: 0 }]), vec![0.0]);
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user = User { id: 1, email: "ada@example.com".into(), name: None };
        assert_eq!(user.display_name(), "ada@example.com");
        assert_eq!(user.initial(), "A");
        let named = User { name: Some("grace".into()), ..user };
        assert_eq!(named.display_name(), "grace");
    }

    #[test]
    fn test_stats_defaults_and_rate() {
        let stats: TaskStats = serde_json::from_str(r#"{"total": 4, "completed": 1, "dueToday": 2}"#).unwrap();
        assert_eq!(stats.due_today, 2);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completion_rate(), 25);
        assert_eq!(TaskStats::default().completion_rate(), 0);
    }
}
