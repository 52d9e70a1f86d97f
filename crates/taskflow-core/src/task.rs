//! Task Entity
//!
//! The backend owns tasks; the client only ever holds transient copies.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::due::parse_due;

/// Backend task identifier
pub type TaskId = u64;

/// Basic contract for anything listed in a feed
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Task priority; `Unset` travels as `null` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Unset,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Unset, Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unset => "unset",
        }
    }

    /// Unknown values fall back to `Unset`
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unset,
        }
    }

    /// Label shown next to a task; unset reads as "Normal"
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unset => "Normal",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Priority::Unset => serializer.serialize_none(),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Priority::parse_lossy).unwrap_or_default())
    }
}

/// A task as delivered by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Persisted as `YYYY-MM-DDTHH:MM:SS` (local wall clock) or RFC 3339
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: None,
            priority: Priority::Unset,
            is_completed: false,
        }
    }

    /// Copy of this task with `is_completed` inverted
    pub fn with_completion_flipped(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }

    /// Due timestamp in `tz`, if present and parseable
    pub fn due_at<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.due_date.as_deref().and_then(|raw| parse_due(raw, tz))
    }

    /// Whether the task falls on `date` in `tz`
    pub fn is_due_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> bool {
        self.due_at(tz).map(|due| due.date_naive() == date).unwrap_or(false)
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Priority,
}
