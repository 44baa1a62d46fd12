//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted by the store.
//! - Own title normalization and validation shared by create/edit paths.
//! - Provide the ISO 8601 codec used for `dueDate`/`createdAt`.
//!
//! # Invariants
//! - `id` is opaque, assigned once at creation and never reused.
//! - `title` is non-empty after trimming whenever it passes `validate()`.
//! - `created_at` is set once at creation and never changed by core code.

use crate::derivation::view::ViewOptionError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Opaque task identifier.
///
/// Kept as a string alias because persisted collections may carry ids
/// produced by older writers (e.g. millisecond timestamps).
pub type TaskId = String;

/// Category label assigned when a draft does not specify one.
pub const DEFAULT_CATEGORY: &str = "default";

/// Task priority. The set is closed; there is no implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight: high=3, medium=2, low=1.
    pub fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Swatch color used by calendar markers.
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#FF3B30",
            Self::Medium => "#FF9500",
            Self::Low => "#34C759",
        }
    }

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Matching on wire names is exact.
impl FromStr for Priority {
    type Err = ViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ViewOptionError::new("priority", other)),
        }
    }
}

/// Validation failures raised before any storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming surrounding whitespace.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Task input for creation: every field except `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub tags: Vec<String>,
    pub category: String,
    pub due_date: DateTime<Utc>,
}

impl TaskDraft {
    /// Creates a pending draft with empty description/tags and the default
    /// category.
    pub fn new(title: impl Into<String>, priority: Priority, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
            completed: false,
            tags: Vec::new(),
            category: DEFAULT_CATEGORY.to_string(),
            due_date,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Trims the title in place and rejects it when nothing remains.
    pub fn normalize(&mut self) -> Result<(), TaskValidationError> {
        self.title = normalize_title(&self.title)?;
        Ok(())
    }
}

/// Canonical persisted task record.
///
/// Field names on the wire follow the shared collection layout
/// (`dueDate`, `createdAt`), so older payloads stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(with = "iso8601")]
    pub due_date: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a draft with store-assigned identity fields.
    pub fn from_draft(id: TaskId, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            completed: draft.completed,
            tags: draft.tags,
            category: draft.category,
            due_date: draft.due_date,
            created_at,
        }
    }

    /// Trims the title in place and rejects it when nothing remains.
    pub fn normalize(&mut self) -> Result<(), TaskValidationError> {
        self.title = normalize_title(&self.title)?;
        Ok(())
    }

    /// Validates the record without modifying it.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        normalize_title(&self.title).map(|_| ())
    }

    /// UTC calendar day of `due_date`. All day-based views key on this.
    pub fn due_day(&self) -> NaiveDate {
        self.due_date.date_naive()
    }
}

fn normalize_title(title: &str) -> Result<String, TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a persisted timestamp into UTC.
///
/// Accepts RFC 3339 with any offset, a naive date-time (read as UTC), or a
/// bare calendar date (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

mod iso8601 {
    use super::{format_timestamp, parse_timestamp};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO 8601 timestamp `{raw}`")))
    }
}
