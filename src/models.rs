//! Frontend Models
//!
//! Data structures matching the task API's JSON payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted title length, matching the backend column constraint.
pub const MAX_TITLE_LEN: usize = 255;
/// Maximum accepted description length.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Task data structure (matches backend)
///
/// `id` and the timestamps are assigned by the server and absent on drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a draft task from raw form input. Both fields are trimmed;
    /// an empty description becomes `None`.
    pub fn draft(title: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            id: None,
            title: title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            completed: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Client-side validation, checked before any create/update request.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Task title is required".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(format!("Task title must be at most {MAX_TITLE_LEN} characters"));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(format!(
                    "Task description must be at most {MAX_DESCRIPTION_LEN} characters"
                ));
            }
        }
        Ok(())
    }
}

/// Aggregate counts from the stats endpoint (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
}

impl TaskStats {
    /// The stats endpoint counts completed and pending separately;
    /// they must add up to the total.
    pub fn is_consistent(&self) -> bool {
        self.total_tasks == self.completed_tasks + self.pending_tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_title_and_description() {
        let task = Task::draft("  Buy milk  ", "  two bottles  ");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description.as_deref(), Some("two bottles"));
        assert!(!task.completed);
        assert!(task.id.is_none());
    }

    #[test]
    fn draft_drops_empty_description() {
        let task = Task::draft("Buy milk", "   ");
        assert_eq!(task.description, None);
    }

    #[test]
    fn blank_title_fails_validation() {
        assert!(Task::draft("", "").validate().is_err());
        assert!(Task::draft("   \t ", "whitespace only").validate().is_err());
    }

    #[test]
    fn overlong_fields_fail_validation() {
        let long_title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(Task::draft(&long_title, "").validate().is_err());

        let long_description = "y".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(Task::draft("ok", &long_description).validate().is_err());

        let at_limit = Task::draft(&"x".repeat(MAX_TITLE_LEN), &"y".repeat(MAX_DESCRIPTION_LEN));
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn draft_wire_format_uses_camel_case_and_omits_unset_fields() {
        let task = Task::draft("Buy milk", "");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], false);
        // server-assigned fields never appear in a draft body
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn persisted_task_parses_from_camel_case() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"A","description":null,"completed":true,
                "createdAt":"2024-03-01T09:30:00Z","updatedAt":"2024-03-02T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.id, Some(7));
        assert!(task.completed);
        assert!(task.created_at.is_some());
        assert_ne!(task.created_at, task.updated_at);
    }

    #[test]
    fn stats_consistency() {
        let stats = TaskStats { total_tasks: 2, completed_tasks: 1, pending_tasks: 1 };
        assert!(stats.is_consistent());

        let skewed = TaskStats { total_tasks: 3, completed_tasks: 1, pending_tasks: 1 };
        assert!(!skewed.is_consistent());
    }
}
