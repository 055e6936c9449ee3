//! Task model: one concrete unit of cohort-prep work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::add_days;

/// Build the registry identifier for a (cohort, template key, due date)
/// triple.
///
/// The exact format is load-bearing: persisted registries key tasks by
/// this string, so it must be reproduced byte-for-byte. A task that moves
/// to a new due date gets a new identifier.
pub fn task_id(cohort_id: &str, key: &str, due_date: NaiveDate) -> String {
    format!("{}:{}:{}", cohort_id, key, due_date.format("%Y-%m-%d"))
}

/// Display urgency of a task relative to a reference day. Presentation
/// only; nothing in the pipeline reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Not done and due before the reference day.
    Overdue,
    /// Not done and due within the next three days, reference day included.
    Imminent,
    Normal,
}

/// Serialized field names match the v1 persisted blob (camelCase, ISO
/// dates, epoch-millisecond timestamps), so existing registries load
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub cohort_id: String,
    /// Cohort display name, copied at creation.
    pub cohort_name: String,
    /// Catalog key this task was generated from.
    pub key: String,
    /// Template title, copied at creation.
    pub title: String,
    pub due_date: NaiveDate,
    /// The originally computed date (anchor + offset). Assigned once at
    /// creation and never changed, however far `due_date` drifts.
    pub baseline_due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Cached roster display name for `assignee_id`. Refreshed by the
    /// reconciler pass; may be stale between roster changes and the next
    /// run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    pub done: bool,
    /// Epoch milliseconds of the last mutation. Informational only, never
    /// used for conflict resolution.
    pub updated_at: i64,
}

impl Task {
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        if self.done {
            return DueStatus::Normal;
        }
        if self.due_date < today {
            DueStatus::Overdue
        } else if self.due_date <= add_days(today, 3) {
            DueStatus::Imminent
        } else {
            DueStatus::Normal
        }
    }
}
