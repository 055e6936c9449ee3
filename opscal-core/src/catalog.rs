//! The recurring-task catalog.
//!
//! Each template binds a stable key, a title, and a signed day offset from
//! a cohort's week-1 start (negative = days before). The catalog is fixed
//! at build time, but the generator takes it as a plain slice so tests can
//! substitute a smaller one.

use serde::{Deserialize, Serialize};

/// One kind of recurring cohort-prep work. Concrete per-cohort instances
/// are [`crate::Task`]s; templates only describe them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    /// Stable key, unique within the catalog. Task identifiers embed it,
    /// so it must survive title edits.
    pub key: String,
    pub title: String,
    pub offset_days: i64,
    pub default_assignee_id: Option<String>,
}

impl TaskTemplate {
    pub fn new(key: impl Into<String>, title: impl Into<String>, offset_days: i64) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            offset_days,
            default_assignee_id: None,
        }
    }

    pub fn with_default_assignee(mut self, id: impl Into<String>) -> Self {
        self.default_assignee_id = Some(id.into());
        self
    }
}

/// The shipped operational catalog: everything that must happen before a
/// cohort's first week, from six weeks of promo lead time down to the
/// day-before residential orientation.
pub fn default_catalog() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("promo_instagram", "Post Instagram promo", -42),
        TaskTemplate::new("entrants_info", "Compile entrant roster", -21),
        TaskTemplate::new("vendor_register", "Register vendors", -21),
        TaskTemplate::new("platform_register", "Register learning platform accounts", -21),
        TaskTemplate::new("dorm_assign", "Assign dormitory rooms", -14),
        TaskTemplate::new("entrance_video", "Produce entrance ceremony video", -14),
        TaskTemplate::new("snack_order", "Order snacks", -4),
        TaskTemplate::new("online_ot", "Run online orientation", -3),
        TaskTemplate::new("copy_consent", "Copy consent and pledge forms", -3),
        TaskTemplate::new("copy_life_guide", "Copy house-rules handout", -3),
        TaskTemplate::new("access_card", "Prepare access cards", -3),
        TaskTemplate::new("camp_ot", "Run residential orientation", -1),
    ]
}
