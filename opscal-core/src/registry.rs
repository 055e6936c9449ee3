//! Task registry: the complete persisted state of the scheduler.
//!
//! Keyed by the composite identifier from [`task_id`]; key order carries no
//! meaning. All updates are clone-then-mutate: operations take `&self` and
//! hand back a whole new registry, so callers never observe a half-applied
//! change.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::add_days;
use crate::seed::Assignee;
use crate::task::{task_id, Task};

/// Serializes as a plain id-to-task JSON object, the v1 blob layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    tasks: HashMap<String, Task>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    /// Insert under the task's own identifier, replacing any previous
    /// entry there.
    pub fn insert(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.values_mut()
    }

    /// Flip a task's done flag. Unknown identifiers leave the registry
    /// unchanged.
    pub fn toggle_done(&self, id: &str, now_ms: i64) -> Registry {
        let mut next = self.clone();
        if let Some(t) = next.tasks.get_mut(id) {
            t.done = !t.done;
            t.updated_at = now_ms;
        }
        next
    }

    /// Set a task's assignee (`None` = unassigned) and resolve the display
    /// name from the caller's roster snapshot. The cached name stays absent
    /// when the id is unknown to the roster.
    pub fn reassign(
        &self,
        id: &str,
        assignee_id: Option<&str>,
        roster: &[Assignee],
        now_ms: i64,
    ) -> Registry {
        let mut next = self.clone();
        if let Some(t) = next.tasks.get_mut(id) {
            t.assignee_name = assignee_id
                .and_then(|aid| roster.iter().find(|a| a.id == aid))
                .map(|a| a.name.clone());
            t.assignee_id = assignee_id.map(str::to_string);
            t.updated_at = now_ms;
        }
        next
    }

    /// Move a task's due date by a signed number of days. The identifier
    /// embeds the date, so the entry is re-keyed: the old id is removed and
    /// the task reinserted under the new one in the same operation.
    /// `baseline_due_date` is untouched.
    ///
    /// If the new identifier is already occupied, that entry is replaced
    /// wholesale; last write wins.
    pub fn reschedule(&self, id: &str, delta_days: i64, now_ms: i64) -> Registry {
        let mut next = self.clone();
        let Some(task) = next.tasks.remove(id) else {
            return next;
        };

        let new_due = add_days(task.due_date, delta_days);
        let new_id = task_id(&task.cohort_id, &task.key, new_due);
        next.tasks.insert(
            new_id.clone(),
            Task {
                id: new_id,
                due_date: new_due,
                updated_at: now_ms,
                ..task
            },
        );
        next
    }

    /// Bucket tasks by due date for display. Within a date, tasks order by
    /// the concatenation of cohort id and title.
    pub fn grouped_by_date(&self) -> BTreeMap<NaiveDate, Vec<&Task>> {
        let mut map: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
        for t in self.tasks.values() {
            map.entry(t.due_date).or_default().push(t);
        }
        for bucket in map.values_mut() {
            bucket.sort_by_key(|t| format!("{}{}", t.cohort_id, t.title));
        }
        map
    }

    /// Tasks due on one date, in display order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.grouped_by_date().remove(&date).unwrap_or_default()
    }
}
