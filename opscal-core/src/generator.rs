//! Baseline generation and roster reconciliation.
//!
//! The two session-initialization passes, run in order:
//! 1. [`generate_baseline_tasks`] makes the registry complete: every
//!    (cohort, template) pair has its baseline task.
//! 2. [`update_assignee_names`] makes cached assignee names current.
//!
//! Both are pure transforms: same inputs, same registry out, no I/O, no
//! deletion.

use std::collections::HashMap;

use crate::catalog::TaskTemplate;
use crate::dates::add_days;
use crate::registry::Registry;
use crate::seed::{Assignee, Cohort};
use crate::task::{task_id, Task};

/// Insert the baseline task for every (cohort, template) pair whose
/// computed identifier is not yet present. Existing entries are kept
/// verbatim, user edits included. Entries no longer derivable from the
/// inputs (cohort dropped from the seed, task rescheduled away from its
/// baseline id) are retained; this pass only ever adds.
///
/// Note the reschedule interaction: a rescheduled task lives under an
/// identifier this computation cannot reproduce, so its original id reads
/// as missing and a fresh baseline task is inserted next to it. That is
/// deliberate; see DESIGN.md before changing it.
pub fn generate_baseline_tasks(
    cohorts: &[Cohort],
    assignees: &[Assignee],
    templates: &[TaskTemplate],
    existing: &Registry,
    now_ms: i64,
) -> Registry {
    let roster: HashMap<&str, &str> = assignees
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();

    let mut next = existing.clone();

    for cohort in cohorts {
        for tpl in templates {
            let baseline_due = add_days(cohort.week1_start, tpl.offset_days);
            let id = task_id(&cohort.id, &tpl.key, baseline_due);

            if next.contains(&id) {
                continue;
            }

            let assignee_name = tpl
                .default_assignee_id
                .as_deref()
                .and_then(|aid| roster.get(aid))
                .map(|name| name.to_string());

            next.insert(Task {
                id,
                cohort_id: cohort.id.clone(),
                cohort_name: cohort.name.clone(),
                key: tpl.key.clone(),
                title: tpl.title.clone(),
                due_date: baseline_due,
                baseline_due_date: baseline_due,
                assignee_id: tpl.default_assignee_id.clone(),
                assignee_name,
                done: false,
                updated_at: now_ms,
            });
        }
    }

    next
}

/// Rewrite every task's cached assignee display name from the roster:
/// the roster's current name when `assignee_id` resolves, otherwise
/// absent (a stale name is cleared, not left behind). Assignment itself
/// and every other field pass through unchanged; no entry is added or
/// removed.
pub fn update_assignee_names(tasks: &Registry, assignees: &[Assignee]) -> Registry {
    let roster: HashMap<&str, &str> = assignees
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();

    let mut next = tasks.clone();
    for t in next.values_mut() {
        t.assignee_name = t
            .assignee_id
            .as_deref()
            .and_then(|aid| roster.get(aid))
            .map(|name| name.to_string());
    }
    next
}
