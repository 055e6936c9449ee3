//! opscal-core: data model and scheduling passes for cohort operations
//!
//! Deliberately I/O-free: the CLI feeds it a seed document and a persisted
//! registry, and everything in here is a pure transform over those values.

pub mod catalog;
pub mod dates;
pub mod generator;
pub mod registry;
pub mod seed;
pub mod task;

pub use catalog::{default_catalog, TaskTemplate};
pub use generator::{generate_baseline_tasks, update_assignee_names};
pub use registry::Registry;
pub use seed::{Assignee, Cohort, Seed};
pub use task::{task_id, DueStatus, Task};
