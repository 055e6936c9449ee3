use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use opscal_core::dates::{add_days, start_of_month};
use opscal_core::{default_catalog, generate_baseline_tasks, task_id, update_assignee_names};

mod config;
mod fetch;
mod state;
mod view;

#[derive(Parser, Debug)]
#[command(name = "opscal", version, about = "Cohort operations calendar")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time setup: create ~/.opscal and a default config
    Setup,

    /// Fetch the seed, fill in missing baseline tasks, refresh assignee names
    Sync,

    /// Agenda of one month's task dates (default: current month)
    Month {
        /// Month as YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },

    /// Every task due on one date
    Day {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
    },

    /// Toggle a task's done flag
    Done {
        /// Task id, as shown by `opscal day`
        id: String,
    },

    /// Assign a task to a roster member (omit --assignee to unassign)
    Assign {
        /// Task id, as shown by `opscal day`
        id: String,

        /// Assignee id from the seed roster
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Shift a task's due date by a signed number of days
    Shift {
        /// Task id, as shown by `opscal day`
        id: String,

        /// Days to shift, e.g. 1 or -2
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Setup => {
            config::init_config()?;
            println!("\nNext steps:");
            println!("- set seed.url in {}", config::config_path()?.display());
            println!("- opscal sync");
            println!("- opscal month");
        }

        Command::Sync => {
            sync().await?;
        }

        Command::Month { month } => {
            let today = Local::now().date_naive();
            let month_start = match month {
                Some(m) => parse_month(&m)?,
                None => start_of_month(today),
            };
            let registry = state::load_registry()?;
            view::print_month(&registry, month_start, today);
        }

        Command::Day { date } => {
            let registry = state::load_registry()?;
            view::print_day(&registry, date, Local::now().date_naive());
        }

        Command::Done { id } => {
            let registry = state::load_registry()?;
            if !registry.contains(&id) {
                bail!("no task with id {id} (see: opscal day <date>)");
            }

            let next = registry.toggle_done(&id, state::now_ms());
            state::save_registry(&next);

            let t = next.get(&id).context("task missing after toggle")?;
            let verb = if t.done { "done" } else { "reopened" };
            println!("{verb}: {} · {}", t.cohort_name, t.title);
        }

        Command::Assign { id, assignee } => {
            let cfg = config::load_config()?;
            let url = config::require_seed_url(&cfg)?;
            let seed = fetch::fetch_seed(&url, cfg.seed.timeout_secs).await?;

            let registry = state::load_registry()?;
            if !registry.contains(&id) {
                bail!("no task with id {id} (see: opscal day <date>)");
            }

            let next = registry.reassign(&id, assignee.as_deref(), &seed.assignees, state::now_ms());
            state::save_registry(&next);

            let t = next.get(&id).context("task missing after reassign")?;
            match (&t.assignee_id, &t.assignee_name) {
                (Some(aid), Some(name)) => println!("assigned to {name} ({aid}): {}", t.title),
                (Some(aid), None) => println!("assigned to {aid} (not in roster): {}", t.title),
                _ => println!("unassigned: {}", t.title),
            }
        }

        Command::Shift { id, delta } => {
            let registry = state::load_registry()?;
            let Some(task) = registry.get(&id) else {
                bail!("no task with id {id} (see: opscal day <date>)");
            };

            let new_due = add_days(task.due_date, delta);
            let new_id = task_id(&task.cohort_id, &task.key, new_due);
            if registry.contains(&new_id) && new_id != id {
                eprintln!("warning: replacing the task already at {new_id}");
            }

            let next = registry.reschedule(&id, delta, state::now_ms());
            state::save_registry(&next);

            let t = next.get(&new_id).context("task missing after shift")?;
            println!("moved to {}: {} · {}", t.due_date, t.cohort_name, t.title);
            println!("new id: {}", t.id);
        }
    }

    Ok(())
}

/// The generate-then-reconcile initialization pipeline, plus persistence
/// and a summary. Generation always runs before reconciliation so fresh
/// tasks pick up current roster names too.
async fn sync() -> Result<()> {
    let cfg = config::load_config()?;
    let url = config::require_seed_url(&cfg)?;

    let seed = fetch::fetch_seed(&url, cfg.seed.timeout_secs).await?;
    println!(
        "Seed: {} cohorts, {} assignees",
        seed.cohorts.len(),
        seed.assignees.len()
    );

    let existing = state::load_registry()?;
    let before = existing.len();

    let generated = generate_baseline_tasks(
        &seed.cohorts,
        &seed.assignees,
        &default_catalog(),
        &existing,
        state::now_ms(),
    );
    let reconciled = update_assignee_names(&generated, &seed.assignees);
    state::save_registry(&reconciled);

    println!(
        "Tasks: {} total, {} new",
        reconciled.len(),
        reconciled.len() - before
    );
    Ok(())
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("bad month {s:?} (expected YYYY-MM)"))
}
