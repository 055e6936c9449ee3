use chrono::NaiveDate;
use opscal_core::dates::end_of_month;
use opscal_core::{DueStatus, Registry, Task};

fn marker(task: &Task, today: NaiveDate) -> &'static str {
    match task.due_status(today) {
        DueStatus::Overdue => "!! ",
        DueStatus::Imminent => " * ",
        DueStatus::Normal => "   ",
    }
}

fn check(task: &Task) -> &'static str {
    if task.done { "x" } else { " " }
}

/// Agenda of one month: every date with tasks, a done/total badge, and a
/// per-task status marker.
pub fn print_month(registry: &Registry, month_start: NaiveDate, today: NaiveDate) {
    println!("# {}\n", month_start.format("%B %Y"));

    let grouped = registry.grouped_by_date();
    let mut any = false;
    for (date, tasks) in grouped.range(month_start..=end_of_month(month_start)) {
        any = true;
        let done = tasks.iter().filter(|t| t.done).count();
        println!(
            "{} ({}) [{}/{}]",
            date.format("%Y-%m-%d"),
            date.format("%a"),
            done,
            tasks.len()
        );
        for t in tasks {
            println!("  {}[{}] {} · {}", marker(t, today), check(t), t.cohort_name, t.title);
        }
    }

    if !any {
        println!("(no tasks this month)");
    } else {
        println!("\n * due within 3 days   !! overdue");
    }
}

/// Detail panel for one date: every task due then, with identifier,
/// assignee, and schedule drift.
pub fn print_day(registry: &Registry, date: NaiveDate, today: NaiveDate) {
    println!("{} ({})\n", date.format("%Y-%m-%d"), date.format("%A"));

    let tasks = registry.on_date(date);
    if tasks.is_empty() {
        println!("(no tasks on this date)");
        return;
    }

    for t in &tasks {
        println!("{}[{}] {} · {}", marker(t, today), check(t), t.cohort_name, t.title);
        println!("      id: {}", t.id);
        match (&t.assignee_id, &t.assignee_name) {
            (Some(aid), Some(name)) => println!("      assignee: {name} ({aid})"),
            (Some(aid), None) => println!("      assignee: {aid} (not in roster)"),
            _ => println!("      assignee: -"),
        }
        if t.due_date != t.baseline_due_date {
            println!("      shifted from {}", t.baseline_due_date);
        }
    }

    println!("\n * due within 3 days   !! overdue");
}
