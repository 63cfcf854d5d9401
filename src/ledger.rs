use crate::datekey;
use crate::models::{StatsAggregate, Task, TaskLedger};
use chrono::Utc;

/// Appends a task to `date`'s list, creating the list if absent.
///
/// Returns whether the ledger changed. Blank text and a non-canonical date
/// key are quiet no-ops: only valid calendar days may become keys, and a key
/// is never created without at least one task under it.
pub fn add_task(ledger: &mut TaskLedger, date: &str, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || datekey::decode(date).is_none() {
        return false;
    }

    ledger.days.entry(date.to_string()).or_default().push(Task {
        text: text.to_string(),
        completed: false,
        created_at: Utc::now().to_rfc3339(),
    });
    true
}

/// Flips `completed` on the task at `index` under `date`, moving
/// `stats.completed_tasks` by exactly 1 toward the new value.
///
/// Unknown date or out-of-bounds index is a quiet no-op.
pub fn toggle_task(
    ledger: &mut TaskLedger,
    stats: &mut StatsAggregate,
    date: &str,
    index: usize,
) -> bool {
    let Some(task) = ledger.days.get_mut(date).and_then(|tasks| tasks.get_mut(index)) else {
        return false;
    };

    task.completed = !task.completed;
    if task.completed {
        stats.completed_tasks += 1;
    } else {
        stats.completed_tasks = stats.completed_tasks.saturating_sub(1);
    }
    true
}

/// Removes the task at `index` under `date`, preserving the order of the
/// remaining tasks and dropping the date key once its list is empty. A
/// completed task takes one count of `stats.completed_tasks` with it.
pub fn delete_task(
    ledger: &mut TaskLedger,
    stats: &mut StatsAggregate,
    date: &str,
    index: usize,
) -> bool {
    let Some(tasks) = ledger.days.get_mut(date) else {
        return false;
    };
    if index >= tasks.len() {
        return false;
    }

    let removed = tasks.remove(index);
    if removed.completed {
        stats.completed_tasks = stats.completed_tasks.saturating_sub(1);
    }
    if tasks.is_empty() {
        ledger.days.remove(date);
    }
    true
}

pub fn tasks_for(ledger: &TaskLedger, date: &str) -> Vec<Task> {
    ledger.days.get(date).cloned().unwrap_or_default()
}

pub fn completed_count(ledger: &TaskLedger) -> u64 {
    ledger
        .days
        .values()
        .flatten()
        .filter(|task| task.completed)
        .count() as u64
}

/// Heals counter drift: the stored `completed_tasks` is an incrementally
/// maintained tally, so every load re-derives it from the ledger before the
/// counter is trusted again.
pub fn reconcile_stats(ledger: &TaskLedger, stats: &mut StatsAggregate) {
    stats.completed_tasks = completed_count(ledger);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (TaskLedger, StatsAggregate) {
        (TaskLedger::default(), StatsAggregate::default())
    }

    #[test]
    fn add_appends_uncompleted_task() {
        let (mut ledger, _) = setup();
        assert!(add_task(&mut ledger, "2024-03-15", "Learn loops"));

        let tasks = &ledger.days["2024-03-15"];
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Learn loops");
        assert!(!tasks[0].completed);
        assert!(!tasks[0].created_at.is_empty());
    }

    #[test]
    fn add_trims_and_ignores_blank_text() {
        let (mut ledger, _) = setup();
        assert!(!add_task(&mut ledger, "2024-03-15", "   "));
        assert!(ledger.days.is_empty());

        assert!(add_task(&mut ledger, "2024-03-15", "  padded  "));
        assert_eq!(ledger.days["2024-03-15"][0].text, "padded");
    }

    #[test]
    fn add_ignores_invalid_date_key() {
        let (mut ledger, _) = setup();
        assert!(!add_task(&mut ledger, "2024-3-15", "x"));
        assert!(!add_task(&mut ledger, "never", "x"));
        assert!(ledger.days.is_empty());
    }

    #[test]
    fn toggle_moves_counter_with_new_value() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "Learn loops");

        assert!(toggle_task(&mut ledger, &mut stats, "2024-03-15", 0));
        assert!(ledger.days["2024-03-15"][0].completed);
        assert_eq!(stats.completed_tasks, 1);

        assert!(toggle_task(&mut ledger, &mut stats, "2024-03-15", 0));
        assert!(!ledger.days["2024-03-15"][0].completed);
        assert_eq!(stats.completed_tasks, 0);
    }

    #[test]
    fn toggle_out_of_bounds_is_a_no_op() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "Learn loops");

        assert!(!toggle_task(&mut ledger, &mut stats, "2024-03-15", 5));
        assert!(!toggle_task(&mut ledger, &mut stats, "2024-03-16", 0));
        assert_eq!(stats.completed_tasks, 0);
    }

    #[test]
    fn delete_preserves_order_of_survivors() {
        let (mut ledger, mut stats) = setup();
        for text in ["A", "B", "C"] {
            add_task(&mut ledger, "2024-03-15", text);
        }

        assert!(delete_task(&mut ledger, &mut stats, "2024-03-15", 1));
        let texts: Vec<&str> = ledger.days["2024-03-15"]
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(texts, ["A", "C"]);
    }

    #[test]
    fn delete_last_task_removes_the_date_key() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "only");

        assert!(delete_task(&mut ledger, &mut stats, "2024-03-15", 0));
        assert!(!ledger.days.contains_key("2024-03-15"));
    }

    #[test]
    fn delete_completed_task_gives_back_its_count() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "Learn loops");
        toggle_task(&mut ledger, &mut stats, "2024-03-15", 0);
        assert_eq!(stats.completed_tasks, 1);

        delete_task(&mut ledger, &mut stats, "2024-03-15", 0);
        assert_eq!(stats.completed_tasks, 0);
        assert!(ledger.days.is_empty());
    }

    #[test]
    fn delete_invalid_input_is_a_no_op() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "keep");

        assert!(!delete_task(&mut ledger, &mut stats, "2024-03-15", 3));
        assert!(!delete_task(&mut ledger, &mut stats, "2024-04-01", 0));
        assert_eq!(ledger.days["2024-03-15"].len(), 1);
    }

    #[test]
    fn counter_matches_ledger_across_toggle_sequences() {
        let (mut ledger, mut stats) = setup();
        for day in ["2024-03-15", "2024-03-16"] {
            for text in ["a", "b", "c"] {
                add_task(&mut ledger, day, text);
            }
        }

        // Pseudo-arbitrary toggle walk; the counter must track the ledger
        // at every step.
        let walk = [
            ("2024-03-15", 0),
            ("2024-03-15", 2),
            ("2024-03-16", 1),
            ("2024-03-15", 0),
            ("2024-03-16", 1),
            ("2024-03-16", 2),
            ("2024-03-15", 2),
            ("2024-03-16", 0),
        ];
        for (day, index) in walk {
            toggle_task(&mut ledger, &mut stats, day, index);
            assert_eq!(stats.completed_tasks, completed_count(&ledger));
        }
    }

    #[test]
    fn no_key_ever_maps_to_an_empty_list() {
        let (mut ledger, mut stats) = setup();
        let days = ["2024-01-01", "2024-01-02", "2024-01-03"];
        for day in days {
            add_task(&mut ledger, day, "x");
            add_task(&mut ledger, day, "y");
        }
        for day in days {
            delete_task(&mut ledger, &mut stats, day, 0);
            assert!(ledger.days.values().all(|tasks| !tasks.is_empty()));
            delete_task(&mut ledger, &mut stats, day, 0);
            assert!(ledger.days.values().all(|tasks| !tasks.is_empty()));
        }
        assert!(ledger.days.is_empty());
    }

    #[test]
    fn reconcile_heals_a_drifted_counter() {
        let (mut ledger, mut stats) = setup();
        add_task(&mut ledger, "2024-03-15", "done");
        toggle_task(&mut ledger, &mut stats, "2024-03-15", 0);

        stats.completed_tasks = 42;
        reconcile_stats(&ledger, &mut stats);
        assert_eq!(stats.completed_tasks, 1);
    }

    #[test]
    fn add_toggle_delete_scenario_nets_to_zero() {
        let (mut ledger, mut stats) = setup();
        let baseline = stats.completed_tasks;

        add_task(&mut ledger, "2024-03-15", "Learn loops");
        assert_eq!(stats.completed_tasks, baseline);

        toggle_task(&mut ledger, &mut stats, "2024-03-15", 0);
        assert!(ledger.days["2024-03-15"][0].completed);
        assert_eq!(stats.completed_tasks, baseline + 1);

        delete_task(&mut ledger, &mut stats, "2024-03-15", 0);
        assert!(!ledger.days.contains_key("2024-03-15"));
        assert_eq!(stats.completed_tasks, baseline);
    }
}
