use crate::models::{DashboardResponse, ProgressResponse, StatsAggregate, TaskLedger};
use crate::{datekey, ledger, syllabus};
use chrono::NaiveDate;

/// Rounded percentage, 0% when the denominator is zero rather than NaN.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

pub fn syllabus_progress() -> ProgressResponse {
    let total_phases = syllabus::phases().len();
    // Phase completion is not tracked yet, so the ring reads 0% for now.
    let completed_phases = 0;
    ProgressResponse {
        completed_phases,
        total_phases,
        percent: progress_percent(completed_phases, total_phases),
    }
}

pub fn build_dashboard(
    today: NaiveDate,
    ledger_data: &TaskLedger,
    stats: &StatsAggregate,
) -> DashboardResponse {
    let key = datekey::encode(today);
    DashboardResponse {
        quote: syllabus::daily_quote(today).to_string(),
        stats: stats.clone(),
        today_tasks: ledger::tasks_for(ledger_data, &key),
        progress: syllabus_progress(),
        date: key,
    }
}
