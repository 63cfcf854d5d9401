use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single learning task, owned by exactly one day of the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Date-keyed task collection. Invariant: a key present in `days` always
/// maps to a non-empty list; keys are canonical `YYYY-MM-DD` strings, so
/// the map's lexicographic order is chronological.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskLedger {
    pub days: BTreeMap<String, Vec<Task>>,
}

/// Dashboard counters, persisted as their own document. `completed_tasks`
/// is kept in lockstep with ledger mutations and reconciled against the
/// ledger at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsAggregate {
    pub streak: u32,
    pub completed_tasks: u64,
    pub study_hours: f64,
    pub achievements: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub completed_phases: usize,
    pub total_phases: usize,
    pub percent: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: String,
    pub quote: String,
    pub stats: StatsAggregate,
    pub today_tasks: Vec<Task>,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date: String,
    pub is_today: bool,
    pub has_tasks: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub permission: crate::reminder::Permission,
    pub armed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_fire_in_secs: Option<u64>,
}
