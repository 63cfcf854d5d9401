use crate::models::{StatsAggregate, TaskLedger};
use crate::reminder::{Permission, ReminderHandle};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Ledger and stats share one lock: every mutation reads, mutates, and
/// persists both documents before any other mutation can start, matching
/// the single-threaded event-loop model this data was designed around.
#[derive(Debug, Default)]
pub struct Store {
    pub ledger: TaskLedger,
    pub stats: StatsAggregate,
}

#[derive(Default)]
pub struct ReminderState {
    pub permission: Permission,
    pub handle: Option<ReminderHandle>,
}

#[derive(Clone)]
pub struct AppState {
    pub tasks_path: PathBuf,
    pub stats_path: PathBuf,
    pub domain: Option<String>,
    pub store: Arc<Mutex<Store>>,
    pub reminder: Arc<Mutex<ReminderState>>,
}

impl AppState {
    pub fn new(
        tasks_path: PathBuf,
        stats_path: PathBuf,
        domain: Option<String>,
        ledger: TaskLedger,
        stats: StatsAggregate,
    ) -> Self {
        Self {
            tasks_path,
            stats_path,
            domain,
            store: Arc::new(Mutex::new(Store { ledger, stats })),
            reminder: Arc::new(Mutex::new(ReminderState::default())),
        }
    }
}
