use crate::datekey;
use crate::models::TaskLedger;
use crate::state::Store;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::info;

/// Local hour the daily reminder fires at.
pub const REMINDER_HOUR: u32 = 9;

/// Mirror of the browser notification permission tri-state. Held in app
/// state for the process lifetime, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    Default,
    Granted,
    Denied,
}

/// Owner of the armed reminder task. Dropping or cancelling the handle
/// aborts the task, so the scheduler can always be disposed of cleanly.
pub struct ReminderHandle {
    handle: JoinHandle<()>,
}

impl ReminderHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for ReminderHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Arms the daily reminder: sleep until the next fire time, log the
/// reminder, repeat. Best effort only.
pub fn arm(store: Arc<Mutex<Store>>) -> ReminderHandle {
    let handle = tokio::spawn(async move {
        loop {
            let delay = next_fire_delay(Local::now().naive_local());
            sleep(delay).await;

            let message = {
                let store = store.lock().await;
                reminder_message(&store.ledger, &datekey::today_key())
            };
            info!("daily reminder: {message}");
        }
    });
    ReminderHandle { handle }
}

/// Time until the next occurrence of `REMINDER_HOUR:00` local. Exactly on
/// the hour counts as missed, rolling to tomorrow.
pub fn next_fire_delay(now: NaiveDateTime) -> Duration {
    const DAY_SECS: u32 = 24 * 60 * 60;
    let target = REMINDER_HOUR * 3600;
    let elapsed = now.num_seconds_from_midnight();
    let wait = if elapsed < target {
        target - elapsed
    } else {
        DAY_SECS - elapsed + target
    };
    Duration::from_secs(u64::from(wait))
}

pub fn reminder_message(ledger: &TaskLedger, today_key: &str) -> String {
    let incomplete = ledger
        .days
        .get(today_key)
        .map(|tasks| tasks.iter().filter(|task| !task.completed).count())
        .unwrap_or(0);

    if incomplete == 0 {
        "Ready to conquer new learning goals today?".to_string()
    } else {
        let plural = if incomplete == 1 { "" } else { "s" };
        format!("You have {incomplete} learning task{plural} waiting for you!")
    }
}
