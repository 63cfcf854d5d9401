use crate::errors::AppError;
use crate::models::{
    AddTaskRequest, DashboardResponse, DayResponse, HealthResponse, MonthGrid, ReminderResponse,
};
use crate::reminder::{self, Permission};
use crate::syllabus::SyllabusPhase;
use crate::state::{AppState, ReminderState, Store};
use crate::stats::build_dashboard;
use crate::storage::persist_document;
use crate::ui::render_index;
use crate::{calendar, datekey, ledger, syllabus};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = datekey::today();
    let store = state.store.lock().await;
    Html(render_index(
        &friendly_date(today),
        &store.stats,
        syllabus::daily_quote(today),
    ))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Learning Hub is running!".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        domain: state.domain.clone(),
    })
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let store = state.store.lock().await;
    Json(build_dashboard(datekey::today(), &store.ledger, &store.stats))
}

pub async fn get_syllabus() -> Json<&'static [SyllabusPhase]> {
    Json(syllabus::phases())
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthGrid>, AppError> {
    let store = state.store.lock().await;
    calendar::month_grid(year, month, datekey::today(), &store.ledger)
        .map(Json)
        .ok_or_else(|| AppError::bad_request(format!("{year}-{month} is not a calendar month")))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    require_date_key(&date)?;
    let store = state.store.lock().await;
    Ok(Json(day_response(&store, &date)))
}

pub async fn add_task(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    require_date_key(&date)?;
    let mut store = state.store.lock().await;
    // Blank text is a quiet no-op: the day comes back unchanged.
    if ledger::add_task(&mut store.ledger, &date, &payload.text) {
        persist_document(&state.tasks_path, &store.ledger).await?;
    }
    Ok(Json(day_response(&store, &date)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path((date, index)): Path<(String, usize)>,
) -> Result<Json<DayResponse>, AppError> {
    require_date_key(&date)?;
    let mut guard = state.store.lock().await;
    let store = &mut *guard;
    if ledger::toggle_task(&mut store.ledger, &mut store.stats, &date, index) {
        persist_document(&state.tasks_path, &store.ledger).await?;
        persist_document(&state.stats_path, &store.stats).await?;
    }
    Ok(Json(day_response(store, &date)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((date, index)): Path<(String, usize)>,
) -> Result<Json<DayResponse>, AppError> {
    require_date_key(&date)?;
    let mut guard = state.store.lock().await;
    let store = &mut *guard;
    if ledger::delete_task(&mut store.ledger, &mut store.stats, &date, index) {
        persist_document(&state.tasks_path, &store.ledger).await?;
        persist_document(&state.stats_path, &store.stats).await?;
    }
    Ok(Json(day_response(store, &date)))
}

pub async fn get_reminder(State(state): State<AppState>) -> Json<ReminderResponse> {
    let rem = state.reminder.lock().await;
    Json(reminder_response(&rem))
}

pub async fn enable_reminder(State(state): State<AppState>) -> Json<ReminderResponse> {
    let mut rem = state.reminder.lock().await;
    rem.permission = Permission::Granted;
    if rem.handle.is_none() {
        rem.handle = Some(reminder::arm(Arc::clone(&state.store)));
        info!("daily reminder armed for {:02}:00 local", reminder::REMINDER_HOUR);
    }
    Json(reminder_response(&rem))
}

pub async fn dismiss_reminder(State(state): State<AppState>) -> Json<ReminderResponse> {
    let mut rem = state.reminder.lock().await;
    rem.permission = Permission::Denied;
    if let Some(handle) = rem.handle.take() {
        handle.cancel();
        info!("daily reminder cancelled");
    }
    Json(reminder_response(&rem))
}

fn require_date_key(date: &str) -> Result<(), AppError> {
    datekey::decode(date)
        .map(|_| ())
        .ok_or_else(|| AppError::bad_request(format!("'{date}' is not a YYYY-MM-DD date key")))
}

fn day_response(store: &Store, date: &str) -> DayResponse {
    DayResponse {
        date: date.to_string(),
        tasks: ledger::tasks_for(&store.ledger, date),
    }
}

fn reminder_response(rem: &ReminderState) -> ReminderResponse {
    let armed = rem.handle.is_some();
    ReminderResponse {
        permission: rem.permission,
        armed,
        next_fire_in_secs: armed
            .then(|| reminder::next_fire_delay(Local::now().naive_local()).as_secs()),
    }
}

fn friendly_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
