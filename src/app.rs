use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/syllabus", get(handlers::get_syllabus))
        .route("/api/calendar/:year/:month", get(handlers::get_calendar))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/days/:date/tasks", post(handlers::add_task))
        .route(
            "/api/days/:date/tasks/:index/toggle",
            post(handlers::toggle_task),
        )
        .route("/api/days/:date/tasks/:index", delete(handlers::delete_task))
        .route("/api/reminders", get(handlers::get_reminder))
        .route("/api/reminders/enable", post(handlers::enable_reminder))
        .route("/api/reminders/dismiss", post(handlers::dismiss_reminder))
        // Unknown paths get the root document, client-side routing style.
        .fallback(handlers::index)
        .with_state(state)
}
