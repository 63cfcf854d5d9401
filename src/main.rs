use learning_hub::models::{StatsAggregate, TaskLedger};
use learning_hub::{app, ledger, storage, AppState};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = storage::resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;
    let tasks_path = data_dir.join("tasks.json");
    let stats_path = data_dir.join("stats.json");

    let tasks: TaskLedger = storage::load_document(&tasks_path).await;
    let mut stats: StatsAggregate = storage::load_document(&stats_path).await;
    ledger::reconcile_stats(&tasks, &mut stats);

    let domain = env::var("APP_DOMAIN").ok();
    let state = AppState::new(tasks_path, stats_path, domain, tasks, stats);

    let router = app::router(state.clone());
    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown(state))
        .await?;

    Ok(())
}

async fn shutdown(state: AppState) {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    let mut rem = state.reminder.lock().await;
    if let Some(handle) = rem.handle.take() {
        handle.cancel();
    }
    info!("shutting down");
}
