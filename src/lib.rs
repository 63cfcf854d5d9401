pub mod app;
pub mod calendar;
pub mod datekey;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod reminder;
pub mod state;
pub mod stats;
pub mod storage;
pub mod syllabus;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_document, persist_document, resolve_data_dir};
