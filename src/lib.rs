pub mod app;
pub mod config;
pub mod day;
pub mod engine;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::{run, Cli};
pub use day::Day;
pub use errors::{AppError, Result};
pub use models::{GapRule, StreakData, StreakRecord};
pub use state::AppState;
pub use storage::{load_data, persist_data, resolve_data_path};
