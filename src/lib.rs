pub mod app;
pub mod checks;
pub mod commands;
pub mod config;
pub mod errors;
pub mod filters;
pub mod io;
pub mod logging;
pub mod runner;
pub mod ui;
pub mod wrap;

// Internal modules
pub mod actions;

// Re-export commonly used types
pub use app::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use wrap::{ColumnWrapper, FormatSpec, WrapError, WrapMode};
