// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, LoopError, Result};
pub use services::loop_generator::generate_loop;

use config::LoopConfig;

// App state for sharing across the application
pub struct AppState {
    pub loop_config: LoopConfig,
}
