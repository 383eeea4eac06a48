pub mod modules;
pub mod shared;

// Re-exports for the common entry points
pub use modules::customers::application::CustomerService;
pub use modules::scheduling::application::SchedulingService;
pub use shared::config::AppConfig;
pub use shared::errors::{AppError, AppResult};
