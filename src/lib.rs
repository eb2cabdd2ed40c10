pub mod api;
pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use api::create_router;
pub use config::AppConfig;
pub use error::AppError;
pub use models::AppState;
