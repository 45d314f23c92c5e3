pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

pub use error::AppError;
