//! Shared errors and configuration for the timesheet report service.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ClockConfig, I18nConfig, ServerConfig};
pub use error::{AppError, AppResult};
