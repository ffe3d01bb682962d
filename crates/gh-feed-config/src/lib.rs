//! Configuration for gh-feed
//!
//! This crate provides:
//! - Config file locations
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, ColorMode, DEFAULT_HOST};
pub use config_file::load_config_file;
