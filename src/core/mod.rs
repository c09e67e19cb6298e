// src/core/mod.rs
//! Core services shared by the CLI and the web API

pub mod config_manager;

pub use config_manager::{ConfigManager, LoggingConfig, ScoringConfig, ServerConfig};
