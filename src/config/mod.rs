//! Configuration module for Pocket Budget
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::{Settings, Theme};
