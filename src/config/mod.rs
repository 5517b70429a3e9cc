//! Configuration module for the net-worth tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::NetWorthPaths;
pub use settings::Settings;
