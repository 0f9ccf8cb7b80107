//! Command implementations
//!
//! Each command module provides a struct with an execute method.

pub mod build;
pub mod clean;
pub mod reset_config;
