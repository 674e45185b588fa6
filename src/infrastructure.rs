//! Infrastructure layer
//!
//! This module handles external integrations:
//! - CLI argument processing
//! - Configuration loading
//! - Terminal foundation (real and test backends)

pub mod cli;
pub mod config;
pub mod tui;
