//! Presentation layer
//!
//! This module contains the view and its widgets:
//! - Full-screen view with clickable regions
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod config;
pub mod view;
pub mod widgets;
