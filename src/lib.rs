//! # deckui - terminal slide presentations
//!
//! A slide deck controller for the terminal, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): navigator, notice, CTA bindings, usage, enhancers
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (timers, host requests, logs)
//! - **Observers** (`core::observer`): ordered reactions to slide changes
//! - **View** (`presentation::view`): rendering plus clickable regions
//!
//! ## Example Usage
//!
//! ```rust
//! use deckui::core::{msg::{nav::NavMsg, Msg}, state::AppState, update::update};
//! use deckui::infrastructure::config::Config;
//!
//! let config = Config::embedded().expect("embedded config");
//! let state = AppState::new_with_config(config);
//!
//! let (mut state, commands) = update(Msg::Nav(NavMsg::Next), state);
//!
//! assert_eq!(state.navigator.index(), 1);
//! assert!(state.navigator.take_transition().is_some());
//! assert!(commands.is_empty());
//! ```

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
