//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - Runtime: queues, update cycle, observer chain, command execution
//! - AppRunner: event loop over a terminal surface

pub mod app_runner;
pub mod runtime;
