//! Forge TUI - a terminal dashboard for dispatching workspace commands
//!
//! This library provides the core functionality for the Forge dashboard:
//! a command registry built from configuration, a blocking runner that
//! captures subprocess output, and the ratatui rendering layer.

pub mod command;
pub mod config;
pub mod ui;
