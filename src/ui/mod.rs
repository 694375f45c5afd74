//! # UI Module
//!
//! Terminal user interface components for the Forge dashboard.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  Header (version + gradient banner, 5 rows)      │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │  Content (last command output panel)            │
//! │            ┌─────────────────────┐              │
//! │            │  Command palette    │  (overlay)   │
//! │            └─────────────────────┘              │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │  Footer (hotkey legend, 2 rows)                 │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Components
//!
//! - [`App`] - session state and key-handling transitions
//! - [`mod@render`] - layout composition over ratatui
//! - [`mod@content`] - renderable content nodes and output sanitization
//! - [`mod@banner`] - ASCII banner with two-color gradient
//! - [`mod@theme`] - built-in color themes

pub mod app;
pub mod banner;
pub mod content;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
