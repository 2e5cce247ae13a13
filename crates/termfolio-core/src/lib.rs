//! Core model for the termfolio widget.
//!
//! Holds the portfolio content records, the virtual line list the cursor
//! walks, and the TOML widget configuration. Nothing in this crate touches
//! a terminal.

pub mod config;
pub mod content;
pub mod lines;

pub use config::{ConfigError, WidgetConfig, WindowGeometry};
pub use content::{ContentError, ContentKind, ContentSet, Project, WorkExperience};
pub use lines::{LineKind, LineView, VirtualLines};
