//! UI primitives for the Shelf CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles, symbols
//! - **Render**: Tables, headers, receipts, hints, errors
//! - **Format**: String utilities

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, kv, print, print_error, receipt, table, Column,
};
