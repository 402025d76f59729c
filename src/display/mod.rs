//! Terminal display utilities for CLI output.
//!
//! Provides styled tables and themed messages.

pub mod tables;
pub mod theme;

pub use tables::{TableBuilder, create_summary_table, create_symbols_table};
pub use theme::{THEME, Theme};
