//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen with:
//! - Prediction form with medication-name suggestions
//! - Stock forecast chart for the latest prediction
//! - Prediction history table

mod app;
mod styles;
mod ui;

pub use app::{App, AppService};
pub use styles::PharmacyTheme;
