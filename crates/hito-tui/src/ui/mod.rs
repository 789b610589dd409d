//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod panel;
pub mod preview;
pub mod statusbar;
