//! A modal alert/confirm dialog widget for ratatui applications.
//!
//! The crate centers on [`dialog::ModalDialog`], a long-lived widget the host
//! embeds once and re-opens per prompt. Each opening shows a full-screen
//! overlay plus a centered content box, takes exactly one qualifying input
//! (ok control, cancel control, or overlay click), and delivers the resulting
//! boolean decision through an explicit subscription channel: exactly once
//! per opening, before the widget reports itself hidden.
//!
//! Button captions resolve through the [`labels::LabelLookup`] seam, colors
//! through [`Theme`], and terminal plumbing lives in [`tui`]. The `lazymodal`
//! binary is a small demo host wiring all of it together.

pub mod config;
pub mod dialog;
pub mod labels;
pub mod theme;
pub mod tui;
pub mod ui;

pub use theme::Theme;
