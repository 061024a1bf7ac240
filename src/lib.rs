//! `autosales-dash` library crate.
//!
//! The binary (`autosales`) is a thin wrapper around this library so that:
//!
//! - the selector rules and aggregations are testable without a terminal
//! - the TUI, the text report and the HTTP server share one code path

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod server;
pub mod stats;
pub mod tui;
