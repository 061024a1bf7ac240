//! Command-line parsing for the automobile sales dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the aggregation code.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ReportType;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "autosales", version, about = "XYZ Automotive sales statistics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive terminal dashboard.
    Tui(SourceArgs),
    /// Print one view (four charts or a prompt) and optionally export it.
    Report(ReportArgs),
    /// Serve the dashboard page and JSON API over HTTP.
    Serve(ServeArgs),
}

/// Where to load the sales CSV from.
#[derive(Debug, Args, Clone, Default)]
pub struct SourceArgs {
    /// CSV URL, local path, or `demo[:SEED]` for the synthetic dataset.
    ///
    /// Falls back to `AUTOSALES_SOURCE`, then the published dataset URL.
    #[arg(short = 's', long, value_name = "URL|PATH|demo")]
    pub source: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Report type (omit to see the selection prompt).
    #[arg(short = 'r', long, value_enum)]
    pub report: Option<ReportType>,

    /// Year for the yearly report.
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Print chart descriptors as JSON instead of text tables.
    #[arg(long)]
    pub json: bool,

    /// Export the view to a file (`.csv` for flat rows, JSON otherwise).
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Address to bind (falls back to `AUTOSALES_BIND`, then 127.0.0.1:8050).
    #[arg(short = 'b', long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}
