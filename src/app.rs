//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - parses CLI arguments
//! - loads the sales dataset once
//! - hands it to the chosen front end (TUI, text report, or HTTP server)

use clap::Parser;

use crate::cli::{Command, ReportArgs, ServeArgs, SourceArgs};
use crate::error::AppError;

pub mod pipeline;

pub use pipeline::Dashboard;

/// Entry point for the `autosales` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    // Bare `autosales` and `autosales --source X` behave like `autosales tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Report(args) => handle_report(args),
        Command::Serve(args) => handle_serve(args),
    }
}

fn init_logging() {
    // Logs go to stderr; keep the default quiet so the TUI is not overdrawn.
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn handle_tui(args: SourceArgs) -> Result<(), AppError> {
    let dashboard = Dashboard::load(&args)?;
    crate::tui::run(dashboard)
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let dashboard = Dashboard::load(&args.source)?;
    let report = args.report.map(|r| r.label());
    let view = dashboard.view(report, args.year);

    if args.json {
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| AppError::runtime(format!("Failed to encode view: {e}")))?;
        println!("{json}");
    } else {
        println!(
            "{}",
            crate::report::format::format_dataset_summary(&dashboard.data, &dashboard.source.to_string())
        );
        print!("{}", crate::report::format_view(&view));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_view(path, &view)?;
        log::info!("exported view to {}", path.display());
    }

    Ok(())
}

fn handle_serve(args: ServeArgs) -> Result<(), AppError> {
    // Load before the async runtime starts: the HTTP fetch uses a blocking client.
    let dashboard = Dashboard::load(&args.source)?;
    let addr = crate::server::resolve_bind(args.bind)?;
    crate::server::run(dashboard, addr)
}

/// Rewrite argv so `autosales` defaults to `autosales tui`.
///
/// Rules:
/// - `autosales`                      -> `autosales tui`
/// - `autosales --source demo ...`    -> `autosales tui --source demo ...`
/// - `autosales --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "report" | "serve");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}
