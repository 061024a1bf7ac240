//! HTTP front end: the dashboard page plus a small JSON API.
//!
//! Routes:
//! - `GET /`                               dashboard page
//! - `GET /api/options`                    selector options
//! - `GET /api/year-selector?report=`      year selector enablement
//! - `GET /api/view?report=&year=`         charts (or prompt) for a selection
//!
//! The dataset is loaded before the runtime starts and shared read-only.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::app::Dashboard;
use crate::domain::{DashboardView, ReportType, YEAR_RANGE};
use crate::error::AppError;

/// Environment variable for the bind address.
pub const BIND_ENV: &str = "AUTOSALES_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:8050";

const INDEX_HTML: &str = include_str!("index.html");

type SharedDashboard = Arc<Dashboard>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OptionsResponse {
    pub title: String,
    pub report_types: Vec<SelectOption>,
    pub years: Vec<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SelectorQuery {
    pub report: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct YearSelectorResponse {
    pub disabled: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct ViewQuery {
    pub report: Option<String>,
    /// Kept as text so an empty `year=` means "no year" rather than a 400.
    pub year: Option<String>,
}

/// Bind address: explicit flag, then `AUTOSALES_BIND`, then the default.
pub fn resolve_bind(flag: Option<SocketAddr>) -> Result<SocketAddr, AppError> {
    if let Some(addr) = flag {
        return Ok(addr);
    }
    dotenvy::dotenv().ok();
    let raw = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    raw.trim()
        .parse()
        .map_err(|e| AppError::usage(format!("Invalid bind address '{raw}': {e}")))
}

/// Run the server until Ctrl-C.
pub fn run(dashboard: Dashboard, addr: SocketAddr) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::runtime(format!("Failed to start async runtime: {e}")))?;
    runtime.block_on(serve(Arc::new(dashboard), addr))
}

async fn serve(dashboard: SharedDashboard, addr: SocketAddr) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::runtime(format!("Failed to bind {addr}: {e}")))?;
    log::info!("dashboard listening on http://{addr}");
    eprintln!("Serving dashboard on http://{addr} (Ctrl-C to stop)");

    axum::serve(listener, router(dashboard))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::runtime(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}

pub fn router(dashboard: SharedDashboard) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(options))
        .route("/api/year-selector", get(year_selector))
        .route("/api/view", get(view))
        .with_state(dashboard)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        title: "Automobile Sales Statistics Dashboard".to_string(),
        report_types: ReportType::ALL
            .into_iter()
            .map(|r| SelectOption {
                label: r.label().to_string(),
                value: r.label().to_string(),
            })
            .collect(),
        years: YEAR_RANGE.collect(),
    })
}

async fn year_selector(
    State(dashboard): State<SharedDashboard>,
    Query(query): Query<SelectorQuery>,
) -> Json<YearSelectorResponse> {
    Json(YearSelectorResponse {
        disabled: dashboard.year_selector_disabled(query.report.as_deref()),
    })
}

async fn view(State(dashboard): State<SharedDashboard>, Query(query): Query<ViewQuery>) -> Json<DashboardView> {
    let year = query.year.as_deref().and_then(|y| y.trim().parse::<i32>().ok());
    log::debug!("view request report={:?} year={:?}", query.report, year);
    Json(dashboard.view(query.report.as_deref(), year))
}
