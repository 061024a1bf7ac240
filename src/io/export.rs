//! Export a rendered view to disk.
//!
//! JSON keeps the full chart descriptors (what the HTTP API returns); CSV
//! flattens every chart into one row per data point so it is easy to consume
//! in spreadsheets or downstream scripts.

use std::fs::File;
use std::path::Path;

use crate::domain::DashboardView;
use crate::error::AppError;

/// Export format, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

/// Write a view using the format implied by `path`.
pub fn write_view(path: &Path, view: &DashboardView) -> Result<(), AppError> {
    match ExportFormat::from_path(path) {
        ExportFormat::Json => write_view_json(path, view),
        ExportFormat::Csv => write_view_csv(path, view),
    }
}

pub fn write_view_json(path: &Path, view: &DashboardView) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, view)
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

pub fn write_view_csv(path: &Path, view: &DashboardView) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, view)?;
    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, view: &DashboardView) -> Result<(), AppError> {
    let row_err = |e: csv::Error| AppError::usage(format!("Failed to write export CSV row: {e}"));

    writer
        .write_record(["chart", "kind", "x", "series", "value"])
        .map_err(row_err)?;

    for chart in view.charts() {
        let kind = serde_json::to_value(chart.kind)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        for p in &chart.points {
            let value = p.value.to_string();
            writer
                .write_record([
                    chart.title.as_str(),
                    kind.as_str(),
                    p.x.as_str(),
                    p.series.as_deref().unwrap_or(""),
                    value.as_str(),
                ])
                .map_err(row_err)?;
        }
    }
    Ok(())
}
