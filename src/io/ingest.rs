//! CSV ingest and normalization.
//!
//! This module is responsible for turning the automobile sales CSV into a clean
//! set of `SalesRecord`s that the view builder can aggregate.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (no hidden randomness)
//! - **Separation of concerns**: no aggregation logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use csv::StringRecord;

use crate::domain::{SalesRecord, VehicleType};
use crate::error::AppError;

/// Columns every row must provide (after header normalization).
const REQUIRED_COLUMNS: [&str; 5] = [
    "recession",
    "automobile_sales",
    "advertising_expenditure",
    "unemployment_rate",
    "vehicle_type",
];

/// Summary stats about the records actually loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub n_records: usize,
    pub year_min: i32,
    pub year_max: i32,
    pub recession_records: usize,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: normalized records + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<SalesRecord>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

impl IngestedData {
    /// Build from already-normalized records (e.g. the demo generator).
    pub fn from_records(records: Vec<SalesRecord>) -> Result<Self, AppError> {
        let stats = compute_stats(&records)
            .ok_or_else(|| AppError::no_data("Dataset contains no records."))?;
        let n = records.len();
        Ok(Self {
            records,
            stats,
            row_errors: Vec::new(),
            rows_read: n,
            rows_used: n,
        })
    }
}

/// Load and normalize a sales CSV from disk.
pub fn load_sales_csv(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    parse_sales_csv(file)
}

/// Normalize a sales CSV from any reader.
pub fn parse_sales_csv<R: Read>(input: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header line; CSV lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => records.push(row),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    for err in row_errors.iter().take(5) {
        log::warn!("skipping CSV line {}: {}", err.line, err.message);
    }
    if row_errors.len() > 5 {
        log::warn!("... and {} more skipped rows", row_errors.len() - 5);
    }

    let rows_used = records.len();
    let stats = compute_stats(&records)
        .ok_or_else(|| AppError::no_data("No valid rows remain after normalization."))?;

    Ok(IngestedData {
        records,
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // UTF-8 exports from spreadsheet tools may prefix the first header with a BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in REQUIRED_COLUMNS {
        if !header_map.contains_key(name) {
            return Err(AppError::usage(format!("Missing required column: `{name}`")));
        }
    }

    let has_date = header_map.contains_key("date");
    if !has_date && !header_map.contains_key("year") {
        return Err(AppError::usage("Missing required column: `year` (or `date`)"));
    }
    if !has_date && !header_map.contains_key("month") {
        return Err(AppError::usage("Missing required column: `month` (or `date`)"));
    }
    Ok(())
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<SalesRecord, String> {
    let date = get_optional(record, header_map, "date").map(parse_date).transpose()?;

    let year = match get_optional(record, header_map, "year") {
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| format!("Invalid `year` value '{raw}'."))?,
        None => date
            .map(|d| d.year())
            .ok_or_else(|| "Missing `year` and `date` values.".to_string())?,
    };

    let month = match get_optional(record, header_map, "month") {
        Some(raw) => parse_month(raw)?,
        None => date
            .map(|d| d.month())
            .ok_or_else(|| "Missing `month` and `date` values.".to_string())?,
    };

    let date = match date {
        Some(d) => d,
        None => NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| format!("Invalid year/month {year}-{month}."))?,
    };

    let recession = parse_flag(get_required(record, header_map, "recession")?)?;
    let automobile_sales = parse_required_f64(record, header_map, "automobile_sales")?;
    let advertising_expenditure = parse_required_f64(record, header_map, "advertising_expenditure")?;
    let unemployment_rate = parse_required_f64(record, header_map, "unemployment_rate")?;

    let raw_type = get_required(record, header_map, "vehicle_type")?;
    let vehicle_type =
        VehicleType::parse(raw_type).ok_or_else(|| format!("Unknown `vehicle_type` '{raw_type}'."))?;

    Ok(SalesRecord {
        date,
        recession,
        automobile_sales,
        gdp: parse_opt_f64(get_optional(record, header_map, "gdp")),
        unemployment_rate,
        consumer_confidence: parse_opt_f64(get_optional(record, header_map, "consumer_confidence")),
        seasonality_weight: parse_opt_f64(get_optional(record, header_map, "seasonality_weight")),
        price: parse_opt_f64(get_optional(record, header_map, "price")),
        advertising_expenditure,
        vehicle_type,
        competition: parse_opt_f64(get_optional(record, header_map, "competition")),
        month,
        year,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_required_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<f64, String> {
    let raw = get_required(record, header_map, name)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid `{name}` value '{raw}'.")),
    }
}

/// Secondary indicators are informational only; absent or invalid cells become NaN.
fn parse_opt_f64(s: Option<&str>) -> f64 {
    s.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" => Ok(true),
        "0" | "0.0" | "false" | "no" => Ok(false),
        _ => Err(format!("Invalid `recession` flag '{raw}' (expected 0/1).")),
    }
}

fn parse_month(raw: &str) -> Result<u32, String> {
    if let Ok(n) = raw.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(format!("Invalid `month` value '{raw}'."));
    }
    Month::from_str(raw)
        .map(|m| m.number_from_month())
        .map_err(|_| format!("Invalid `month` value '{raw}'."))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // The published dataset uses `M/D/YYYY`; ISO dates are accepted as well.
    const FMTS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d-%m-%Y"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!("Invalid date '{s}'. Expected M/D/YYYY or YYYY-MM-DD."))
}

fn compute_stats(records: &[SalesRecord]) -> Option<DatasetStats> {
    let year_min = records.iter().map(|r| r.year).min()?;
    let year_max = records.iter().map(|r| r.year).max()?;
    Some(DatasetStats {
        n_records: records.len(),
        year_min,
        year_max,
        recession_records: records.iter().filter(|r| r.recession).count(),
    })
}
