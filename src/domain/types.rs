//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - aggregated in-memory by the view builder
//! - exported to JSON for the `report` command and the HTTP API
//! - rendered by the terminal dashboard without further conversion

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Years offered by the year selector.
///
/// This range is fixed; it is not validated against the loaded dataset.
pub const YEAR_RANGE: RangeInclusive<i32> = 1980..=2023;

/// Prompt shown when no report type has been chosen.
pub const PROMPT_SELECT_REPORT: &str = "Please select a report type.";
/// Prompt shown when yearly statistics are requested without a year.
pub const PROMPT_SELECT_YEAR: &str = "Please select a year.";
/// Catch-all prompt for unrecognised selector combinations.
pub const PROMPT_FALLBACK: &str = "Select valid statistics option and year to display graphs.";

/// Top-level report selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ReportType {
    #[serde(rename = "Yearly Statistics")]
    #[value(name = "yearly")]
    Yearly,
    #[serde(rename = "Recession Period Statistics")]
    #[value(name = "recession")]
    Recession,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::Yearly, ReportType::Recession];

    /// Label shown in selectors (and accepted verbatim on the wire).
    pub fn label(self) -> &'static str {
        match self {
            ReportType::Yearly => "Yearly Statistics",
            ReportType::Recession => "Recession Period Statistics",
        }
    }

    /// Resolve a selector value. Accepts the full label or the short alias,
    /// case-insensitively.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        ReportType::ALL.into_iter().find(|r| {
            value.eq_ignore_ascii_case(r.label())
                || r.to_possible_value()
                    .is_some_and(|v| v.matches(value, true))
        })
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle categories present in the sales dataset.
///
/// The variant names follow the dataset's own spellings; parsing also accepts
/// the corrected forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Supperminicar,
    Smallfamiliycar,
    Mediumfamilycar,
    Executivecar,
    Sports,
}

impl VehicleType {
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Supperminicar,
        VehicleType::Smallfamiliycar,
        VehicleType::Mediumfamilycar,
        VehicleType::Executivecar,
        VehicleType::Sports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Supperminicar => "Supperminicar",
            VehicleType::Smallfamiliycar => "Smallfamiliycar",
            VehicleType::Mediumfamilycar => "Mediumfamilycar",
            VehicleType::Executivecar => "Executivecar",
            VehicleType::Sports => "Sports",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_ascii_lowercase();
        match lower.as_str() {
            "supperminicar" | "superminicar" => Some(VehicleType::Supperminicar),
            "smallfamiliycar" | "smallfamilycar" => Some(VehicleType::Smallfamiliycar),
            "mediumfamilycar" => Some(VehicleType::Mediumfamilycar),
            "executivecar" => Some(VehicleType::Executivecar),
            "sports" => Some(VehicleType::Sports),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation of the sales dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub recession: bool,
    pub automobile_sales: f64,
    pub gdp: f64,
    pub unemployment_rate: f64,
    pub consumer_confidence: f64,
    pub seasonality_weight: f64,
    pub price: f64,
    pub advertising_expenditure: f64,
    pub vehicle_type: VehicleType,
    pub competition: f64,
    /// Calendar month, 1-12.
    pub month: u32,
    pub year: i32,
}

/// A float wrapper with a total order, usable as a group-by key.
#[derive(Debug, Clone, Copy)]
pub struct OrdF64(pub f64);

impl PartialEq for OrdF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for OrdF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chart flavour produced by the view builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// One aggregated value.
///
/// `x` is the group label (year, month name, vehicle type). For grouped bar
/// charts `series` carries the secondary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub series: Option<String>,
    pub value: f64,
}

/// A render-ready chart descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<DataPoint>,
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Slice shares for pie charts (value / total). Empty when the total is zero.
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total: f64 = self.points.iter().map(|p| p.value).sum();
        if total == 0.0 || !total.is_finite() {
            return Vec::new();
        }
        self.points
            .iter()
            .map(|p| (p.x.clone(), p.value / total))
            .collect()
    }

    /// Min/max over the values, or `None` for an empty chart.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.value).filter(|v| v.is_finite());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// What the output region shows for a given selector state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DashboardView {
    Prompt {
        message: String,
    },
    Charts {
        report: ReportType,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        year: Option<i32>,
        charts: Vec<Chart>,
    },
}

impl DashboardView {
    pub fn prompt(message: impl Into<String>) -> Self {
        DashboardView::Prompt {
            message: message.into(),
        }
    }

    pub fn charts(&self) -> &[Chart] {
        match self {
            DashboardView::Prompt { .. } => &[],
            DashboardView::Charts { charts, .. } => charts,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DashboardView::Prompt { message } => Some(message),
            DashboardView::Charts { .. } => None,
        }
    }
}

/// Where the dataset is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(std::path::PathBuf),
    /// Seeded synthetic dataset (offline use).
    Demo { seed: u64 },
}

impl DataSource {
    /// Interpret a `--source` / `AUTOSALES_SOURCE` value.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("demo") {
            return DataSource::Demo { seed: 42 };
        }
        if let Some(seed) = raw.strip_prefix("demo:").and_then(|s| s.parse().ok()) {
            return DataSource::Demo { seed };
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return DataSource::Url(raw.to_string());
        }
        DataSource::File(raw.into())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Demo { seed } => write!(f, "demo:{seed}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_accepts_labels_and_aliases() {
        assert_eq!(ReportType::from_label("Yearly Statistics"), Some(ReportType::Yearly));
        assert_eq!(
            ReportType::from_label("recession period statistics"),
            Some(ReportType::Recession)
        );
        assert_eq!(ReportType::from_label("recession"), Some(ReportType::Recession));
        assert_eq!(ReportType::from_label("Monthly"), None);
        assert_eq!(ReportType::from_label(""), None);
    }

    #[test]
    fn vehicle_type_accepts_dataset_and_corrected_spellings() {
        assert_eq!(VehicleType::parse("Supperminicar"), Some(VehicleType::Supperminicar));
        assert_eq!(VehicleType::parse("superminicar"), Some(VehicleType::Supperminicar));
        assert_eq!(VehicleType::parse(" Smallfamilycar "), Some(VehicleType::Smallfamiliycar));
        assert_eq!(VehicleType::parse("Truck"), None);
    }

    #[test]
    fn pie_shares_sum_to_one() {
        let chart = Chart {
            kind: ChartKind::Pie,
            title: "t".to_string(),
            x_label: String::new(),
            y_label: String::new(),
            points: vec![
                DataPoint { x: "a".to_string(), series: None, value: 1.0 },
                DataPoint { x: "b".to_string(), series: None, value: 3.0 },
            ],
        };
        let shares = chart.shares();
        assert_eq!(shares.len(), 2);
        assert!((shares[0].1 - 0.25).abs() < 1e-12);
        assert!((shares.iter().map(|(_, s)| s).sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn data_source_parsing() {
        assert_eq!(DataSource::parse("demo"), DataSource::Demo { seed: 42 });
        assert_eq!(DataSource::parse("demo:7"), DataSource::Demo { seed: 7 });
        assert!(matches!(DataSource::parse("https://x/y.csv"), DataSource::Url(_)));
        assert!(matches!(DataSource::parse("data/sales.csv"), DataSource::File(_)));
    }

    #[test]
    fn view_serializes_with_tag() {
        let json = serde_json::to_string(&DashboardView::prompt(PROMPT_SELECT_YEAR)).unwrap();
        assert_eq!(json, r#"{"view":"prompt","message":"Please select a year."}"#);
    }
}
