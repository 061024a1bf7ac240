//! View building: selector state in, chart descriptors out.
//!
//! This is the only place that decides which charts a selector combination
//! produces. Front ends (TUI, `report`, HTTP) call `build_view` and render the
//! result; none of them aggregate on their own.

use std::fmt::Display;

use crate::domain::{
    Chart, ChartKind, DashboardView, DataPoint, OrdF64, PROMPT_FALLBACK, PROMPT_SELECT_REPORT,
    PROMPT_SELECT_YEAR, ReportType, SalesRecord,
};
use crate::stats::{Agg, group_by};

pub mod format;

pub use format::format_view;

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Whether the year selector is disabled for the given report-type value.
///
/// Only the yearly report uses a year; every other value (including none)
/// disables the selector.
pub fn year_selector_disabled(report: Option<&str>) -> bool {
    report.and_then(ReportType::from_label) != Some(ReportType::Yearly)
}

/// Produce the output region for the current selector values.
pub fn build_view(records: &[SalesRecord], report: Option<&str>, year: Option<i32>) -> DashboardView {
    let report = report.map(str::trim).filter(|s| !s.is_empty());
    let Some(report) = report else {
        return DashboardView::prompt(PROMPT_SELECT_REPORT);
    };

    match (ReportType::from_label(report), year) {
        (Some(ReportType::Yearly), None) => DashboardView::prompt(PROMPT_SELECT_YEAR),
        (Some(ReportType::Yearly), Some(year)) => DashboardView::Charts {
            report: ReportType::Yearly,
            year: Some(year),
            charts: yearly_charts(records, year),
        },
        (Some(ReportType::Recession), _) => DashboardView::Charts {
            report: ReportType::Recession,
            year: None,
            charts: recession_charts(records),
        },
        (None, _) => DashboardView::prompt(PROMPT_FALLBACK),
    }
}

/// Four charts computed only from recession-flagged rows.
pub fn recession_charts(records: &[SalesRecord]) -> Vec<Chart> {
    let recession: Vec<&SalesRecord> = records.iter().filter(|r| r.recession).collect();

    let by_year = group_by(recession.iter().copied(), |r| r.year, |r| r.automobile_sales, Agg::Sum);
    let by_type = group_by(
        recession.iter().copied(),
        |r| r.vehicle_type,
        |r| r.automobile_sales,
        Agg::Sum,
    );
    let ad_share = group_by(
        recession.iter().copied(),
        |r| r.vehicle_type,
        |r| r.advertising_expenditure,
        Agg::Sum,
    );
    let by_type_rate = group_by(
        recession.iter().copied(),
        |r| (r.vehicle_type, OrdF64(r.unemployment_rate)),
        |r| r.automobile_sales,
        Agg::Sum,
    );

    vec![
        chart(
            ChartKind::Line,
            "Automobile Sales Fluctuation over Recession Periods",
            "Year",
            "Automobile_Sales",
            points(by_year),
        ),
        chart(
            ChartKind::Bar,
            "Automobiles Sold by Vehicle Type during Recessions",
            "Vehicle_Type",
            "Automobile_Sales",
            points(by_type),
        ),
        chart(
            ChartKind::Pie,
            "Total Advertising Expenditure Share by Vehicle Type during Recessions",
            "Vehicle_Type",
            "Advertising_Expenditure",
            points(ad_share),
        ),
        chart(
            ChartKind::Bar,
            "Effect of Unemployment Rate on Vehicle Type and Sales",
            "Vehicle_Type",
            "Automobile_Sales",
            by_type_rate
                .into_iter()
                .map(|((vehicle_type, rate), value)| DataPoint {
                    x: vehicle_type.to_string(),
                    series: Some(rate.to_string()),
                    value,
                })
                .collect(),
        ),
    ]
}

/// Four charts for one selected year (the first spans the whole dataset).
pub fn yearly_charts(records: &[SalesRecord], year: i32) -> Vec<Chart> {
    let in_year: Vec<&SalesRecord> = records.iter().filter(|r| r.year == year).collect();

    let mean_by_year = group_by(records, |r| r.year, |r| r.automobile_sales, Agg::Mean);
    let mean_by_month = group_by(in_year.iter().copied(), |r| r.month, |r| r.automobile_sales, Agg::Mean);
    let mean_by_type = group_by(
        in_year.iter().copied(),
        |r| r.vehicle_type,
        |r| r.automobile_sales,
        Agg::Mean,
    );
    let ad_by_type = group_by(
        in_year.iter().copied(),
        |r| r.vehicle_type,
        |r| r.advertising_expenditure,
        Agg::Sum,
    );

    vec![
        chart(
            ChartKind::Line,
            "Yearly Automobile Sales Over Time",
            "Year",
            "Automobile_Sales",
            points(mean_by_year),
        ),
        chart(
            ChartKind::Line,
            &format!("Monthly Automobile Sales in {year}"),
            "Month",
            "Automobile_Sales",
            mean_by_month
                .into_iter()
                .map(|(month, value)| DataPoint {
                    x: month_label(month).to_string(),
                    series: None,
                    value,
                })
                .collect(),
        ),
        chart(
            ChartKind::Bar,
            &format!("Average Vehicles Sold by Vehicle Type in {year}"),
            "Vehicle_Type",
            "Automobile_Sales",
            points(mean_by_type),
        ),
        chart(
            ChartKind::Pie,
            &format!("Advertising Expenditure for Each Vehicle Type in {year}"),
            "Vehicle_Type",
            "Advertising_Expenditure",
            points(ad_by_type),
        ),
    ]
}

fn chart(kind: ChartKind, title: &str, x_label: &str, y_label: &str, points: Vec<DataPoint>) -> Chart {
    Chart {
        kind,
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points,
    }
}

fn points<K: Display>(groups: Vec<(K, f64)>) -> Vec<DataPoint> {
    groups
        .into_iter()
        .map(|(k, value)| DataPoint {
            x: k.to_string(),
            series: None,
            value,
        })
        .collect()
}

fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBR.get(i as usize))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleType;
    use chrono::NaiveDate;

    fn rec(year: i32, month: u32, recession: bool, vehicle_type: VehicleType, sales: f64, ad: f64, rate: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            recession,
            automobile_sales: sales,
            gdp: 0.0,
            unemployment_rate: rate,
            consumer_confidence: 0.0,
            seasonality_weight: 0.0,
            price: 0.0,
            advertising_expenditure: ad,
            vehicle_type,
            competition: 0.0,
            month,
            year,
        }
    }

    fn dataset() -> Vec<SalesRecord> {
        vec![
            rec(2008, 1, true, VehicleType::Sports, 100.0, 10.0, 6.0),
            rec(2008, 2, true, VehicleType::Supperminicar, 50.0, 30.0, 6.0),
            rec(2008, 2, false, VehicleType::Sports, 70.0, 5.0, 4.0),
            rec(2009, 3, true, VehicleType::Sports, 20.0, 10.0, 9.5),
            rec(2010, 4, false, VehicleType::Executivecar, 400.0, 40.0, 8.0),
        ]
    }

    fn find<'a>(chart: &'a Chart, x: &str) -> Option<&'a DataPoint> {
        chart.points.iter().find(|p| p.x == x)
    }

    #[test]
    fn empty_report_prompts_regardless_of_year() {
        let data = dataset();
        for year in [None, Some(2008)] {
            assert_eq!(build_view(&data, None, year).message(), Some(PROMPT_SELECT_REPORT));
            assert_eq!(build_view(&data, Some("  "), year).message(), Some(PROMPT_SELECT_REPORT));
        }
    }

    #[test]
    fn yearly_without_year_prompts_for_year() {
        let view = build_view(&dataset(), Some("Yearly Statistics"), None);
        assert_eq!(view.message(), Some(PROMPT_SELECT_YEAR));
    }

    #[test]
    fn unknown_report_falls_back() {
        let view = build_view(&dataset(), Some("Quarterly Statistics"), Some(2008));
        assert_eq!(view.message(), Some(PROMPT_FALLBACK));
    }

    #[test]
    fn recession_view_uses_only_recession_rows() {
        let data = dataset();
        for year in [None, Some(1999)] {
            let view = build_view(&data, Some("Recession Period Statistics"), year);
            let charts = view.charts();
            assert_eq!(charts.len(), 4);

            // 2008 Sports: only the recession row (100) counts, not the 70.
            let by_year = &charts[0];
            assert_eq!(by_year.kind, ChartKind::Line);
            assert_eq!(find(by_year, "2008").unwrap().value, 150.0);
            assert_eq!(find(by_year, "2009").unwrap().value, 20.0);
            assert!(find(by_year, "2010").is_none());

            let by_type = &charts[1];
            assert_eq!(find(by_type, "Sports").unwrap().value, 120.0);
            assert!(find(by_type, "Executivecar").is_none());

            let ad = &charts[2];
            assert_eq!(ad.kind, ChartKind::Pie);
            assert_eq!(find(ad, "Supperminicar").unwrap().value, 30.0);
            assert_eq!(find(ad, "Sports").unwrap().value, 20.0);
        }
    }

    #[test]
    fn recession_unemployment_chart_groups_by_type_and_rate() {
        let view = build_view(&dataset(), Some("Recession Period Statistics"), None);
        let chart = &view.charts()[3];
        let sports: Vec<_> = chart.points.iter().filter(|p| p.x == "Sports").collect();
        assert_eq!(sports.len(), 2);
        assert_eq!(sports[0].series.as_deref(), Some("6"));
        assert_eq!(sports[0].value, 100.0);
        assert_eq!(sports[1].series.as_deref(), Some("9.5"));
        assert_eq!(sports[1].value, 20.0);
    }

    #[test]
    fn yearly_view_restricts_month_level_rows_to_year() {
        let view = build_view(&dataset(), Some("Yearly Statistics"), Some(2008));
        let charts = view.charts();
        assert_eq!(charts.len(), 4);

        // Whole-dataset mean by year.
        assert_eq!(find(&charts[0], "2008").unwrap().value, 220.0 / 3.0);
        assert_eq!(find(&charts[0], "2010").unwrap().value, 400.0);

        let months: Vec<&str> = charts[1].points.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb"]);
        assert_eq!(find(&charts[1], "Feb").unwrap().value, 60.0);

        assert_eq!(find(&charts[2], "Sports").unwrap().value, 85.0);
        assert_eq!(find(&charts[3], "Sports").unwrap().value, 15.0);
        assert_eq!(charts[3].kind, ChartKind::Pie);
    }

    #[test]
    fn yearly_view_for_year_without_data_yields_empty_charts() {
        let view = build_view(&dataset(), Some("yearly"), Some(1985));
        let charts = view.charts();
        assert_eq!(charts.len(), 4);
        assert!(!charts[0].is_empty());
        assert!(charts[1..].iter().all(Chart::is_empty));
    }

    #[test]
    fn year_selector_enabled_only_for_yearly() {
        assert!(!year_selector_disabled(Some("Yearly Statistics")));
        assert!(year_selector_disabled(Some("Recession Period Statistics")));
        assert!(year_selector_disabled(Some("")));
        assert!(year_selector_disabled(None));
        assert!(year_selector_disabled(Some("nonsense")));
    }

    #[test]
    fn single_recession_row_contributes_to_year_and_type() {
        let data = vec![rec(2008, 5, true, VehicleType::Sports, 100.0, 1.0, 5.0)];
        let view = build_view(&data, Some("Recession Period Statistics"), None);
        assert_eq!(find(&view.charts()[0], "2008").unwrap().value, 100.0);
        assert_eq!(find(&view.charts()[1], "Sports").unwrap().value, 100.0);
    }
}
