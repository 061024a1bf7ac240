//! Formatted terminal output for the `report` command.
//!
//! We keep formatting code in one place so:
//! - the view builder stays free of presentation concerns
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Chart, ChartKind, DashboardView};
use crate::io::ingest::IngestedData;

/// Width of the inline bar column.
const BAR_WIDTH: usize = 30;

/// Format a one-paragraph dataset summary.
pub fn format_dataset_summary(data: &IngestedData, source: &str) -> String {
    let mut out = String::new();
    out.push_str("=== XYZ Automotive Sales Dashboard ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Rows: read={} used={} skipped={} | years=[{}, {}] | recession rows={}\n",
        data.rows_read,
        data.rows_used,
        data.row_errors.len(),
        data.stats.year_min,
        data.stats.year_max,
        data.stats.recession_records,
    ));
    out
}

/// Format a view: either the prompt message or one table per chart.
pub fn format_view(view: &DashboardView) -> String {
    match view {
        DashboardView::Prompt { message } => format!("{message}\n"),
        DashboardView::Charts { charts, .. } => {
            let mut out = String::new();
            for (idx, chart) in charts.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                out.push_str(&format_chart(chart));
            }
            out
        }
    }
}

fn format_chart(chart: &Chart) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {}\n", kind_label(chart.kind), chart.title));

    if chart.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let has_series = chart.points.iter().any(|p| p.series.is_some());
    let x_width = chart
        .points
        .iter()
        .map(|p| p.x.chars().count())
        .chain(std::iter::once(chart.x_label.chars().count()))
        .max()
        .unwrap_or(0);

    let header = if has_series {
        format!("  {:<x_width$} {:>8} {:>14}", chart.x_label, "series", chart_value_header(chart))
    } else {
        format!("  {:<x_width$} {:>14}", chart.x_label, chart_value_header(chart))
    };
    out.push_str(header.trim_end());
    out.push('\n');

    let max = chart
        .value_range()
        .map(|(_, hi)| hi)
        .filter(|hi| *hi > 0.0)
        .unwrap_or(1.0);
    let shares = if chart.kind == ChartKind::Pie {
        chart.shares()
    } else {
        Vec::new()
    };

    for (i, p) in chart.points.iter().enumerate() {
        let value = match shares.get(i) {
            Some((_, share)) => format!("{:>7.1}% {:>6}", share * 100.0, fmt_value(p.value)),
            None => format!("{:>14}", fmt_value(p.value)),
        };
        let bar = render_bar(p.value, max);
        let line = if has_series {
            format!(
                "  {:<x_width$} {:>8} {value} {bar}",
                p.x,
                p.series.as_deref().unwrap_or(""),
            )
        } else {
            format!("  {:<x_width$} {value} {bar}", p.x)
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn chart_value_header(chart: &Chart) -> &str {
    match chart.kind {
        ChartKind::Pie => "share",
        ChartKind::Line | ChartKind::Bar => &chart.y_label,
    }
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::Pie => "pie",
    }
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn render_bar(value: f64, max: f64) -> String {
    if !(value.is_finite() && value > 0.0) {
        return String::new();
    }
    let n = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(n.clamp(1, BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataPoint, ReportType};

    fn point(x: &str, value: f64) -> DataPoint {
        DataPoint { x: x.to_string(), series: None, value }
    }

    #[test]
    fn prompt_is_printed_verbatim() {
        let out = format_view(&DashboardView::prompt("Please select a year."));
        assert_eq!(out, "Please select a year.\n");
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let view = DashboardView::Charts {
            report: ReportType::Recession,
            year: None,
            charts: vec![Chart {
                kind: ChartKind::Bar,
                title: "Sales".to_string(),
                x_label: "Vehicle_Type".to_string(),
                y_label: "Automobile_Sales".to_string(),
                points: vec![point("Sports", 100.0), point("Executivecar", 50.0)],
            }],
        };
        let out = format_view(&view);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[bar] Sales");
        assert!(lines[2].contains("Sports"));
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[3].matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn pie_rows_show_shares() {
        let chart = Chart {
            kind: ChartKind::Pie,
            title: "Ads".to_string(),
            x_label: "Vehicle_Type".to_string(),
            y_label: "Advertising_Expenditure".to_string(),
            points: vec![point("Sports", 1.0), point("Executivecar", 3.0)],
        };
        let out = format_chart(&chart);
        assert!(out.contains("25.0%"));
        assert!(out.contains("75.0%"));
    }

    #[test]
    fn empty_chart_says_so() {
        let chart = Chart {
            kind: ChartKind::Line,
            title: "Monthly".to_string(),
            x_label: "Month".to_string(),
            y_label: "Automobile_Sales".to_string(),
            points: Vec::new(),
        };
        assert!(format_chart(&chart).contains("(no data)"));
    }
}
