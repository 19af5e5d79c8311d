//! Series definitions and ECharts options for the dashboard charts.
//!
//! Two charts are built from the monthly rollup:
//! - a multi-series line chart with toggleable series on two y axes
//! - a combo chart with one bar metric (left axis) and one line metric (right axis)
//!
//! The result is a [`charming::Chart`]; the web crate hands it to the browser renderer.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    datatype::DataPoint,
    element::{AxisType, ItemStyle, Tooltip, Trigger},
    series::{Bar, Line},
};

use crate::records::MonthlyRollup;

// ── Metrics ───────────────────────────────────────────────────────────────────

/// A plottable rollup column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Revenue,
    Volume,
    AvgPrice,
    TotalExpenses,
    RevenuePerMcf,
    TotalExpensesPerMcf,
    NetPerMcf,
    GatheringPerMcf,
    ProcessingPerMcf,
    CompressionPerMcf,
    TransportationPerMcf,
    TaxesPerMcf,
    MarketingPerMcf,
    GatheringExpense,
    ProcessingExpense,
    CompressionExpense,
    TransportationExpense,
    TaxesExpense,
}

impl Metric {
    const ALL: [Metric; 18] = [
        Self::Revenue,
        Self::Volume,
        Self::AvgPrice,
        Self::TotalExpenses,
        Self::RevenuePerMcf,
        Self::TotalExpensesPerMcf,
        Self::NetPerMcf,
        Self::GatheringPerMcf,
        Self::ProcessingPerMcf,
        Self::CompressionPerMcf,
        Self::TransportationPerMcf,
        Self::TaxesPerMcf,
        Self::MarketingPerMcf,
        Self::GatheringExpense,
        Self::ProcessingExpense,
        Self::CompressionExpense,
        Self::TransportationExpense,
        Self::TaxesExpense,
    ];

    /// The rollup column name, also used as the `<select>` value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Volume => "volume",
            Self::AvgPrice => "avg_price",
            Self::TotalExpenses => "total_expenses",
            Self::RevenuePerMcf => "revenue_per_mcf",
            Self::TotalExpensesPerMcf => "total_expenses_per_mcf",
            Self::NetPerMcf => "net_per_mcf",
            Self::GatheringPerMcf => "gathering_per_mcf",
            Self::ProcessingPerMcf => "processing_per_mcf",
            Self::CompressionPerMcf => "compression_per_mcf",
            Self::TransportationPerMcf => "transportation_per_mcf",
            Self::TaxesPerMcf => "taxes_per_mcf",
            Self::MarketingPerMcf => "marketing_per_mcf",
            Self::GatheringExpense => "gathering_expense",
            Self::ProcessingExpense => "processing_expense",
            Self::CompressionExpense => "compression_expense",
            Self::TransportationExpense => "transportation_expense",
            Self::TaxesExpense => "taxes_expense",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn value(self, row: &MonthlyRollup) -> Option<f64> {
        match self {
            Self::Revenue => row.revenue,
            Self::Volume => row.volume,
            Self::AvgPrice => row.avg_price,
            Self::TotalExpenses => row.total_expenses,
            Self::RevenuePerMcf => row.revenue_per_mcf,
            Self::TotalExpensesPerMcf => row.total_expenses_per_mcf,
            Self::NetPerMcf => row.net_per_mcf,
            Self::GatheringPerMcf => row.gathering_per_mcf,
            Self::ProcessingPerMcf => row.processing_per_mcf,
            Self::CompressionPerMcf => row.compression_per_mcf,
            Self::TransportationPerMcf => row.transportation_per_mcf,
            Self::TaxesPerMcf => row.taxes_per_mcf,
            Self::MarketingPerMcf => row.marketing_per_mcf,
            Self::GatheringExpense => row.gathering_expense,
            Self::ProcessingExpense => row.processing_expense,
            Self::CompressionExpense => row.compression_expense,
            Self::TransportationExpense => row.transportation_expense,
            Self::TaxesExpense => row.taxes_expense,
        }
    }
}

/// Which y axis a line series is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A toggleable series on the line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSeries {
    pub metric: Metric,
    pub label: &'static str,
    pub color: &'static str,
    pub default_on: bool,
    pub side: Side,
}

const fn series(metric: Metric, label: &'static str, color: &'static str, default_on: bool, side: Side) -> LineSeries {
    LineSeries {
        metric,
        label,
        color,
        default_on,
        side,
    }
}

pub const LINE_SERIES: [LineSeries; 11] = [
    series(Metric::RevenuePerMcf, "Revenue $/MCF", "#2ecc71", true, Side::Left),
    series(Metric::AvgPrice, "Avg Price", "#3498db", true, Side::Right),
    series(Metric::TotalExpensesPerMcf, "Total Expenses $/MCF", "#e74c3c", true, Side::Left),
    series(Metric::NetPerMcf, "Net $/MCF", "#f39c12", false, Side::Left),
    series(Metric::GatheringPerMcf, "Gathering $/MCF", "#9b59b6", false, Side::Left),
    series(Metric::ProcessingPerMcf, "Processing $/MCF", "#1abc9c", false, Side::Left),
    series(Metric::CompressionPerMcf, "Compression $/MCF", "#e67e22", false, Side::Left),
    series(Metric::TransportationPerMcf, "Transportation $/MCF", "#34495e", false, Side::Left),
    series(Metric::TaxesPerMcf, "Taxes $/MCF", "#95a5a6", false, Side::Left),
    series(Metric::MarketingPerMcf, "Marketing $/MCF", "#d35400", false, Side::Left),
    series(Metric::Volume, "Volume (MCF)", "#7f8c8d", false, Side::Right),
];

pub const LINE_LEFT_TITLE: &str = "$/MCF";
pub const LINE_RIGHT_TITLE: &str = "Price / Volume";

/// Series shown before the user touches any toggle.
pub fn default_line_metrics() -> Vec<Metric> {
    LINE_SERIES.iter().filter(|s| s.default_on).map(|s| s.metric).collect()
}

pub const COMBO_OPTIONS: [(Metric, &str); 11] = [
    (Metric::Revenue, "Revenue ($)"),
    (Metric::Volume, "Volume (MCF)"),
    (Metric::TotalExpenses, "Total Expenses ($)"),
    (Metric::AvgPrice, "Avg Price ($/MCF)"),
    (Metric::RevenuePerMcf, "Revenue $/MCF"),
    (Metric::NetPerMcf, "Net $/MCF"),
    (Metric::GatheringExpense, "Gathering ($)"),
    (Metric::ProcessingExpense, "Processing ($)"),
    (Metric::CompressionExpense, "Compression ($)"),
    (Metric::TransportationExpense, "Transportation ($)"),
    (Metric::TaxesExpense, "Taxes ($)"),
];

pub const COMBO_DEFAULT_BAR: Metric = Metric::Revenue;
pub const COMBO_DEFAULT_LINE: Metric = Metric::AvgPrice;

pub const BAR_COLOR: &str = "#3498db";
pub const COMBO_LINE_COLOR: &str = "#e74c3c";

pub fn combo_label(metric: Metric) -> &'static str {
    COMBO_OPTIONS
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| metric.key())
}

// ── Chart options ─────────────────────────────────────────────────────────────

/// ECharts skips `"-"` entries; connected series draw straight across them.
const MISSING: &str = "-";

fn month_labels(rows: &[MonthlyRollup]) -> Vec<String> {
    rows.iter().map(|r| r.production_date.clone()).collect()
}

/// One data point per month, `"-"` where the metric is missing.
fn series_data(rows: &[MonthlyRollup], metric: Metric) -> Vec<DataPoint> {
    rows.iter()
        .map(|r| match metric.value(r).filter(|v| v.is_finite()) {
            Some(v) => DataPoint::from(v),
            None => DataPoint::from(MISSING),
        })
        .collect()
}

fn value_axis(name: &str) -> Axis {
    Axis::new().type_(AxisType::Value).name(name)
}

/// Month category axis, axis tooltip and the shared grid.
fn base_chart(rows: &[MonthlyRollup]) -> Chart {
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(Grid::new().left("3%").right("4%").bottom("3%").contain_label(true))
        .x_axis(Axis::new().type_(AxisType::Category).data(month_labels(rows)))
}

/// The multi-series line chart.
///
/// Every series in [`LINE_SERIES`] is always present so a redraw replaces the
/// previous one in place; disabled series carry no data.
pub fn line_chart(rows: &[MonthlyRollup], enabled: &[Metric]) -> Chart {
    let mut chart = base_chart(rows)
        .y_axis(value_axis(LINE_LEFT_TITLE))
        .y_axis(value_axis(LINE_RIGHT_TITLE));

    for s in LINE_SERIES {
        let data = if enabled.contains(&s.metric) {
            series_data(rows, s.metric)
        } else {
            Vec::new()
        };
        let axis_index = match s.side {
            Side::Left => 0,
            Side::Right => 1,
        };
        chart = chart.series(
            Line::new()
                .name(s.label)
                .y_axis_index(axis_index)
                .connect_nulls(true)
                .item_style(ItemStyle::new().color(s.color))
                .data(data),
        );
    }
    chart
}

/// The combo chart: `bar` on the left axis, `line` on the right.
pub fn combo_chart(rows: &[MonthlyRollup], bar: Metric, line: Metric) -> Chart {
    base_chart(rows)
        .legend(Legend::new())
        .y_axis(value_axis(combo_label(bar)))
        .y_axis(value_axis(combo_label(line)))
        .series(
            Bar::new()
                .name(combo_label(bar))
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(series_data(rows, bar)),
        )
        .series(
            Line::new()
                .name(combo_label(line))
                .y_axis_index(1)
                .connect_nulls(true)
                .item_style(ItemStyle::new().color(COMBO_LINE_COLOR))
                .data(series_data(rows, line)),
        )
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn rows() -> Vec<MonthlyRollup> {
        vec![
            MonthlyRollup {
                production_date: "Jan 24".into(),
                revenue: Some(100.0),
                avg_price: Some(2.0),
                revenue_per_mcf: Some(3.0),
                ..Default::default()
            },
            MonthlyRollup {
                production_date: "Feb 24".into(),
                revenue: Some(-50.0),
                avg_price: None,
                revenue_per_mcf: Some(1.5),
                ..Default::default()
            },
            MonthlyRollup {
                production_date: "Mar 24".into(),
                revenue: Some(200.0),
                avg_price: Some(4.0),
                revenue_per_mcf: None,
                ..Default::default()
            },
        ]
    }

    fn options(chart: &Chart) -> Value {
        serde_json::to_value(chart).unwrap()
    }

    fn series_named<'a>(opts: &'a Value, name: &str) -> &'a Value {
        opts["series"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["name"] == name)
            .unwrap()
    }

    #[test]
    fn metric_keys_round_trip() {
        for (metric, _) in COMBO_OPTIONS {
            assert_eq!(Metric::from_key(metric.key()), Some(metric));
        }
        for s in LINE_SERIES {
            assert_eq!(Metric::from_key(s.metric.key()), Some(s.metric));
        }
        assert_eq!(Metric::from_key("nope"), None);
    }

    #[test]
    fn default_series() {
        assert_eq!(
            default_line_metrics(),
            vec![Metric::RevenuePerMcf, Metric::AvgPrice, Metric::TotalExpensesPerMcf]
        );
    }

    #[test]
    fn line_chart_keeps_every_series_and_blanks_disabled_ones() {
        let opts = options(&line_chart(&rows(), &default_line_metrics()));
        assert_eq!(opts["series"].as_array().unwrap().len(), LINE_SERIES.len());
        assert_eq!(opts["yAxis"].as_array().unwrap().len(), 2);

        let net = series_named(&opts, "Net $/MCF");
        assert!(net["data"].as_array().is_none_or(Vec::is_empty));
    }

    #[test]
    fn line_chart_marks_gaps_and_connects_across_them() {
        let opts = options(&line_chart(&rows(), &default_line_metrics()));

        let rev = series_named(&opts, "Revenue $/MCF");
        assert_eq!(rev["data"], json!([3.0, 1.5, "-"]));
        assert_eq!(rev["connectNulls"], json!(true));

        let price = series_named(&opts, "Avg Price");
        assert_eq!(price["data"], json!([2.0, "-", 4.0]));
        assert_eq!(price["yAxisIndex"].as_f64(), Some(1.0));
    }

    #[test]
    fn combo_chart_puts_bars_left_and_line_right() {
        let opts = options(&combo_chart(&rows(), Metric::Revenue, Metric::AvgPrice));
        let series = opts["series"].as_array().unwrap();
        assert_eq!(series.len(), 2);

        assert_eq!(series[0]["type"], "bar");
        assert_eq!(series[0]["name"], "Revenue ($)");
        assert_eq!(series[0]["data"], json!([100.0, -50.0, 200.0]));

        assert_eq!(series[1]["type"], "line");
        assert_eq!(series[1]["name"], "Avg Price ($/MCF)");
        assert_eq!(series[1]["yAxisIndex"].as_f64(), Some(1.0));

        let axes = opts["yAxis"].as_array().unwrap();
        assert_eq!(axes[0]["name"], "Revenue ($)");
        assert_eq!(axes[1]["name"], "Avg Price ($/MCF)");
    }

    #[test]
    fn empty_rollup_builds_empty_series() {
        let opts = options(&combo_chart(&[], COMBO_DEFAULT_BAR, COMBO_DEFAULT_LINE));
        let series = opts["series"].as_array().unwrap();
        assert!(series.iter().all(|s| s["data"].as_array().is_none_or(Vec::is_empty)));
    }
}
