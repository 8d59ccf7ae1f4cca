//! Report shaping for the analytics output.
//!
//! The engine returns rows in first-seen order; this module sorts them for
//! display, formats figures, and turns product averages into the
//! `{label, value}` series a chart consumes. Everything returns plain data or
//! strings so any front end can render it.

use crate::core::analytics::{ProductAverage, ProviderAverage, SalesAverages};
use serde::Serialize;
use std::cmp::Ordering;

/// Legend shown for the chart series.
pub const CHART_LEGEND: &str = "Promedio vendido";

/// One chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Product name
    pub label: String,
    /// Average units sold
    pub value: f64,
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Product rows sorted by `average_sold`, highest first. Ties keep engine order.
#[must_use]
pub fn sorted_products(averages: &SalesAverages) -> Vec<ProductAverage> {
    let mut rows = averages.product_averages.clone();
    rows.sort_by(|a, b| descending(a.average_sold, b.average_sold));
    rows
}

/// Provider rows sorted by `average_sold`, highest first. Ties keep engine order.
#[must_use]
pub fn sorted_providers(averages: &SalesAverages) -> Vec<ProviderAverage> {
    let mut rows = averages.provider_averages.clone();
    rows.sort_by(|a, b| descending(a.average_sold, b.average_sold));
    rows
}

/// Formats an average with two decimals.
#[must_use]
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

/// Chart series built from product averages, in the order given.
#[must_use]
pub fn chart_series(products: &[ProductAverage]) -> Vec<ChartPoint> {
    products
        .iter()
        .map(|p| ChartPoint {
            label: p.product_name.clone(),
            value: p.average_sold,
        })
        .collect()
}

/// Renders a chart series as horizontal text bars scaled to the largest value.
///
/// Each line looks like `Coca 600ml   │████████░░░░│ 6.00`. Labels are padded to
/// the widest one; an all-zero series renders empty bars.
#[must_use]
pub fn render_bar_chart(points: &[ChartPoint], bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(30);
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let mut lines = Vec::with_capacity(points.len() + 1);
    lines.push(CHART_LEGEND.to_string());

    for point in points {
        let ratio = if max_value > 0.0 {
            (point.value / max_value).clamp(0.0, 1.0)
        } else {
            0.0
        };

        // ratio ∈ [0, 1] and length is small, so the product fits in usize.
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = (ratio * length as f64).round() as usize;
        let empty = length.saturating_sub(filled);

        lines.push(format!(
            "{:<label_width$} │{}{}│ {}",
            point.label,
            "█".repeat(filled),
            "░".repeat(empty),
            format_average(point.value),
        ));
    }

    lines.join("\n")
}
