//! Analytics commands - the average-sales tables and chart.

use super::new_table;
use crate::{
    cli::AppContext,
    core::{
        analytics::{Filter, SalesAverages, calculate_averages},
        intake::Period,
        report::{chart_series, format_average, render_bar_chart, sorted_products, sorted_providers},
    },
    errors::Result,
};
use clap::Args;
use serde::Serialize;

/// Arguments for `averages`.
#[derive(Debug, Args)]
pub struct AveragesArgs {
    /// Window name: weekly, biweekly or monthly (unknown names mean weekly).
    #[arg(long, default_value = "weekly")]
    pub period: String,

    /// Explicit window length in days; overrides --period.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Supplier id to restrict to, or "all".
    #[arg(long, default_value = "all")]
    pub supplier: Filter,

    /// Product id to restrict to, or "all".
    #[arg(long, default_value = "all")]
    pub product: Filter,

    /// Print the sorted result as JSON instead of tables.
    #[arg(long)]
    pub json: bool,

    /// Omit the chart below the tables.
    #[arg(long)]
    pub no_chart: bool,
}

impl AveragesArgs {
    /// Window length in days after resolving `--days` and `--period`.
    #[must_use]
    pub fn period_days(&self) -> u32 {
        self.days
            .unwrap_or_else(|| Period::from_name(&self.period).days())
    }
}

/// JSON shape of `averages --json`: sorted rows plus the window that produced them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AveragesReport {
    period_days: u32,
    #[serde(flatten)]
    averages: SalesAverages,
}

/// Computes the averages over the stored history and renders them.
///
/// # Errors
/// Returns an error only if JSON output was requested and serialization fails.
pub fn averages(ctx: &AppContext, args: &AveragesArgs) -> Result<String> {
    let submissions = ctx.log.read_all();
    let period_days = args.period_days();
    let result = calculate_averages(&submissions, period_days, &args.supplier, &args.product);

    let sorted = SalesAverages {
        product_averages: sorted_products(&result),
        provider_averages: sorted_providers(&result),
    };

    if args.json {
        let report = AveragesReport {
            period_days,
            averages: sorted,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(render_text(&sorted, period_days, args))
}

fn render_text(sorted: &SalesAverages, period_days: u32, args: &AveragesArgs) -> String {
    let window = match args.days {
        Some(_) => format!("{period_days} días"),
        None => format!("{} ({period_days} días)", Period::from_name(&args.period)),
    };
    let mut sections = vec![format!(
        "Período: {window} | Proveedor: {} | Producto: {}",
        args.supplier, args.product
    )];

    if sorted.is_empty() {
        sections.push("Sin datos para los filtros seleccionados.".to_string());
        return sections.join("\n\n");
    }

    let mut products = new_table(&["Producto", "Proveedor", "Promedio vendido"]);
    for row in &sorted.product_averages {
        products.add_row(vec![
            row.product_name.clone(),
            row.supplier_name.clone(),
            format_average(row.average_sold),
        ]);
    }
    sections.push(products.to_string());

    let mut providers = new_table(&["Proveedor", "Promedio vendido"]);
    for row in &sorted.provider_averages {
        providers.add_row(vec![
            row.supplier_name.clone(),
            format_average(row.average_sold),
        ]);
    }
    sections.push(providers.to_string());

    if !args.no_chart {
        sections.push(render_bar_chart(
            &chart_series(&sorted.product_averages),
            None,
        ));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{
        config::roster::default_roster,
        store::SubmissionLog,
        test_utils::{days_ago, entry, submission},
    };
    use chrono::Utc;
    use tempfile::TempDir;

    fn args() -> AveragesArgs {
        AveragesArgs {
            period: "weekly".to_string(),
            days: None,
            supplier: Filter::All,
            product: Filter::All,
            json: false,
            no_chart: false,
        }
    }

    /// Coca sells 6 units of coca-600; Baires sells 2 units of baires-agua.
    fn seeded_context() -> (TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext {
            roster: default_roster(),
            log: SubmissionLog::new(dir.path().join("log.json")),
        };
        let now = Utc::now();
        for s in [
            submission(days_ago(now, 3), "coca", vec![entry("coca", "coca-600", 10.0, 0.0)]),
            submission(days_ago(now, 1), "coca", vec![entry("coca", "coca-600", 4.0, 0.0)]),
            submission(
                days_ago(now, 3),
                "baires",
                vec![entry("baires", "baires-agua", 5.0, 5.0)],
            ),
            submission(
                days_ago(now, 1),
                "baires",
                vec![entry("baires", "baires-agua", 4.0, 4.0)],
            ),
        ] {
            ctx.log.append(s).unwrap();
        }
        (dir, ctx)
    }

    #[test]
    fn test_period_days_resolution() {
        let mut a = args();
        assert_eq!(a.period_days(), 7);
        a.period = "monthly".to_string();
        assert_eq!(a.period_days(), 30);
        a.days = Some(3);
        assert_eq!(a.period_days(), 3);
    }

    #[test]
    fn test_averages_json_sorted_descending() {
        let (_dir, ctx) = seeded_context();
        let mut a = args();
        a.json = true;

        let output = averages(&ctx, &a).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["periodDays"], 7);
        assert_eq!(value["productAverages"][0]["productId"], "coca-600");
        assert_eq!(value["productAverages"][0]["averageSold"], 6.0);
        assert_eq!(value["productAverages"][1]["averageSold"], 2.0);
        assert_eq!(value["providerAverages"][0]["supplierName"], "COCA");
    }

    #[test]
    fn test_averages_text_has_tables_and_chart() {
        let (_dir, ctx) = seeded_context();
        let output = averages(&ctx, &args()).unwrap();

        assert!(output.contains("Período: weekly (7 días)"));
        assert!(output.contains("COCA-600"));
        assert!(output.contains("6.00"));
        assert!(output.contains("2.00"));
        assert!(output.contains("Promedio vendido"));
    }

    #[test]
    fn test_averages_header_names_resolved_period() {
        let (_dir, ctx) = seeded_context();
        let mut a = args();
        a.period = "quarterly".to_string();
        a.no_chart = true;
        assert!(averages(&ctx, &a).unwrap().contains("Período: weekly (7 días)"));

        a.period = "biweekly".to_string();
        assert!(averages(&ctx, &a).unwrap().contains("Período: biweekly (15 días)"));

        a.days = Some(3);
        let output = averages(&ctx, &a).unwrap();
        assert!(output.contains("Período: 3 días |"));
        assert!(!output.contains("biweekly"));
    }

    #[test]
    fn test_averages_supplier_filter() {
        let (_dir, ctx) = seeded_context();
        let mut a = args();
        a.json = true;
        a.supplier = Filter::Only("baires".to_string());

        let output = averages(&ctx, &a).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = value["productAverages"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["supplierId"], "baires");
    }

    #[test]
    fn test_averages_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext {
            roster: default_roster(),
            log: SubmissionLog::new(dir.path().join("log.json")),
        };

        let output = averages(&ctx, &args()).unwrap();
        assert!(output.contains("Sin datos"));
    }
}
