//! Sales-rate analytics over the submission history.
//!
//! Sales are never recorded directly. They are inferred from consecutive stock
//! readings of the same product: whatever total stock disappeared between two
//! readings counts as sold, and a rise (restock) counts as zero. The per-product
//! average is taken over the reading pairs whose later reading falls inside the
//! period window; the per-provider figure is the unweighted mean of its
//! products' averages.
//!
//! All functions here are pure. They receive the history as a slice and never
//! consult the live roster, so names come from the denormalized entries.

use crate::entities::{StockEntry, Submission};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::{collections::HashMap, convert::Infallible, fmt, str::FromStr};
use tracing::debug;

/// Keyword selecting every supplier or product.
pub const ALL: &str = "all";

/// Restricts which entries take part in the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every id matches
    #[default]
    All,
    /// Only this exact id matches
    Only(String),
}

impl Filter {
    /// Whether `id` passes this filter.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == id,
        }
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    /// `"all"` (any case) or an empty string selects everything; anything else is an exact id.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            Ok(Self::Only(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(id) => f.write_str(id),
        }
    }
}

/// Average units sold per reading pair for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAverage {
    /// Product id
    pub product_id: String,
    /// Product name as recorded in its earliest reading
    pub product_name: String,
    /// Owning supplier id
    pub supplier_id: String,
    /// Owning supplier name as recorded in the product's earliest reading
    pub supplier_name: String,
    /// Mean units sold per in-window pair, 0 when there is none
    pub average_sold: f64,
}

/// Unweighted mean of a supplier's product averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAverage {
    /// Supplier id
    pub supplier_id: String,
    /// Supplier name
    pub supplier_name: String,
    /// Mean of member products' `average_sold`
    pub average_sold: f64,
}

/// Result of [`calculate_averages`].
///
/// Rows come in order of first appearance in the chronologically sorted
/// history; display ordering is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAverages {
    /// One row per observed product
    pub product_averages: Vec<ProductAverage>,
    /// One row per supplier owning at least one observed product
    pub provider_averages: Vec<ProviderAverage>,
}

impl SalesAverages {
    /// Whether nothing was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_averages.is_empty()
    }
}

/// A filtered reading paired with the time of the submission that carried it.
struct Point<'a> {
    entry: &'a StockEntry,
    created_at: DateTime<Utc>,
}

/// Computes per-product and per-provider average sales relative to the current time.
///
/// See [`calculate_averages_at`] for the rules.
#[must_use]
pub fn calculate_averages(
    submissions: &[Submission],
    period_days: u32,
    supplier_filter: &Filter,
    product_filter: &Filter,
) -> SalesAverages {
    calculate_averages_at(
        submissions,
        period_days,
        supplier_filter,
        product_filter,
        Utc::now(),
    )
}

/// Computes per-product and per-provider average sales as of `now`.
///
/// 1. The history is sorted by `created_at` (stable, so equal timestamps keep
///    their stored order).
/// 2. Entries failing either filter are dropped before anything is paired.
/// 3. Remaining readings are grouped by product, chronologically.
/// 4. Each consecutive pair yields `max(previous total - current total, 0)`.
///    Pairs whose later reading is older than `now - period_days` are walked
///    but contribute nothing, so an old reading still serves as the baseline
///    for the next in-window one.
/// 5. Products with no contributing pair average 0.
/// 6. Provider averages are the plain mean of their products' averages.
#[must_use]
pub fn calculate_averages_at(
    submissions: &[Submission],
    period_days: u32,
    supplier_filter: &Filter,
    product_filter: &Filter,
    now: DateTime<Utc>,
) -> SalesAverages {
    // A window reaching past chrono's range simply counts every pair.
    let cutoff = TimeDelta::try_days(i64::from(period_days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    debug!(
        submissions = submissions.len(),
        period_days,
        supplier = %supplier_filter,
        product = %product_filter,
        %cutoff,
        "Calculating sales averages"
    );

    let mut chronological: Vec<&Submission> = submissions.iter().collect();
    chronological.sort_by_key(|s| s.created_at);

    let groups = group_points_by_product(&chronological, supplier_filter, product_filter);

    let product_averages: Vec<ProductAverage> = groups
        .iter()
        .filter_map(|points| average_for_product(points, cutoff))
        .collect();
    let provider_averages = average_by_provider(&product_averages);

    debug!(
        products = product_averages.len(),
        providers = provider_averages.len(),
        "Sales averages calculated"
    );

    SalesAverages {
        product_averages,
        provider_averages,
    }
}

/// Flattens the sorted history into per-product chronological point lists,
/// keeping products in order of first appearance.
fn group_points_by_product<'a>(
    chronological: &[&'a Submission],
    supplier_filter: &Filter,
    product_filter: &Filter,
) -> Vec<Vec<Point<'a>>> {
    let mut groups: Vec<Vec<Point<'a>>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for &submission in chronological {
        for entry in &submission.entries {
            if !supplier_filter.matches(&entry.supplier_id)
                || !product_filter.matches(&entry.product_id)
            {
                continue;
            }

            let slot = *index.entry(entry.product_id.as_str()).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(Point {
                entry,
                created_at: submission.created_at,
            });
        }
    }

    groups
}

/// Units sold between two readings; restocks count as zero.
#[must_use]
pub fn units_sold(previous: &StockEntry, current: &StockEntry) -> f64 {
    (previous.total() - current.total()).max(0.0)
}

fn average_for_product(points: &[Point<'_>], cutoff: DateTime<Utc>) -> Option<ProductAverage> {
    let first = points.first()?.entry;

    let mut sum_sold = 0.0;
    let mut pairs: u32 = 0;
    for pair in points.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.created_at < cutoff {
            continue;
        }
        sum_sold += units_sold(previous.entry, current.entry);
        pairs += 1;
    }

    let average_sold = if pairs > 0 {
        sum_sold / f64::from(pairs)
    } else {
        0.0
    };

    Some(ProductAverage {
        product_id: first.product_id.clone(),
        product_name: first.product_name.clone(),
        supplier_id: first.supplier_id.clone(),
        supplier_name: first.supplier_name.clone(),
        average_sold,
    })
}

fn average_by_provider(product_averages: &[ProductAverage]) -> Vec<ProviderAverage> {
    // (supplier id, supplier name, sum of averages, member count)
    let mut buckets: Vec<(&str, &str, f64, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in product_averages {
        let slot = *index.entry(product.supplier_id.as_str()).or_insert_with(|| {
            buckets.push((
                product.supplier_id.as_str(),
                product.supplier_name.as_str(),
                0.0,
                0,
            ));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        bucket.2 += product.average_sold;
        bucket.3 += 1;
    }

    buckets
        .into_iter()
        .map(|(supplier_id, supplier_name, sum, count)| ProviderAverage {
            supplier_id: supplier_id.to_string(),
            supplier_name: supplier_name.to_string(),
            average_sold: if count > 0 { sum / f64::from(count) } else { 0.0 },
        })
        .collect()
}
