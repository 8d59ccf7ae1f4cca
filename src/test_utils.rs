//! Shared test utilities.
//!
//! Builders for stock entries and submissions with fixed timestamps, so the
//! analytics and store tests do not depend on the wall clock.

use crate::{
    core::intake::pretty_timestamp,
    entities::{StockEntry, Submission},
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Noon UTC on the given calendar date.
///
/// # Panics
/// Panics on an invalid date; test inputs are literals.
#[allow(clippy::unwrap_used)]
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single().unwrap()
}

/// `days` whole days before `now`.
pub fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - TimeDelta::days(days)
}

/// Creates an entry whose display names are the upper-cased ids.
pub fn entry(supplier_id: &str, product_id: &str, exhibido: f64, deposito: f64) -> StockEntry {
    StockEntry {
        supplier_id: supplier_id.to_string(),
        supplier_name: supplier_id.to_uppercase(),
        product_id: product_id.to_string(),
        product_name: product_id.to_uppercase(),
        exhibido,
        deposito,
    }
}

/// Creates a submission for `supplier_id` holding the given entries.
pub fn submission(
    created_at: DateTime<Utc>,
    supplier_id: &str,
    entries: Vec<StockEntry>,
) -> Submission {
    Submission {
        created_at,
        created_at_pretty: pretty_timestamp(&created_at),
        supplier_id: supplier_id.to_string(),
        entries,
    }
}

/// Creates a `coca` submission with a single product reading.
///
/// # Defaults
/// * supplier: "coca"
pub fn single_entry_submission(
    created_at: DateTime<Utc>,
    product_id: &str,
    exhibido: f64,
    deposito: f64,
) -> Submission {
    submission(
        created_at,
        "coca",
        vec![entry("coca", product_id, exhibido, deposito)],
    )
}
