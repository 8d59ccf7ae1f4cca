//! Submission entities - immutable stock readings as they are persisted.
//!
//! A submission captures every product of one provider at one instant. Supplier
//! and product names are denormalized into each entry at save time so history
//! keeps rendering after the roster changes. Field names serialize in camelCase,
//! which is the on-disk layout of the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a stored count, treating `null` (a NaN saved by a browser) as zero.
fn count_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One product's reading within a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    /// Owning provider id at save time
    pub supplier_id: String,
    /// Owning provider name at save time
    pub supplier_name: String,
    /// Product id
    pub product_id: String,
    /// Product name at save time
    pub product_name: String,
    /// Units on display
    #[serde(deserialize_with = "count_or_zero")]
    pub exhibido: f64,
    /// Units in the warehouse
    #[serde(deserialize_with = "count_or_zero")]
    pub deposito: f64,
}

impl StockEntry {
    /// Total units on hand (display plus warehouse).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.exhibido + self.deposito
    }
}

/// One save action: all products of the active provider at a single instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Sortable creation timestamp (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,
    /// Locale-formatted creation time for display
    pub created_at_pretty: String,
    /// Provider that was active when the submission was saved
    pub supplier_id: String,
    /// Readings, one per product, in form order
    pub entries: Vec<StockEntry>,
}
