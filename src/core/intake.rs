//! Stock intake business logic - the in-progress form state and how it becomes a submission.
//!
//! The active provider and the operator's draft readings live in a [`StockDraft`]
//! owned by the presentation layer and passed explicitly to whatever renders or
//! updates it. Input is never rejected: anything that is not a finite,
//! non-negative number reads as zero.

use crate::{
    entities::{Provider, Roster, StockEntry, Submission},
    errors::{Error, Result},
};
use chrono::{DateTime, TimeZone, Utc};
use std::{collections::HashMap, fmt};

/// Display format for submission times (`d/m/yyyy, HH:MM:SS`, as in es-AR).
pub const PRETTY_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";

/// Named analytics window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    /// Seven days
    #[default]
    Weekly,
    /// Fifteen days
    Biweekly,
    /// Thirty days
    Monthly,
}

impl Period {
    /// Window length in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 15,
            Self::Monthly => 30,
        }
    }

    /// Parses a period name; unknown names fall back to weekly.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "biweekly" => Self::Biweekly,
            "monthly" => Self::Monthly,
            _ => Self::Weekly,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// Which of the two per-product counts a value is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Units on display
    Exhibido,
    /// Units in the warehouse
    Deposito,
}

/// Coerces operator input to a non-negative count.
///
/// Empty, unparsable, non-finite and negative input all become `0`.
#[must_use]
pub fn coerce_count(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, coerce_value)
}

/// Clamps an already-numeric value to a non-negative, finite count.
#[must_use]
pub fn coerce_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Formats a timestamp the way submissions display it.
#[must_use]
pub fn pretty_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format(PRETTY_FORMAT).to_string()
}

/// Confirmation shown after a successful save.
#[must_use]
pub fn saved_message(submission: &Submission) -> String {
    format!(
        "Datos guardados correctamente ({}).",
        submission.created_at_pretty
    )
}

/// Draft readings for the active provider.
///
/// Every product of the active provider starts at `0 / 0`, so a save always
/// records the provider's full product list.
#[derive(Debug, Clone)]
pub struct StockDraft {
    supplier: Provider,
    values: HashMap<String, (f64, f64)>,
}

impl StockDraft {
    /// Starts an empty draft for `supplier_id`.
    ///
    /// # Errors
    /// Returns [`Error::SupplierNotFound`] if the roster has no such supplier.
    pub fn new(roster: &Roster, supplier_id: &str) -> Result<Self> {
        let supplier = roster
            .supplier(supplier_id)
            .ok_or_else(|| Error::SupplierNotFound {
                id: supplier_id.to_string(),
            })?;

        Ok(Self {
            supplier: supplier.clone(),
            values: HashMap::new(),
        })
    }

    /// Starts an empty draft for the first provider in the roster.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the roster has no suppliers.
    pub fn for_first_supplier(roster: &Roster) -> Result<Self> {
        let supplier = roster.first_supplier().ok_or_else(|| Error::Config {
            message: "Roster has no suppliers".to_string(),
        })?;
        Self::new(roster, &supplier.id)
    }

    /// Switches the active provider, discarding any draft values.
    ///
    /// # Errors
    /// Returns [`Error::SupplierNotFound`] if the roster has no such supplier;
    /// the current draft is left as it was.
    pub fn select_supplier(&mut self, roster: &Roster, supplier_id: &str) -> Result<()> {
        *self = Self::new(roster, supplier_id)?;
        Ok(())
    }

    /// The active provider.
    #[must_use]
    pub const fn supplier(&self) -> &Provider {
        &self.supplier
    }

    /// Records raw input for one product field.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if the product does not belong to the
    /// active provider.
    pub fn set(&mut self, product_id: &str, field: Field, raw: &str) -> Result<()> {
        if self.supplier.product(product_id).is_none() {
            return Err(Error::ProductNotFound {
                id: product_id.to_string(),
            });
        }

        let value = coerce_count(raw);
        let slot = self.values.entry(product_id.to_string()).or_default();
        match field {
            Field::Exhibido => slot.0 = value,
            Field::Deposito => slot.1 = value,
        }
        Ok(())
    }

    /// Current coerced value of one product field (zero if never set).
    #[must_use]
    pub fn value(&self, product_id: &str, field: Field) -> f64 {
        self.values
            .get(product_id)
            .map_or(0.0, |&(exhibido, deposito)| match field {
                Field::Exhibido => exhibido,
                Field::Deposito => deposito,
            })
    }

    /// One entry per product of the active provider, in roster order.
    #[must_use]
    pub fn entries(&self) -> Vec<StockEntry> {
        self.supplier
            .products
            .iter()
            .map(|product| StockEntry {
                supplier_id: self.supplier.id.clone(),
                supplier_name: self.supplier.name.clone(),
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                exhibido: self.value(&product.id, Field::Exhibido),
                deposito: self.value(&product.id, Field::Deposito),
            })
            .collect()
    }

    /// Freezes the draft into an immutable submission stamped with `now`.
    ///
    /// `now` is taken in the operator's time zone so the display string is local,
    /// while `created_at` is stored in UTC.
    #[must_use]
    pub fn to_submission<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Submission
    where
        Tz::Offset: fmt::Display,
    {
        Submission {
            created_at: now.with_timezone(&Utc),
            created_at_pretty: pretty_timestamp(now),
            supplier_id: self.supplier.id.clone(),
            entries: self.entries(),
        }
    }
}
