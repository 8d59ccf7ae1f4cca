//! Intake commands - saving one stock reading for the active supplier.

use crate::{
    cli::AppContext,
    core::intake::{Field, StockDraft, saved_message},
    errors::Result,
};
use chrono::Local;
use clap::Args;
use tracing::info;

/// Arguments for `record`.
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Supplier whose products are being counted. Defaults to the first one.
    #[arg(long)]
    pub supplier: Option<String>,

    /// Units on display, as PRODUCT=COUNT. Repeat for each product.
    #[arg(long, value_name = "PRODUCT=COUNT", value_parser = parse_assignment)]
    pub exhibido: Vec<(String, String)>,

    /// Units in the warehouse, as PRODUCT=COUNT. Repeat for each product.
    #[arg(long, value_name = "PRODUCT=COUNT", value_parser = parse_assignment)]
    pub deposito: Vec<(String, String)>,
}

/// Splits `PRODUCT=COUNT`. The count is kept raw; it is coerced later.
fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let (product, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PRODUCT=COUNT, got '{raw}'"))?;
    let product = product.trim();
    if product.is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    Ok((product.to_string(), count.to_string()))
}

/// Fills a draft from the arguments. Products not mentioned stay at zero.
///
/// # Errors
/// Returns an error if the supplier is unknown or a product is not one of its products.
pub fn build_draft(ctx: &AppContext, args: &RecordArgs) -> Result<StockDraft> {
    let mut draft = match args.supplier.as_deref() {
        Some(id) => StockDraft::new(&ctx.roster, id)?,
        None => StockDraft::for_first_supplier(&ctx.roster)?,
    };

    for (product_id, raw) in &args.exhibido {
        draft.set(product_id, Field::Exhibido, raw)?;
    }
    for (product_id, raw) in &args.deposito {
        draft.set(product_id, Field::Deposito, raw)?;
    }

    Ok(draft)
}

/// Saves the reading and returns the confirmation message.
///
/// # Errors
/// Returns an error if the draft cannot be built or the log cannot be written.
pub fn record(ctx: &AppContext, args: &RecordArgs) -> Result<String> {
    let draft = build_draft(ctx, args)?;
    let submission = draft.to_submission(&Local::now());
    let message = saved_message(&submission);

    info!(
        supplier = %submission.supplier_id,
        entries = submission.entries.len(),
        "Recording stock submission"
    );
    ctx.log.append(submission)?;

    Ok(message)
}
