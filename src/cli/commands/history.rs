//! History commands - listing and wiping the stored submissions.

use super::new_table;
use crate::{
    cli::AppContext,
    errors::{Error, Result},
};
use clap::Args;
use tracing::warn;

/// Arguments for `history`.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Print the raw stored JSON array instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Lists every submission in stored order, one row per entry.
///
/// # Errors
/// Returns an error only if JSON output was requested and serialization fails.
pub fn history(ctx: &AppContext, args: &HistoryArgs) -> Result<String> {
    let submissions = ctx.log.read_all();

    if args.json {
        return Ok(serde_json::to_string_pretty(&submissions)?);
    }
    if submissions.is_empty() {
        return Ok("No hay registros guardados.".to_string());
    }

    let mut table = new_table(&["Fecha", "Proveedor", "Producto", "Exhibido", "Depósito"]);
    for submission in &submissions {
        for entry in &submission.entries {
            table.add_row(vec![
                submission.created_at_pretty.clone(),
                entry.supplier_name.clone(),
                entry.product_name.clone(),
                entry.exhibido.to_string(),
                entry.deposito.to_string(),
            ]);
        }
    }

    Ok(format!("{table}\n{} registros", submissions.len()))
}

/// Clears the whole history once the operator has confirmed.
///
/// # Errors
/// Returns [`Error::ResetNotConfirmed`] without touching the log when
/// `confirmed` is false, or an I/O error if the log cannot be removed.
pub fn reset(ctx: &AppContext, confirmed: bool) -> Result<String> {
    if !confirmed {
        return Err(Error::ResetNotConfirmed);
    }

    let removed = ctx.log.read_all().len();
    warn!(removed, "Clearing submission history");
    ctx.log.clear()?;

    Ok(format!("Historial borrado ({removed} registros)."))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::roster::default_roster,
        store::SubmissionLog,
        test_utils::{at, single_entry_submission},
    };
    use tempfile::TempDir;

    fn seeded_context() -> (TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext {
            roster: default_roster(),
            log: SubmissionLog::new(dir.path().join("log.json")),
        };
        ctx.log
            .append(single_entry_submission(at(2026, 3, 2), "coca-600", 12.0, 30.0))
            .unwrap();
        ctx.log
            .append(single_entry_submission(at(2026, 3, 1), "coca-600", 20.0, 30.0))
            .unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_history_lists_in_stored_order() {
        let (_dir, ctx) = seeded_context();
        let output = history(&ctx, &HistoryArgs { json: false }).unwrap();

        let later = output.find("2/3/2026").unwrap();
        let earlier = output.find("1/3/2026").unwrap();
        assert!(later < earlier);
        assert!(output.ends_with("2 registros"));
    }

    #[test]
    fn test_history_json_matches_log() {
        let (_dir, ctx) = seeded_context();
        let output = history(&ctx, &HistoryArgs { json: true }).unwrap();
        let parsed: Vec<crate::entities::Submission> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, ctx.log.read_all());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (_dir, ctx) = seeded_context();

        assert!(matches!(reset(&ctx, false), Err(Error::ResetNotConfirmed)));
        assert_eq!(ctx.log.read_all().len(), 2);

        let message = reset(&ctx, true).unwrap();
        assert_eq!(message, "Historial borrado (2 registros).");
        assert!(ctx.log.read_all().is_empty());
    }
}
