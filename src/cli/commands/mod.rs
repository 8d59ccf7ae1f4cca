//! Command implementations organized by concern.
//!
//! Each command takes the [`AppContext`](crate::cli::AppContext) plus its
//! parsed arguments and returns the text to print.

/// Roster listing
pub mod general;

/// Stock reading entry
pub mod intake;

/// Average sales tables and chart
pub mod analytics;

/// Submission history listing and reset
pub mod history;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

/// A table with the shared look used by every command.
pub(crate) fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}
