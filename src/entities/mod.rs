//! Entity module - plain data types shared by the store, the analytics engine
//! and the presentation layer.
//! Roster types describe who supplies what; submission types are the immutable
//! records persisted in the log.

pub mod roster;
pub mod submission;

pub use roster::{Product, Provider, Roster};
pub use submission::{StockEntry, Submission};
