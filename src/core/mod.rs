//! Core business logic - framework-agnostic intake, analytics and reporting.

/// Sales-rate inference and averaging over the submission history
pub mod analytics;
/// Draft readings for the active provider and submission building
pub mod intake;
/// Display shaping: sorting, formatting and chart series
pub mod report;
