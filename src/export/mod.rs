//! Report emitters.
//!
//! Consume the finalized `UsageReport` and persist it as CSV and JSON.
//! Both emitters return errors instead of swallowing write failures, so a
//! completed analysis with an unwritable report still surfaces a non-zero
//! exit to the caller.

pub mod csv;
pub mod json;

pub use csv::write_csv_report;
pub use json::write_json_report;
