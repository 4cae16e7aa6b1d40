//! Core analysis engine.
//!
//! The engine runs two passes per file: `bindings` collects tracked-library
//! import aliases, then `usages` resolves JSX tags against them. `analyzer`
//! orchestrates both across the file set and `stats` accumulates the
//! run-wide totals.

pub mod analyzer;
pub mod bindings;
pub mod file_scanner;
pub mod parsers;
pub mod stats;
pub mod usages;

pub use analyzer::{FileAnalysis, ProjectAnalysis, analyze_project, analyze_source};
pub use bindings::{BindingCollector, ImportBindings, TrackedLibraries};
pub use stats::{ComponentKey, ComponentRow, ComponentStat, UsageReport, UsageStats};
pub use usages::UsageCollector;
