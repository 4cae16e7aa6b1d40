//! Compaudit - component usage auditing for design-system libraries
//!
//! Compaudit is a CLI tool and library for auditing how the named exports of
//! a configured set of component libraries are imported and rendered across
//! a JS/TS source tree. The resulting report answers questions like "is this
//! design-system component dead code?".
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (bindings, usages, aggregation)
//! - `export`: CSV and JSON report emitters
//! - `manifest`: package.json project metadata

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod manifest;
