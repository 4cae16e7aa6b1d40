//! Source file parsing.
//!
//! - `jsx`: JS/TS/JSX/TSX source parser (uses swc for AST generation)

pub mod jsx;
