use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Parse JS/TS/JSX/TSX source code into an AST module.
///
/// TypeScript syntax with TSX enabled covers every supported extension, the
/// same parser configuration for all files.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<Module> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse source: {:?}", e))
    })
}

/// Parse a snippet for visitor unit tests, panicking on invalid input.
#[cfg(test)]
pub fn parse_for_tests(code: &str) -> Module {
    parse_source(code.to_string(), "test.tsx", Arc::new(SourceMap::default()))
        .expect("test snippet should parse")
}
