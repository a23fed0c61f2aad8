//! TypeScript language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding TypeScript functions and methods.
///
/// Signatures (overloads, abstract and interface methods) report an empty
/// body.
const METHOD_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @method
(generator_function_declaration name: (identifier) @name) @method
(function_signature name: (identifier) @name) @method
(method_definition name: (_) @name) @method
(abstract_method_signature name: (_) @name) @method
(method_signature name: (_) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["statement_block"];

fn config(language: tree_sitter::Language, language_name: &'static str) -> Config {
    Config {
        language,
        language_name,
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }
}

/// Create a new TypeScript parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(config(
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        "typescript",
    )))
}

/// Create a new TSX parser.
pub fn new_tsx_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(config(
        tree_sitter_typescript::LANGUAGE_TSX.into(),
        "tsx",
    )))
}

/// Register TypeScript parsers for .ts, .mts, .cts and .tsx extensions.
pub fn register() {
    crate::parser::register(".ts", new_parser);
    crate::parser::register(".mts", new_parser);
    crate::parser::register(".cts", new_parser);
    crate::parser::register(".tsx", new_tsx_parser);
}
