//! Go language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding Go functions and methods.
const METHOD_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @method
(method_declaration name: (field_identifier) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["block"];

/// Create a new Go parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_go::LANGUAGE.into(),
        language_name: "go",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register Go parser for .go extension.
pub fn register() {
    crate::parser::register(".go", new_parser);
}
