//! JavaScript language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding JavaScript functions and class methods.
///
/// Anonymous functions and arrow functions have no declared name and are
/// skipped.
const METHOD_QUERY: &str = r#"
(function_declaration name: (identifier) @name) @method
(generator_function_declaration name: (identifier) @name) @method
(method_definition name: (_) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["statement_block"];

/// Create a new JavaScript parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_javascript::LANGUAGE.into(),
        language_name: "javascript",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register JavaScript parser for .js, .jsx, .mjs and .cjs extensions.
pub fn register() {
    crate::parser::register(".js", new_parser);
    crate::parser::register(".jsx", new_parser);
    crate::parser::register(".mjs", new_parser);
    crate::parser::register(".cjs", new_parser);
}
