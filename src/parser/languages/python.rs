//! Python language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding Python functions and methods.
const METHOD_QUERY: &str = r#"
(function_definition name: (identifier) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["block"];

/// Create a new Python parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_python::LANGUAGE.into(),
        language_name: "python",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register Python parser for .py and .pyi extensions.
pub fn register() {
    crate::parser::register(".py", new_parser);
    crate::parser::register(".pyi", new_parser);
}
