//! Rust language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding Rust functions.
///
/// Trait method signatures have no body and report an empty one.
const METHOD_QUERY: &str = r#"
(function_item name: (identifier) @name) @method
(function_signature_item name: (identifier) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["block"];

/// Create a new Rust parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_rust::LANGUAGE.into(),
        language_name: "rust",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register Rust parser for .rs extension.
pub fn register() {
    crate::parser::register(".rs", new_parser);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_functions() {
        let parser = new_parser();
        let source = br#"
trait Greeter {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

fn main() {}
"#;

        let methods = parser.methods(source).unwrap();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["greet", "greet", "main"]);

        assert_eq!(methods[0].body_text, "");
        assert!(methods[1].body_text.contains("\"hello\".to_string()"));
        assert_eq!(methods[2].body_text, "{}");
    }
}
