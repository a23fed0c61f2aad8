//! Java language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding Java method declarations.
const METHOD_QUERY: &str = r#"
(method_declaration name: (identifier) @name) @method
"#;

static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["block"];

/// Create a new Java parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_java::LANGUAGE.into(),
        language_name: "java",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register Java parser for .java extension.
pub fn register() {
    crate::parser::register(".java", new_parser);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_methods() {
        let parser = new_parser();
        let source = br#"
public class MyClass {
    public MyClass() {
        super();
    }

    public int calculate(int x) {
        return x * 2;
    }
}

interface MyInterface {
    void doSomething();
}
"#;

        let methods = parser.methods(source).unwrap();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["calculate", "doSomething"]);

        assert!(methods[0].body_text.contains("return x * 2;"));
        assert_eq!(methods[1].body_text, "");
        assert_eq!(methods[0].name_span.start_line, 7);
    }
}
