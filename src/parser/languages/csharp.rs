//! C# language configuration for tree-sitter parsing.

use crate::parser::treesitter::{Config, TreeSitterParser};
use crate::parser::Parser;

/// Tree-sitter query for finding C# method declarations.
///
/// Constructors, local functions and accessors are not method declarations
/// and are left alone.
const METHOD_QUERY: &str = r#"
(method_declaration name: (identifier) @name) @method
"#;

/// Block bodies and `=> expr` bodies both sit under the `body` field.
static BODY_FIELDS: &[&str] = &["body"];
static BODY_KINDS: &[&str] = &["block", "arrow_expression_clause"];

/// Create a new C# parser.
pub fn new_parser() -> Box<dyn Parser> {
    Box::new(TreeSitterParser::new(Config {
        language: tree_sitter_c_sharp::LANGUAGE.into(),
        language_name: "csharp",
        method_query: METHOD_QUERY,
        method_capture: "method",
        name_capture: "name",
        body_fields: BODY_FIELDS,
        body_kinds: BODY_KINDS,
    }))
}

/// Register C# parser for .cs extension.
pub fn register() {
    crate::parser::register(".cs", new_parser);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &[u8] = br#"
using System;

public abstract class Shape
{
    public Shape() { Console.WriteLine("a constructor is not a method"); }

    public abstract double Area();

    public int Foo() { return 1; }

    public string Describe() => $"Shape with area {Area()}";

    public void Wordy()
    {
        var total = 0;
        Console.WriteLine(total);
    }
}

public interface IRenderer
{
    void Render();
}
"#;

    #[test]
    fn test_csharp_method_names() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Area", "Foo", "Describe", "Wordy", "Render"]);
    }

    #[test]
    fn test_csharp_block_body() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let foo = methods.iter().find(|m| m.name == "Foo").unwrap();
        assert_eq!(foo.body_text, "{ return 1; }");
    }

    #[test]
    fn test_csharp_expression_body() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let describe = methods.iter().find(|m| m.name == "Describe").unwrap();
        assert!(
            describe.body_text.starts_with("=>"),
            "expected arrow clause, got {:?}",
            describe.body_text
        );
        assert!(describe.body_text.contains("Shape with area"));
        assert!(!describe.body_text.ends_with(';'));
    }

    #[test]
    fn test_csharp_bodiless_declarations() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let area = methods.iter().find(|m| m.name == "Area").unwrap();
        let render = methods.iter().find(|m| m.name == "Render").unwrap();
        assert_eq!(area.body_text, "");
        assert_eq!(render.body_text, "");
    }

    #[test]
    fn test_csharp_name_span() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let foo = methods.iter().find(|m| m.name == "Foo").unwrap();
        // "    public int Foo() { return 1; }" on line 10
        assert_eq!(foo.name_span.start_line, 10);
        assert_eq!(foo.name_span.start_column, 16);
        assert_eq!(foo.name_span.end_column, 19);
    }

    #[test]
    fn test_csharp_multiline_block() {
        let parser = new_parser();
        let methods = parser.methods(SOURCE).unwrap();
        let wordy = methods.iter().find(|m| m.name == "Wordy").unwrap();
        assert!(wordy.body_text.starts_with('{'));
        assert!(wordy.body_text.ends_with('}'));
        assert!(wordy.body_text.contains("Console.WriteLine(total);"));
    }

    #[test]
    fn test_csharp_span_after_non_ascii() {
        let parser = new_parser();
        let source = "class Ünicode { public int Größe() { return 1; } }\n".as_bytes();
        let methods = parser.methods(source).unwrap();
        assert_eq!(methods[0].name, "Größe");
        assert_eq!(methods[0].name_span.start_column, 28);
        assert_eq!(methods[0].name_span.end_column, 33);
    }
}
