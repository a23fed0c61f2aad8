//! Tree-sitter based parser implementation.
//!
//! This module provides a generic tree-sitter parser that can be configured
//! for different languages via queries.

use std::collections::HashSet;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser as TsParser, Query, QueryCursor};

use super::{MethodUnit, Parser, Span};

/// Configuration for a tree-sitter language parser.
#[derive(Clone)]
pub struct Config {
    /// The tree-sitter language
    pub language: Language,
    /// Language name (e.g., "csharp", "go")
    pub language_name: &'static str,
    /// Tree-sitter query for finding method declarations
    pub method_query: &'static str,
    /// Capture name for the declaration node in method_query
    pub method_capture: &'static str,
    /// Capture name for the method name within method_query
    pub name_capture: &'static str,
    /// Field names holding the body, tried in order
    pub body_fields: &'static [&'static str],
    /// Child node kinds accepted as a body when no field matches
    pub body_kinds: &'static [&'static str],
}

/// Tree-sitter based parser.
pub struct TreeSitterParser {
    config: Config,
}

impl TreeSitterParser {
    /// Create a new tree-sitter parser with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse source code and return the tree.
    fn parse(&self, source: &[u8]) -> anyhow::Result<tree_sitter::Tree> {
        let mut parser = TsParser::new();
        parser.set_language(&self.config.language)?;
        parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse {} source", self.config.language_name))
    }

    /// Locate the body node of a declaration.
    fn find_body<'a>(&self, decl: Node<'a>) -> Option<Node<'a>> {
        for field in self.config.body_fields {
            if let Some(body) = decl.child_by_field_name(field) {
                return Some(body);
            }
        }

        let mut cursor = decl.walk();
        let found = decl
            .named_children(&mut cursor)
            .find(|child| self.config.body_kinds.contains(&child.kind()));
        found
    }
}

/// Build a 1-indexed span from a node. Columns count UTF-16 code units,
/// the unit editors and SARIF consumers use by default.
fn node_span(node: Node, source: &[u8]) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span {
        start_line: start.row + 1,
        start_column: utf16_column(source, node.start_byte(), start.column) + 1,
        end_line: end.row + 1,
        end_column: utf16_column(source, node.end_byte(), end.column) + 1,
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
    }
}

/// Convert a tree-sitter byte column into UTF-16 code units.
fn utf16_column(source: &[u8], byte: usize, byte_column: usize) -> usize {
    let line_start = byte.saturating_sub(byte_column);
    String::from_utf8_lossy(&source[line_start..byte])
        .encode_utf16()
        .count()
}

fn node_text(node: Node, source: &[u8]) -> String {
    String::from_utf8_lossy(&source[node.byte_range()]).into_owned()
}

impl Parser for TreeSitterParser {
    fn methods(&self, source: &[u8]) -> anyhow::Result<Vec<MethodUnit>> {
        let tree = self.parse(source)?;
        let root = tree.root_node();

        let query = Query::new(&self.config.language, self.config.method_query)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, root, source);

        let mut seen = HashSet::new();
        let mut methods = Vec::new();

        while let Some(m) = matches.next() {
            let mut decl_node = None;
            let mut name_node = None;

            for capture in m.captures {
                let capture_name = query.capture_names()[capture.index as usize];
                if capture_name == self.config.method_capture {
                    decl_node = Some(capture.node);
                }
                if capture_name == self.config.name_capture {
                    name_node = Some(capture.node);
                }
            }

            let (Some(decl), Some(name)) = (decl_node, name_node) else {
                continue;
            };

            // Overlapping patterns can match the same declaration twice
            if !seen.insert(decl.id()) {
                continue;
            }

            let name_text = node_text(name, source);
            if name_text.is_empty() {
                continue;
            }

            let body_text = self
                .find_body(decl)
                .map(|body| node_text(body, source))
                .unwrap_or_default();

            methods.push(MethodUnit {
                name: name_text,
                body_text,
                name_span: node_span(name, source),
            });
        }

        methods.sort_by_key(|m| m.name_span.start_byte);
        Ok(methods)
    }

    fn language(&self) -> &str {
        self.config.language_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::languages::python;

    #[test]
    fn test_python_parser() {
        let parser = python::new_parser();
        let source = br#"
def hello():
    print("Hello")

class MyClass:
    def method(self):
        pass
"#;

        let methods = parser.methods(source).unwrap();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["hello", "method"]);
        assert_eq!(methods[0].body_text.trim(), "print(\"Hello\")");
        assert_eq!(methods[0].name_span.start_line, 2);
        assert_eq!(methods[0].name_span.start_column, 5);
    }

    #[test]
    fn test_methods_sorted_by_position() {
        let parser = python::new_parser();
        let source = b"def b():\n    pass\n\ndef a():\n    pass\n";

        let methods = parser.methods(source).unwrap();
        assert_eq!(methods[0].name, "b");
        assert_eq!(methods[1].name, "a");
        assert!(methods[0].name_span.start_byte < methods[1].name_span.start_byte);
    }

    #[test]
    fn test_columns_count_utf16_units() {
        let parser = python::new_parser();
        let source = "def résumé():\n    pass\n".as_bytes();

        let methods = parser.methods(source).unwrap();
        let span = &methods[0].name_span;
        assert_eq!(methods[0].name, "résumé");
        assert_eq!(span.start_line, 1);
        assert_eq!(span.start_column, 5);
        assert_eq!(span.end_column, 11);
        assert_eq!(span.end_byte - span.start_byte, 8);
    }

    #[test]
    fn test_empty_source() {
        let parser = python::new_parser();
        let methods = parser.methods(b"").unwrap();
        assert!(methods.is_empty());
    }
}
