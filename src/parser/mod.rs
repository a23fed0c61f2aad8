//! Language-agnostic parsing interface for method extraction.
//!
//! This module provides:
//! - `Parser` trait: Abstract interface for language parsers
//! - `Registry`: Factory-based parser lookup by file extension
//! - Tree-sitter implementations for multiple languages

use std::collections::HashMap;
use std::sync::RwLock;

#[cfg(feature = "tree-sitter")]
pub mod treesitter;

#[cfg(feature = "tree-sitter")]
pub mod languages;

/// Location of a token in a source file.
///
/// Lines and columns are 1-indexed; the byte range is 0-indexed and
/// half-open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// One method declaration under inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodUnit {
    /// The method identifier (e.g., "Main", "calculate")
    pub name: String,
    /// Source text of the block body, or the expression body when there is
    /// no block, or empty when the declaration has neither.
    pub body_text: String,
    /// Span of the identifier token.
    pub name_span: Span,
}

impl MethodUnit {
    pub fn new(name: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body_text: body_text.into(),
            name_span: Span::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.name_span = span;
        self
    }
}

/// Parser trait for walking method declarations.
pub trait Parser: Send + Sync {
    /// Extract every method declaration from source code, in source order.
    fn methods(&self, source: &[u8]) -> anyhow::Result<Vec<MethodUnit>>;

    /// Return the language this parser handles (e.g., "csharp", "python").
    fn language(&self) -> &str;
}

/// Factory function type for creating parser instances.
pub type ParserFactory = fn() -> Box<dyn Parser>;

lazy_static::lazy_static! {
    /// Global parser registry mapping file extensions to parser factories.
    static ref REGISTRY: RwLock<HashMap<String, ParserFactory>> = RwLock::new(HashMap::new());
}

/// Register a parser factory for a file extension.
/// Extension should include the dot (e.g., ".cs", ".py").
pub fn register(ext: &str, factory: ParserFactory) {
    let mut registry = REGISTRY.write().unwrap_or_else(|e| e.into_inner());
    registry.insert(ext.to_string(), factory);
}

/// Get a parser for the given file extension.
/// Returns None if no parser is registered for the extension.
pub fn for_extension(ext: &str) -> Option<Box<dyn Parser>> {
    let registry = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    registry.get(ext).map(|factory| factory())
}

/// Return all registered file extensions.
pub fn supported_extensions() -> Vec<String> {
    let registry = REGISTRY.read().unwrap_or_else(|e| e.into_inner());
    let mut exts: Vec<String> = registry.keys().cloned().collect();
    exts.sort();
    exts
}

/// Initialize the parser registry with all available language parsers.
/// Call this once at startup before using parsers.
#[cfg(feature = "tree-sitter")]
pub fn init() {
    languages::register_all();
}

/// Initialize (no-op when tree-sitter is disabled).
#[cfg(not(feature = "tree-sitter"))]
pub fn init() {
    // No tree-sitter parsers available
}
