//! Language-specific tree-sitter configurations.
//!
//! Each language module provides:
//! - A method declaration query
//! - Body lookup rules for the declaration node
//! - Factory function for creating parsers

pub mod csharp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust_lang;
pub mod typescript;

/// Register all available language parsers.
pub fn register_all() {
    csharp::register();
    go::register();
    java::register();
    javascript::register();
    python::register();
    rust_lang::register();
    typescript::register();
}
