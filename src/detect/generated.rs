//! Detection of generated source files.
//!
//! Generated files are recognised by name (`Foo.g.cs`, `Form1.Designer.cs`,
//! `api.generated.ts`, `TemporaryGeneratedFile_*`) or by a marker in the
//! leading comment header (`<auto-generated>`, `@generated`,
//! `Code generated ... DO NOT EDIT.`).

use regex::Regex;
use std::path::Path;

lazy_static::lazy_static! {
    static ref GENERATED_FILE_NAME: Regex =
        Regex::new(r"(?i)^TemporaryGeneratedFile_|\.(g|g\.i|generated|designer)\.[^.]+$").unwrap();

    static ref GENERATED_MARKER: Regex =
        Regex::new(r"(?i)<auto-?generated|@generated|\bCode generated\b.*\bDO NOT EDIT\.").unwrap();
}

/// Prefixes that start a comment line in the supported languages.
const COMMENT_PREFIXES: &[&str] = &["//", "/*", "*", "#", "\"\"\"", "'''"];

/// Check whether a file name follows a generated-code naming convention.
pub fn is_generated_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| GENERATED_FILE_NAME.is_match(name))
        .unwrap_or(false)
}

/// Check whether the leading comment header carries a generated-code marker.
///
/// Only comments before the first line of code are inspected.
pub fn has_generated_header(content: &str) -> bool {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return false;
        }
        if GENERATED_MARKER.is_match(trimmed) {
            return true;
        }
    }
    false
}

/// Check whether a file should be treated as generated code.
pub fn is_generated(path: &Path, content: &str) -> bool {
    is_generated_file_name(path) || has_generated_header(content)
}
