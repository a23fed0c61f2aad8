//! wordycheck - flags wordy methods.
//!
//! A method is wordy when its body contains more whitespace-delimited words
//! than the allowed limit (10 by default). Every method is judged on its
//! own text; nothing carries over between methods or files.
//!
//! # Architecture
//!
//! - `parser`: tree-sitter parsers that walk method declarations
//! - `detect`: the `WordyMethod` rule, generated-code filter, suppressions
//!   and the parallel runner
//! - `config`: YAML configuration schema
//! - `report`: Output formatting (pretty, JSON, SARIF)
//!
//! # Adding a New Language
//!
//! See `src/parser/languages/` for examples. Provide a method query and body
//! lookup rules, then register the extension in `languages/mod.rs`.

pub mod cli;
pub mod config;
pub mod detect;
pub mod parser;
pub mod report;

pub use config::{Config, ConfigError};
pub use detect::{
    count_words, CheckResult, Diagnostic, Finding, Runner, Severity, WordyMethodChecker,
    MAX_WORDS, RULE_ID,
};
pub use parser::{for_extension, init, MethodUnit, Parser, Span};
