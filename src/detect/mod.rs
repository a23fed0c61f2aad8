//! Detection of wordy methods.

mod generated;
mod runner;
mod suppress;
mod types;
mod wordy;

pub use generated::{has_generated_header, is_generated, is_generated_file_name};
pub use runner::Runner;
pub use suppress::{
    filter_suppressed, matches_suppression, parse_suppressions, SuppressedDiagnostic,
    Suppression, SuppressionType,
};
pub use types::{CheckResult, Diagnostic, Severity};
pub use wordy::{
    count_words, format_message, Finding, WordyMethodChecker, CATEGORY, DESCRIPTION, MAX_WORDS,
    RULE_ID, TITLE, WORD_DELIMITERS,
};
