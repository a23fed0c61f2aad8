//! The `WordyMethod` rule.
//!
//! A method is wordy when its body contains more whitespace-delimited words
//! than the allowed limit. Words are raw tokens: braces, semicolons and
//! operators count the same as identifiers. Only space, tab, newline and
//! carriage return separate words; runs of them act as a single separator.

use crate::parser::MethodUnit;

use super::{Diagnostic, Severity};

/// Rule identifier reported with every diagnostic.
pub const RULE_ID: &str = "WordyMethod";

/// Short rule title.
pub const TITLE: &str = "Method contains too many words";

/// Long rule description.
pub const DESCRIPTION: &str = "Methods should be concise and not contain too many words.";

/// Rule category.
pub const CATEGORY: &str = "Naming";

/// Default maximum number of words allowed in a method body.
pub const MAX_WORDS: usize = 10;

/// Characters that separate words.
pub const WORD_DELIMITERS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Count the words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split(&WORD_DELIMITERS[..])
        .filter(|word| !word.is_empty())
        .count()
}

/// Format the message reported for a wordy method.
pub fn format_message(name: &str, word_count: usize, max_words: usize) -> String {
    format!(
        "Method '{}' contains {} words, which is more than the allowed {} words",
        name, word_count, max_words
    )
}

/// A wordy method, before it is anchored to a file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub method: String,
    pub word_count: usize,
    pub message: String,
}

/// Checks method bodies against the word limit.
///
/// The checker holds only its settings, so one instance can be shared by
/// every thread of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordyMethodChecker {
    max_words: usize,
    severity: Severity,
}

impl Default for WordyMethodChecker {
    fn default() -> Self {
        Self {
            max_words: MAX_WORDS,
            severity: Severity::Warning,
        }
    }
}

impl WordyMethodChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the word limit.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Override the reported severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Check one method body. Returns a finding when the body has more words
    /// than allowed.
    pub fn check(&self, name: &str, body_text: &str) -> Option<Finding> {
        let word_count = count_words(body_text);
        if word_count <= self.max_words {
            return None;
        }

        Some(Finding {
            method: name.to_string(),
            word_count,
            message: format_message(name, word_count, self.max_words),
        })
    }

    /// Check a parsed method and anchor the diagnostic at its name.
    pub fn check_method(&self, file: &str, method: &MethodUnit) -> Option<Diagnostic> {
        let finding = self.check(&method.name, &method.body_text)?;
        let span = method.name_span;

        Some(Diagnostic {
            rule_id: RULE_ID.to_string(),
            severity: self.severity,
            file: file.to_string(),
            method: finding.method,
            word_count: finding.word_count,
            line: span.start_line,
            column: span.start_column,
            end_line: span.end_line,
            end_column: span.end_column,
            message: finding.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Span;

    fn words(n: usize) -> String {
        (1..=n)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_block_body() {
        assert_eq!(count_words("{ return 1; }"), 4);
        assert_eq!(WordyMethodChecker::new().check("Foo", "{ return 1; }"), None);
    }

    #[test]
    fn test_fifteen_words_message() {
        let finding = WordyMethodChecker::new()
            .check("Bar", &words(15))
            .expect("15 words should be flagged");

        assert_eq!(finding.word_count, 15);
        assert_eq!(
            finding.message,
            "Method 'Bar' contains 15 words, which is more than the allowed 10 words"
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(count_words(""), 0);
        assert_eq!(WordyMethodChecker::new().check("Baz", ""), None);
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(count_words("a\tb\n\nc   d\r\ne"), 5);
        assert_eq!(count_words("  \t a \n\n\n b \r\n"), 2);
    }

    #[test]
    fn test_whitespace_only_bodies() {
        for body in ["", " ", "\t", "\n", "\r\n", " \t\r\n  \n"] {
            assert_eq!(count_words(body), 0, "body {:?}", body);
            assert_eq!(WordyMethodChecker::new().check("M", body), None);
        }
    }

    #[test]
    fn test_boundary() {
        let checker = WordyMethodChecker::new();
        assert_eq!(checker.check("Ten", &words(10)), None);

        let finding = checker.check("Eleven", &words(11)).unwrap();
        assert_eq!(finding.word_count, 11);
        assert!(finding.message.contains("contains 11 words"));
    }

    #[test]
    fn test_boundary_whitespace_is_ignored() {
        for body in ["a b c", "  a b c", "a b c \n", "\r\n\ta b c\t"] {
            assert_eq!(
                count_words(body),
                count_words(body.trim_matches(&WORD_DELIMITERS[..])),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn test_other_whitespace_is_part_of_a_word() {
        assert_eq!(count_words("a\u{000B}b"), 1);
        assert_eq!(count_words("a\u{00A0}b"), 1);
        assert_eq!(count_words("a\u{000C}b c"), 2);
    }

    #[test]
    fn test_punctuation_counts_as_words() {
        // "{", "if", "(x)", "{", "return;", "}", "}"
        assert_eq!(count_words("{ if (x) { return; } }"), 7);
    }

    #[test]
    fn test_check_is_idempotent() {
        let checker = WordyMethodChecker::new();
        let body = words(12);
        assert_eq!(checker.check("Again", &body), checker.check("Again", &body));
        assert_eq!(checker.check("Short", "{ }"), checker.check("Short", "{ }"));
    }

    #[test]
    fn test_custom_limit() {
        let checker = WordyMethodChecker::new().with_max_words(3);
        assert_eq!(checker.check("Three", "a b c"), None);

        let finding = checker.check("Four", "a b c d").unwrap();
        assert_eq!(
            finding.message,
            "Method 'Four' contains 4 words, which is more than the allowed 3 words"
        );
    }

    #[test]
    fn test_check_method_anchors_at_name() {
        let span = Span {
            start_line: 7,
            start_column: 17,
            end_line: 7,
            end_column: 22,
            start_byte: 120,
            end_byte: 125,
        };
        let method = MethodUnit::new("Wordy", words(11)).with_span(span);

        let diagnostic = WordyMethodChecker::new()
            .with_severity(Severity::Error)
            .check_method("src/Wordy.cs", &method)
            .unwrap();

        assert_eq!(diagnostic.rule_id, RULE_ID);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.file, "src/Wordy.cs");
        assert_eq!(diagnostic.method, "Wordy");
        assert_eq!(diagnostic.word_count, 11);
        assert_eq!((diagnostic.line, diagnostic.column), (7, 17));
        assert_eq!((diagnostic.end_line, diagnostic.end_column), (7, 22));
    }

    #[test]
    fn test_check_method_concise() {
        let method = MethodUnit::new("Foo", "{ return 1; }");
        assert!(WordyMethodChecker::new()
            .check_method("Foo.cs", &method)
            .is_none());
    }
}
