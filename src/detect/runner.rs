//! Detection runner that checks every method of a set of files.

use anyhow::Context;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::parser;

use super::{filter_suppressed, is_generated, parse_suppressions, CheckResult, WordyMethodChecker};

/// Executes the `WordyMethod` rule against a set of files.
pub struct Runner {
    config: Config,
    checker: WordyMethodChecker,
}

impl Runner {
    /// Create a new detection runner.
    pub fn new(config: Config) -> Self {
        let checker = WordyMethodChecker::new()
            .with_max_words(config.max_words)
            .with_severity(config.severity);
        Self { config, checker }
    }

    /// Check all files. Files are processed in parallel; the result is
    /// sorted by file and position.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<CheckResult> {
        let per_file = files
            .par_iter()
            .map(|file| self.check_file(file))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut result = CheckResult::new();
        for file_result in per_file {
            result.merge(file_result);
        }
        result.sort();

        tracing::info!(
            files = result.scanned,
            methods = result.methods_checked,
            diagnostics = result.diagnostics.len(),
            suppressed = result.suppressed.len(),
            generated_skipped = result.generated_skipped,
            "check finished"
        );

        Ok(result)
    }

    /// Check a single file.
    fn check_file(&self, path: &Path) -> anyhow::Result<CheckResult> {
        let mut result = CheckResult::new();

        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => format!(".{}", e),
            None => return Ok(result),
        };
        let Some(file_parser) = parser::for_extension(&ext) else {
            tracing::debug!(file = %path.display(), "no parser for extension, skipping");
            return Ok(result);
        };

        let source = match std::fs::read(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "cannot read file, skipping");
                return Ok(result);
            }
        };
        let content = String::from_utf8_lossy(&source);

        if !self.config.analyze_generated_code && is_generated(path, &content) {
            tracing::debug!(file = %path.display(), "generated file, skipping");
            result.generated_skipped = 1;
            return Ok(result);
        }

        let methods = file_parser
            .methods(&source)
            .with_context(|| format!("parsing {}", path.display()))?;

        let file_str = path.to_string_lossy().to_string();
        let diagnostics: Vec<_> = methods
            .iter()
            .filter_map(|m| self.checker.check_method(&file_str, m))
            .collect();

        tracing::debug!(
            file = %file_str,
            language = file_parser.language(),
            methods = methods.len(),
            diagnostics = diagnostics.len(),
            "file checked"
        );

        let suppressions = parse_suppressions(&file_str, &content);
        let (active, suppressed) = filter_suppressed(diagnostics, &suppressions);

        result.diagnostics = active;
        result.suppressed = suppressed;
        result.scanned = 1;
        result.methods_checked = methods.len();
        Ok(result)
    }
}
