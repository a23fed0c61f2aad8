//! Output formatting for wordycheck results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use colored::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::detect::{
    CheckResult, Diagnostic, Severity, SuppressedDiagnostic, SuppressionType, CATEGORY,
    DESCRIPTION, RULE_ID, TITLE,
};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pretty,
    Json,
    Sarif,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            "sarif" => Ok(Format::Sarif),
            _ => Err(format!(
                "invalid format {:?}, must be 'pretty', 'json', or 'sarif'",
                s
            )),
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    /// Configuration file used, or None for defaults
    pub config: Option<String>,
    pub passed: bool,
    pub files_scanned: usize,
    pub methods_checked: usize,
    pub generated_skipped: usize,
    pub diagnostics: Vec<JsonDiagnostic>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<JsonSuppressedDiagnostic>,
    pub suppressed_count: usize,
}

/// A diagnostic as reported in JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub rule: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub method: String,
    pub word_count: usize,
    pub message: String,
}

/// Suppressed diagnostic with suppression info.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSuppressedDiagnostic {
    pub diagnostic: JsonDiagnostic,
    pub suppression: JsonSuppression,
}

/// Suppression directive info.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSuppression {
    pub rule: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    pub file: String,
    pub line: usize,
    #[serde(rename = "type")]
    pub suppression_type: String,
}

/// Build the JSON report for a result.
pub fn json_report(path: &str, config_path: Option<&str>, result: &CheckResult) -> JsonReport {
    let suppressed = result
        .suppressed
        .iter()
        .map(|sd| JsonSuppressedDiagnostic {
            diagnostic: diagnostic_to_json(&sd.diagnostic),
            suppression: JsonSuppression {
                rule: sd.suppression.rule.clone(),
                reason: sd.suppression.reason.clone(),
                file: sd.suppression.file.clone(),
                line: sd.suppression.line,
                suppression_type: suppression_type_name(sd.suppression.suppression_type)
                    .to_string(),
            },
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        config: config_path.map(str::to_string),
        passed: result.passed(),
        files_scanned: result.scanned,
        methods_checked: result.methods_checked,
        generated_skipped: result.generated_skipped,
        diagnostics: result.diagnostics.iter().map(diagnostic_to_json).collect(),
        suppressed,
        suppressed_count: result.suppressed_count(),
    }
}

/// Render results in JSON format.
pub fn render_json(
    path: &str,
    config_path: Option<&str>,
    result: &CheckResult,
) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&json_report(
        path,
        config_path,
        result,
    ))?)
}

/// Write results in JSON format.
pub fn write_json(path: &str, config_path: Option<&str>, result: &CheckResult) -> anyhow::Result<()> {
    println!("{}", render_json(path, config_path, result)?);
    Ok(())
}

fn diagnostic_to_json(d: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        rule: d.rule_id.clone(),
        severity: d.severity.to_string(),
        file: d.file.clone(),
        line: d.line,
        column: d.column,
        end_line: d.end_line,
        end_column: d.end_column,
        method: d.method.clone(),
        word_count: d.word_count,
        message: d.message.clone(),
    }
}

fn suppression_type_name(t: SuppressionType) -> &'static str {
    match t {
        SuppressionType::Line => "line",
        SuppressionType::NextLine => "nextline",
        SuppressionType::File => "file",
    }
}

// =============================================================================
// SARIF Format
// =============================================================================

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const TOOL_NAME: &str = "wordycheck";
const COLUMN_KIND: &str = "utf16CodeUnits";

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifReport {
    pub version: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    /// Unit of region columns; spans count UTF-16 code units.
    #[serde(rename = "columnKind")]
    pub column_kind: String,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: SarifMessage,
    #[serde(rename = "fullDescription")]
    pub full_description: SarifMessage,
    #[serde(rename = "defaultConfiguration")]
    pub default_config: SarifRuleConfig,
    pub properties: SarifRuleProperties,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifRuleConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifRuleProperties {
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifResult {
    #[serde(rename = "ruleId")]
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    pub artifact_location: SarifArtifact,
    pub region: SarifRegion,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifArtifact {
    pub uri: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SarifRegion {
    #[serde(rename = "startLine")]
    pub start_line: usize,
    #[serde(rename = "startColumn")]
    pub start_column: usize,
    #[serde(rename = "endLine")]
    pub end_line: usize,
    #[serde(rename = "endColumn")]
    pub end_column: usize,
}

fn map_severity_to_level(severity: &Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "note",
    }
}

fn make_relative_path(file_path: &str, base_path: &Path) -> String {
    if base_path.as_os_str().is_empty() {
        return file_path.to_string();
    }

    let file = Path::new(file_path);

    // Single file scan: report just the file name
    if file == base_path {
        return file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.to_string());
    }

    file.strip_prefix(base_path)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_else(|_| file_path.to_string())
}

/// Build the SARIF report for a result.
pub fn sarif_report(base_path: &Path, result: &CheckResult, default_severity: Severity) -> SarifReport {
    let rules = vec![SarifRule {
        id: RULE_ID.to_string(),
        name: RULE_ID.to_string(),
        short_description: SarifMessage {
            text: TITLE.to_string(),
        },
        full_description: SarifMessage {
            text: DESCRIPTION.to_string(),
        },
        default_config: SarifRuleConfig {
            level: map_severity_to_level(&default_severity).to_string(),
        },
        properties: SarifRuleProperties {
            category: CATEGORY.to_string(),
        },
    }];

    let results = result
        .diagnostics
        .iter()
        .map(|d| SarifResult {
            rule_id: d.rule_id.clone(),
            level: map_severity_to_level(&d.severity).to_string(),
            message: SarifMessage {
                text: d.message.clone(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifact {
                        uri: make_relative_path(&d.file, base_path),
                    },
                    region: SarifRegion {
                        start_line: d.line.max(1),
                        start_column: d.column.max(1),
                        end_line: d.end_line.max(1),
                        end_column: d.end_column.max(1),
                    },
                },
            }],
        })
        .collect();

    SarifReport {
        version: SARIF_VERSION.to_string(),
        schema: SARIF_SCHEMA.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules,
                },
            },
            column_kind: COLUMN_KIND.to_string(),
            results,
        }],
    }
}

/// Render results in SARIF format.
pub fn render_sarif(
    base_path: &Path,
    result: &CheckResult,
    default_severity: Severity,
) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&sarif_report(
        base_path,
        result,
        default_severity,
    ))?)
}

/// Write results in SARIF format.
pub fn write_sarif(
    base_path: &Path,
    result: &CheckResult,
    default_severity: Severity,
) -> anyhow::Result<()> {
    println!("{}", render_sarif(base_path, result, default_severity)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(
    path: &str,
    config_path: Option<&str>,
    result: &CheckResult,
    show_suppressed: bool,
) {
    println!();
    print!("  ");
    print!("{}", "wordycheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    print!("  {}", "Config:   ".dimmed());
    println!("{}", config_path.unwrap_or("(defaults)"));
    println!();

    write_result_summary(result);
    println!();

    if !result.diagnostics.is_empty() {
        write_diagnostics(&result.diagnostics);
        println!();
    }

    if !result.suppressed.is_empty() {
        write_suppressed_summary(&result.suppressed, show_suppressed);
        println!();
    }
}

fn write_result_summary(result: &CheckResult) {
    if result.passed() {
        print!("  {}", "✓ PASS".green());
    } else {
        print!("  {}", "✗ FAIL".red());
    }

    print!(
        "  {} files, {} methods",
        result.scanned, result.methods_checked
    );
    print!("  Wordy: ");
    let count = result.diagnostics.len();
    if count == 0 {
        print!("{}", count.to_string().green().bold());
    } else {
        print!("{}", count.to_string().red());
    }

    if result.generated_skipped > 0 {
        print!(
            "  {}",
            format!("({} generated skipped)", result.generated_skipped).dimmed()
        );
    }
    if !result.suppressed.is_empty() {
        print!(
            "  {}",
            format!("({} suppressed)", result.suppressed.len()).dimmed()
        );
    }

    println!();
}

fn write_diagnostics(diagnostics: &[Diagnostic]) {
    println!("  {} ({}):", "Diagnostics".bold(), diagnostics.len());
    println!();

    for d in diagnostics {
        write_severity_tag(&d.severity);
        print!("   ");
        print!("{:<14}", d.rule_id.dimmed());
        print!("{}", d.file.blue());
        if d.line > 0 {
            print!("{}", format!(":{}:{}", d.line, d.column).dimmed());
        }
        println!();

        println!("            {}", d.message);
        println!();
    }
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::Error => print!("    {} ", "ERROR".red()),
        Severity::Warning => print!("    {} ", "WARN ".yellow()),
        Severity::Info => print!("    {} ", "INFO ".blue()),
    }
}

fn write_suppressed_summary(suppressed: &[SuppressedDiagnostic], show_details: bool) {
    println!("  {} ({}):", "Suppressed".dimmed(), suppressed.len());

    if !show_details {
        println!("    {}", "(use --show-suppressed to see details)".dimmed());
        return;
    }

    println!();
    for sd in suppressed {
        let d = &sd.diagnostic;
        let s = &sd.suppression;

        print!("    {:<14}", d.rule_id.dimmed());
        print!("{}", d.file.blue());
        if s.suppression_type == SuppressionType::File {
            print!("{}", ":* (file)".dimmed());
        } else if d.line > 0 {
            print!("{}", format!(":{}", d.line).dimmed());
        }
        println!();

        if !s.reason.is_empty() {
            println!("            {}", format!("reason: {:?}", s.reason).dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Suppression;

    fn diagnostic(file: &str) -> Diagnostic {
        Diagnostic {
            rule_id: RULE_ID.to_string(),
            severity: Severity::Warning,
            file: file.to_string(),
            method: "Run".to_string(),
            word_count: 12,
            line: 4,
            column: 17,
            end_line: 4,
            end_column: 20,
            message: "Method 'Run' contains 12 words, which is more than the allowed 10 words"
                .to_string(),
        }
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("sarif".parse::<Format>().unwrap(), Format::Sarif);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_make_relative_path() {
        let base = Path::new("/repo");
        assert_eq!(make_relative_path("/repo/src/Job.cs", base), "src/Job.cs");
        assert_eq!(make_relative_path("/other/Job.cs", base), "/other/Job.cs");
        assert_eq!(
            make_relative_path("/repo/Job.cs", Path::new("/repo/Job.cs")),
            "Job.cs"
        );
    }

    #[test]
    fn test_json_report_suppressed() {
        let mut result = CheckResult::new();
        result.scanned = 1;
        result.methods_checked = 3;
        result.suppressed.push(SuppressedDiagnostic {
            diagnostic: diagnostic("/repo/Job.cs"),
            suppression: Suppression {
                rule: RULE_ID.to_string(),
                reason: "table".to_string(),
                file: "/repo/Job.cs".to_string(),
                line: 3,
                suppression_type: SuppressionType::NextLine,
            },
        });

        let report = json_report("/repo", None, &result);
        assert!(report.passed);
        assert_eq!(report.suppressed_count, 1);
        assert_eq!(report.suppressed[0].suppression.suppression_type, "nextline");
        assert!(report.config.is_none());
    }

    #[test]
    fn test_sarif_region_is_name_span() {
        let mut result = CheckResult::new();
        result.add_diagnostic(diagnostic("/repo/src/Job.cs"));

        let report = sarif_report(Path::new("/repo"), &result, Severity::Warning);
        let run = &report.runs[0];
        assert_eq!(run.tool.driver.rules.len(), 1);
        assert_eq!(run.tool.driver.rules[0].id, "WordyMethod");
        assert_eq!(run.column_kind, "utf16CodeUnits");

        let location = &run.results[0].locations[0].physical_location;
        assert_eq!(location.artifact_location.uri, "src/Job.cs");
        assert_eq!(location.region.start_line, 4);
        assert_eq!(location.region.start_column, 17);
        assert_eq!(location.region.end_column, 20);
        assert_eq!(run.results[0].level, "warning");
    }
}
