//! Command-line interface for wordycheck.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::detect::Runner;
use crate::parser;
use crate::report::{self, Format};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["vendor", "node_modules", "bin", "obj", "target"];

/// Flag wordy methods - method bodies with more words than allowed.
#[derive(Parser)]
#[command(name = "wordycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check methods for wordiness
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// Write a default wordycheck.yaml
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to check (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty, json, or sarif
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum words allowed in a method body (overrides the config file)
    #[arg(short, long)]
    pub max_words: Option<usize>,

    /// Show suppressed diagnostics in output
    #[arg(long)]
    pub show_suppressed: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "wordycheck.yaml")]
    pub output: PathBuf,
}

/// Collect files with a registered parser under `root`.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let supported = parser::supported_extensions();
    let excluded = config.exclusion_matcher()?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !SKIPPED_DIRS.contains(&&*name)
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => format!(".{}", e),
            None => continue,
        };
        if !supported.contains(&ext) {
            continue;
        }
        if excluded.is_excluded(root, path) {
            tracing::debug!(file = %path.display(), "excluded by config");
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Load the configuration named on the command line, or discover one.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config::discover(Path::new(".")),
    };

    let config = match &path {
        Some(p) => {
            tracing::debug!(config = %p.display(), "loading config");
            Config::parse_file(p)?
        }
        None => Config::default(),
    };

    Ok((config, path))
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    parser::init();

    let format: Format = match args.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let (mut config, config_path) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(max_words) = args.max_words {
        config.max_words = max_words;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return Ok(EXIT_ERROR);
    }

    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = if abs_path.is_dir() {
        collect_files(&abs_path, &config)?
    } else {
        vec![abs_path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }
    tracing::info!(files = files.len(), max_words = config.max_words, "checking");

    let severity = config.severity;
    let runner = Runner::new(config);
    let result = runner.run(&files)?;

    let config_str = config_path.map(|p| p.to_string_lossy().to_string());
    let path_str = args.path.to_string_lossy().to_string();

    match format {
        Format::Json => report::write_json(&path_str, config_str.as_deref(), &result)?,
        Format::Sarif => report::write_sarif(&abs_path, &result, severity)?,
        Format::Pretty => report::write_pretty(
            &path_str,
            config_str.as_deref(),
            &result,
            args.show_suppressed,
        ),
    }

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, config::DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune max_words and exclusions", args.output.display());
    println!("  2. Run: wordycheck check . --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "wordycheck",
            "-v",
            "lint",
            "src",
            "--format",
            "json",
            "--max-words",
            "20",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.path, PathBuf::from("src"));
                assert_eq!(args.format, "json");
                assert_eq!(args.max_words, Some(20));
                assert!(!args.show_suppressed);
            }
            Commands::Init(_) => panic!("expected check"),
        }
    }

    #[test]
    fn test_collect_files() {
        parser::init();
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("obj/Debug")).unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("Migrations")).unwrap();
        std::fs::create_dir_all(root.join("src/Legacy")).unwrap();
        std::fs::write(root.join("src/App.cs"), "class App {}").unwrap();
        std::fs::write(root.join("src/notes.md"), "# notes").unwrap();
        std::fs::write(root.join("obj/Debug/App.g.cs"), "class G {}").unwrap();
        std::fs::write(root.join(".git/hook.py"), "pass").unwrap();
        std::fs::write(root.join("Migrations/Init.cs"), "class Init {}").unwrap();
        std::fs::write(root.join("src/Legacy/Old.cs"), "class Old {}").unwrap();
        std::fs::write(root.join("main.go"), "package main").unwrap();

        let config = Config {
            excluded_paths: vec!["**/Migrations/**".to_string(), "src/Legacy/**".to_string()],
            ..Default::default()
        };
        let files = collect_files(root, &config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(names, vec!["main.go", "src/App.cs"]);
    }

    #[test]
    fn test_init_writes_template() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("conf/wordycheck.yaml");

        let code = run_init(&InitArgs {
            output: output.clone(),
        })
        .unwrap();
        assert_eq!(code, EXIT_SUCCESS);

        let config = Config::parse_file(&output).unwrap();
        assert_eq!(config.max_words, 10);

        let again = run_init(&InitArgs { output }).unwrap();
        assert_eq!(again, EXIT_ERROR);
    }
}
