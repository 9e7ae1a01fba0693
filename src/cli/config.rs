use std::path::PathBuf;

use clap::Parser;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::report::junit_model::CounterScope;

pub const DEFAULT_CONFIG_FILE: &str = "junit-report.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "junit-report",
    version,
    about = "Convert a YAML test report into JUnit XML"
)]
pub struct Cli {
    /// YAML test report to read
    pub source: PathBuf,

    /// JUnit XML file to write (default: stdout)
    pub destination: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exit with status 1 if any diagnostic was reported
    #[arg(long)]
    pub strict: bool,

    /// Where errors/disabled are counted: symmetric or root-only
    #[arg(long, value_enum)]
    pub counter_scope: Option<CounterScope>,

    /// Also write diagnostics as JSON lines to this file
    #[arg(long)]
    pub diagnostics: Option<PathBuf>,

    /// Path to config file (default: junit-report.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `junit-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub counter_scope: CounterScope,

    pub diagnostics: Option<PathBuf>,
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("no config loaded from {}: {}", config_path, e);
            return AppConfig::default();
        }
    };

    match serde_yaml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring malformed config {}: {}", config_path, e);
            AppConfig::default()
        }
    }
}

// ============================================================================
// Option resolution (merge CLI args with config file)
// ============================================================================

/// Effective settings for one conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    pub counter_scope: CounterScope,
    pub strict: bool,
    pub diagnostics: Option<PathBuf>,
}

/// Resolve settings: CLI > config > defaults.
pub fn resolve_options(cli: &Cli, config: &AppConfig) -> ConvertOptions {
    ConvertOptions {
        counter_scope: cli.counter_scope.unwrap_or(config.counter_scope),
        strict: cli.strict || config.strict,
        diagnostics: cli
            .diagnostics
            .clone()
            .or_else(|| config.diagnostics.clone()),
    }
}

/// Default log filter for a `-v` count. `RUST_LOG` still takes precedence.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
