//! Command-line interface.

pub mod generate;
pub mod output;

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::constants::{DEBUG_ENV, DEFAULT_AUTH_FILE, OUTPUT_ENV};
use crate::error::Result;

/// Generate APT auth.conf credentials from AWS Secrets Manager.
#[derive(Parser, Debug)]
#[command(
    name = "generate-apt-auth",
    about = "Generate APT auth.conf credentials from AWS Secrets Manager",
    version
)]
pub struct Cli {
    /// JSON file listing {"machine", "authFrom"} pairs
    pub descriptor: PathBuf,

    /// Auth file to write
    #[arg(short, long, env = OUTPUT_ENV, default_value = DEFAULT_AUTH_FILE)]
    pub output: PathBuf,

    /// AWS region (defaults to the AWS provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Enable debug logging (also enabled by any non-empty DEBUG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Log line format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Whether debug logging is on, from `--verbose` or the `DEBUG` variable.
    pub fn debug_enabled(&self) -> bool {
        self.verbose || debug_requested(std::env::var_os(DEBUG_ENV).as_deref())
    }
}

/// Any non-empty `DEBUG` value requests debug logs, including `0` and `false`.
pub fn debug_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Run the CLI.
pub fn execute(cli: &Cli) -> Result<()> {
    generate::execute(&cli.descriptor, &cli.output, cli.region.clone())
}
