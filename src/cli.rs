//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - global options (config path, log level)
//! - [`Command`] - subcommands
//! - [`OutputType`] - output format choice for `--output-type`
//! - [`LogLevel`] - stderr log verbosity

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILENAME;

/// Prepare Telegram chat exports as JSONL datasets.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift telegram --output-type jsonl
    chatsift -c rules.yaml telegram -t jsonl --split-persona
    chatsift telegram -t jsonl -i exports/ -o dataset/")]
pub struct Args {
    /// Path to YAML config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Log verbosity (overridden by RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Process Telegram group chat exports
    #[command(alias = "process.telegram", alias = "tg")]
    Telegram(TelegramArgs),
}

/// Options for the `telegram` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct TelegramArgs {
    /// Format to save the processed messages
    #[arg(short = 't', long, value_enum, ignore_case = true)]
    pub output_type: OutputType,

    /// Split output into one file per sender
    #[arg(short, long)]
    pub split_persona: bool,

    /// Directory containing Telegram `*.json` exports
    #[arg(short, long, default_value = "raw-data/telegram")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "raw-data")]
    pub output: PathBuf,
}

/// Output type accepted on the command line.
///
/// Every library [`OutputFormat`](crate::format::OutputFormat) is accepted
/// here; unsupported ones are rejected when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputType {
    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV (not supported yet)
    Csv,
}

impl From<OutputType> for crate::format::OutputFormat {
    fn from(output_type: OutputType) -> crate::format::OutputFormat {
        match output_type {
            OutputType::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputType::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

/// Log verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and per-file progress.
    Info,
    /// Also per-record drop reasons.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    #[test]
    fn test_parse_full_command() {
        let args = Args::try_parse_from([
            "chatsift",
            "-c",
            "rules.yaml",
            "telegram",
            "--output-type",
            "jsonl",
            "--split-persona",
            "-i",
            "in",
            "-o",
            "out",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("rules.yaml"));
        let Command::Telegram(tg) = args.command;
        assert_eq!(tg.output_type, OutputType::Jsonl);
        assert!(tg.split_persona);
        assert_eq!(tg.input, PathBuf::from("in"));
        assert_eq!(tg.output, PathBuf::from("out"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatsift", "telegram", "-t", "csv"]).unwrap();
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILENAME));
        assert_eq!(args.log_level, LogLevel::Warn);

        let Command::Telegram(tg) = args.command;
        assert_eq!(tg.output_type, OutputType::Csv);
        assert!(!tg.split_persona);
        assert_eq!(tg.input, PathBuf::from("raw-data/telegram"));
        assert_eq!(tg.output, PathBuf::from("raw-data"));
    }

    #[test]
    fn test_legacy_command_name() {
        let args =
            Args::try_parse_from(["chatsift", "process.telegram", "-t", "JSONL"]).unwrap();
        let Command::Telegram(tg) = args.command;
        assert_eq!(tg.output_type, OutputType::Jsonl);
    }

    #[test]
    fn test_output_type_required() {
        assert!(Args::try_parse_from(["chatsift", "telegram"]).is_err());
        assert!(Args::try_parse_from(["chatsift", "telegram", "-t", "xml"]).is_err());
    }

    #[test]
    fn test_output_type_conversion() {
        assert_eq!(OutputFormat::from(OutputType::Jsonl), OutputFormat::Jsonl);
        assert_eq!(OutputFormat::from(OutputType::Csv), OutputFormat::Csv);
    }

    #[test]
    fn test_log_level_filter_string() {
        assert_eq!(LogLevel::Error.to_filter_string(), "error");
        assert_eq!(LogLevel::Debug.to_filter_string(), "debug");
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
