//! Reading export files from disk and running the pipeline over them.
//!
//! Files are processed one at a time, in file-name order, and all of them
//! feed a single [`ProcessingSummary`].
//!
//! # Example
//!
//! ```rust,no_run
//! use chatsift::config::RuleConfig;
//! use chatsift::ingest::run_directory;
//!
//! # fn main() -> chatsift::Result<()> {
//! let config = RuleConfig::from_path("config.yaml")?;
//! let report = run_directory(&config, "raw-data/telegram")?;
//!
//! println!("{}", report.summary);
//! println!("{:?}", report.unique_senders());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::Message;
use crate::config::RuleConfig;
use crate::core::processor::{self, ProcessingSummary};
use crate::error::{ChatsiftError, Result};

/// Messages and summary from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Accepted messages, in file order then record order.
    pub messages: Vec<Message>,
    /// Outcome counts over every processed file.
    pub summary: ProcessingSummary,
    /// Files that were processed.
    pub files: Vec<PathBuf>,
}

impl BatchReport {
    /// Distinct non-blank senders among the accepted messages.
    pub fn unique_senders(&self) -> BTreeSet<String> {
        processor::unique_senders(&self.messages)
    }
}

/// Lists `*.json` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched. A missing directory is an error; an
/// empty one is not.
pub fn collect_exports(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ChatsiftError::missing_input(dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            ChatsiftError::Io(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::other(format!("failed to walk {}", dir.display()))
            }))
        })?;

        let path = entry.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if entry.file_type().is_file() && is_json {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Reads and parses one export file as JSON.
pub fn read_export(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ChatsiftError::telegram_parse(e, Some(path.to_path_buf())))
}

/// Runs the pipeline over the given export files.
///
/// Stops at the first file that can't be read or isn't a Telegram export.
pub fn run_files<P: AsRef<Path>>(config: &RuleConfig, files: &[P]) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in files {
        let path = path.as_ref();
        let document = read_export(path)?;
        let messages = processor::process_export(config, &mut report.summary, &document)
            .map_err(|e| match e {
                ChatsiftError::InvalidFormat { format, message } => ChatsiftError::InvalidFormat {
                    format,
                    message: format!("{message} in {}", path.display()),
                },
                other => other,
            })?;

        tracing::info!(
            path = %path.display(),
            accepted = messages.len(),
            "processed export"
        );
        report.messages.extend(messages);
        report.files.push(path.to_path_buf());
    }

    Ok(report)
}

/// Runs the pipeline over every export in `dir`.
pub fn run_directory(config: &RuleConfig, dir: impl AsRef<Path>) -> Result<BatchReport> {
    let dir = dir.as_ref();
    let files = collect_exports(dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .json exports found");
    }
    run_files(config, &files)
}
