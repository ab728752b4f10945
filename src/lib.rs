//! # Chatsift
//!
//! Turn Telegram chat exports into clean JSONL datasets, one line per
//! message, optionally split into one file per sender ("persona").
//!
//! ## Overview
//!
//! For every record of every export, chatsift:
//! - resolves the author (`from`, falling back to `actor`),
//! - drops senders on the skip list,
//! - renames senders through an ordered rename list,
//! - flattens rich text (strings mixed with bold/link/code spans) into plain text,
//! - counts why each record was accepted or dropped in a [`ProcessingSummary`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = RuleConfig::from_path("config.yaml")?;
//!     let report = run_directory(&config, "raw-data/telegram")?;
//!
//!     println!("{}", report.summary);
//!
//!     save_messages(
//!         &report.messages,
//!         OutputFormat::Jsonl,
//!         true,
//!         &ExportLayout::new("raw-data"),
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — narrowing raw JSON records, sender resolution, text extraction
//! - [`config`] — [`RuleConfig`](config::RuleConfig) (skip and rename rules, YAML)
//! - [`core`] — filter rules, the pipeline, JSONL output
//! - [`ingest`] — reading export directories
//! - [`format`] — output formats and on-disk layout
//! - [`error`] — [`ChatsiftError`], [`Result`]
//! - [`prelude`] — convenient re-exports
//!
//! [`ProcessingSummary`]: core::processor::ProcessingSummary

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod ingest;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatsiftError, Result};

    pub use crate::config::{RuleConfig, SenderTransform};

    pub use crate::core::filter::{rename, should_skip};
    pub use crate::core::processor::{
        ProcessingSummary, process_export, process_records, unique_senders,
    };
    pub use crate::core::output::{read_jsonl, split_by_sender, to_jsonl, write_jsonl};

    pub use crate::format::{ExportLayout, OutputFormat, save_messages};
    pub use crate::ingest::{BatchReport, run_directory};

    pub use crate::parsing::telegram::{RawRecord, extract_text, resolve_sender};
}
