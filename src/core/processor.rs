//! The per-record message pipeline and its processing summary.
//!
//! Every record goes through the same ordered checks. The first one that
//! fails decides the record's fate:
//!
//! 1. Not a `"message"` object: ignored, nothing counted.
//! 2. No sender: `name_not_found`.
//! 3. Sender in the skip list: `skipped_by_sender[sender]`.
//! 4. Rename (counted in `renamed_by_sender[original]` when it changes the name).
//! 5. No text: `text_not_found`.
//! 6. Otherwise `accepted`, and a [`Message`] is emitted.
//!
//! # Example
//!
//! ```
//! use chatsift::config::RuleConfig;
//! use chatsift::core::processor::{ProcessingSummary, process_records};
//! use serde_json::json;
//!
//! let records = json!([
//!     {"type": "message", "from": "alice", "text": "hi"},
//!     {"type": "message", "from": "bob", "text": "yo"},
//!     {"type": "service"}
//! ]);
//! let config = RuleConfig::new().with_skip_sender("bob");
//! let mut summary = ProcessingSummary::new();
//!
//! let messages = process_records(&config, &mut summary, records.as_array().unwrap());
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender(), "alice");
//! assert_eq!(summary.accepted, 1);
//! assert_eq!(summary.skipped_by_sender["bob"], 1);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::Message;
use crate::config::RuleConfig;
use crate::error::{ChatsiftError, Result};
use crate::parsing::telegram::{self, RawRecord};

/// Counts of why records were accepted or dropped.
///
/// One summary accumulates across a whole run, over every input file.
/// Per-sender maps keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    /// Message records with neither `from` nor `actor`.
    pub name_not_found: usize,
    /// Records dropped by the skip list, keyed by sender.
    pub skipped_by_sender: IndexMap<String, usize>,
    /// Records whose sender was renamed, keyed by the name before renaming.
    pub renamed_by_sender: IndexMap<String, usize>,
    /// Records with a sender but no usable text.
    pub text_not_found: usize,
    /// Records turned into messages.
    pub accepted: usize,
}

impl ProcessingSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records dropped by the skip list.
    pub fn skipped_total(&self) -> usize {
        self.skipped_by_sender.values().sum()
    }

    /// Total accepted-or-dropped records the pipeline counted.
    ///
    /// Renames are not an outcome of their own and aren't included.
    pub fn counted_total(&self) -> usize {
        self.name_not_found + self.skipped_total() + self.text_not_found + self.accepted
    }

    fn record_skip(&mut self, sender: &str) {
        *self.skipped_by_sender.entry(sender.to_string()).or_default() += 1;
    }

    fn record_rename(&mut self, original: &str) {
        *self
            .renamed_by_sender
            .entry(original.to_string())
            .or_default() += 1;
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &IndexMap<String, usize>) -> fmt::Result {
    if counts.is_empty() {
        return write!(f, "none");
    }
    for (i, (name, count)) in counts.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{name} ({count})")?;
    }
    Ok(())
}

impl fmt::Display for ProcessingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accepted:        {}", self.accepted)?;
        writeln!(f, "Name not found:  {}", self.name_not_found)?;
        writeln!(f, "Text not found:  {}", self.text_not_found)?;
        write!(f, "Skipped:         ")?;
        write_counts(f, &self.skipped_by_sender)?;
        writeln!(f)?;
        write!(f, "Renamed:         ")?;
        write_counts(f, &self.renamed_by_sender)
    }
}

/// Runs the pipeline over a batch of raw records.
///
/// Output order follows input order. `summary` is updated for every record
/// that reaches step 2 or later.
pub fn process_records<'v>(
    config: &RuleConfig,
    summary: &mut ProcessingSummary,
    records: impl IntoIterator<Item = &'v Value>,
) -> Vec<Message> {
    let mut messages = Vec::new();

    for value in records {
        let RawRecord::Message(record) = RawRecord::from_value(value) else {
            continue;
        };

        let Some(sender) = telegram::resolve_sender(&record) else {
            tracing::debug!("message record without sender");
            summary.name_not_found += 1;
            continue;
        };

        if config.skips(sender) {
            tracing::trace!(sender, "skipped sender");
            summary.record_skip(sender);
            continue;
        }

        let renamed = config.rename(sender);
        if renamed != sender {
            summary.record_rename(sender);
        }

        let Some(text) = telegram::extract_text(&record) else {
            tracing::debug!(sender, "message record without text");
            summary.text_not_found += 1;
            continue;
        };

        summary.accepted += 1;
        messages.push(Message::new(text, renamed));
    }

    messages
}

/// Runs the pipeline over a whole Telegram export document.
///
/// Fails with [`ChatsiftError::InvalidFormat`] when the document has no
/// `messages` array; individual records never cause an error.
pub fn process_export(
    config: &RuleConfig,
    summary: &mut ProcessingSummary,
    document: &Value,
) -> Result<Vec<Message>> {
    let records = telegram::export_messages(document).ok_or_else(|| {
        ChatsiftError::invalid_format("Telegram JSON", "expected an object with a 'messages' array")
    })?;

    Ok(process_records(config, summary, records))
}

/// Distinct senders among `messages`, ignoring blank names.
pub fn unique_senders(messages: &[Message]) -> BTreeSet<String> {
    messages
        .iter()
        .map(Message::sender)
        .filter(|sender| !sender.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}
