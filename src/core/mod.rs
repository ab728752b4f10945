//! Core processing logic for chatsift.
//!
//! This module contains:
//! - [`filter`] - Sender skip and rename rules
//! - [`processor`] - The per-record pipeline and [`ProcessingSummary`]
//! - [`output`] - JSONL writer and persona split
//!
//! # Quick Start
//!
//! ```rust
//! use chatsift::core::{
//!     Message, ProcessingSummary, process_records, split_by_sender, to_jsonl,
//! };
//! ```

pub mod filter;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{rename, should_skip};
pub use output::{read_jsonl, split_by_sender, to_jsonl, write_jsonl};
pub use processor::{ProcessingSummary, process_export, process_records, unique_senders};

// Re-export Message from the crate root
pub use crate::Message;
