//! Output writers.
//!
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one `{"text", "sender"}` object per line
//! - [`read_jsonl`] / [`from_jsonl_str`] - read JSONL output back
//! - [`split_by_sender`] - group messages for per-persona files
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::core::output::{split_by_sender, write_jsonl};
//! use chatsift::Message;
//!
//! let messages = vec![
//!     Message::new("Hello!", "Alice"),
//!     Message::new("Hi there!", "Bob"),
//! ];
//!
//! write_jsonl(&messages, "combined.jsonl")?;
//!
//! for (sender, group) in split_by_sender(&messages) {
//!     write_jsonl(group.iter().copied(), format!("{sender}.jsonl"))?;
//! }
//! # Ok(())
//! # }
//! ```

mod jsonl_writer;
mod split;

pub use jsonl_writer::{from_jsonl_str, read_jsonl, to_jsonl, write_jsonl, write_jsonl_to};
pub use split::split_by_sender;
