//! Parsing of raw export records into typed views.
//!
//! Only Telegram Desktop JSON exports are understood.

pub mod telegram;

// Re-export commonly used items
pub use telegram::{MessageRecord, RawRecord, TextBody, TextPart, extract_text, resolve_sender};
