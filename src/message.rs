//! Normalized output message.
//!
//! [`Message`] is what the pipeline emits for every accepted record: the
//! flattened text and the final (possibly renamed) sender. Nothing else from
//! the export survives.
//!
//! # Examples
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("Hello, world!", "Alice");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "Hello, world!");
//! ```
//!
//! ## Serialization
//!
//! Serialized form has exactly two fields, `text` first:
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("Hello!", "Alice");
//! let json = serde_json::to_string(&msg)?;
//! assert_eq!(json, r#"{"text":"Hello!","sender":"Alice"}"#);
//!
//! let parsed: Message = serde_json::from_str(&json)?;
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// A normalized chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `text` | `String` | Trimmed, flattened message body |
/// | `sender` | `String` | Author name after rename rules |
///
/// Fields are private; a message is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Message {
    text: String,
    sender: String,
}

impl Message {
    /// Creates a message from its text and sender.
    pub fn new(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
        }
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns `true` if the text is empty.
    ///
    /// Empty text is a valid accepted message (for example a Telegram message
    /// whose `text` is an empty array).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the message and returns `(text, sender)`.
    pub fn into_parts(self) -> (String, String) {
        (self.text, self.sender)
    }
}
