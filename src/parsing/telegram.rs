//! Telegram export record parsing.
//!
//! Export records arrive as arbitrary JSON. They are narrowed once, at the
//! pipeline boundary, into [`RawRecord`]; everything downstream works on the
//! typed view and never touches `serde_json::Value` again.
//!
//! The `text` field in Telegram exports can be:
//! - A simple string: `"Hello"`
//! - An array of strings and annotated spans:
//!   `["Check ", {"type": "link", "text": "https://example.com"}]`
//! - `null` or missing (stickers, media without caption)

use serde_json::{Map, Value};

/// Record type tag for regular chat messages. Everything else
/// (`"service"`, ...) is ignored.
pub const MESSAGE_TYPE: &str = "message";

/// A raw export record after narrowing.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord<'a> {
    /// A JSON object tagged `"type": "message"`.
    Message(MessageRecord<'a>),
    /// Anything else: not an object, no type tag, or a non-message type.
    Ignored,
}

impl<'a> RawRecord<'a> {
    /// Narrows one element of the export's `messages` array.
    ///
    /// # Example
    ///
    /// ```
    /// use chatsift::parsing::telegram::RawRecord;
    /// use serde_json::json;
    ///
    /// let service = json!({"type": "service", "actor": "Alice"});
    /// assert_eq!(RawRecord::from_value(&service), RawRecord::Ignored);
    ///
    /// let msg = json!({"type": "message", "from": "Alice", "text": "hi"});
    /// assert!(matches!(RawRecord::from_value(&msg), RawRecord::Message(_)));
    /// ```
    pub fn from_value(value: &'a Value) -> Self {
        let Value::Object(obj) = value else {
            return RawRecord::Ignored;
        };

        match obj.get("type").and_then(Value::as_str) {
            Some(MESSAGE_TYPE) => RawRecord::Message(MessageRecord::from_object(obj)),
            _ => RawRecord::Ignored,
        }
    }
}

/// The interpreted fields of a message record.
///
/// Author fields keep only string values; a number or object under `from`
/// is the same as a missing field.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord<'a> {
    /// Primary author field (`from`).
    pub from: Option<&'a str>,
    /// Alternate author field (`actor`), used by some exported entries.
    pub actor: Option<&'a str>,
    /// Message body.
    pub text: TextBody<'a>,
}

impl<'a> MessageRecord<'a> {
    /// Reads the interpreted fields from a JSON object, ignoring its `type`.
    pub fn from_object(obj: &'a Map<String, Value>) -> Self {
        Self {
            from: obj.get("from").and_then(Value::as_str),
            actor: obj.get("actor").and_then(Value::as_str),
            text: TextBody::from_field(obj.get("text")),
        }
    }

    /// Like [`from_object`](Self::from_object) for any JSON value; `None` if
    /// the value is not an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::from_object)
    }
}

/// Shape of a record's `text` field.
#[derive(Debug, Clone, PartialEq)]
pub enum TextBody<'a> {
    /// Field missing or `null`.
    Absent,
    /// A plain string.
    Plain(&'a str),
    /// A sequence of strings and annotated spans.
    Parts(Vec<TextPart<'a>>),
    /// Any other JSON type (number, bool, object).
    Unsupported,
}

impl<'a> TextBody<'a> {
    fn from_field(field: Option<&'a Value>) -> Self {
        match field {
            None | Some(Value::Null) => TextBody::Absent,
            Some(Value::String(s)) => TextBody::Plain(s),
            Some(Value::Array(items)) => {
                TextBody::Parts(items.iter().map(TextPart::from_value).collect())
            }
            Some(_) => TextBody::Unsupported,
        }
    }
}

/// One element of a rich text array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPart<'a> {
    /// A bare string element.
    Plain(&'a str),
    /// An annotated span (`{"type": "bold", "text": "..."}`) with string text.
    Span(&'a str),
    /// Contributes nothing.
    Ignored,
}

impl<'a> TextPart<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::String(s) => TextPart::Plain(s),
            Value::Object(obj) => match obj.get("text") {
                Some(Value::String(s)) => TextPart::Span(s),
                _ => TextPart::Ignored,
            },
            _ => TextPart::Ignored,
        }
    }

    fn as_str(self) -> &'a str {
        match self {
            TextPart::Plain(s) | TextPart::Span(s) => s,
            TextPart::Ignored => "",
        }
    }
}

/// Resolves the author of a message record.
///
/// Returns `from` when it is a non-empty string, otherwise `actor` under the
/// same rule, otherwise `None`. Whitespace-only names count as non-empty.
///
/// # Example
///
/// ```
/// use chatsift::parsing::telegram::{MessageRecord, resolve_sender};
/// use serde_json::json;
///
/// let value = json!({"from": null, "actor": "Bob"});
/// let record = MessageRecord::from_value(&value).unwrap();
/// assert_eq!(resolve_sender(&record), Some("Bob"));
/// ```
pub fn resolve_sender<'a>(record: &MessageRecord<'a>) -> Option<&'a str> {
    record
        .from
        .filter(|name| !name.is_empty())
        .or_else(|| record.actor.filter(|name| !name.is_empty()))
}

/// Flattens a record's body into plain text.
///
/// - Non-blank string: trimmed string.
/// - Array: strings and span texts concatenated in order, then trimmed.
///   An empty array (or one whose items are all ignored) gives `Some("")`.
/// - `null`, missing, blank string or any other type: `None`.
///
/// # Example
///
/// ```
/// use chatsift::parsing::telegram::{MessageRecord, extract_text};
/// use serde_json::json;
///
/// let value = json!({"text": ["a", {"type": "bold", "text": "b"}, 42]});
/// let record = MessageRecord::from_value(&value).unwrap();
/// assert_eq!(extract_text(&record).as_deref(), Some("ab"));
///
/// let value = json!({"text": null});
/// let record = MessageRecord::from_value(&value).unwrap();
/// assert_eq!(extract_text(&record), None);
/// ```
pub fn extract_text(record: &MessageRecord<'_>) -> Option<String> {
    match &record.text {
        TextBody::Plain(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        TextBody::Parts(parts) => {
            let joined: String = parts.iter().map(|part| part.as_str()).collect();
            Some(joined.trim().to_string())
        }
        TextBody::Absent | TextBody::Unsupported => None,
    }
}

/// Returns the `messages` array of a Telegram export document.
///
/// Returns `None` when the document is not an object or has no `messages`
/// array; callers treat that as a malformed export.
pub fn export_messages(document: &Value) -> Option<&[Value]> {
    document
        .get("messages")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}
