//! JSON Lines (JSONL) output writer.
//!
//! Each line is one compact JSON object with exactly the `text` and `sender`
//! fields:
//!
//! ```jsonl
//! {"text":"Hello","sender":"Alice"}
//! {"text":"Hi","sender":"Bob"}
//! ```
//!
//! Every record, including the last, ends with `\n`. No array wrapper.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::error::{ChatsiftError, Result};

/// Serializes messages to any writer, one JSON object per line.
pub fn write_jsonl_to<'a, W, I>(writer: &mut W, messages: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Message>,
{
    let mut count = 0;
    for msg in messages {
        serde_json::to_writer(&mut *writer, msg)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Writes messages to a JSONL file, replacing any existing file.
///
/// Returns the number of lines written.
pub fn write_jsonl<'a, I>(messages: I, output_path: impl AsRef<Path>) -> Result<usize>
where
    I: IntoIterator<Item = &'a Message>,
{
    let output_path = output_path.as_ref();
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    let count = write_jsonl_to(&mut writer, messages)?;
    writer.flush()?;

    tracing::info!(path = %output_path.display(), lines = count, "wrote jsonl");
    Ok(count)
}

/// Serializes messages to a JSONL string.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut buf = Vec::new();
    write_jsonl_to(&mut buf, messages)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| {
        ChatsiftError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Parses JSONL text produced by [`to_jsonl`]. Blank lines are skipped.
pub fn from_jsonl_str(content: &str) -> Result<Vec<Message>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(ChatsiftError::from))
        .collect()
}

/// Reads a JSONL file produced by [`write_jsonl`].
pub fn read_jsonl(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    let reader = BufReader::new(File::open(path)?);
    let mut messages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        messages.push(serde_json::from_str(&line)?);
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let messages = vec![Message::new("Hello", "Alice"), Message::new("Hi", "Bob")];

        let temp_file = NamedTempFile::new().unwrap();
        let written = write_jsonl(&messages, temp_file.path()).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(
            content,
            "{\"text\":\"Hello\",\"sender\":\"Alice\"}\n{\"text\":\"Hi\",\"sender\":\"Bob\"}\n"
        );
    }

    #[test]
    fn test_jsonl_no_array_wrapper() {
        let out = to_jsonl(&[Message::new("Hello", "Alice")]).unwrap();
        assert!(!out.starts_with('['));
        assert!(out.ends_with("}\n"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_jsonl_empty() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
    }

    #[test]
    fn test_jsonl_escapes_newlines_and_keeps_unicode() {
        let out = to_jsonl(&[Message::new("line1\nline2 \"q\" Привет 🎉", "Иван")]).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("Привет 🎉"));
        assert!(out.contains("\\n"));
    }

    #[test]
    fn test_read_back() {
        let messages = vec![Message::new("", "a"), Message::new("x", "b")];
        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&messages, temp_file.path()).unwrap();

        assert_eq!(read_jsonl(temp_file.path()).unwrap(), messages);
        assert_eq!(from_jsonl_str(&to_jsonl(&messages).unwrap()).unwrap(), messages);
    }

    #[test]
    fn test_from_jsonl_str_rejects_garbage() {
        assert!(from_jsonl_str("{\"text\":\"a\"}\n").is_err());
        assert!(from_jsonl_str("not json\n").is_err());
    }
}
