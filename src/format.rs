//! Output formats and on-disk layout.
//!
//! Only JSON Lines is implemented. CSV is a recognized format name so that
//! it can be rejected explicitly, before anything is written.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::format::{ExportLayout, OutputFormat, save_messages};
//! use chatsift::Message;
//!
//! let messages = vec![Message::new("Hello!", "Alice")];
//! let layout = ExportLayout::new("raw-data");
//!
//! // raw-data/persona/Alice.jsonl
//! save_messages(&messages, OutputFormat::Jsonl, true, &layout)?;
//!
//! // Fails without touching the filesystem
//! assert!(save_messages(&messages, OutputFormat::Csv, false, &layout).is_err());
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::output::{split_by_sender, write_jsonl};
use crate::error::{ChatsiftError, Result};

/// Output format for processed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON Lines - one JSON object per line. Also known as NDJSON.
    #[default]
    Jsonl,

    /// CSV. Recognized but not supported; selecting it is an error.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Fails with [`ChatsiftError::UnsupportedFormat`] for unsupported formats.
    pub fn ensure_supported(&self) -> Result<()> {
        match self {
            OutputFormat::Jsonl => Ok(()),
            OutputFormat::Csv => Err(ChatsiftError::unsupported_format("CSV")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Where output files go.
///
/// - combined mode: `<root>/combined.jsonl`
/// - persona split: `<root>/persona/<sender>.jsonl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    root: PathBuf,
}

impl ExportLayout {
    /// Subdirectory for per-sender files.
    pub const PERSONA_DIR: &'static str = "persona";

    /// File stem of the combined output.
    pub const COMBINED_STEM: &'static str = "combined";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding per-sender files.
    pub fn persona_dir(&self) -> PathBuf {
        self.root.join(Self::PERSONA_DIR)
    }

    /// Path of the combined output file.
    pub fn combined_path(&self, format: OutputFormat) -> PathBuf {
        self.root
            .join(format!("{}.{}", Self::COMBINED_STEM, format.extension()))
    }

    /// Path of one sender's file, when no other sender shares its stem.
    ///
    /// [`save_messages`] disambiguates colliding stems; see
    /// [`assign_persona_stems`].
    pub fn persona_path(&self, sender: &str, format: OutputFormat) -> PathBuf {
        self.stem_path(&persona_file_stem(sender), format)
    }

    fn stem_path(&self, stem: &str, format: OutputFormat) -> PathBuf {
        self.persona_dir()
            .join(format!("{}.{}", stem, format.extension()))
    }
}

/// File stem for a sender, with path separators and NUL replaced by `_`.
///
/// A sender of `.` or `..` is also replaced, so a name can never address a
/// directory outside the persona directory.
pub fn persona_file_stem(sender: &str) -> String {
    let stem: String = sender
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    match stem.as_str() {
        "" | "." | ".." => "_".repeat(stem.len().max(1)),
        _ => stem,
    }
}

/// Assigns every sender its own file stem, in iteration order.
///
/// Senders whose sanitized stems collide (`a/b` and `a_b`, or `Alice` and
/// `alice` on a case-insensitive filesystem) get `-2`, `-3`, ... suffixes, so
/// no two senders ever share a file.
///
/// # Example
///
/// ```
/// use chatsift::format::assign_persona_stems;
///
/// let stems = assign_persona_stems(["a/b", "a_b", "c"]);
/// assert_eq!(stems["a/b"], "a_b");
/// assert_eq!(stems["a_b"], "a_b-2");
/// assert_eq!(stems["c"], "c");
/// ```
pub fn assign_persona_stems<'a>(
    senders: impl IntoIterator<Item = &'a str>,
) -> IndexMap<&'a str, String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut stems = IndexMap::new();

    for sender in senders {
        if stems.contains_key(sender) {
            continue;
        }
        let base = persona_file_stem(sender);
        let mut stem = base.clone();
        let mut n = 2;
        while !used.insert(stem.to_lowercase()) {
            stem = format!("{base}-{n}");
            n += 1;
        }
        stems.insert(sender, stem);
    }

    stems
}

/// Writes messages to disk.
///
/// With `split_persona`, one file per distinct sender is written under
/// [`ExportLayout::persona_dir`]; otherwise a single combined file.
/// Unsupported formats fail before any directory or file is created.
///
/// Returns the paths written, in write order.
pub fn save_messages(
    messages: &[Message],
    format: OutputFormat,
    split_persona: bool,
    layout: &ExportLayout,
) -> Result<Vec<PathBuf>> {
    format.ensure_supported()?;

    if split_persona {
        let dir = layout.persona_dir();
        fs::create_dir_all(&dir)?;

        let groups = split_by_sender(messages);
        let stems = assign_persona_stems(groups.keys().copied());

        let mut written = Vec::new();
        for (sender, group) in &groups {
            let stem = &stems[sender];
            if stem.as_str() != persona_file_stem(sender) {
                tracing::warn!(sender, stem = %stem, "persona file name collision, added suffix");
            }
            let path = layout.stem_path(stem, format);
            write_jsonl(group.iter().copied(), &path)?;
            written.push(path);
        }
        Ok(written)
    } else {
        fs::create_dir_all(layout.root())?;
        let path = layout.combined_path(format);
        write_jsonl(messages, &path)?;
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
        assert_eq!(OutputFormat::default(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_format_support() {
        assert!(OutputFormat::Jsonl.ensure_supported().is_ok());
        assert!(OutputFormat::Csv.ensure_supported().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Jsonl).unwrap(), "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[test]
    fn test_persona_file_stem() {
        assert_eq!(persona_file_stem("Alice"), "Alice");
        assert_eq!(persona_file_stem("Иван 🎉"), "Иван 🎉");
        assert_eq!(persona_file_stem("a/b\\c"), "a_b_c");
        assert_eq!(persona_file_stem(".."), "__");
        assert_eq!(persona_file_stem("."), "_");
        assert_eq!(persona_file_stem("../etc"), ".._etc");
    }

    #[test]
    fn test_layout_paths() {
        let layout = ExportLayout::new("out");
        assert_eq!(
            layout.combined_path(OutputFormat::Jsonl),
            Path::new("out/combined.jsonl")
        );
        assert_eq!(
            layout.persona_path("bob", OutputFormat::Jsonl),
            Path::new("out/persona/bob.jsonl")
        );
    }

    #[test]
    fn test_save_combined() {
        let dir = tempdir().unwrap();
        let layout = ExportLayout::new(dir.path());
        let messages = vec![Message::new("hi", "alice"), Message::new("yo", "bob")];

        let written = save_messages(&messages, OutputFormat::Jsonl, false, &layout).unwrap();

        assert_eq!(written, vec![dir.path().join("combined.jsonl")]);
        let content = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!layout.persona_dir().exists());
    }

    #[test]
    fn test_save_split() {
        let dir = tempdir().unwrap();
        let layout = ExportLayout::new(dir.path());
        let messages = vec![
            Message::new("1", "alice"),
            Message::new("2", "bob"),
            Message::new("3", "alice"),
        ];

        let written = save_messages(&messages, OutputFormat::Jsonl, true, &layout).unwrap();

        assert_eq!(written.len(), 2);
        let alice = fs::read_to_string(layout.persona_path("alice", OutputFormat::Jsonl)).unwrap();
        assert_eq!(
            alice,
            "{\"text\":\"1\",\"sender\":\"alice\"}\n{\"text\":\"3\",\"sender\":\"alice\"}\n"
        );
        assert!(!dir.path().join("combined.jsonl").exists());
    }

    #[test]
    fn test_assign_persona_stems_injective() {
        let stems = assign_persona_stems(["a/b", "a_b", ".", "_", "", "Alice", "alice", "a_b-2"]);

        assert_eq!(stems["a/b"], "a_b");
        assert_eq!(stems["a_b"], "a_b-2");
        assert_eq!(stems["."], "_");
        assert_eq!(stems["_"], "_-2");
        assert_eq!(stems[""], "_-3");
        assert_eq!(stems["Alice"], "Alice");
        assert_eq!(stems["alice"], "alice-2");
        assert_eq!(stems["a_b-2"], "a_b-2-2");

        let distinct: HashSet<String> = stems.values().map(|s| s.to_lowercase()).collect();
        assert_eq!(distinct.len(), stems.len());
    }

    #[test]
    fn test_save_split_colliding_senders_keeps_all() {
        let dir = tempdir().unwrap();
        let layout = ExportLayout::new(dir.path());
        let messages = vec![
            Message::new("from slash", "a/b"),
            Message::new("from underscore", "a_b"),
        ];

        let written = save_messages(&messages, OutputFormat::Jsonl, true, &layout).unwrap();

        assert_eq!(written.len(), 2);
        assert_ne!(written[0], written[1]);
        let slash = crate::core::output::read_jsonl(&written[0]).unwrap();
        let underscore = crate::core::output::read_jsonl(&written[1]).unwrap();
        assert_eq!(slash, vec![Message::new("from slash", "a/b")]);
        assert_eq!(underscore, vec![Message::new("from underscore", "a_b")]);
    }

    #[test]
    fn test_save_csv_writes_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("out");
        let layout = ExportLayout::new(&root);
        let messages = vec![Message::new("hi", "alice")];

        for split in [false, true] {
            let err = save_messages(&messages, OutputFormat::Csv, split, &layout).unwrap_err();
            assert!(err.is_unsupported());
        }
        assert!(!root.exists());
    }
}
