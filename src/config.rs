//! Rule configuration: which senders to drop and how to rename the rest.
//!
//! The configuration is a YAML document with two required keys:
//!
//! ```yaml
//! skip_sender:
//!   - Telegram Bot
//! sender_transform:
//!   - original: "Alice Smith"
//!     transform: alice
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::RuleConfig;
//!
//! # fn main() -> chatsift::Result<()> {
//! let config = RuleConfig::from_yaml_str(
//!     "skip_sender: [bot]\nsender_transform:\n  - {original: Alice Smith, transform: alice}\n",
//! )?;
//! assert!(config.skips("bot"));
//! assert_eq!(config.rename("Alice Smith"), "alice");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::filter;
use crate::error::{ChatsiftError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";

/// One rename rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderTransform {
    /// Sender name as it appears in the export.
    pub original: String,
    /// Name written to the output instead.
    pub transform: String,
}

impl SenderTransform {
    pub fn new(original: impl Into<String>, transform: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            transform: transform.into(),
        }
    }
}

/// Skip and rename rules for one run.
///
/// Read-only once loaded. When several rename rules share the same
/// `original`, the first one in list order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Senders whose messages are dropped entirely.
    pub skip_sender: Vec<String>,

    /// Ordered rename rules.
    pub sender_transform: Vec<SenderTransform>,
}

impl RuleConfig {
    /// Creates an empty configuration: nothing skipped, nothing renamed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sender to the skip list.
    #[must_use]
    pub fn with_skip_sender(mut self, name: impl Into<String>) -> Self {
        self.skip_sender.push(name.into());
        self
    }

    /// Appends a rename rule.
    #[must_use]
    pub fn with_transform(
        mut self,
        original: impl Into<String>,
        transform: impl Into<String>,
    ) -> Self {
        self.sender_transform
            .push(SenderTransform::new(original, transform));
        self
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ChatsiftError::config_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ChatsiftError::missing_input(path));
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ChatsiftError::config_parse(e, Some(path.to_path_buf())))?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            skip = config.skip_sender.len(),
            transforms = config.sender_transform.len(),
            "loaded rule configuration"
        );
        Ok(config)
    }

    /// Rejects rules that can never match anything.
    ///
    /// An empty `original` or skip entry can't match because the sender
    /// resolver never yields an empty name.
    pub fn validate(&self) -> Result<()> {
        if self.skip_sender.iter().any(String::is_empty) {
            return Err(ChatsiftError::invalid_config(
                "skip_sender contains an empty name",
            ));
        }
        if let Some(rule) = self.sender_transform.iter().find(|r| r.original.is_empty()) {
            return Err(ChatsiftError::invalid_config(format!(
                "sender_transform has an empty 'original' (transform: '{}')",
                rule.transform
            )));
        }
        if let Some(rule) = self.sender_transform.iter().find(|r| r.transform.is_empty()) {
            return Err(ChatsiftError::invalid_config(format!(
                "sender_transform maps '{}' to an empty name",
                rule.original
            )));
        }
        Ok(())
    }

    /// Returns `true` if messages from `name` are dropped.
    pub fn skips(&self, name: &str) -> bool {
        filter::should_skip(&self.skip_sender, name)
    }

    /// Returns the output name for `name`.
    pub fn rename<'a>(&'a self, name: &'a str) -> &'a str {
        filter::rename(&self.sender_transform, name)
    }
}
