//! Sender skip and rename rules.
//!
//! | Rule | Function | Matching |
//! |------|----------|----------|
//! | Skip | [`should_skip`] | Exact, case-sensitive membership |
//! | Rename | [`rename`] | First rule in list order whose `original` equals the name |
//!
//! # Examples
//!
//! ```
//! use chatsift::config::SenderTransform;
//! use chatsift::core::filter::{rename, should_skip};
//!
//! let skip = vec!["bot".to_string()];
//! assert!(should_skip(&skip, "bot"));
//! assert!(!should_skip(&skip, "Bot"));
//!
//! let rules = vec![
//!     SenderTransform::new("Alice Smith", "alice"),
//!     SenderTransform::new("Alice Smith", "ignored"),
//! ];
//! assert_eq!(rename(&rules, "Alice Smith"), "alice");
//! assert_eq!(rename(&rules, "Bob"), "Bob");
//! ```

use crate::config::SenderTransform;

/// Returns `true` if `name` is in the skip list.
pub fn should_skip(skip_senders: &[String], name: &str) -> bool {
    skip_senders.iter().any(|skipped| skipped == name)
}

/// Applies the first matching rename rule, or returns `name` unchanged.
///
/// Rules are applied once; the output of a rule is not fed back through the
/// list.
pub fn rename<'a>(rules: &'a [SenderTransform], name: &'a str) -> &'a str {
    rules
        .iter()
        .find(|rule| rule.original == name)
        .map_or(name, |rule| rule.transform.as_str())
}
