//! Persona split: grouping messages by sender.

use indexmap::IndexMap;

use crate::Message;

/// Groups messages by sender.
///
/// Groups appear in the order their sender is first seen; each group keeps
/// the original relative order of its messages.
///
/// # Example
///
/// ```
/// use chatsift::Message;
/// use chatsift::core::output::split_by_sender;
///
/// let messages = vec![
///     Message::new("1", "bob"),
///     Message::new("2", "alice"),
///     Message::new("3", "bob"),
/// ];
/// let groups = split_by_sender(&messages);
///
/// let senders: Vec<_> = groups.keys().copied().collect();
/// assert_eq!(senders, vec!["bob", "alice"]);
/// assert_eq!(groups["bob"].len(), 2);
/// ```
pub fn split_by_sender(messages: &[Message]) -> IndexMap<&str, Vec<&Message>> {
    let mut grouped: IndexMap<&str, Vec<&Message>> = IndexMap::new();
    for msg in messages {
        grouped.entry(msg.sender()).or_default().push(msg);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        let messages = vec![
            Message::new("1", "bob"),
            Message::new("2", "alice"),
            Message::new("3", "bob"),
            Message::new("4", "carol"),
            Message::new("5", "alice"),
        ];
        let groups = split_by_sender(&messages);

        assert_eq!(groups.len(), 3);
        let order: Vec<_> = groups.keys().copied().collect();
        assert_eq!(order, vec!["bob", "alice", "carol"]);

        let bob: Vec<_> = groups["bob"].iter().map(|m| m.text()).collect();
        assert_eq!(bob, vec!["1", "3"]);
        let alice: Vec<_> = groups["alice"].iter().map(|m| m.text()).collect();
        assert_eq!(alice, vec!["2", "5"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_by_sender(&[]).is_empty());
    }

    #[test]
    fn test_split_covers_every_message() {
        let messages: Vec<_> = (0..20)
            .map(|i| Message::new(i.to_string(), format!("s{}", i % 3)))
            .collect();
        let groups = split_by_sender(&messages);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, messages.len());
    }
}
