//! Item Identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier distinguishing one panel from its siblings in a group.
///
/// The empty string is reserved for the unbound sentinel, see [`ItemId::unbound`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Fresh identifier for callers that do not manage ids themselves
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Identifier for the `index`-th entry of a data-driven list
    pub fn indexed(index: usize) -> Self {
        Self(format!("item-{index}"))
    }

    /// Sentinel used when a component has no enclosing item scope.
    /// It never compares open against any group state.
    pub const fn unbound() -> Self {
        Self(String::new())
    }

    pub fn is_unbound(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert!(!a.is_unbound());
    }

    #[test]
    fn test_unbound_sentinel() {
        assert!(ItemId::unbound().is_unbound());
        assert_eq!(ItemId::unbound(), ItemId::default());
        assert!(!ItemId::new("faq").is_unbound());
    }

    #[test]
    fn test_indexed_format() {
        assert_eq!(ItemId::indexed(3).as_str(), "item-3");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::new("item-1")).unwrap();
        assert_eq!(json, "\"item-1\"");
    }
}
