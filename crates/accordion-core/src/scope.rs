//! Item Scope
//!
//! The per-panel binding that tells a trigger and its content pane which
//! item they belong to. UI layers publish one `ItemScope` per item and
//! resolve it from the nearest enclosing binding.

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Immutable identifier binding for one accordion item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemScope {
    id: ItemId,
}

impl ItemScope {
    pub const fn new(id: ItemId) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Resolve the identifier a component should use.
    ///
    /// A component rendered outside any item scope gets the unbound sentinel
    /// and therefore always renders closed.
    // TODO: make a missing item scope a hard error like a missing channel once
    // product confirms no page relies on the lenient fallback.
    pub fn resolve(scope: Option<&Self>, component: &'static str) -> ItemId {
        if let Some(scope) = scope {
            scope.id.clone()
        } else {
            tracing::warn!(component, "rendered outside an AccordionItem; treating as closed");
            ItemId::unbound()
        }
    }
}

impl From<ItemId> for ItemScope {
    fn from(id: ItemId) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bound_scope() {
        let scope = ItemScope::new(ItemId::new("item-2"));
        assert_eq!(
            ItemScope::resolve(Some(&scope), "AccordionTrigger"),
            ItemId::new("item-2")
        );
    }

    #[test]
    fn test_resolve_missing_scope_falls_back_to_sentinel() {
        let id = ItemScope::resolve(None, "AccordionContent");
        assert!(id.is_unbound());
    }
}
