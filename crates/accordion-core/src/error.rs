//! Error Types

use thiserror::Error;

use crate::id::ItemId;

/// Result type alias for accordion operations
pub type Result<T> = std::result::Result<T, AccordionError>;

/// Accordion error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccordionError {
    /// A component that needs the group's coordination channel was rendered
    /// outside of any group. This is a composition bug, never a runtime state.
    #[error("{component} must be used within an Accordion")]
    MissingChannel { component: &'static str },

    /// Two items in the same group share an identifier
    #[error("Duplicate accordion item identifier: {0}")]
    DuplicateItem(ItemId),
}

impl AccordionError {
    /// Structural errors mean the render tree itself is wrong and cannot be
    /// recovered from by retrying the same operation.
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::MissingChannel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_channel_message() {
        let err = AccordionError::MissingChannel {
            component: "AccordionTrigger",
        };
        assert_eq!(
            err.to_string(),
            "AccordionTrigger must be used within an Accordion"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_duplicate_is_not_structural() {
        let err = AccordionError::DuplicateItem(ItemId::new("item-0"));
        assert!(!err.is_structural());
        assert!(err.to_string().contains("item-0"));
    }
}
