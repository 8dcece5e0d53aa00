//! Headless Group
//!
//! Data-driven accordion for callers without a UI runtime: validation of
//! page content, server-side rendering decisions, and tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AccordionError, Result};
use crate::id::ItemId;
use crate::state::{AccordionConfig, AccordionState, PanelState, Transition};

/// Reject duplicate identifiers. Returns the first repeated id.
pub fn validate_unique<'a>(ids: impl IntoIterator<Item = &'a ItemId>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AccordionError::DuplicateItem(id.clone()));
        }
    }
    Ok(())
}

#[derive(Clone, Debug)]
struct Entry {
    id: ItemId,
    label: String,
    body: String,
}

/// Point-in-time view of one panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: ItemId,
    pub label: String,
    pub body: String,
    pub state: PanelState,
}

/// One accordion instance: an ordered list of items and the state they share
#[derive(Clone, Debug)]
pub struct AccordionGroup {
    entries: Vec<Entry>,
    state: AccordionState,
}

impl AccordionGroup {
    /// Build from `(identifier, trigger label, content body)` entries.
    ///
    /// Fails fast on duplicate identifiers.
    pub fn new<I, L, B>(entries: impl IntoIterator<Item = (I, L, B)>, config: AccordionConfig) -> Result<Self>
    where
        I: Into<ItemId>,
        L: Into<String>,
        B: Into<String>,
    {
        let entries: Vec<Entry> = entries
            .into_iter()
            .map(|(id, label, body)| Entry {
                id: id.into(),
                label: label.into(),
                body: body.into(),
            })
            .collect();

        validate_unique(entries.iter().map(|e| &e.id))?;

        Ok(Self {
            entries,
            state: AccordionState::new(config),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.entries.iter().map(|e| &e.id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    pub const fn state(&self) -> &AccordionState {
        &self.state
    }

    pub const fn active(&self) -> Option<&ItemId> {
        self.state.active()
    }

    pub fn toggle(&mut self, id: impl Into<ItemId>) -> Transition {
        self.state.toggle(id.into())
    }

    pub fn panel_state(&self, id: &ItemId) -> PanelState {
        self.state.panel_state(id)
    }

    /// Panels that are open and actually rendered by this group
    pub fn open_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| self.state.is_open(&e.id))
            .count()
    }

    /// Ordered snapshot of every panel
    pub fn panels(&self) -> Vec<PanelSnapshot> {
        self.entries
            .iter()
            .map(|e| PanelSnapshot {
                id: e.id.clone(),
                label: e.label.clone(),
                body: e.body.clone(),
                state: self.state.panel_state(&e.id),
            })
            .collect()
    }
}
