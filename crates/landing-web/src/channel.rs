//! Accordion Coordination
//!
//! Reactive plumbing between an accordion group and the triggers and panes
//! rendered somewhere below it.
//!
//! ```text
//! <Accordion>            provides AccordionChannel  (one RwSignal per group)
//!   <AccordionItem>      provides ItemScope         (one per item)
//!     <AccordionTrigger> use_channel + use_item_id -> toggle, data-state
//!     <AccordionContent> use_context + use_item_id -> visibility
//! ```
//!
//! Both bindings are published through `Provider`, which gives each group
//! and each item its own child owner. Sibling items never see each other's
//! scope and two groups on the same page never share a channel.

use accordion_core::{
    AccordionConfig, AccordionError, AccordionState, ItemId, ItemScope, PanelState, Result,
    Transition,
};
use leptos::prelude::*;

/// Shared expansion state for one accordion group
#[derive(Clone, Copy, Debug)]
pub struct AccordionChannel {
    state: RwSignal<AccordionState>,
}

impl AccordionChannel {
    /// A fresh channel with every item closed. Call once per group mount.
    pub fn new(config: AccordionConfig) -> Self {
        Self {
            state: RwSignal::new(AccordionState::new(config)),
        }
    }

    /// Currently open item. Tracked: readers re-run after every toggle.
    pub fn active(&self) -> Option<ItemId> {
        self.state.with(|s| s.active().cloned())
    }

    pub fn toggle(&self, id: ItemId) -> Transition {
        let mut transition = Transition::Closed;
        self.state.update(|s| transition = s.toggle(id));
        transition
    }

    pub fn is_open(&self, id: &ItemId) -> bool {
        self.state.with(|s| s.is_open(id))
    }

    pub fn panel_state(&self, id: &ItemId) -> PanelState {
        self.state.with(|s| s.panel_state(id))
    }
}

/// Channel of the nearest enclosing group.
///
/// Missing channels are a composition bug; callers that need one treat the
/// error as fatal.
pub fn use_channel(component: &'static str) -> Result<AccordionChannel> {
    use_context::<AccordionChannel>().ok_or(AccordionError::MissingChannel { component })
}

/// Identifier of the nearest enclosing item, or the unbound sentinel.
pub fn use_item_id(component: &'static str) -> ItemId {
    ItemScope::resolve(use_context::<ItemScope>().as_ref(), component)
}

/// Panel state for a component that tolerates a missing group
pub fn lenient_panel_state(channel: Option<AccordionChannel>, id: &ItemId) -> PanelState {
    channel.map_or(PanelState::Closed, |c| c.panel_state(id))
}
