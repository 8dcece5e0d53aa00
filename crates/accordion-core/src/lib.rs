//! # accordion-core
//!
//! Framework-free state for a single-expansion accordion.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Group (one per accordion)               │
//! │  ┌──────────────────────┐                                    │
//! │  │   AccordionState     │◀── toggle(id) ── Trigger           │
//! │  │   active: Option<Id> │                                    │
//! │  └──────────┬───────────┘                                    │
//! │             │ is_open(id)                                    │
//! │     ┌───────┴────────┐                                       │
//! │  ItemScope(A)     ItemScope(B)   ... one binding per panel   │
//! │  Trigger + Pane   Trigger + Pane                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Triggers and panes never reference each other. Both read the group's
//! state and their own `ItemScope`, and derive the same `PanelState`.
//!
//! UI frameworks wrap `AccordionState` in their own reactive cell; the
//! headless `AccordionGroup` drives it directly for data-driven callers.

pub mod error;
pub mod group;
pub mod id;
pub mod scope;
pub mod state;

pub use error::{AccordionError, Result};
pub use group::{AccordionGroup, PanelSnapshot, validate_unique};
pub use id::ItemId;
pub use scope::ItemScope;
pub use state::{AccordionConfig, AccordionState, ExpansionMode, PanelState, Transition};
