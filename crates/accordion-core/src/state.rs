//! Expansion State
//!
//! The coordination state one group shares with all of its items. Two states
//! only: all closed, or exactly one item open.
//!
//! ```text
//!              toggle(a)                 toggle(b)
//!  AllClosed ────────────▶ OneOpen(a) ────────────▶ OneOpen(b)
//!      ▲                       │
//!      └────── toggle(a) ──────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// How many items a group may have open at once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionMode {
    /// At most one item open
    #[default]
    Single,
    /// Several items open at once. Accepted for API parity, behaves as `Single`.
    Multiple,
}

impl std::fmt::Display for ExpansionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multiple => write!(f, "multiple"),
        }
    }
}

/// Group configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    pub mode: ExpansionMode,

    /// Whether re-toggling the open item closes it. Single mode always
    /// collapses; the flag is carried so callers can declare intent.
    pub collapsible: bool,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            mode: ExpansionMode::Single,
            collapsible: true,
        }
    }
}

impl AccordionConfig {
    pub const fn single() -> Self {
        Self {
            mode: ExpansionMode::Single,
            collapsible: true,
        }
    }
}

/// Open/closed state of one panel, derived on every read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    Open,
    Closed,
}

impl PanelState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value for the `data-state` attribute
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl From<bool> for PanelState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge taken by a single `toggle` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// AllClosed -> OneOpen(id)
    Opened,
    /// OneOpen(from) -> OneOpen(id)
    Switched { from: ItemId },
    /// OneOpen(id) -> AllClosed
    Closed,
}

/// Coordination state for one group
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionState {
    active: Option<ItemId>,
    config: AccordionConfig,
}

impl AccordionState {
    /// All items closed
    pub fn new(config: AccordionConfig) -> Self {
        if config.mode == ExpansionMode::Multiple {
            tracing::warn!(mode = %config.mode, "multi-open accordions are not supported; using single mode");
        }
        Self { active: None, config }
    }

    pub const fn config(&self) -> AccordionConfig {
        self.config
    }

    /// Currently open item, if any
    pub const fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    /// Close `id` if it is open, otherwise open it and close whatever was open.
    ///
    /// Any identifier is accepted, including one no rendered item carries.
    pub fn toggle(&mut self, id: ItemId) -> Transition {
        let transition = match self.active.take() {
            Some(current) if current == id => Transition::Closed,
            Some(current) => {
                self.active = Some(id);
                Transition::Switched { from: current }
            }
            None => {
                self.active = Some(id);
                Transition::Opened
            }
        };

        tracing::debug!(
            active = ?self.active.as_ref().map(ItemId::as_str),
            ?transition,
            "accordion toggled"
        );
        transition
    }

    pub fn is_open(&self, id: &ItemId) -> bool {
        !id.is_unbound() && self.active.as_ref() == Some(id)
    }

    pub fn panel_state(&self, id: &ItemId) -> PanelState {
        PanelState::from(self.is_open(id))
    }

    /// Number of open items; never more than one. The unbound sentinel
    /// can be active without being open, so it does not count.
    pub fn open_count(&self) -> usize {
        self.active.as_ref().map_or(0, |id| usize::from(self.is_open(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    #[test]
    fn test_starts_all_closed() {
        let state = AccordionState::default();
        assert_eq!(state.active(), None);
        assert_eq!(state.open_count(), 0);
        assert_eq!(state.panel_state(&id("a")), PanelState::Closed);
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut state = AccordionState::default();
        assert_eq!(state.toggle(id("b")), Transition::Opened);
        assert_eq!(state.active(), Some(&id("b")));
        assert!(state.is_open(&id("b")));

        assert_eq!(state.toggle(id("b")), Transition::Closed);
        assert_eq!(state.active(), None);
        assert_eq!(state, AccordionState::default());
    }

    #[test]
    fn test_toggle_switches_directly() {
        let mut state = AccordionState::default();
        state.toggle(id("a"));
        assert_eq!(
            state.toggle(id("c")),
            Transition::Switched { from: id("a") }
        );
        assert!(!state.is_open(&id("a")));
        assert!(state.is_open(&id("c")));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn test_unknown_identifier_is_accepted() {
        let mut state = AccordionState::default();
        state.toggle(id("not-rendered"));
        assert_eq!(state.active(), Some(&id("not-rendered")));
    }

    #[test]
    fn test_unbound_sentinel_never_open() {
        let mut state = AccordionState::default();
        state.toggle(ItemId::unbound());
        assert_eq!(state.panel_state(&ItemId::unbound()), PanelState::Closed);
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn test_pairs_restore_previous_state() {
        let mut state = AccordionState::default();
        state.toggle(id("a"));
        let before = state.clone();

        state.toggle(id("a"));
        state.toggle(id("a"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_active_is_always_a_toggled_id() {
        let sequence = ["a", "b", "b", "c", "a", "a", "c", "b", "d", "d", "a"];
        let mut state = AccordionState::default();
        let mut seen = Vec::new();

        for s in sequence {
            seen.push(id(s));
            state.toggle(id(s));
            if let Some(active) = state.active() {
                assert!(seen.contains(active));
            }
            assert!(state.open_count() <= 1);
            let open = ["a", "b", "c", "d"]
                .iter()
                .filter(|x| state.is_open(&id(x)))
                .count();
            assert_eq!(open, state.open_count());
        }
    }

    #[test]
    fn test_multiple_mode_behaves_as_single() {
        let mut state = AccordionState::new(AccordionConfig {
            mode: ExpansionMode::Multiple,
            collapsible: true,
        });
        state.toggle(id("a"));
        state.toggle(id("b"));
        assert!(!state.is_open(&id("a")));
        assert!(state.is_open(&id("b")));
    }

    #[test]
    fn test_config_from_json() {
        let config: AccordionConfig = serde_json::from_str(r#"{"mode":"single"}"#).unwrap();
        assert_eq!(config, AccordionConfig::single());
        assert_eq!(PanelState::Open.to_string(), "open");
    }
}
