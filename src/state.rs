//! Discrete panel states and the transitions between them
//!
//! The slide offset is continuous; `PanelStateMachine` maps it onto one of
//! four rest states plus the transient `Dragging` state, and reports each
//! *arrival* at a rest state exactly once.

use serde::{Deserialize, Serialize};

/// Current state of the slideable pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Expanded,
    Collapsed,
    Anchored,
    Hidden,
    /// Transient: a live gesture is moving the pane
    Dragging,
}

impl PanelState {
    /// True for the four states the pane can rest in
    pub fn is_rest(&self) -> bool {
        !matches!(self, PanelState::Dragging)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Expanded => "expanded",
            PanelState::Collapsed => "collapsed",
            PanelState::Anchored => "anchored",
            PanelState::Hidden => "hidden",
            PanelState::Dragging => "dragging",
        }
    }

    /// Resolve the rest state a settled offset corresponds to
    ///
    /// Settles always snap exactly onto a stop, so exact comparisons are safe.
    pub fn from_settled_offset(offset: f32) -> PanelState {
        if offset >= 1.0 {
            PanelState::Expanded
        } else if offset == 0.0 {
            PanelState::Collapsed
        } else if offset < 0.0 {
            PanelState::Hidden
        } else {
            PanelState::Anchored
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the current discrete state and the last rest state
#[derive(Debug, Clone)]
pub struct PanelStateMachine {
    current: PanelState,
    /// Last state the pane arrived at; restored when a gesture is cancelled
    last_rest: PanelState,
}

impl PanelStateMachine {
    pub fn new(initial: PanelState) -> Self {
        debug_assert!(initial.is_rest(), "initial state must be a rest state");
        Self {
            current: initial,
            last_rest: initial,
        }
    }

    pub fn current(&self) -> PanelState {
        self.current
    }

    pub fn last_rest(&self) -> PanelState {
        self.last_rest
    }

    /// A gesture crossed the touch slop
    ///
    /// Returns false if a drag was already in progress.
    pub fn begin_drag(&mut self) -> bool {
        if self.current == PanelState::Dragging {
            return false;
        }
        self.last_rest = self.current;
        self.current = PanelState::Dragging;
        tracing::debug!(from = %self.last_rest, "panel state -> dragging");
        true
    }

    /// The pointer was released and a settle is under way
    ///
    /// The pre-drag state stays current until the settle completes.
    pub fn release(&mut self) {
        if self.current == PanelState::Dragging {
            self.current = self.last_rest;
        }
    }

    /// Abort the gesture, restoring the pre-drag state verbatim
    pub fn cancel(&mut self) -> PanelState {
        self.current = self.last_rest;
        self.current
    }

    /// A settle completed on a stop
    ///
    /// Returns the new state only when it differs from the last rest state,
    /// so re-entering the same state never notifies twice.
    pub fn arrive(&mut self, resolved: PanelState) -> Option<PanelState> {
        debug_assert!(resolved.is_rest());
        self.current = resolved;
        if resolved == self.last_rest {
            tracing::trace!(state = %resolved, "settled back into the same state");
            return None;
        }
        tracing::debug!(from = %self.last_rest, to = %resolved, "panel arrived");
        self.last_rest = resolved;
        Some(resolved)
    }

    /// Set the state without a transition (before the first layout)
    pub fn force(&mut self, state: PanelState) {
        debug_assert!(state.is_rest());
        self.current = state;
        self.last_rest = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_settled_offsets() {
        assert_eq!(PanelState::from_settled_offset(1.0), PanelState::Expanded);
        assert_eq!(PanelState::from_settled_offset(0.0), PanelState::Collapsed);
        assert_eq!(PanelState::from_settled_offset(0.5), PanelState::Anchored);
        assert_eq!(PanelState::from_settled_offset(-0.2), PanelState::Hidden);
    }

    #[test]
    fn test_drag_release_keeps_prior_state() {
        let mut machine = PanelStateMachine::new(PanelState::Collapsed);
        assert!(machine.begin_drag());
        assert_eq!(machine.current(), PanelState::Dragging);
        assert!(!machine.begin_drag());

        machine.release();
        assert_eq!(machine.current(), PanelState::Collapsed);
    }

    #[test]
    fn test_arrival_notifies_once() {
        let mut machine = PanelStateMachine::new(PanelState::Collapsed);
        machine.begin_drag();
        machine.release();
        assert_eq!(
            machine.arrive(PanelState::Expanded),
            Some(PanelState::Expanded)
        );

        machine.begin_drag();
        machine.release();
        assert_eq!(machine.arrive(PanelState::Expanded), None);
        assert_eq!(machine.current(), PanelState::Expanded);
    }

    #[test]
    fn test_cancel_restores_prior_state() {
        let mut machine = PanelStateMachine::new(PanelState::Anchored);
        machine.begin_drag();
        assert_eq!(machine.cancel(), PanelState::Anchored);
        assert_eq!(machine.current(), PanelState::Anchored);
    }
}
