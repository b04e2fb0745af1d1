//! Slide notifications
//!
//! A single `PanelSlideListener` may be registered on a panel. All methods
//! have empty defaults so implementors only override what they need.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::state::PanelState;

/// Listener for monitoring slide progress and arrivals
pub trait PanelSlideListener {
    /// The pane moved; `offset` is in [0, 1] (negative while hiding)
    fn on_panel_slide(&mut self, _offset: f32) {}

    fn on_panel_collapsed(&mut self) {}

    fn on_panel_expanded(&mut self) {}

    fn on_panel_anchored(&mut self) {}

    fn on_panel_hidden(&mut self) {}
}

/// A notification, as recorded by `EventLog`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", content = "offset", rename_all = "snake_case")]
pub enum PanelEvent {
    Slide(f32),
    Collapsed,
    Expanded,
    Anchored,
    Hidden,
}

impl PanelEvent {
    /// Arrival event for a rest state
    pub fn arrival(state: PanelState) -> Option<PanelEvent> {
        match state {
            PanelState::Collapsed => Some(PanelEvent::Collapsed),
            PanelState::Expanded => Some(PanelEvent::Expanded),
            PanelState::Anchored => Some(PanelEvent::Anchored),
            PanelState::Hidden => Some(PanelEvent::Hidden),
            PanelState::Dragging => None,
        }
    }

    pub fn is_slide(&self) -> bool {
        matches!(self, PanelEvent::Slide(_))
    }
}

/// Deliver an event to a listener
pub fn dispatch(listener: &mut dyn PanelSlideListener, event: PanelEvent) {
    match event {
        PanelEvent::Slide(offset) => listener.on_panel_slide(offset),
        PanelEvent::Collapsed => listener.on_panel_collapsed(),
        PanelEvent::Expanded => listener.on_panel_expanded(),
        PanelEvent::Anchored => listener.on_panel_anchored(),
        PanelEvent::Hidden => listener.on_panel_hidden(),
    }
}

/// Listener that records every notification into a shared log
///
/// Clones share the same log, so one clone can be handed to the panel and
/// another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PanelEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PanelEvent> {
        self.events.borrow().clone()
    }

    /// Arrival events only, without the slide stream
    pub fn arrivals(&self) -> Vec<PanelEvent> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(|e| !e.is_slide())
            .collect()
    }

    /// Offsets reported through `on_panel_slide`
    pub fn slides(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PanelEvent::Slide(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<PanelEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: PanelEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PanelSlideListener for EventLog {
    fn on_panel_slide(&mut self, offset: f32) {
        self.push(PanelEvent::Slide(offset));
    }

    fn on_panel_collapsed(&mut self) {
        self.push(PanelEvent::Collapsed);
    }

    fn on_panel_expanded(&mut self) {
        self.push(PanelEvent::Expanded);
    }

    fn on_panel_anchored(&mut self) {
        self.push(PanelEvent::Anchored);
    }

    fn on_panel_hidden(&mut self) {
        self.push(PanelEvent::Hidden);
    }
}
