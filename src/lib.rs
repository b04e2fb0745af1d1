//! Sliding panel - Elm-style gesture engine for a draggable bottom/top sheet
//!
//! This crate provides the core types and logic for a two-pane layout where
//! the slideable pane is dragged between collapsed, anchored, expanded and
//! hidden positions, implementing the Elm Architecture pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod listener;
pub mod messages;
pub mod panel;
pub mod state;
pub mod tracing;
pub mod update;
pub mod velocity;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{Gravity, PanelConfig};
pub use drag::DragPhase;
pub use error::PanelError;
pub use geometry::{LayoutBounds, Rect};
pub use layout::PaneLayout;
pub use listener::{EventLog, PanelEvent, PanelSlideListener};
pub use messages::PanelMsg;
pub use panel::SlidingPanel;
pub use state::PanelState;
pub use update::update;
