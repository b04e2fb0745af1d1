//! Sliding panel - a main pane plus a slideable pane dragged along one axis
//!
//! ## Architecture
//!
//! - `PanelGeometry`: offset ↔ pixel mapping for the container bounds
//! - `DragController`: pointer capture, velocity and the settle animation
//! - `PanelStateMachine`: discrete state and arrival bookkeeping
//! - `SlidingPanel`: composes the three and notifies the listener
//!
//! ## Integration
//!
//! The host forwards pointer events and frame ticks, either by calling the
//! `SlidingPanel` methods directly or through `update()` with a `PanelMsg`.
//! Each call returns an optional `Cmd` telling the host to repaint, keep
//! ticking, or route a tap.

mod sliding;

pub use sliding::SlidingPanel;
