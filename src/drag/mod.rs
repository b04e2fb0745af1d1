//! Drag handling - pointer capture, velocity, and settle animation
//!
//! ## Architecture
//!
//! - `DragController`: owns the live slide offset and `DragPhase`
//! - `DragOutcome`: what each pointer event or tick did, for the panel to act on
//! - `SettleAnimation`: time-driven ease-out between two offsets
//! - `choose_settle_target`: fling/nearest-stop release policy
//!
//! The controller never talks to listeners; `SlidingPanel` maps outcomes to
//! state transitions and notifications.

mod controller;
mod settle;

pub use controller::{DragController, DragOutcome, DragPhase, DragTuning, PointerId};
pub use settle::{choose_settle_target, ease_out_quint, SettleAnimation, SettleTiming};
