//! Update functions for the Elm-style architecture
//!
//! Every host input expressed as a `PanelMsg` flows through `update()`.

mod pointer;
mod settings;

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::panel::SlidingPanel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use pointer::update_pointer;
pub use settings::update_settings;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(panel: &mut SlidingPanel, msg: PanelMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(panel, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(panel, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(panel: &mut SlidingPanel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::PointerDown { .. }
        | PanelMsg::PointerMove { .. }
        | PanelMsg::PointerUp { .. }
        | PanelMsg::PointerCancel
        | PanelMsg::Tick { .. } => pointer::update_pointer(panel, msg),
        other => settings::update_settings(panel, other),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs. Pointer moves and
/// ticks are not logged on their own.
#[cfg(debug_assertions)]
fn update_traced(panel: &mut SlidingPanel, msg: PanelMsg) -> Option<Cmd> {
    let is_noisy = msg.is_noisy();

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PanelSnapshot::from_panel(panel);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(panel, msg);

    let after = PanelSnapshot::from_panel(panel);
    if before.state != after.state || !is_noisy {
        if let Some(diff) = before.diff(&after) {
            debug!(target: "panel", %diff, "state changed");
        }
    }

    result
}
