//! Pointer and frame message handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::panel::SlidingPanel;

/// Handle pointer input and animation ticks
pub fn update_pointer(panel: &mut SlidingPanel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::PointerDown {
            pointer_id,
            x,
            y,
            time_ms,
        } => panel.on_pointer_down(pointer_id, x, y, time_ms),

        PanelMsg::PointerMove {
            pointer_id,
            x,
            y,
            time_ms,
        } => panel.on_pointer_move(pointer_id, x, y, time_ms),

        PanelMsg::PointerUp {
            pointer_id,
            x,
            y,
            time_ms,
        } => panel.on_pointer_up(pointer_id, x, y, time_ms),

        PanelMsg::PointerCancel => panel.on_cancel(),

        PanelMsg::Tick { now_ms } => panel.tick(now_ms),

        _ => None,
    }
}
