//! Layout and programmatic setting handlers

use crate::commands::Cmd;
use crate::geometry::LayoutBounds;
use crate::messages::PanelMsg;
use crate::panel::SlidingPanel;

/// Handle layout changes and programmatic calls
pub fn update_settings(panel: &mut SlidingPanel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Layout {
            width,
            height,
            padding_top,
            padding_bottom,
        } => {
            let bounds =
                LayoutBounds::new(width, height).with_padding(padding_top, padding_bottom);
            panel.set_layout(bounds)
        }

        PanelMsg::SetPanelHeight { px } => panel.set_panel_height(px),
        PanelMsg::SetShadowHeight { px } => panel.set_shadow_height(px),
        PanelMsg::SetParallaxOffset { px } => panel.set_parallax_offset(px),

        PanelMsg::SetState { state } => panel.set_panel_state(state),

        PanelMsg::SetAnchorPoint { anchor_point } => {
            panel.set_anchor_point(anchor_point);
            None
        }

        PanelMsg::SetTouchEnabled { enabled } => panel.set_touch_enabled(enabled),

        PanelMsg::SetHiddenEnabled { enabled } => {
            panel.set_hidden_enabled(enabled);
            None
        }

        PanelMsg::SetDragView { rect } => {
            panel.set_drag_view(rect.map(Into::into));
            None
        }

        PanelMsg::SetMinFlingVelocity { velocity } => {
            panel.set_min_fling_velocity(velocity);
            None
        }

        PanelMsg::SetOverlay { enabled } => {
            panel.set_overlayed(enabled);
            Some(Cmd::Redraw)
        }

        PanelMsg::SetClipPanel { enabled } => {
            panel.set_clip_panel(enabled);
            Some(Cmd::Redraw)
        }

        PanelMsg::SetCoveredFadeColor { color } => {
            panel.set_covered_fade_color(color);
            Some(Cmd::Redraw)
        }

        _ => None,
    }
}
