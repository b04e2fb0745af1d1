//! Child rectangles for the host to place and paint
//!
//! Everything here is derived from the geometry and the current offset; the
//! host applies the rectangles to its own view tree.

use crate::geometry::{fade_color_for, PanelGeometry, Rect};
use crate::state::PanelState;

/// Flags that change how the main pane is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFlags {
    /// Panel overlays the main pane instead of shrinking it
    pub overlay: bool,
    pub clip_panel: bool,
    pub shadow_height: i32,
    pub covered_fade_color: u32,
}

/// Placement of both panes at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub slideable: Rect,
    /// Main pane with parallax applied
    pub main: Rect,
    /// Visible part of the main pane when clipping
    pub main_clip: Option<Rect>,
    /// Where the shadow drawable goes, if any
    pub shadow: Option<Rect>,
    /// ARGB dimming over the main pane; 0 for none
    pub fade_color: u32,
}

/// Compute pane rectangles for the given offset and state
pub fn compute_layout(
    geometry: &PanelGeometry,
    flags: LayoutFlags,
    offset: f32,
    state: PanelState,
) -> PaneLayout {
    let bounds = geometry.bounds();
    let sliding_up = geometry.gravity().is_sliding_up();
    let slideable = geometry.slideable_rect(offset);

    let reserve_panel = !flags.overlay && state != PanelState::Hidden;
    let mut main_top = bounds.padding_top + geometry.parallax_for(offset);
    let mut main_height = geometry.slideable_height();
    if reserve_panel {
        main_height -= geometry.panel_height();
        if !sliding_up {
            main_top += geometry.panel_height();
        }
    }
    let main = Rect::new(0, main_top, bounds.width, main_height.max(0));

    let main_clip = if flags.clip_panel && !flags.overlay {
        let (top, bottom) = if sliding_up {
            (main.y, main.bottom().min(slideable.y))
        } else {
            (main.y.max(slideable.bottom()), main.bottom())
        };
        Some(Rect::new(main.x, top, main.width, (bottom - top).max(0)))
    } else {
        None
    };

    let shadow = if flags.shadow_height > 0 {
        let y = if sliding_up {
            slideable.y - flags.shadow_height
        } else {
            slideable.bottom()
        };
        Some(Rect::new(0, y, bounds.width, flags.shadow_height))
    } else {
        None
    };

    PaneLayout {
        slideable,
        main,
        main_clip,
        shadow,
        fade_color: fade_color_for(flags.covered_fade_color, offset),
    }
}
