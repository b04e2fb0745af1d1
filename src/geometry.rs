//! Slide offset ↔ pixel conversions
//!
//! Offsets are normalized along the slide axis: 0 is the collapsed position,
//! 1 is fully expanded, and negative values push the panel out of view
//! (hidden). Pixel positions are the y coordinate of the slideable pane's top
//! edge in container coordinates.

use crate::config::Gravity;
use crate::state::PanelState;

/// Integer rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Half-open containment test
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x as f32
            && x < self.right() as f32
            && y >= self.y as f32
            && y < self.bottom() as f32
    }

    /// Translate by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Container bounds supplied by the host on layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBounds {
    pub width: i32,
    pub height: i32,
    pub padding_top: i32,
    pub padding_bottom: i32,
}

impl LayoutBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding_top: 0,
            padding_bottom: 0,
        }
    }

    pub fn with_padding(mut self, top: i32, bottom: i32) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }
}

/// Pure geometry for the slideable pane
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    gravity: Gravity,
    bounds: LayoutBounds,
    panel_height: i32,
    parallax_offset: i32,
    anchor_point: f32,
    slide_range: i32,
}

impl PanelGeometry {
    pub fn new(
        gravity: Gravity,
        panel_height: i32,
        parallax_offset: i32,
        anchor_point: f32,
    ) -> Self {
        let mut geometry = Self {
            gravity,
            bounds: LayoutBounds::default(),
            panel_height: panel_height.max(0),
            parallax_offset,
            anchor_point,
            slide_range: 0,
        };
        geometry.recompute_range();
        geometry
    }

    fn recompute_range(&mut self) {
        self.slide_range = (self.slideable_height() - self.panel_height).max(0);
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn bounds(&self) -> LayoutBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: LayoutBounds) {
        self.bounds = bounds;
        self.recompute_range();
    }

    pub fn panel_height(&self) -> i32 {
        self.panel_height
    }

    pub fn set_panel_height(&mut self, panel_height: i32) {
        self.panel_height = panel_height.max(0);
        self.recompute_range();
    }

    pub fn parallax_offset(&self) -> i32 {
        self.parallax_offset
    }

    pub fn set_parallax_offset(&mut self, parallax_offset: i32) {
        self.parallax_offset = parallax_offset;
    }

    pub fn anchor_point(&self) -> f32 {
        self.anchor_point
    }

    /// Caller validates the range
    pub fn set_anchor_point(&mut self, anchor_point: f32) {
        self.anchor_point = anchor_point;
    }

    /// Pixels the pane may travel between collapsed and expanded
    pub fn slide_range(&self) -> i32 {
        self.slide_range
    }

    /// Height available to the slideable pane inside the padding
    pub fn slideable_height(&self) -> i32 {
        (self.bounds.height - self.bounds.padding_top - self.bounds.padding_bottom).max(0)
    }

    /// Top edge of the slideable pane for a slide offset
    pub fn offset_to_pixel(&self, offset: f32) -> i32 {
        let slide_pixels = (offset * self.slide_range as f32).round() as i32;
        if self.gravity.is_sliding_up() {
            self.bounds.height - self.bounds.padding_bottom - self.panel_height - slide_pixels
        } else {
            self.bounds.padding_top - self.slideable_height() + self.panel_height + slide_pixels
        }
    }

    /// Slide offset for a top edge position; 0 when there is no range
    pub fn pixel_to_offset(&self, top: i32) -> f32 {
        if self.slide_range == 0 {
            return 0.0;
        }
        let collapsed_top = self.offset_to_pixel(0.0);
        let travelled = if self.gravity.is_sliding_up() {
            collapsed_top - top
        } else {
            top - collapsed_top
        };
        travelled as f32 / self.slide_range as f32
    }

    /// Top edge bounds a drag is clamped to, as (min, max)
    pub fn drag_bounds(&self) -> (i32, i32) {
        let collapsed = self.offset_to_pixel(0.0);
        let expanded = self.offset_to_pixel(1.0);
        (collapsed.min(expanded), collapsed.max(expanded))
    }

    /// Main pane displacement for a slide offset
    ///
    /// Moves against the slide direction so the main pane drifts away from
    /// the opening panel.
    pub fn parallax_for(&self, offset: f32) -> i32 {
        let shift = (self.parallax_offset as f32 * offset.max(0.0)) as i32;
        if self.gravity.is_sliding_up() {
            -shift
        } else {
            shift
        }
    }

    /// Offset that pushes the collapsed panel one panel height out of view
    pub fn hidden_offset(&self) -> f32 {
        if self.slide_range == 0 {
            return -1.0;
        }
        -(self.panel_height as f32 / self.slide_range as f32)
    }

    /// Offset of a rest state; `None` for `Dragging`
    ///
    /// `Anchored` maps to 1.0 when no anchor is configured.
    pub fn stop_offset(&self, state: PanelState) -> Option<f32> {
        match state {
            PanelState::Expanded => Some(1.0),
            PanelState::Collapsed => Some(0.0),
            PanelState::Anchored => Some(self.anchor_point.min(1.0)),
            PanelState::Hidden => Some(self.hidden_offset()),
            PanelState::Dragging => None,
        }
    }

    /// Stops a released gesture may settle on, ascending
    pub fn reachable_stops(&self, include_hidden: bool) -> Vec<f32> {
        let mut stops = Vec::with_capacity(4);
        if include_hidden {
            stops.push(self.hidden_offset());
        }
        stops.push(0.0);
        if self.anchor_point < 1.0 {
            stops.push(self.anchor_point);
        }
        stops.push(1.0);
        stops
    }

    /// Slideable pane rectangle at an offset
    pub fn slideable_rect(&self, offset: f32) -> Rect {
        Rect::new(
            0,
            self.offset_to_pixel(offset),
            self.bounds.width,
            self.slideable_height(),
        )
    }
}

/// Fade colour over the main pane: the base alpha scaled by the offset
pub fn fade_color_for(covered_fade_color: u32, offset: f32) -> u32 {
    if covered_fade_color == 0 || offset <= 0.0 {
        return 0;
    }
    let base_alpha = (covered_fade_color & 0xFF00_0000) >> 24;
    let alpha = (base_alpha as f32 * offset.min(1.0)) as u32;
    (alpha << 24) | (covered_fade_color & 0x00FF_FFFF)
}
