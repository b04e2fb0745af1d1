//! Message types for the Elm-style architecture
//!
//! Every host input and programmatic call can be expressed as a `PanelMsg`
//! and fed through `update()`. Messages are internally tagged so gesture
//! scripts read naturally in YAML:
//!
//! ```yaml
//! - { type: pointer_down, pointer_id: 1, x: 200, y: 1050, time_ms: 0 }
//! - { type: tick, now_ms: 16 }
//! - { type: set_state, state: expanded }
//! ```

use serde::{Deserialize, Serialize};

use crate::drag::PointerId;
use crate::geometry::Rect;
use crate::state::PanelState;

/// Serializable form of a drag view region, in slideable pane coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragViewRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<DragViewRect> for Rect {
    fn from(r: DragViewRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelMsg {
    // === Pointer input ===
    PointerDown {
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    },
    PointerMove {
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    },
    PointerUp {
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    },
    PointerCancel,

    // === Animation ===
    /// Frame callback while a settle is active
    Tick { now_ms: u64 },

    // === Layout ===
    /// Container measured or resized
    Layout {
        width: i32,
        height: i32,
        #[serde(default)]
        padding_top: i32,
        #[serde(default)]
        padding_bottom: i32,
    },
    SetPanelHeight { px: i32 },
    SetShadowHeight { px: i32 },
    SetParallaxOffset { px: i32 },

    // === Programmatic settings ===
    /// Animate to a state
    SetState { state: PanelState },
    SetAnchorPoint { anchor_point: f32 },
    SetTouchEnabled { enabled: bool },
    SetHiddenEnabled { enabled: bool },
    /// `None` makes the whole slideable pane draggable
    SetDragView {
        #[serde(default)]
        rect: Option<DragViewRect>,
    },
    SetMinFlingVelocity { velocity: f32 },
    SetOverlay { enabled: bool },
    SetClipPanel { enabled: bool },
    SetCoveredFadeColor { color: u32 },
}

impl PanelMsg {
    /// Pointer and tick messages arrive at frame rate
    pub fn is_noisy(&self) -> bool {
        matches!(self, PanelMsg::PointerMove { .. } | PanelMsg::Tick { .. })
    }
}
