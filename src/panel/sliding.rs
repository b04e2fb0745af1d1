//! The sliding panel façade
//!
//! Owns the geometry, drag controller and state machine, and turns each
//! `DragOutcome` into state transitions, listener notifications and a
//! command for the host.

use crate::commands::Cmd;
use crate::config::{is_valid_anchor_point, PanelConfig, ResolvedMetrics};
use crate::drag::{DragController, DragOutcome, DragPhase, DragTuning, PointerId};
use crate::error::PanelError;
use crate::geometry::{LayoutBounds, PanelGeometry, Rect};
use crate::layout::{compute_layout, LayoutFlags, PaneLayout};
use crate::listener::{dispatch, PanelEvent, PanelSlideListener};
use crate::state::{PanelState, PanelStateMachine};

/// A fixed main pane plus a slideable pane dragged along the vertical axis
pub struct SlidingPanel {
    geometry: PanelGeometry,
    drag: DragController,
    state: PanelStateMachine,
    listener: Option<Box<dyn PanelSlideListener>>,
    /// Exclusive drag region in slideable pane coordinates
    drag_view: Option<Rect>,
    touch_enabled: bool,
    hidden_enabled: bool,
    overlay: bool,
    clip_panel: bool,
    shadow_height: i32,
    covered_fade_color: u32,
    /// No bounds have been supplied yet
    first_layout: bool,
}

impl std::fmt::Debug for SlidingPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingPanel")
            .field("state", &self.state.current())
            .field("phase", &self.drag.phase())
            .field("offset", &self.drag.offset())
            .field("geometry", &self.geometry)
            .field("drag_view", &self.drag_view)
            .field("touch_enabled", &self.touch_enabled)
            .finish_non_exhaustive()
    }
}

impl SlidingPanel {
    /// Build a panel from a user config
    ///
    /// Fails on configuration errors such as an invalid gravity or density.
    pub fn new(config: &PanelConfig) -> Result<Self, PanelError> {
        Ok(Self::from_metrics(config.resolve()?))
    }

    /// Build a panel from already-resolved pixel metrics
    pub fn from_metrics(metrics: ResolvedMetrics) -> Self {
        let geometry = PanelGeometry::new(
            metrics.gravity,
            metrics.panel_height,
            metrics.parallax_offset,
            metrics.anchor_point,
        );
        let tuning = DragTuning {
            touch_slop: metrics.touch_slop,
            min_fling_velocity: metrics.min_fling_velocity,
            max_fling_velocity: metrics.max_fling_velocity,
            velocity_window_ms: metrics.velocity_window_ms,
            settle: metrics.settle,
        };

        Self {
            geometry,
            drag: DragController::new(0.0, tuning),
            state: PanelStateMachine::new(metrics.initial_state),
            listener: None,
            drag_view: None,
            touch_enabled: true,
            hidden_enabled: metrics.hidden_enabled,
            overlay: metrics.overlay,
            clip_panel: metrics.clip_panel,
            shadow_height: metrics.shadow_height,
            covered_fade_color: metrics.covered_fade_color,
            first_layout: true,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn panel_state(&self) -> PanelState {
        self.state.current()
    }

    pub fn slide_offset(&self) -> f32 {
        self.drag.offset()
    }

    /// Main pane displacement for the current offset
    pub fn current_parallax_offset(&self) -> i32 {
        self.geometry.parallax_for(self.drag.offset())
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    pub fn slide_range(&self) -> i32 {
        self.geometry.slide_range()
    }

    pub fn anchor_point(&self) -> f32 {
        self.geometry.anchor_point()
    }

    pub fn panel_height(&self) -> i32 {
        self.geometry.panel_height()
    }

    pub fn shadow_height(&self) -> i32 {
        self.shadow_height
    }

    pub fn parallax_offset(&self) -> i32 {
        self.geometry.parallax_offset()
    }

    pub fn min_fling_velocity(&self) -> f32 {
        self.drag.tuning().min_fling_velocity
    }

    pub fn drag_view(&self) -> Option<Rect> {
        self.drag_view
    }

    pub fn is_overlayed(&self) -> bool {
        self.overlay
    }

    pub fn is_clip_panel(&self) -> bool {
        self.clip_panel
    }

    pub fn covered_fade_color(&self) -> u32 {
        self.covered_fade_color
    }

    pub fn is_hidden_enabled(&self) -> bool {
        self.hidden_enabled
    }

    /// Whether gestures can move the panel right now
    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
            && self.geometry.slide_range() > 0
            && self.state.current() != PanelState::Hidden
    }

    /// Rectangles for both panes at the current offset
    pub fn layout(&self) -> PaneLayout {
        let flags = LayoutFlags {
            overlay: self.overlay,
            clip_panel: self.clip_panel,
            shadow_height: self.shadow_height,
            covered_fade_color: self.covered_fade_color,
        };
        compute_layout(
            &self.geometry,
            flags,
            self.drag.offset(),
            self.state.current(),
        )
    }

    // =========================================================================
    // Listener
    // =========================================================================

    /// Register the listener, replacing any previous one
    pub fn set_panel_slide_listener(&mut self, listener: impl PanelSlideListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_panel_slide_listener(&mut self) {
        self.listener = None;
    }

    fn emit(&mut self, event: PanelEvent) {
        if let Some(listener) = self.listener.as_mut() {
            dispatch(listener.as_mut(), event);
        }
    }

    fn emit_slide_if_moved(&mut self, previous: f32, offset: f32) {
        if offset != previous {
            tracing::trace!(offset, "panel slide");
            self.emit(PanelEvent::Slide(offset));
        }
    }

    // =========================================================================
    // Pointer input and animation
    // =========================================================================

    /// Hit area for starting a drag: the drag view if set, else the whole pane
    fn hit_area(&self) -> Rect {
        let pane = self.geometry.slideable_rect(self.drag.offset());
        match self.drag_view {
            Some(view) => view.offset(pane.x, pane.y),
            None => pane,
        }
    }

    /// Stops a released gesture may settle on
    fn reachable_stops(&self) -> Vec<f32> {
        self.geometry
            .reachable_stops(self.hidden_enabled && self.drag_view.is_none())
    }

    pub fn on_pointer_down(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) -> Option<Cmd> {
        if !self.is_touch_enabled() {
            return None;
        }
        let previous = self.drag.offset();
        let hit_area = self.hit_area();
        let outcome = self.drag.on_pointer_down(pointer_id, x, y, time_ms, hit_area);
        self.apply(previous, outcome)
    }

    pub fn on_pointer_move(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) -> Option<Cmd> {
        let previous = self.drag.offset();
        let outcome = self
            .drag
            .on_pointer_move(pointer_id, x, y, time_ms, &self.geometry);
        self.apply(previous, outcome)
    }

    pub fn on_pointer_up(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) -> Option<Cmd> {
        let previous = self.drag.offset();
        let stops = self.reachable_stops();
        let outcome = self
            .drag
            .on_pointer_up(pointer_id, x, y, time_ms, &self.geometry, &stops);
        self.apply(previous, outcome)
    }

    /// Abort the gesture or settle and return to the last rest state
    pub fn on_cancel(&mut self) -> Option<Cmd> {
        let previous = self.drag.offset();
        let rest_offset = self
            .geometry
            .stop_offset(self.state.last_rest())
            .unwrap_or(0.0);
        let outcome = self.drag.cancel(rest_offset);
        self.apply(previous, outcome)
    }

    /// Advance an active settle; call once per frame while `RequestFrame` is returned
    pub fn tick(&mut self, now_ms: u64) -> Option<Cmd> {
        let previous = self.drag.offset();
        let outcome = self.drag.tick(now_ms);
        self.apply(previous, outcome)
    }

    fn apply(&mut self, previous: f32, outcome: DragOutcome) -> Option<Cmd> {
        match outcome {
            DragOutcome::Ignored => None,
            // A settle tick that did not move the pane still needs the next frame
            DragOutcome::Pending if self.drag.phase() == DragPhase::Settling => {
                Some(Cmd::RequestFrame)
            }
            DragOutcome::Pending => None,
            DragOutcome::DragStarted => {
                self.state.begin_drag();
                None
            }
            DragOutcome::Moved(offset) => {
                self.emit_slide_if_moved(previous, offset);
                Some(Cmd::Redraw)
            }
            DragOutcome::Released { .. } => {
                self.state.release();
                Some(Cmd::RequestFrame)
            }
            DragOutcome::Click => self.on_click(),
            DragOutcome::Yielded => Some(Cmd::Yield),
            DragOutcome::Step(offset) => {
                self.emit_slide_if_moved(previous, offset);
                Some(Cmd::RequestFrame)
            }
            DragOutcome::Settled(offset) => {
                self.state.release();
                self.emit_slide_if_moved(previous, offset);
                let resolved = PanelState::from_settled_offset(offset);
                if let Some(arrived) = self.state.arrive(resolved) {
                    tracing::info!(state = %arrived, "panel state changed");
                    if let Some(event) = PanelEvent::arrival(arrived) {
                        self.emit(event);
                    }
                }
                Some(Cmd::Redraw)
            }
            DragOutcome::Cancelled(offset) => {
                self.emit_slide_if_moved(previous, offset);
                let restored = self.state.cancel();
                tracing::debug!(state = %restored, "gesture cancelled");
                Some(Cmd::Redraw)
            }
        }
    }

    /// A tap on the drag view toggles the panel open or closed
    fn on_click(&mut self) -> Option<Cmd> {
        let click = Some(Cmd::Click);
        if self.drag_view.is_none() || !self.is_touch_enabled() {
            return click;
        }

        let target = match self.state.current() {
            PanelState::Expanded | PanelState::Anchored => PanelState::Collapsed,
            _ if self.geometry.anchor_point() < 1.0 => PanelState::Anchored,
            _ => PanelState::Expanded,
        };
        tracing::debug!(to = %target, "drag view tapped");
        Cmd::merge(click, self.set_panel_state(target))
    }

    // =========================================================================
    // Programmatic control
    // =========================================================================

    /// Animate to `target` through the settle path
    ///
    /// `Anchored` without an anchor point means `Expanded`. Ignored while a
    /// drag is live. Before the first layout the state is set directly.
    pub fn set_panel_state(&mut self, target: PanelState) -> Option<Cmd> {
        if target == PanelState::Dragging {
            tracing::warn!("set_panel_state(Dragging) ignored: dragging is not a target state");
            return None;
        }
        let target = if target == PanelState::Anchored && self.geometry.anchor_point() >= 1.0 {
            PanelState::Expanded
        } else {
            target
        };

        if self.drag.phase() == DragPhase::Dragging {
            tracing::debug!(to = %target, "set_panel_state ignored during drag");
            return None;
        }

        if self.first_layout {
            self.state.force(target);
            return None;
        }

        let offset = self.geometry.stop_offset(target)?;
        if self.drag.phase() == DragPhase::Idle
            && self.state.current() == target
            && self.drag.offset() == offset
        {
            return None;
        }

        let previous = self.drag.offset();
        let outcome = self.drag.start_settle(offset, 0.0, None, &self.geometry);
        self.apply(previous, outcome)
    }

    /// Set the anchor stop; values outside (0, 1] are rejected
    pub fn set_anchor_point(&mut self, anchor_point: f32) {
        if is_valid_anchor_point(anchor_point) {
            self.geometry.set_anchor_point(anchor_point);
        } else {
            tracing::warn!(
                anchor_point,
                previous = self.geometry.anchor_point(),
                "anchor point must be in (0, 1]; keeping previous value"
            );
        }
    }

    /// Enable or disable gestures; disabling cancels a live drag
    pub fn set_touch_enabled(&mut self, enabled: bool) -> Option<Cmd> {
        self.touch_enabled = enabled;
        if !enabled && self.drag.active_pointer().is_some() {
            return self.on_cancel();
        }
        None
    }

    /// Restrict drags to a region of the slideable pane, or `None` for all of it
    pub fn set_drag_view(&mut self, drag_view: Option<Rect>) {
        self.drag_view = drag_view;
    }

    pub fn set_hidden_enabled(&mut self, enabled: bool) {
        self.hidden_enabled = enabled;
    }

    pub fn set_min_fling_velocity(&mut self, velocity: f32) {
        self.drag.set_min_fling_velocity(velocity);
    }

    pub fn set_overlayed(&mut self, overlayed: bool) {
        self.overlay = overlayed;
    }

    pub fn set_clip_panel(&mut self, clip: bool) {
        self.clip_panel = clip;
    }

    pub fn set_covered_fade_color(&mut self, color: u32) {
        self.covered_fade_color = color;
    }

    pub fn set_shadow_height(&mut self, px: i32) -> Option<Cmd> {
        self.shadow_height = px.max(0);
        (!self.first_layout).then_some(Cmd::Redraw)
    }

    pub fn set_parallax_offset(&mut self, px: i32) -> Option<Cmd> {
        self.geometry.set_parallax_offset(px);
        (!self.first_layout).then_some(Cmd::Redraw)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Supply container bounds (first layout, resize, rotation)
    pub fn set_layout(&mut self, bounds: LayoutBounds) -> Option<Cmd> {
        self.geometry.set_bounds(bounds);

        if self.first_layout {
            self.first_layout = false;
            let offset = self
                .geometry
                .stop_offset(self.state.current())
                .unwrap_or(0.0);
            self.drag.jump_to(offset);
            tracing::debug!(
                state = %self.state.current(),
                offset,
                slide_range = self.geometry.slide_range(),
                "first layout"
            );
            return Some(Cmd::Redraw);
        }
        self.after_geometry_change()
    }

    /// Change the collapsed panel height
    pub fn set_panel_height(&mut self, px: i32) -> Option<Cmd> {
        if self.geometry.panel_height() == px {
            return None;
        }
        self.geometry.set_panel_height(px);
        if self.first_layout {
            return None;
        }
        self.after_geometry_change()
    }

    fn after_geometry_change(&mut self) -> Option<Cmd> {
        if self.geometry.slide_range() == 0 && self.drag.phase() == DragPhase::Dragging {
            tracing::debug!("slide range collapsed to zero during drag");
            return self.on_cancel();
        }

        if self.drag.phase() == DragPhase::Idle && self.drag.active_pointer().is_none() {
            // Keep a resting pane on its stop; the hidden stop moves with the range
            if let Some(offset) = self.geometry.stop_offset(self.state.current()) {
                let previous = self.drag.offset();
                self.drag.jump_to(offset);
                self.emit_slide_if_moved(previous, offset);
            }
        }
        Some(Cmd::Redraw)
    }
}
