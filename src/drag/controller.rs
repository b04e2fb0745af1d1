//! Pointer capture, drag tracking and settle driving
//!
//! The controller owns the live slide offset and the drag phase. Callers
//! pass the current geometry in with each event and act on the returned
//! `DragOutcome`.

use crate::geometry::{PanelGeometry, Rect};
use crate::velocity::{Axis, VelocityTracker};

use super::settle::{choose_settle_target, SettleAnimation, SettleTiming};

/// Identifier the host assigns to a pointer
pub type PointerId = u32;

/// Gesture phase of the slideable pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    Idle,
    Dragging,
    Settling,
}

/// What a pointer event or tick did
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Nothing for the panel to do
    Ignored,
    /// Down recorded (or move still within slop)
    Pending,
    /// Slop exceeded; pointer captured
    DragStarted,
    /// Live offset changed during a drag
    Moved(f32),
    /// Pointer released and a settle began towards `target`
    Released { target: f32 },
    /// Down and up without crossing the slop
    Click,
    /// Motion was dominant on the other axis; the host keeps the gesture
    Yielded,
    /// Settle advanced to a new offset
    Step(f32),
    /// Settle reached its target exactly
    Settled(f32),
    /// Gesture aborted; offset reverted
    Cancelled(f32),
}

/// Tuning for gesture recognition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTuning {
    pub touch_slop: f32,
    /// px/s
    pub min_fling_velocity: f32,
    /// px/s
    pub max_fling_velocity: f32,
    pub velocity_window_ms: u64,
    pub settle: SettleTiming,
}

impl Default for DragTuning {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 400.0,
            max_fling_velocity: 8_000.0,
            velocity_window_ms: 100,
            settle: SettleTiming::default(),
        }
    }
}

/// The pointer-down that may become a drag
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerDown {
    pointer_id: PointerId,
    x: f32,
    y: f32,
    /// The down cut a settle short
    interrupted_settle: bool,
    /// Motion on the other axis handed the gesture back to the host
    yielded: bool,
}

/// Pointer position and pane top when the drag started
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer_y: f32,
    top: i32,
}

#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    offset: f32,
    tuning: DragTuning,
    tracker: VelocityTracker,
    down: Option<PointerDown>,
    anchor: Option<DragAnchor>,
    settle: Option<SettleAnimation>,
}

impl DragController {
    pub fn new(offset: f32, tuning: DragTuning) -> Self {
        Self {
            phase: DragPhase::Idle,
            offset,
            tuning,
            tracker: VelocityTracker::new(tuning.velocity_window_ms),
            down: None,
            anchor: None,
            settle: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current live slide offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn tuning(&self) -> DragTuning {
        self.tuning
    }

    pub fn set_min_fling_velocity(&mut self, velocity: f32) {
        self.tuning.min_fling_velocity = velocity;
    }

    /// Pointer currently tracked for the gesture, if any
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.down.map(|d| d.pointer_id)
    }

    /// Target of the in-flight settle
    pub fn settle_target(&self) -> Option<f32> {
        self.settle.as_ref().map(|s| s.to)
    }

    /// Place the pane without animating (layout or programmatic snap)
    pub fn jump_to(&mut self, offset: f32) {
        self.settle = None;
        self.offset = offset;
        if self.phase == DragPhase::Settling {
            self.phase = DragPhase::Idle;
        }
    }

    /// Record a pointer-down inside `hit_area`
    ///
    /// A down during a settle freezes the pane where it was last drawn.
    pub fn on_pointer_down(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
        hit_area: Rect,
    ) -> DragOutcome {
        if self.down.is_some() {
            // One pointer per gesture
            return DragOutcome::Ignored;
        }
        if !hit_area.contains(x, y) {
            return DragOutcome::Ignored;
        }

        let interrupted_settle = self.phase == DragPhase::Settling;
        if interrupted_settle {
            tracing::debug!(offset = self.offset, "settle interrupted by pointer down");
            self.settle = None;
            self.phase = DragPhase::Idle;
        }

        self.tracker.reset();
        self.tracker.add_sample(time_ms, x, y);
        self.anchor = None;
        self.down = Some(PointerDown {
            pointer_id,
            x,
            y,
            interrupted_settle,
            yielded: false,
        });
        DragOutcome::Pending
    }

    pub fn on_pointer_move(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
        geometry: &PanelGeometry,
    ) -> DragOutcome {
        let Some(down) = self.down else {
            return DragOutcome::Ignored;
        };
        if down.pointer_id != pointer_id || down.yielded {
            return DragOutcome::Ignored;
        }
        self.tracker.add_sample(time_ms, x, y);

        match self.phase {
            DragPhase::Idle => {
                let adx = (x - down.x).abs();
                let ady = (y - down.y).abs();
                let slop = self.tuning.touch_slop;

                if ady > slop && ady > adx {
                    self.phase = DragPhase::Dragging;
                    self.anchor = Some(DragAnchor {
                        pointer_y: y,
                        top: geometry.offset_to_pixel(self.offset),
                    });
                    tracing::debug!(pointer_id, offset = self.offset, "drag started");
                    DragOutcome::DragStarted
                } else if adx > slop && adx >= ady {
                    tracing::debug!(pointer_id, "orthogonal motion, yielding gesture");
                    if let Some(d) = self.down.as_mut() {
                        d.yielded = true;
                    }
                    DragOutcome::Yielded
                } else {
                    DragOutcome::Pending
                }
            }
            DragPhase::Dragging => {
                let Some(anchor) = self.anchor else {
                    return DragOutcome::Ignored;
                };
                let (min_top, max_top) = geometry.drag_bounds();
                let candidate = anchor.top + (y - anchor.pointer_y).round() as i32;
                let top = candidate.clamp(min_top, max_top);
                let offset = geometry.pixel_to_offset(top).clamp(0.0, 1.0);
                if offset == self.offset {
                    return DragOutcome::Pending;
                }
                self.offset = offset;
                DragOutcome::Moved(offset)
            }
            DragPhase::Settling => DragOutcome::Ignored,
        }
    }

    /// Release velocity in offset direction (positive towards expanded), px/s
    fn release_velocity(&self, geometry: &PanelGeometry) -> f32 {
        let max = self.tuning.max_fling_velocity;
        let vy = self.tracker.current_velocity(Axis::Y).clamp(-max, max);
        if geometry.gravity().is_sliding_up() {
            -vy
        } else {
            vy
        }
    }

    /// Release the captured pointer
    ///
    /// `stops` are the reachable settle offsets, ascending.
    pub fn on_pointer_up(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
        geometry: &PanelGeometry,
        stops: &[f32],
    ) -> DragOutcome {
        let Some(down) = self.down else {
            return DragOutcome::Ignored;
        };
        if down.pointer_id != pointer_id {
            return DragOutcome::Ignored;
        }
        self.down = None;
        self.anchor = None;

        // A yielded gesture still owns a settle it interrupted
        if down.yielded && !down.interrupted_settle {
            return DragOutcome::Ignored;
        }

        match self.phase {
            DragPhase::Dragging => {
                self.tracker.add_sample(time_ms, x, y);
                let velocity = self.release_velocity(geometry);
                let target = choose_settle_target(
                    self.offset,
                    velocity,
                    self.tuning.min_fling_velocity,
                    stops,
                );
                tracing::debug!(
                    offset = self.offset,
                    velocity,
                    to = target,
                    "drag released"
                );
                self.start_settle(target, velocity, Some(time_ms), geometry)
            }
            DragPhase::Idle if down.interrupted_settle => {
                // Caught mid-settle and let go or yielded: resume towards the nearest stop
                let target = choose_settle_target(self.offset, 0.0, f32::INFINITY, stops);
                self.start_settle(target, 0.0, Some(time_ms), geometry)
            }
            DragPhase::Idle => DragOutcome::Click,
            DragPhase::Settling => DragOutcome::Ignored,
        }
    }

    /// Begin animating towards `target`
    ///
    /// `start_ms` of `None` starts the clock at the first tick. A settle
    /// with nothing to travel completes immediately.
    pub fn start_settle(
        &mut self,
        target: f32,
        velocity: f32,
        start_ms: Option<u64>,
        geometry: &PanelGeometry,
    ) -> DragOutcome {
        let range = geometry.slide_range();
        let distance_px = (target - self.offset).abs() * range as f32;
        if distance_px < 0.5 {
            self.settle = None;
            self.phase = DragPhase::Idle;
            self.offset = target;
            return DragOutcome::Settled(target);
        }

        let duration_ms = self.tuning.settle.duration_ms(distance_px, range, velocity);
        tracing::debug!(
            from = self.offset,
            to = target,
            duration_ms,
            "settle started"
        );
        self.settle = Some(SettleAnimation::new(self.offset, target, start_ms, duration_ms));
        self.phase = DragPhase::Settling;
        DragOutcome::Released { target }
    }

    /// Advance the settle animation
    pub fn tick(&mut self, now_ms: u64) -> DragOutcome {
        if self.phase != DragPhase::Settling {
            return DragOutcome::Ignored;
        }
        let Some(settle) = self.settle.as_mut() else {
            self.phase = DragPhase::Idle;
            return DragOutcome::Ignored;
        };

        let (offset, done) = settle.sample(now_ms);
        if done {
            self.settle = None;
            self.phase = DragPhase::Idle;
            self.offset = offset;
            tracing::debug!(offset, "settle finished");
            return DragOutcome::Settled(offset);
        }
        if offset == self.offset {
            return DragOutcome::Pending;
        }
        self.offset = offset;
        DragOutcome::Step(offset)
    }

    /// Abort any drag or settle and snap back to `rest_offset`
    pub fn cancel(&mut self, rest_offset: f32) -> DragOutcome {
        let interrupted = self.down.map(|d| d.interrupted_settle).unwrap_or(false);
        let active = self.phase != DragPhase::Idle || interrupted;

        self.down = None;
        self.anchor = None;
        self.settle = None;
        self.tracker.reset();
        self.phase = DragPhase::Idle;

        if !active {
            return DragOutcome::Ignored;
        }
        tracing::debug!(from = self.offset, to = rest_offset, "gesture cancelled");
        self.offset = rest_offset;
        DragOutcome::Cancelled(rest_offset)
    }
}
