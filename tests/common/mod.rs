//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.
//!
//! The default test panel is 400x1100 with a 100 px collapsed panel, so the
//! slide range is exactly 1000 px and an offset of 0.1 is 100 px of travel.

#![allow(dead_code)]

use sliding_panel::{
    Cmd, DragPhase, EventLog, LayoutBounds, PanelConfig, PanelEvent, SlidingPanel,
};

pub const WIDTH: i32 = 400;
pub const HEIGHT: i32 = 1100;
pub const PANEL_HEIGHT: f32 = 100.0;
pub const FRAME_MS: u64 = 16;

/// Config with a round slide range and no shadow
pub fn test_config() -> PanelConfig {
    PanelConfig {
        panel_height_dp: PANEL_HEIGHT,
        shadow_height_dp: 0.0,
        ..PanelConfig::default()
    }
}

/// Laid-out panel with a recording listener attached
pub fn test_panel() -> (SlidingPanel, EventLog) {
    test_panel_with(test_config())
}

pub fn test_panel_with(config: PanelConfig) -> (SlidingPanel, EventLog) {
    let mut panel = SlidingPanel::new(&config).unwrap();
    let log = EventLog::new();
    panel.set_panel_slide_listener(log.clone());
    panel.set_layout(LayoutBounds::new(WIDTH, HEIGHT));
    (panel, log)
}

/// Screen-y direction that increases the offset for this panel's gravity
fn opening_sign(panel: &SlidingPanel) -> f32 {
    if panel.geometry().gravity().is_sliding_up() {
        -1.0
    } else {
        1.0
    }
}

/// A y coordinate inside the slideable pane's peeking area
pub fn grab_y(panel: &SlidingPanel) -> f32 {
    let pane = panel.geometry().slideable_rect(panel.slide_offset());
    if panel.geometry().gravity().is_sliding_up() {
        pane.y as f32 + 50.0
    } else {
        pane.bottom() as f32 - 50.0
    }
}

/// Press, cross the slop, and move the pane by `delta` offset without releasing
///
/// Returns the timestamp and y of the last move.
pub fn begin_drag(panel: &mut SlidingPanel, delta: f32, start_ms: u64) -> (u64, f32) {
    let sign = opening_sign(panel);
    let down_y = grab_y(panel);
    let slop_y = down_y + sign * 20.0;
    let end_y = slop_y + sign * delta * 1000.0;

    panel.on_pointer_down(1, 200.0, down_y, start_ms);
    panel.on_pointer_move(1, 200.0, slop_y, start_ms + FRAME_MS);
    panel.on_pointer_move(1, 200.0, end_y, start_ms + 500);
    // Hold still so the release carries no velocity
    panel.on_pointer_move(1, 200.0, end_y, start_ms + 1000);
    (start_ms + 1000, end_y)
}

/// Slow drag by `delta` offset and release; returns the release time
pub fn drag_by(panel: &mut SlidingPanel, delta: f32, start_ms: u64) -> (Option<Cmd>, u64) {
    let (last_ms, y) = begin_drag(panel, delta, start_ms);
    let up_ms = last_ms + 100;
    (panel.on_pointer_up(1, 200.0, y, up_ms), up_ms)
}

/// Fling at `velocity` px/s in screen y (positive is downward); returns release time
pub fn fling(panel: &mut SlidingPanel, velocity: f32, start_ms: u64) -> (Option<Cmd>, u64) {
    let down_y = grab_y(panel);
    panel.on_pointer_down(1, 200.0, down_y, start_ms);

    let y_at = |t: u64| down_y + velocity * (t - start_ms) as f32 / 1000.0;
    let end_ms = start_ms + 60;
    for t in (start_ms + 10..=end_ms).step_by(10) {
        panel.on_pointer_move(1, 200.0, y_at(t), t);
    }
    (panel.on_pointer_up(1, 200.0, y_at(end_ms), end_ms), end_ms)
}

/// Tap at (x, y) without moving
pub fn tap(panel: &mut SlidingPanel, x: f32, y: f32, time_ms: u64) -> Option<Cmd> {
    panel.on_pointer_down(7, x, y, time_ms);
    panel.on_pointer_up(7, x, y, time_ms + 50)
}

/// Tick until the settle finishes; returns the time of the last tick
pub fn run_settle(panel: &mut SlidingPanel, start_ms: u64) -> u64 {
    let mut now = start_ms;
    for _ in 0..1000 {
        if panel.drag_phase() != DragPhase::Settling {
            return now;
        }
        now += FRAME_MS;
        panel.tick(now);
    }
    panic!("settle did not finish");
}

/// Assert the slide stream only moves in one direction
pub fn assert_monotonic(slides: &[f32], increasing: bool) {
    for pair in slides.windows(2) {
        if increasing {
            assert!(pair[1] >= pair[0], "slides not increasing: {:?}", slides);
        } else {
            assert!(pair[1] <= pair[0], "slides not decreasing: {:?}", slides);
        }
    }
}

pub fn arrivals(log: &EventLog) -> Vec<PanelEvent> {
    log.arrivals()
}
