//! Message dispatch tests
//!
//! Drives the panel purely through `update()` the way a host event loop or
//! the replay tool does.

mod common;

use common::{test_config, FRAME_MS};
use sliding_panel::{
    update, Cmd, DragPhase, EventLog, PanelConfig, PanelEvent, PanelMsg, PanelState, SlidingPanel,
};

fn panel_with_log(config: PanelConfig) -> (SlidingPanel, EventLog) {
    let mut panel = SlidingPanel::new(&config).unwrap();
    let log = EventLog::new();
    panel.set_panel_slide_listener(log.clone());
    (panel, log)
}

fn parse(yaml: &str) -> Vec<PanelMsg> {
    serde_yaml::from_str(yaml).unwrap()
}

/// Feed messages, ticking while the panel asks for frames
fn drive(panel: &mut SlidingPanel, msgs: Vec<PanelMsg>) -> Vec<Option<Cmd>> {
    let mut now = 0;
    let mut cmds = Vec::new();
    for msg in msgs {
        if let PanelMsg::PointerUp { time_ms, .. } = &msg {
            now = *time_ms;
        }
        let mut cmd = update(panel, msg);
        cmds.push(cmd.clone());
        while cmd.as_ref().is_some_and(Cmd::needs_frame) {
            now += FRAME_MS;
            cmd = update(panel, PanelMsg::Tick { now_ms: now });
        }
    }
    cmds
}

#[test]
fn test_layout_message_places_pane() {
    let (mut panel, _log) = panel_with_log(test_config());
    let cmd = update(
        &mut panel,
        PanelMsg::Layout {
            width: 400,
            height: 1100,
            padding_top: 0,
            padding_bottom: 0,
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(panel.slide_range(), 1000);
}

#[test]
fn test_scripted_drag_expands() {
    let (mut panel, log) = panel_with_log(test_config());
    let script = parse(
        r#"
- { type: layout, width: 400, height: 1100 }
- { type: pointer_down, pointer_id: 3, x: 200, y: 1050, time_ms: 0 }
- { type: pointer_move, pointer_id: 3, x: 200, y: 1030, time_ms: 16 }
- { type: pointer_move, pointer_id: 3, x: 200, y: 430, time_ms: 500 }
- { type: pointer_move, pointer_id: 3, x: 200, y: 430, time_ms: 1000 }
- { type: pointer_up, pointer_id: 3, x: 200, y: 430, time_ms: 1100 }
"#,
    );

    let cmds = drive(&mut panel, script);
    assert_eq!(cmds.last(), Some(&Some(Cmd::RequestFrame)));
    assert_eq!(panel.panel_state(), PanelState::Expanded);
    assert_eq!(panel.drag_phase(), DragPhase::Idle);
    assert_eq!(log.arrivals(), vec![PanelEvent::Expanded]);
}

#[test]
fn test_set_state_message_animates() {
    let (mut panel, log) = panel_with_log(test_config());
    let script = parse(
        r#"
- { type: layout, width: 400, height: 1100 }
- { type: set_anchor_point, anchor_point: 0.25 }
- { type: set_state, state: anchored }
"#,
    );
    drive(&mut panel, script);

    assert_eq!(panel.anchor_point(), 0.25);
    assert_eq!(panel.panel_state(), PanelState::Anchored);
    assert_eq!(panel.slide_offset(), 0.25);
    assert!(log.slides().len() > 1);
    assert_eq!(log.arrivals(), vec![PanelEvent::Anchored]);
}

#[test]
fn test_setting_messages_update_panel() {
    let (mut panel, _log) = panel_with_log(test_config());
    let script = parse(
        r#"
- { type: layout, width: 400, height: 1100, padding_top: 10 }
- { type: set_panel_height, px: 150 }
- { type: set_shadow_height, px: 6 }
- { type: set_parallax_offset, px: 40 }
- { type: set_min_fling_velocity, velocity: 1200 }
- { type: set_overlay, enabled: true }
- { type: set_clip_panel, enabled: false }
- { type: set_covered_fade_color, color: 0 }
- { type: set_hidden_enabled, enabled: true }
- { type: set_drag_view, rect: { x: 0, y: 0, width: 400, height: 48 } }
"#,
    );
    drive(&mut panel, script);

    assert_eq!(panel.panel_height(), 150);
    assert_eq!(panel.slide_range(), 1100 - 10 - 150);
    assert_eq!(panel.shadow_height(), 6);
    assert_eq!(panel.parallax_offset(), 40);
    assert_eq!(panel.min_fling_velocity(), 1200.0);
    assert!(panel.is_overlayed());
    assert!(!panel.is_clip_panel());
    assert_eq!(panel.covered_fade_color(), 0);
    assert!(panel.is_hidden_enabled());
    assert_eq!(
        panel.drag_view(),
        Some(sliding_panel::Rect::new(0, 0, 400, 48))
    );

    update(&mut panel, PanelMsg::SetDragView { rect: None });
    assert_eq!(panel.drag_view(), None);
}

#[test]
fn test_touch_enabled_message() {
    let (mut panel, _log) = panel_with_log(test_config());
    drive(
        &mut panel,
        parse(
            r#"
- { type: layout, width: 400, height: 1100 }
- { type: set_touch_enabled, enabled: false }
- { type: pointer_down, pointer_id: 1, x: 200, y: 1050, time_ms: 0 }
- { type: pointer_move, pointer_id: 1, x: 200, y: 500, time_ms: 16 }
"#,
        ),
    );
    assert!(!panel.is_touch_enabled());
    assert_eq!(panel.panel_state(), PanelState::Collapsed);
    assert_eq!(panel.slide_offset(), 0.0);
}

#[test]
fn test_pointer_cancel_message() {
    let (mut panel, _log) = panel_with_log(test_config());
    let cmds = drive(
        &mut panel,
        parse(
            r#"
- { type: layout, width: 400, height: 1100 }
- { type: pointer_down, pointer_id: 1, x: 200, y: 1050, time_ms: 0 }
- { type: pointer_move, pointer_id: 1, x: 200, y: 1030, time_ms: 16 }
- { type: pointer_move, pointer_id: 1, x: 200, y: 700, time_ms: 32 }
- { type: pointer_cancel }
"#,
        ),
    );
    assert_eq!(cmds.last(), Some(&Some(Cmd::Redraw)));
    assert_eq!(panel.panel_state(), PanelState::Collapsed);
    assert_eq!(panel.slide_offset(), 0.0);
}

#[test]
fn test_messages_round_trip_through_yaml() {
    let msg = PanelMsg::SetState {
        state: PanelState::Hidden,
    };
    let yaml = serde_yaml::to_string(&msg).unwrap();
    assert!(yaml.contains("type: set_state"));
    assert!(yaml.contains("state: hidden"));
    assert_eq!(serde_yaml::from_str::<PanelMsg>(&yaml).unwrap(), msg);
}

#[test]
fn test_noisy_messages() {
    assert!(PanelMsg::Tick { now_ms: 0 }.is_noisy());
    assert!(!PanelMsg::PointerCancel.is_noisy());
}
