//! panel-replay - drive a sliding panel from a YAML gesture script

mod cli;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use sliding_panel::{
    update, Cmd, EventLog, PanelConfig, PanelEvent, PanelMsg, PanelState, SlidingPanel,
};

use cli::CliArgs;

/// Upper bound on synthetic ticks after one message
const MAX_SYNTHETIC_FRAMES: usize = 10_000;

/// One scripted message and what it caused
#[derive(Debug, Serialize)]
struct StepReport<'a> {
    step: usize,
    msg: &'a PanelMsg,
    events: &'a [PanelEvent],
    state: PanelState,
    offset: f32,
}

#[derive(Debug, Serialize)]
struct FinalReport {
    state: PanelState,
    offset: f32,
    parallax: i32,
}

fn parse_script(yaml: &str) -> Result<Vec<PanelMsg>> {
    Ok(serde_yaml::from_str(yaml)?)
}

fn load_script(path: &Path) -> Result<Vec<PanelMsg>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Invalid script {}", path.display()))
}

/// Timestamp carried by a message, if any
fn msg_time(msg: &PanelMsg) -> Option<u64> {
    match msg {
        PanelMsg::PointerDown { time_ms, .. }
        | PanelMsg::PointerMove { time_ms, .. }
        | PanelMsg::PointerUp { time_ms, .. } => Some(*time_ms),
        PanelMsg::Tick { now_ms } => Some(*now_ms),
        _ => None,
    }
}

/// A panel plus the recorder attached to it
struct Replay {
    panel: SlidingPanel,
    log: EventLog,
    frame_ms: Option<u64>,
    clock_ms: u64,
}

impl Replay {
    fn new(mut panel: SlidingPanel, frame_ms: Option<u64>) -> Self {
        let log = EventLog::new();
        panel.set_panel_slide_listener(log.clone());
        Self {
            panel,
            log,
            frame_ms,
            clock_ms: 0,
        }
    }

    /// Apply one message (and any synthetic ticks), returning the notifications
    fn step(&mut self, msg: PanelMsg) -> Result<Vec<PanelEvent>> {
        if let Some(time) = msg_time(&msg) {
            self.clock_ms = self.clock_ms.max(time);
        }
        let mut cmd = update(&mut self.panel, msg);

        if let Some(frame_ms) = self.frame_ms {
            let mut frames = 0;
            while cmd.as_ref().is_some_and(Cmd::needs_frame) {
                frames += 1;
                if frames > MAX_SYNTHETIC_FRAMES {
                    bail!("settle did not finish after {} frames", MAX_SYNTHETIC_FRAMES);
                }
                self.clock_ms += frame_ms;
                cmd = update(
                    &mut self.panel,
                    PanelMsg::Tick {
                        now_ms: self.clock_ms,
                    },
                );
            }
        }

        Ok(self.log.drain())
    }
}

fn describe(event: &PanelEvent) -> String {
    match event {
        PanelEvent::Slide(offset) => format!("slide {:.3}", offset),
        PanelEvent::Collapsed => "collapsed".to_string(),
        PanelEvent::Expanded => "expanded".to_string(),
        PanelEvent::Anchored => "anchored".to_string(),
        PanelEvent::Hidden => "hidden".to_string(),
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    sliding_panel::tracing::init(args.log_file);

    let config = match &args.config {
        Some(path) => PanelConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PanelConfig::load(),
    };
    let panel = SlidingPanel::new(&config).context("Invalid panel config")?;
    let script = load_script(&args.script)?;

    let mut replay = Replay::new(panel, args.frame_ms);
    for (step, msg) in script.into_iter().enumerate() {
        let echo = msg.clone();
        let events = replay.step(msg)?;

        if args.json {
            let report = StepReport {
                step,
                msg: &echo,
                events: &events,
                state: replay.panel.panel_state(),
                offset: replay.panel.slide_offset(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            for event in &events {
                println!("[{:>3}] {}", step, describe(event));
            }
        }
    }

    let summary = FinalReport {
        state: replay.panel.panel_state(),
        offset: replay.panel.slide_offset(),
        parallax: replay.panel.current_parallax_offset(),
    };
    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "final: state={} offset={:.3} parallax={}",
            summary.state, summary.offset, summary.parallax
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAG_OPEN: &str = r#"
- { type: layout, width: 400, height: 1100 }
- { type: set_panel_height, px: 100 }
- { type: pointer_down, pointer_id: 1, x: 200, y: 1050, time_ms: 0 }
- { type: pointer_move, pointer_id: 1, x: 200, y: 1030, time_ms: 16 }
- { type: pointer_move, pointer_id: 1, x: 200, y: 430, time_ms: 1000 }
- { type: pointer_up, pointer_id: 1, x: 200, y: 430, time_ms: 1100 }
"#;

    #[test]
    fn test_replay_settles_with_synthetic_frames() {
        let panel = SlidingPanel::new(&PanelConfig::default()).unwrap();
        let mut replay = Replay::new(panel, Some(16));

        let mut events = Vec::new();
        for msg in parse_script(DRAG_OPEN).unwrap() {
            events.extend(replay.step(msg).unwrap());
        }

        assert_eq!(replay.panel.panel_state(), PanelState::Expanded);
        assert_eq!(replay.panel.slide_offset(), 1.0);
        assert_eq!(events.last(), Some(&PanelEvent::Expanded));
        assert!(events
            .iter()
            .any(|e| matches!(e, PanelEvent::Slide(o) if (o - 0.6).abs() < 1e-3)));
        assert!(replay.clock_ms > 1100);
    }

    #[test]
    fn test_replay_without_frames_leaves_settle_running() {
        let panel = SlidingPanel::new(&PanelConfig::default()).unwrap();
        let mut replay = Replay::new(panel, None);
        for msg in parse_script(DRAG_OPEN).unwrap() {
            replay.step(msg).unwrap();
        }
        assert_eq!(replay.panel.panel_state(), PanelState::Collapsed);
        assert_eq!(
            replay.panel.drag_phase(),
            sliding_panel::DragPhase::Settling
        );
    }

    #[test]
    fn test_unknown_message_type_rejected() {
        assert!(parse_script("- { type: wiggle }").is_err());
    }

    #[test]
    fn test_describe_events() {
        assert_eq!(describe(&PanelEvent::Slide(0.25)), "slide 0.250");
        assert_eq!(describe(&PanelEvent::Hidden), "hidden");
    }
}
