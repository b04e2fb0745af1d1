//! Command types returned to the host
//!
//! Commands are side effects the host performs after an update: re-layout,
//! scheduling the next animation frame, or routing a tap.

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Pane positions changed; re-layout and repaint
    Redraw,
    /// A settle is running; call `tick` on the next frame (implies redraw)
    RequestFrame,
    /// The gesture was a tap, not a drag
    Click,
    /// The gesture belongs to the host (motion on the other axis)
    Yield,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine two optional commands, flattening trivial cases
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, other) | (other, None) => other,
            (Some(Cmd::None), other) | (other, Some(Cmd::None)) => other,
            (Some(a), Some(b)) if a == b => Some(a),
            (Some(Cmd::Batch(mut cmds)), Some(b)) => {
                cmds.push(b);
                Some(Cmd::Batch(cmds))
            }
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RequestFrame => true,
            Cmd::Click => false,
            Cmd::Yield => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if the host should keep ticking
    pub fn needs_frame(&self) -> bool {
        match self {
            Cmd::RequestFrame => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_frame()),
            _ => false,
        }
    }

    /// Check if this command (or any in a batch) is a tap
    pub fn is_click(&self) -> bool {
        match self {
            Cmd::Click => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_click()),
            _ => false,
        }
    }

    pub fn is_yield(&self) -> bool {
        match self {
            Cmd::Yield => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_yield()),
            _ => false,
        }
    }
}
