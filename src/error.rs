//! Error types for panel configuration
//!
//! Per-event handlers never fail; only construction and config loading do.

/// Errors that can occur while building or configuring a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Gravity must be `top` or `bottom`
    InvalidGravity(String),
    /// A metric or flag failed validation
    InvalidConfig(String),
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelError::InvalidGravity(g) => {
                write!(f, "gravity must be set to either top or bottom (got {:?})", g)
            }
            PanelError::InvalidConfig(e) => write!(f, "Invalid config: {}", e),
            PanelError::IoError(e) => write!(f, "IO error: {}", e),
            PanelError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PanelError {}
