//! Panel configuration
//!
//! Dimensions are stored in density-independent pixels and resolved to
//! device pixels once, at construction. Config files are YAML, stored by
//! default in `~/.config/sliding-panel/panel.yaml`.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drag::SettleTiming;
use crate::error::PanelError;
use crate::state::PanelState;

/// Default peeking panel height (dp)
pub const DEFAULT_PANEL_HEIGHT_DP: f32 = 68.0;
/// Default shadow height above the peeking panel (dp)
pub const DEFAULT_SHADOW_HEIGHT_DP: f32 = 4.0;
/// Default minimum velocity detected as a fling (dp per second)
pub const DEFAULT_MIN_FLING_VELOCITY_DP: f32 = 400.0;
/// Upper bound on release velocity (dp per second)
pub const DEFAULT_MAX_FLING_VELOCITY_DP: f32 = 8_000.0;
/// Distance a pointer must travel before a gesture becomes a drag (dp)
pub const DEFAULT_TOUCH_SLOP_DP: f32 = 8.0;
/// Fade to 60% black when fully expanded
pub const DEFAULT_FADE_COLOR: u32 = 0x9900_0000;
/// No anchor: anchored collapses onto expanded
pub const DEFAULT_ANCHOR_POINT: f32 = 1.0;

/// Which container edge the collapsed panel peeks out from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gravity {
    /// Panel peeks from the top edge and is dragged down to expand
    Top,
    /// Panel peeks from the bottom edge and is dragged up to expand
    #[default]
    Bottom,
}

impl Gravity {
    /// True if expanding moves the panel towards smaller y
    pub fn is_sliding_up(&self) -> bool {
        matches!(self, Gravity::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::Top => "top",
            Gravity::Bottom => "bottom",
        }
    }
}

impl FromStr for Gravity {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Gravity::Top),
            "bottom" => Ok(Gravity::Bottom),
            _ => Err(PanelError::InvalidGravity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gravity {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gravity> for String {
    fn from(gravity: Gravity) -> Self {
        gravity.as_str().to_string()
    }
}

/// User-facing panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub gravity: Gravity,
    /// Height of the collapsed, peeking panel (dp)
    pub panel_height_dp: f32,
    pub shadow_height_dp: f32,
    /// Maximum parallax displacement of the main pane (dp)
    pub parallax_offset_dp: f32,
    pub min_fling_velocity_dp: f32,
    pub max_fling_velocity_dp: f32,
    pub touch_slop_dp: f32,
    /// Intermediate stop in (0, 1]; 1.0 disables anchoring
    pub anchor_point: f32,
    pub initial_state: PanelState,
    /// Panel overlays the main pane instead of shrinking it
    pub overlay: bool,
    /// Clip the main pane to the part not covered by the panel
    pub clip_panel: bool,
    /// ARGB colour faded over the main pane as the panel expands; 0 disables
    pub covered_fade_color: u32,
    /// Allow a downward fling from the collapsed edge to hide the panel
    pub hidden_enabled: bool,
    /// Device pixels per dp
    pub density: f32,
    /// Samples older than this are ignored for velocity estimation
    pub velocity_window_ms: u64,
    pub settle_base_ms: u64,
    pub settle_min_ms: u64,
    pub settle_max_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::Bottom,
            panel_height_dp: DEFAULT_PANEL_HEIGHT_DP,
            shadow_height_dp: DEFAULT_SHADOW_HEIGHT_DP,
            parallax_offset_dp: 0.0,
            min_fling_velocity_dp: DEFAULT_MIN_FLING_VELOCITY_DP,
            max_fling_velocity_dp: DEFAULT_MAX_FLING_VELOCITY_DP,
            touch_slop_dp: DEFAULT_TOUCH_SLOP_DP,
            anchor_point: DEFAULT_ANCHOR_POINT,
            initial_state: PanelState::Collapsed,
            overlay: false,
            clip_panel: true,
            covered_fade_color: DEFAULT_FADE_COLOR,
            hidden_enabled: false,
            density: 1.0,
            velocity_window_ms: 100,
            settle_base_ms: 256,
            settle_min_ms: 0,
            settle_max_ms: 600,
        }
    }
}

/// Configuration with every dimension resolved to device pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetrics {
    pub gravity: Gravity,
    pub panel_height: i32,
    pub shadow_height: i32,
    pub parallax_offset: i32,
    /// px/s
    pub min_fling_velocity: f32,
    /// px/s
    pub max_fling_velocity: f32,
    pub touch_slop: f32,
    pub anchor_point: f32,
    pub initial_state: PanelState,
    pub overlay: bool,
    pub clip_panel: bool,
    pub covered_fade_color: u32,
    pub hidden_enabled: bool,
    pub velocity_window_ms: u64,
    pub settle: SettleTiming,
}

/// True for anchor points the panel accepts: `0 < p <= 1`
pub fn is_valid_anchor_point(anchor_point: f32) -> bool {
    anchor_point > 0.0 && anchor_point <= 1.0
}

fn dp_to_px(dp: f32, density: f32) -> i32 {
    (dp * density + 0.5) as i32
}

fn check_dimension(name: &str, value: f32) -> Result<(), PanelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PanelError::InvalidConfig(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

impl PanelConfig {
    /// Parse a config from YAML; missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PanelError> {
        serde_yaml::from_str(yaml).map_err(|e| PanelError::ParseError(e.to_string()))
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, PanelError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PanelError::IoError(e.to_string()))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded panel config from {}", path.display());
        Ok(config)
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String, PanelError> {
        serde_yaml::to_string(self).map_err(|e| PanelError::ParseError(e.to_string()))
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), PanelError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PanelError::IoError(e.to_string()))?;
        }
        let content = self.to_yaml_string()?;
        std::fs::write(path, content).map_err(|e| PanelError::IoError(e.to_string()))?;
        tracing::info!("Saved panel config to {}", path.display());
        Ok(())
    }

    /// Validate and convert dp values to device pixels
    pub fn resolve(&self) -> Result<ResolvedMetrics, PanelError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(PanelError::InvalidConfig(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        check_dimension("panel_height_dp", self.panel_height_dp)?;
        check_dimension("shadow_height_dp", self.shadow_height_dp)?;
        check_dimension("parallax_offset_dp", self.parallax_offset_dp)?;
        check_dimension("min_fling_velocity_dp", self.min_fling_velocity_dp)?;
        check_dimension("max_fling_velocity_dp", self.max_fling_velocity_dp)?;
        check_dimension("touch_slop_dp", self.touch_slop_dp)?;

        if self.initial_state == PanelState::Dragging {
            return Err(PanelError::InvalidConfig(
                "initial_state cannot be dragging".to_string(),
            ));
        }
        if self.settle_min_ms > self.settle_max_ms {
            return Err(PanelError::InvalidConfig(format!(
                "settle_min_ms ({}) exceeds settle_max_ms ({})",
                self.settle_min_ms, self.settle_max_ms
            )));
        }

        let anchor_point = if is_valid_anchor_point(self.anchor_point) {
            self.anchor_point
        } else {
            tracing::warn!(
                anchor_point = self.anchor_point,
                "anchor point outside (0, 1], using {}",
                DEFAULT_ANCHOR_POINT
            );
            DEFAULT_ANCHOR_POINT
        };

        let density = self.density;
        Ok(ResolvedMetrics {
            gravity: self.gravity,
            panel_height: dp_to_px(self.panel_height_dp, density),
            shadow_height: dp_to_px(self.shadow_height_dp, density),
            parallax_offset: (self.parallax_offset_dp * density) as i32,
            min_fling_velocity: self.min_fling_velocity_dp * density,
            max_fling_velocity: self.max_fling_velocity_dp * density,
            touch_slop: self.touch_slop_dp * density,
            anchor_point,
            initial_state: self.initial_state,
            overlay: self.overlay,
            clip_panel: self.clip_panel,
            covered_fade_color: self.covered_fade_color,
            hidden_enabled: self.hidden_enabled,
            velocity_window_ms: self.velocity_window_ms,
            settle: SettleTiming {
                base_ms: self.settle_base_ms,
                min_ms: self.settle_min_ms,
                max_ms: self.settle_max_ms,
            },
        })
    }
}
