//! Configuration system tests
//!
//! Tests for config paths, YAML loading and dp → px resolution.

use sliding_panel::config::{PanelConfig, DEFAULT_FADE_COLOR};
use sliding_panel::config_paths;
use sliding_panel::{Gravity, PanelError, PanelState, SlidingPanel};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("sliding-panel"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("panel.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Panel Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = PanelConfig::default();
    assert_eq!(config.gravity, Gravity::Bottom);
    assert_eq!(config.panel_height_dp, 68.0);
    assert_eq!(config.shadow_height_dp, 4.0);
    assert_eq!(config.min_fling_velocity_dp, 400.0);
    assert_eq!(config.anchor_point, 1.0);
    assert_eq!(config.initial_state, PanelState::Collapsed);
    assert_eq!(config.covered_fade_color, DEFAULT_FADE_COLOR);
    assert!(!config.overlay);
    assert!(config.clip_panel);
    assert!(!config.hidden_enabled);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let yaml = r#"
gravity: top
anchor_point: 0.4
initial_state: anchored
"#;
    let config = PanelConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.gravity, Gravity::Top);
    assert_eq!(config.anchor_point, 0.4);
    assert_eq!(config.initial_state, PanelState::Anchored);
    assert_eq!(config.panel_height_dp, 68.0);
}

#[test]
fn test_gravity_is_case_insensitive() {
    let config = PanelConfig::from_yaml_str("gravity: BOTTOM").unwrap();
    assert_eq!(config.gravity, Gravity::Bottom);
}

#[test]
fn test_invalid_gravity_in_yaml() {
    let err = PanelConfig::from_yaml_str("gravity: left").unwrap_err();
    assert!(matches!(err, PanelError::ParseError(_)));
    assert!(err.to_string().contains("top or bottom"));
}

#[test]
fn test_malformed_yaml() {
    let err = PanelConfig::from_yaml_str("panel_height_dp: [1, 2").unwrap_err();
    assert!(matches!(err, PanelError::ParseError(_)));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("panel.yaml");

    let config = PanelConfig {
        gravity: Gravity::Top,
        anchor_point: 0.7,
        hidden_enabled: true,
        density: 2.0,
        ..PanelConfig::default()
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = PanelConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PanelConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, PanelError::IoError(_)));
}

#[test]
fn test_resolve_scales_by_density() {
    let config = PanelConfig {
        density: 2.0,
        parallax_offset_dp: 30.0,
        ..PanelConfig::default()
    };
    let metrics = config.resolve().unwrap();
    assert_eq!(metrics.panel_height, 136);
    assert_eq!(metrics.shadow_height, 8);
    assert_eq!(metrics.parallax_offset, 60);
    assert_eq!(metrics.min_fling_velocity, 800.0);
    assert_eq!(metrics.touch_slop, 16.0);
}

#[test]
fn test_negative_dimension_rejected() {
    let config = PanelConfig {
        panel_height_dp: -1.0,
        ..PanelConfig::default()
    };
    assert!(matches!(
        SlidingPanel::new(&config),
        Err(PanelError::InvalidConfig(_))
    ));
}

#[test]
fn test_settle_clamp_must_be_ordered() {
    let config = PanelConfig {
        settle_min_ms: 700,
        settle_max_ms: 600,
        ..PanelConfig::default()
    };
    assert!(matches!(
        config.resolve(),
        Err(PanelError::InvalidConfig(_))
    ));
}
