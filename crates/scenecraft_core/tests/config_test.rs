//! Tests for the layered configuration.

use scenecraft_core::{ScenecraftConfig, SegmentationConfig, ValidationConfig};
use scenecraft_error::ScenecraftErrorKind;
use std::io::Write;

#[test]
fn test_load_bundled_defaults() {
    let config = ScenecraftConfig::load().unwrap();

    assert_eq!(config.segmentation.min_scenes, 6);
    assert_eq!(config.segmentation.max_scenes, 10);
    assert_eq!(config.segmentation.chars_per_scene, 30);
    assert_eq!(config.validation.min_content_length, 270);
    assert_eq!(config.validation.max_content_length, 300);
    assert_eq!(config.validation.max_title_length, 50);
    assert!(config.validation.denylist.is_empty());
    assert_eq!(config.story.default_title, "무제");
}

#[test]
fn test_bundled_defaults_match_default_impl() {
    let loaded = ScenecraftConfig::load().unwrap();
    let defaults = ScenecraftConfig::default();

    assert_eq!(loaded.segmentation, defaults.segmentation);
    assert_eq!(loaded.validation, defaults.validation);
    assert_eq!(loaded.pipeline, defaults.pipeline);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[segmentation]\nmax_scenes = 8").unwrap();

    let config = ScenecraftConfig::from_file(&path).unwrap();

    assert_eq!(config.segmentation.max_scenes, 8);
    assert_eq!(config.segmentation.min_scenes, 6);
    assert_eq!(config.story.reading_rate, 15.0);
}

#[test]
fn test_from_file_rejects_inverted_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[segmentation]\nmin_scenes = 12\nmax_scenes = 4\n").unwrap();

    let err = ScenecraftConfig::from_file(&path).unwrap_err();
    assert!(format!("{}", err).contains("min_scenes"));
}

#[test]
fn test_from_file_missing_path() {
    let result = ScenecraftConfig::from_file("/definitely/not/here/scenecraft.toml");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_durations() {
    let mut config = ScenecraftConfig::default();
    config.story.min_duration = 12.0;
    config.story.max_duration = 3.0;
    assert!(config.validate().is_err());

    let mut config = ScenecraftConfig::default();
    config.story.reading_rate = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_scene_budget() {
    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            min_scenes: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

fn rejected_key(config: &ScenecraftConfig) -> Option<String> {
    let err = config.validate().unwrap_err();
    match err.kind() {
        ScenecraftErrorKind::Config(e) => e.key().map(str::to_string),
        other => panic!("Expected config error, got {other:?}"),
    }
}

#[test]
fn test_validate_names_rejected_key() {
    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            min_scenes: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        rejected_key(&config).as_deref(),
        Some("segmentation.min_scenes")
    );
}

#[test]
fn test_segmentation_range_must_fit_validation_range() {
    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            max_scenes: 12,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        rejected_key(&config).as_deref(),
        Some("segmentation.max_scenes")
    );

    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            min_scenes: 4,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        rejected_key(&config).as_deref(),
        Some("segmentation.min_scenes")
    );
}

#[test]
fn test_narrower_segmentation_range_is_accepted() {
    let config = ScenecraftConfig {
        segmentation: SegmentationConfig {
            min_scenes: 7,
            max_scenes: 9,
            ..Default::default()
        },
        validation: ValidationConfig::default(),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_generation_timeout() {
    let mut config = ScenecraftConfig::default();
    assert_eq!(
        config.pipeline.generation_timeout(),
        Some(std::time::Duration::from_secs(30))
    );

    config.pipeline.generation_timeout_secs = 0;
    assert_eq!(config.pipeline.generation_timeout(), None);
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ScenecraftConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: ScenecraftConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
