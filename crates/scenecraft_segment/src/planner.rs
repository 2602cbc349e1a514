//! Target scene count from content length.

use scenecraft_core::SegmentationConfig;

/// Plan how many scenes `char_count` characters of narration should become.
///
/// One scene per `chars_per_scene` characters, forced to `max_scenes` for
/// content past `long_content_threshold`, always clamped into
/// `[min_scenes, max_scenes]`. If the bounds are inverted, `max_scenes` wins.
///
/// # Examples
///
/// ```
/// use scenecraft_core::SegmentationConfig;
/// use scenecraft_segment::target_scene_count;
///
/// let config = SegmentationConfig::default();
/// assert_eq!(target_scene_count(100, &config), 6);
/// assert_eq!(target_scene_count(240, &config), 8);
/// assert_eq!(target_scene_count(400, &config), 10);
/// ```
pub fn target_scene_count(char_count: usize, config: &SegmentationConfig) -> usize {
    let by_length = if char_count > config.long_content_threshold {
        config.max_scenes
    } else {
        char_count / config.chars_per_scene.max(1)
    };

    by_length.max(config.min_scenes).min(config.max_scenes)
}
