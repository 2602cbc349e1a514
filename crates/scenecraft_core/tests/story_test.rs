use scenecraft_core::{ChannelConfig, Scene, SceneType, Story};
use strum::IntoEnumIterator;

#[test]
fn story_lengths_count_characters_not_bytes() {
    let story = Story::new("별", "하늘의 별");
    assert_eq!(story.title_len(), 1);
    assert_eq!(story.content_len(), 5);
    assert!(story.content.len() > 5);
}

#[test]
fn total_duration_sums_scenes() {
    let mut story = Story::new("t", "c");
    for number in 1..=3 {
        story.scenes.push(Scene {
            number,
            description: "장면".to_string(),
            image_prompt: "prompt".to_string(),
            duration: 4.0,
        });
    }
    assert_eq!(story.total_duration(), 12.0);
}

#[test]
fn story_json_uses_snake_case_fields() {
    let mut story = Story::new("제목", "내용");
    story.scenes.push(Scene {
        number: 1,
        description: "내용".to_string(),
        image_prompt: "a prompt".to_string(),
        duration: 3.0,
    });

    let json = serde_json::to_value(&story).unwrap();
    assert_eq!(json["scenes"][0]["image_prompt"], "a prompt");

    let without_scenes: Story =
        serde_json::from_str(r#"{"title":"제목","content":"내용"}"#).unwrap();
    assert!(without_scenes.scenes.is_empty());
}

#[test]
fn every_scene_type_has_a_style() {
    for scene_type in SceneType::iter() {
        assert!(!scene_type.style().is_empty());
    }
}

#[test]
fn channel_template_detection() {
    assert!(!ChannelConfig::named("plain").has_template());

    let channel = ChannelConfig::builder()
        .name("custom")
        .prompt_template("   ")
        .build()
        .unwrap();
    assert!(!channel.has_template());

    let channel = ChannelConfig::builder()
        .name("custom")
        .prompt_template("이야기를 써주세요")
        .tags(vec!["kids".to_string()])
        .build()
        .unwrap();
    assert!(channel.has_template());
    assert_eq!(channel.tags().len(), 1);
}
