//! Validation order and bounds on stories and scene lists.

use scenecraft_core::{Scene, Story, ValidationConfig};
use scenecraft_error::{ValidationCategory, ValidationErrorKind};
use scenecraft_interface::StoryValidator;
use scenecraft_validation::ContentValidator;

const STAR_STORY: &str = "어느 날 밤, 하늘에서 가장 작은 별이 지구로 여행을 떠났습니다. 별은 처음으로 지구의 아름다운 풍경을 보고 감탄했습니다. 깊은 숲 속에서 반딧불이를 만났고, 함께 아름다운 빛의 춤을 추었습니다. 반딧불이는 별에게 지구의 밤이 얼마나 아름다운지 보여주었고, 별은 반딧불이에게 우주의 신비를 들려주었습니다. 새벽이 되자 별은 다시 하늘로 돌아가야 했지만, 반딧불이와의 우정은 영원히 그들의 마음속에서 빛났습니다. 그 후로 매일 밤, 별과 반딧불이는 서로를 그리워하며 빛을 내고 있습니다.";

fn valid_story() -> Story {
    Story::new("테스트 이야기: 작은 별의 모험", STAR_STORY)
}

fn scene(number: u32) -> Scene {
    Scene {
        number,
        description: format!("장면 {number}"),
        image_prompt: format!("Korean story illustration: 장면 {number}"),
        duration: 3.0,
    }
}

fn scenes(count: u32) -> Vec<Scene> {
    (1..=count).map(scene).collect()
}

fn story_error(story: &Story) -> ValidationErrorKind {
    ContentValidator::default()
        .validate_story(story)
        .unwrap_err()
        .kind
}

#[test]
fn test_valid_story_passes() {
    let story = valid_story();
    assert_eq!(story.content_len(), 271);
    assert!(ContentValidator::default().validate_story(&story).is_ok());
}

#[test]
fn test_empty_title() {
    let story = Story::new("", STAR_STORY);
    assert_eq!(story_error(&story), ValidationErrorKind::TitleEmpty);
}

#[test]
fn test_title_too_long_counts_characters() {
    let story = Story::new("별".repeat(51), STAR_STORY);
    assert_eq!(
        story_error(&story),
        ValidationErrorKind::TitleTooLong { max: 50, actual: 51 }
    );

    // 50 Hangul characters are 150 bytes but still within bounds
    let story = Story::new("별".repeat(50), STAR_STORY);
    assert!(ContentValidator::default().validate_story(&story).is_ok());
}

#[test]
fn test_title_checked_before_content() {
    let story = Story::new("", "");
    assert_eq!(story_error(&story), ValidationErrorKind::TitleEmpty);
}

#[test]
fn test_empty_content() {
    let story = Story::new("제목", "");
    assert_eq!(story_error(&story), ValidationErrorKind::ContentEmpty);
}

#[test]
fn test_content_too_short() {
    let story = Story::new("제목", "짧은 이야기입니다.");
    let err = ContentValidator::default().validate_story(&story).unwrap_err();

    assert_eq!(
        err.kind(),
        &ValidationErrorKind::ContentTooShort { min: 270, actual: 10 }
    );
    assert_eq!(err.category(), ValidationCategory::TooShort);
}

#[test]
fn test_content_too_long() {
    let content = format!("{STAR_STORY} {}.", "별".repeat(40));
    let story = Story::new("제목", content.as_str());
    let actual = story.content_len();
    assert!(actual > 300);

    assert_eq!(
        story_error(&story),
        ValidationErrorKind::ContentTooLong { max: 300, actual }
    );
}

#[test]
fn test_denylist_runs_before_structure() {
    let validator = ContentValidator::new(ValidationConfig {
        denylist: vec!["반딧불이".to_string()],
        min_content_length: 1,
        ..ValidationConfig::default()
    });

    // One sentence only, but the denylist hit wins
    let err = validator
        .validate_story(&Story::new("제목", "반딧불이가 날았다"))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationErrorKind::InappropriateContent);
    assert_eq!(err.category(), ValidationCategory::InappropriateContent);
}

#[test]
fn test_structure_needs_three_sentences() {
    let content = format!("{}. 끝", "가".repeat(280));
    let story = Story::new("제목", content.as_str());

    let err = ContentValidator::default().validate_story(&story).unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::StructureInvalid { min: 3, actual: 2 }
    );
    assert_eq!(err.category(), ValidationCategory::StructureInvalid);
}

#[test]
fn test_scene_count_bounds() {
    let validator = ContentValidator::default();

    assert!(validator.validate_scenes(&scenes(6)).is_ok());
    assert!(validator.validate_scenes(&scenes(10)).is_ok());

    let err = validator.validate_scenes(&scenes(5)).unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::TooFewScenes { min: 6, actual: 5 }
    );

    let err = validator.validate_scenes(&scenes(11)).unwrap_err();
    assert_eq!(
        err.kind(),
        &ValidationErrorKind::TooManyScenes { max: 10, actual: 11 }
    );
    assert_eq!(err.category(), ValidationCategory::TooManyScenes);
}

#[test]
fn test_zero_duration_names_position() {
    let mut list = scenes(6);
    list[2].duration = 0.0;

    let err = ContentValidator::default().validate_scenes(&list).unwrap_err();
    assert_eq!(err.category(), ValidationCategory::SceneFieldInvalid);
    assert_eq!(err.kind().scene_position(), Some(3));
}

#[test]
fn test_scene_fields_checked_in_order() {
    let validator = ContentValidator::default();

    let mut list = scenes(6);
    list[1].image_prompt.clear();
    list[1].duration = -1.0;
    assert_eq!(
        validator.validate_scenes(&list).unwrap_err().kind(),
        &ValidationErrorKind::SceneImagePromptEmpty { position: 2 }
    );

    list[0].description.clear();
    assert_eq!(
        validator.validate_scenes(&list).unwrap_err().kind(),
        &ValidationErrorKind::SceneDescriptionEmpty { position: 1 }
    );
}

#[test]
fn test_duplicate_scene_numbers_are_accepted() {
    let list: Vec<Scene> = (0..6).map(|_| scene(1)).collect();
    assert!(ContentValidator::default().validate_scenes(&list).is_ok());
}
