//! Narrative role classification.

use scenecraft_core::SceneType;

/// Verb stems that mark physical action.
pub const ACTION_WORDS: &[&str] = &["달렸", "뛰었", "싸웠", "도망쳤", "날아갔", "부딪"];

/// Verb stems that mark speech.
pub const DIALOGUE_MARKERS: &[&str] = &["말했", "대답했", "물었", "소리쳤", "속삭였"];

/// Adverbs that mark a turning point.
pub const CLIMAX_WORDS: &[&str] = &["마침내", "드디어", "결국", "갑자기"];

/// What a rule can see about one scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneFacts<'a> {
    /// Scene text
    pub text: &'a str,
    /// 0-based position
    pub index: usize,
    /// Number of scenes in the story
    pub total: usize,
}

impl SceneFacts<'_> {
    fn mentions(&self, lexicon: &[&str]) -> bool {
        lexicon.iter().any(|word| self.text.contains(word))
    }
}

/// A single classification rule: when `applies` holds, the scene is `scene_type`.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Short rule name for logs and tests
    pub name: &'static str,
    /// Predicate over the scene
    pub applies: fn(&SceneFacts<'_>) -> bool,
    /// Result when the predicate holds
    pub scene_type: SceneType,
}

fn is_first(facts: &SceneFacts<'_>) -> bool {
    facts.index == 0
}

fn is_last(facts: &SceneFacts<'_>) -> bool {
    facts.index + 1 == facts.total
}

fn has_action(facts: &SceneFacts<'_>) -> bool {
    facts.mentions(ACTION_WORDS)
}

fn has_dialogue(facts: &SceneFacts<'_>) -> bool {
    facts.mentions(DIALOGUE_MARKERS)
}

fn is_late_climax(facts: &SceneFacts<'_>) -> bool {
    facts.index > facts.total / 2 && facts.mentions(CLIMAX_WORDS)
}

/// Classification rules in precedence order; the first that applies wins.
///
/// Scenes no rule claims are [`SceneType::Transition`].
pub static CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "opening",
        applies: is_first,
        scene_type: SceneType::Opening,
    },
    ClassificationRule {
        name: "closing",
        applies: is_last,
        scene_type: SceneType::Closing,
    },
    ClassificationRule {
        name: "action",
        applies: has_action,
        scene_type: SceneType::Action,
    },
    ClassificationRule {
        name: "dialogue",
        applies: has_dialogue,
        scene_type: SceneType::Dialogue,
    },
    ClassificationRule {
        name: "climax",
        applies: is_late_climax,
        scene_type: SceneType::Climax,
    },
];

/// Classify the scene at `index` of `total`.
///
/// # Examples
///
/// ```
/// use scenecraft_core::SceneType;
/// use scenecraft_segment::classify_scene;
///
/// assert_eq!(classify_scene("그는 힘껏 달렸다.", 0, 6), SceneType::Opening);
/// assert_eq!(classify_scene("그는 힘껏 달렸다.", 2, 6), SceneType::Action);
/// assert_eq!(classify_scene("바람이 불었다.", 2, 6), SceneType::Transition);
/// ```
pub fn classify_scene(text: &str, index: usize, total: usize) -> SceneType {
    let facts = SceneFacts { text, index, total };

    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.applies)(&facts))
        .map_or(SceneType::Transition, |rule| rule.scene_type)
}
