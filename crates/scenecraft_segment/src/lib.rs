//! Scene segmentation for short generated stories.
//!
//! A story arrives as one block of unsegmented prose. The [`SceneSplitter`]
//! turns it into 6-10 scenes, one per generated image:
//!
//! 1. [`find_break_points`] collects every sentence ending, formal verb
//!    ending and discourse connective as a candidate boundary.
//! 2. [`target_scene_count`] plans how many scenes the text deserves.
//! 3. [`select_optimal_breaks`] keeps the candidates nearest to evenly spaced
//!    positions, or [`split_by_equal_length`] partitions text with no markers.
//! 4. [`extract_key_phrases`] and [`classify_scene`] annotate each scene.
//! 5. [`ScenePromptBuilder`] projects annotated scenes into [`Scene`]s with
//!    image prompts and display durations.
//!
//! Every step is a pure function of its input.
//!
//! [`Scene`]: scenecraft_core::Scene

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod break_points;
mod classifier;
mod key_phrases;
mod planner;
mod projection;
mod selector;
mod splitter;

pub use break_points::{BREAK_MARKERS, find_break_points};
pub use classifier::{
    ACTION_WORDS, CLASSIFICATION_RULES, CLIMAX_WORDS, ClassificationRule, DIALOGUE_MARKERS,
    SceneFacts, classify_scene,
};
pub use key_phrases::{KEY_PHRASE_PATTERNS, MAX_KEY_PHRASES, extract_key_phrases};
pub use planner::target_scene_count;
pub use projection::ScenePromptBuilder;
pub use selector::{select_optimal_breaks, split_by_break_points, split_by_equal_length};
pub use splitter::{SceneContent, SceneSplitter, SplitResult};
