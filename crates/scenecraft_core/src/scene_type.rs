//! Narrative roles a scene can play.

use serde::{Deserialize, Serialize};

/// Narrative role of a scene, used to steer image style.
///
/// # Examples
///
/// ```
/// use scenecraft_core::SceneType;
///
/// assert_eq!(format!("{}", SceneType::Climax), "Climax");
/// assert_eq!(SceneType::Opening.style(), "opening scene, establishing shot, soft lighting");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// First scene of the story
    Opening,
    /// Physical action
    Action,
    /// Characters speaking
    Dialogue,
    /// Connective scene between beats
    Transition,
    /// Turning point in the second half
    Climax,
    /// Last scene of the story
    Closing,
}

impl SceneType {
    /// Image style modifiers for this scene type.
    pub fn style(&self) -> &'static str {
        match self {
            SceneType::Opening => "opening scene, establishing shot, soft lighting",
            SceneType::Action => "dynamic action scene, motion blur, dramatic lighting",
            SceneType::Dialogue => "character interaction, emotional expression, warm lighting",
            SceneType::Transition => "transition scene, atmospheric, cinematic",
            SceneType::Climax => "climactic moment, intense drama, high contrast",
            SceneType::Closing => "resolution scene, peaceful atmosphere, golden hour",
        }
    }
}
