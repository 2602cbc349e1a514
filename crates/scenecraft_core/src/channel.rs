//! Channel prompt configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Prompt configuration for the channel a story is generated for.
///
/// An empty `prompt_template` tells the generator to fall back to its
/// configured default prompt.
///
/// # Examples
///
/// ```
/// use scenecraft_core::ChannelConfig;
///
/// let channel = ChannelConfig::builder()
///     .name("fairy_tales")
///     .prompt_template("동화 한 편을 써주세요")
///     .build()
///     .unwrap();
///
/// assert_eq!(channel.name(), "fairy_tales");
/// assert!(channel.tags().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct ChannelConfig {
    /// Channel name
    name: String,

    /// Prompt template sent to the story backend
    #[builder(default)]
    #[serde(default)]
    prompt_template: String,

    /// Free-form channel tags
    #[builder(default)]
    #[serde(default)]
    tags: Vec<String>,
}

impl ChannelConfig {
    /// Create a new builder for a channel configuration.
    pub fn builder() -> ChannelConfigBuilder {
        ChannelConfigBuilder::default()
    }

    /// Create a channel with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the channel supplies its own prompt.
    pub fn has_template(&self) -> bool {
        !self.prompt_template.trim().is_empty()
    }
}
