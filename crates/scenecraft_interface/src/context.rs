//! Request-scoped values passed across the trait seams.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline for one pipeline run.
///
/// # Examples
///
/// ```
/// use scenecraft_interface::GenerationContext;
/// use std::time::Duration;
///
/// let ctx = GenerationContext::new().with_timeout(Duration::from_secs(5));
/// assert_eq!(ctx.timeout(), Some(Duration::from_secs(5)));
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    token: CancellationToken,
    timeout: Option<Duration>,
}

impl GenerationContext {
    /// A context that never cancels and has no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context driven by an existing token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            timeout: None,
        }
    }

    /// Set the deadline for the generation call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Deadline for the generation call.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The underlying cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Cancel the run.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the run has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// A story request sent to a [`StoryDriver`](crate::StoryDriver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryRequest {
    /// Instruction describing the writer's role
    system: String,
    /// The story prompt itself
    prompt: String,
}

impl StoryRequest {
    /// Create a request.
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }
}
