use serde::{Deserialize, Serialize};

/// Persisted panel state.
///
/// The host stores this between sessions; it is read once when the panel is
/// created and written back on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub topic: Option<String>,
}

impl PanelConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subscribed topic.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Maps blank topic names to `None`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.topic = normalize_topic(self.topic);
        self
    }
}

pub(crate) fn normalize_topic(topic: Option<String>) -> Option<String> {
    topic.filter(|name| !name.trim().is_empty())
}
