use serde::{Deserialize, Serialize};

use crate::api::PanelConfig;
use crate::core::{MessageEvent, ThemeState, TopicInfo};

use super::SettingsTree;

/// Host state channels the panel can ask to be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateChannel {
    Topics,
    CurrentFrame,
    ColorScheme,
}

impl StateChannel {
    pub const ALL: [Self; 3] = [Self::Topics, Self::CurrentFrame, Self::ColorScheme];
}

/// Immutable snapshot delivered by the host for one render cycle.
///
/// `None` means the host did not report that channel this frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    #[serde(default)]
    pub color_scheme: Option<ThemeState>,
    #[serde(default)]
    pub topics: Option<Vec<TopicInfo>>,
    #[serde(default)]
    pub current_frame: Option<Vec<MessageEvent>>,
}

impl RenderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color_scheme(mut self, theme: ThemeState) -> Self {
        self.color_scheme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_topics(mut self, topics: Vec<TopicInfo>) -> Self {
        self.topics = Some(topics);
        self
    }

    #[must_use]
    pub fn with_current_frame(mut self, messages: Vec<MessageEvent>) -> Self {
        self.current_frame = Some(messages);
        self
    }
}

/// Services the host runtime provides to the panel.
pub trait PanelHost {
    fn watch(&mut self, channel: StateChannel);

    /// Replaces the panel's subscriptions. An empty slice unsubscribes.
    fn subscribe(&mut self, topics: &[String]);

    fn save_state(&mut self, config: &PanelConfig);

    fn update_panel_settings(&mut self, settings: &SettingsTree);
}
