use serde::{Deserialize, Serialize};

use super::TopicInfo;

/// Schema names carrying the two-field chart message.
pub const CHART_SCHEMA_NAMES: [&str; 3] =
    ["plotly_msgs/Chart", "plotly_msgs/msg/Chart", "plotly_msgs.Chart"];

/// Schema names carrying a single string payload, read as chart `data`.
pub const STRING_SCHEMA_NAMES: [&str; 2] = ["std_msgs/String", "std_msgs/msg/String"];

/// Recognized message encodings for chart topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSchema {
    /// `{ data, layout }`
    Chart,
    /// `{ data }`
    StringPayload,
}

impl ChartSchema {
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        if CHART_SCHEMA_NAMES.contains(&name) {
            Some(Self::Chart)
        } else if STRING_SCHEMA_NAMES.contains(&name) {
            Some(Self::StringPayload)
        } else {
            None
        }
    }
}

/// Filters a host topic catalog down to topics the panel can render.
///
/// Catalog order is preserved.
#[must_use]
pub fn chart_topics(topics: &[TopicInfo]) -> Vec<&TopicInfo> {
    topics
        .iter()
        .filter(|topic| ChartSchema::from_schema_name(&topic.schema_name).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_schema_names() {
        assert_eq!(
            ChartSchema::from_schema_name("plotly_msgs/msg/Chart"),
            Some(ChartSchema::Chart)
        );
        assert_eq!(
            ChartSchema::from_schema_name("std_msgs/String"),
            Some(ChartSchema::StringPayload)
        );
        assert_eq!(ChartSchema::from_schema_name("sensor_msgs/Image"), None);
    }
}
