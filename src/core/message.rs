use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ChartSchema, ReceiptTime};

/// Chart payload as published on the wire.
///
/// Both fields carry JSON text. The string-payload schema only publishes
/// `data`, so `layout` falls back to an empty string when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChartMessage {
    pub data: String,
    #[serde(default)]
    pub layout: String,
}

impl RawChartMessage {
    #[must_use]
    pub fn new(data: impl Into<String>, layout: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            layout: layout.into(),
        }
    }

    /// Builds a message in the string-payload shape (no layout field).
    #[must_use]
    pub fn data_only(data: impl Into<String>) -> Self {
        Self::new(data, String::new())
    }
}

/// Field of a [`RawChartMessage`], used to attribute decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageField {
    Data,
    Layout,
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Data => "data",
            Self::Layout => "layout",
        })
    }
}

/// One message delivery from the host, as found in a render frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub topic: String,
    pub schema_name: String,
    pub receive_time: ReceiptTime,
    pub message: RawChartMessage,
}

impl MessageEvent {
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        schema_name: impl Into<String>,
        receive_time: ReceiptTime,
        message: RawChartMessage,
    ) -> Self {
        Self {
            topic: topic.into(),
            schema_name: schema_name.into(),
            receive_time,
            message,
        }
    }

    #[must_use]
    pub fn schema(&self) -> Option<ChartSchema> {
        ChartSchema::from_schema_name(&self.schema_name)
    }
}

/// Topic catalog entry published by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicInfo {
    pub name: String,
    pub schema_name: String,
}

impl TopicInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: schema_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_payload_without_layout_deserializes() {
        let message: RawChartMessage =
            serde_json::from_str(r#"{"data":"[]"}"#).expect("data-only payload");
        assert_eq!(message, RawChartMessage::data_only("[]"));
    }
}
