use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TOPIC_FIELD: &str = "topic";
pub const ERROR_FIELD: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum SettingsInput {
    Autocomplete { items: Vec<String> },
    ReadOnlyString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    pub label: String,
    #[serde(flatten)]
    pub input: SettingsInput,
    #[serde(default)]
    pub value: Option<String>,
}

/// Settings panel contents pushed to the host. Field order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsTree {
    pub fields: IndexMap<String, SettingsField>,
}

impl SettingsTree {
    #[must_use]
    pub fn build(topic_names: &[String], topic: Option<&str>, error: Option<&str>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(
            TOPIC_FIELD.to_owned(),
            SettingsField {
                label: "Topic".to_owned(),
                input: SettingsInput::Autocomplete {
                    items: topic_names.to_vec(),
                },
                value: topic.map(str::to_owned),
            },
        );
        if let Some(error) = error {
            fields.insert(
                ERROR_FIELD.to_owned(),
                SettingsField {
                    label: "Error".to_owned(),
                    input: SettingsInput::ReadOnlyString,
                    value: Some(error.to_owned()),
                },
            );
        }
        Self { fields }
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&SettingsField> {
        self.fields.get(key)
    }
}

/// User edit reported by the host's settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SettingsAction {
    Update {
        path: Vec<String>,
        value: Option<String>,
    },
}
