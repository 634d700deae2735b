use thiserror::Error;

use crate::core::MessageField;

pub type PanelResult<T> = Result<T, PanelError>;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("failed to parse `{field}` as json: {source}")]
    Parse {
        field: MessageField,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid `{field}`: expected {expected}, found {found}")]
    Validation {
        field: MessageField,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart widget failed to render: {0}")]
    Widget(String),
}

impl PanelError {
    /// Returns `true` for failures caused by the message payload itself.
    #[must_use]
    pub fn is_message_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Validation { .. })
    }
}
