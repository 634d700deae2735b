use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::ChartFigure;
use crate::error::{PanelError, PanelResult};

use super::PanelConfig;

pub const PANEL_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PanelConfig,
}

impl PanelConfig {
    pub fn to_json_contract_v1_pretty(&self) -> PanelResult<String> {
        let payload = PanelConfigJsonContractV1 {
            schema_version: PANEL_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PanelError::InvalidData(format!("failed to serialize panel config contract v1: {e}"))
        })
    }

    /// Loads either a versioned contract payload or a bare config object.
    pub fn from_json_compat_str(input: &str) -> PanelResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            PanelError::InvalidData(format!("failed to parse panel config json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            let config: PanelConfig = serde_json::from_value(value).map_err(|e| {
                PanelError::InvalidData(format!("failed to parse panel config json: {e}"))
            })?;
            return Ok(config.normalized());
        }

        let payload: PanelConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            PanelError::InvalidData(format!("failed to parse panel config contract payload: {e}"))
        })?;
        if payload.schema_version != PANEL_CONFIG_JSON_SCHEMA_V1 {
            return Err(PanelError::InvalidData(format!(
                "unsupported panel config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config.normalized())
    }
}

impl ChartFigure {
    /// Compact widget payload.
    pub fn to_json_string(&self) -> PanelResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PanelError::InvalidData(format!("failed to serialize chart figure: {e}")))
    }
}
