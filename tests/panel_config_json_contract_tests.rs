use chart_panel::PanelError;
use chart_panel::api::{PANEL_CONFIG_JSON_SCHEMA_V1, PanelConfig, PanelConfigJsonContractV1};

#[test]
fn contract_v1_roundtrip_keeps_topic() {
    let config = PanelConfig::new().with_topic("/chart");
    let json = config.to_json_contract_v1_pretty().expect("serialize");

    let payload: PanelConfigJsonContractV1 = serde_json::from_str(&json).expect("contract shape");
    assert_eq!(payload.schema_version, PANEL_CONFIG_JSON_SCHEMA_V1);
    assert_eq!(PanelConfig::from_json_compat_str(&json).expect("load"), config);
}

#[test]
fn bare_persisted_state_is_accepted() {
    let config = PanelConfig::from_json_compat_str(r#"{"topic":"/chart"}"#).expect("bare");
    assert_eq!(config.topic(), Some("/chart"));

    let empty = PanelConfig::from_json_compat_str("{}").expect("empty state");
    assert_eq!(empty, PanelConfig::new());
}

#[test]
fn blank_topic_loads_as_unset() {
    let config = PanelConfig::from_json_compat_str(r#"{"topic":""}"#).expect("bare");
    assert_eq!(config.topic(), None);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = PanelConfig::from_json_compat_str(r#"{"schema_version":2,"config":{}}"#)
        .expect_err("future schema");
    assert!(matches!(err, PanelError::InvalidData(message) if message.contains("version")));
}

#[test]
fn malformed_state_is_rejected() {
    let err = PanelConfig::from_json_compat_str("{").expect_err("malformed");
    assert!(matches!(err, PanelError::InvalidData(_)));
}
