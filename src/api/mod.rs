mod json_contract;
mod layout_merge;
mod panel_config;
mod selector;
mod translator;

pub use json_contract::{PANEL_CONFIG_JSON_SCHEMA_V1, PanelConfigJsonContractV1};
pub use layout_merge::{AUTOSIZE_KEY, TEMPLATE_KEY, build_figure, merge_layout};
pub use panel_config::PanelConfig;
pub(crate) use panel_config::normalize_topic;
pub use selector::{LatestMessageSelector, Selection, select_latest};
pub use translator::{translate, translate_str};
