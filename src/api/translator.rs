use serde_json::{Map, Value};

use crate::core::{MessageField, ParsedChartSpec, RawChartMessage};
use crate::error::{PanelError, PanelResult};

/// Decodes a raw chart message into a chart spec.
///
/// Empty fields fall back to an empty series list and an empty layout.
/// `data` must decode to an array and `layout` to an object; the contents of
/// either are not inspected.
pub fn translate(message: &RawChartMessage) -> PanelResult<ParsedChartSpec> {
    translate_str(&message.data, &message.layout)
}

pub fn translate_str(data: &str, layout: &str) -> PanelResult<ParsedChartSpec> {
    let series = match decode_field(MessageField::Data, data)? {
        None => Vec::new(),
        Some(Value::Array(series)) => series,
        Some(other) => return Err(shape_error(MessageField::Data, "an array", &other)),
    };

    let layout = match decode_field(MessageField::Layout, layout)? {
        None => Map::new(),
        Some(Value::Object(layout)) => layout,
        Some(other) => return Err(shape_error(MessageField::Layout, "an object", &other)),
    };

    Ok(ParsedChartSpec::new(series, layout))
}

fn decode_field(field: MessageField, text: &str) -> PanelResult<Option<Value>> {
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| PanelError::Parse { field, source })
}

fn shape_error(field: MessageField, expected: &'static str, found: &Value) -> PanelError {
    PanelError::Validation {
        field,
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
