use std::collections::BTreeMap;

use serde_json::Value;

/// Header block delimiter. Must open the document and occur a second time
/// for a header block to exist.
const MARKER: &str = "---";

/// Split document text into a parsed header mapping and the body text.
///
/// Parse failure degrades, never raises: a document with no opening marker,
/// no closing marker, YAML that fails to parse, or YAML that is not a
/// mapping yields an empty header and the full original text as body.
/// Downstream schema validation then reports every required field missing,
/// which is the intended behavior for malformed headers.
///
/// Values are normalized to `serde_json::Value` for uniform downstream
/// handling regardless of YAML scalar flavor.
pub fn parse(content: &str) -> (BTreeMap<String, Value>, &str) {
    if !content.starts_with(MARKER) {
        return (BTreeMap::new(), content);
    }

    let mut parts = content.splitn(3, MARKER);
    let _leading = parts.next();
    let (Some(header), Some(body)) = (parts.next(), parts.next()) else {
        return (BTreeMap::new(), content);
    };

    match parse_yaml_mapping(header) {
        Some(fields) => (fields, body),
        None => (BTreeMap::new(), content),
    }
}

/// Parse a YAML string into a JSON-compatible map, or `None` when the YAML
/// is invalid or its top level is not a mapping.
fn parse_yaml_mapping(yaml: &str) -> Option<BTreeMap<String, Value>> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(yaml).ok()?;
    let json_value: Value = serde_json::to_value(yaml_value).ok()?;

    match json_value {
        Value::Object(map) => Some(map.into_iter().collect()),
        _ => None,
    }
}
