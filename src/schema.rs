use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::config::Config;
use crate::types::{IncompleteHeader, InvalidHeaderValue};

/// Findings from validating one document's header.
#[derive(Debug, Default)]
pub struct HeaderFindings {
    /// At most one entry, listing every missing required field together.
    pub incomplete: Option<IncompleteHeader>,
    /// One entry per out-of-domain field value.
    pub invalid_values: Vec<InvalidHeaderValue>,
}

/// Check a parsed header against the required field set and the closed
/// value domains for `status` and `category`.
///
/// Missing fields are aggregated into a single finding per document, in the
/// configured field order. Domain checks only fire for fields that are
/// present; an absent field is a completeness problem, not a value problem.
pub fn validate_header(
    doc: &Path,
    header: &BTreeMap<String, Value>,
    config: &Config,
) -> HeaderFindings {
    let mut findings = HeaderFindings::default();

    let missing: Vec<String> = config
        .required_fields
        .iter()
        .filter(|field| !header.contains_key(field.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        findings.incomplete = Some(IncompleteHeader {
            doc: doc.to_path_buf(),
            missing,
        });
    }

    check_domain(doc, header, "status", &config.statuses, &mut findings.invalid_values);
    check_domain(doc, header, "category", &config.categories, &mut findings.invalid_values);

    findings
}

/// When `field` is present, its value must be a string inside `domain`.
fn check_domain(
    doc: &Path,
    header: &BTreeMap<String, Value>,
    field: &str,
    domain: &[String],
    invalid: &mut Vec<InvalidHeaderValue>,
) {
    let Some(value) = header.get(field) else {
        return;
    };

    let in_domain = value
        .as_str()
        .is_some_and(|s| domain.iter().any(|allowed| allowed == s));
    if !in_domain {
        invalid.push(InvalidHeaderValue {
            doc: doc.to_path_buf(),
            field: field.to_string(),
            value: render_value(value),
        });
    }
}

/// Render a header value for a finding line: strings bare, everything else
/// in its JSON form.
fn render_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
