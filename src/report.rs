//! Markdown report rendering for validation results.

use std::fmt::Write as _;

use crate::types::ValidationResult;

/// Render the full validation result as a markdown report document.
///
/// A pure function of the result: same findings, same report. Sections for
/// empty categories are omitted.
pub fn render(result: &ValidationResult) -> String {
    let mut out = String::new();

    out.push_str("# Documentation Link Validation Report\n\n");
    let _ = writeln!(out, "**Files Scanned**: {}\n", result.files_scanned);

    if result.is_clean() {
        out.push_str(
            "**ALL VALIDATION CHECKS PASSED**\n\n\
             - All [[links]] resolve correctly\n\
             - Bidirectional links are properly maintained\n\
             - Headers are complete per protocol requirements\n\
             - Hub links are present where required\n\n",
        );
    } else {
        let _ = writeln!(out, "**{} ISSUES FOUND**\n", result.total_findings());
    }

    section(&mut out, "Broken Links", &result.broken_links);
    section(&mut out, "Missing Bidirectional Links", &result.missing_backlinks);
    section(&mut out, "Incomplete Headers", &result.incomplete_headers);
    section(&mut out, "Invalid Header Values", &result.invalid_header_values);
    section(&mut out, "Missing Hub Links", &result.missing_hub_links);

    out.push_str("## Statistics\n\n");
    let _ = writeln!(out, "- **Total Files**: {}", result.files_scanned);
    let _ = writeln!(out, "- **Tracked Links**: {}", result.links_tracked);
    let _ = writeln!(out, "- **Broken Links**: {}", result.broken_links.len());
    let _ = writeln!(out, "- **Missing Backlinks**: {}", result.missing_backlinks.len());
    let _ = writeln!(
        out,
        "- **Header Issues**: {}",
        result
            .incomplete_headers
            .len()
            .saturating_add(result.invalid_header_values.len())
    );
    let _ = writeln!(out, "- **Hub Link Issues**: {}", result.missing_hub_links.len());

    out
}

/// Append one finding section, skipped entirely when empty.
fn section<T: std::fmt::Display>(out: &mut String, title: &str, findings: &[T]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {title} ({})\n", findings.len());
    for finding in findings {
        let _ = writeln!(out, "- {finding}");
    }
    out.push('\n');
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::{BrokenLink, MissingBackLink};

    #[test]
    fn clean_result_renders_pass_banner() {
        let result = ValidationResult {
            files_scanned: 4,
            ..ValidationResult::default()
        };
        let report = render(&result);
        assert!(report.contains("ALL VALIDATION CHECKS PASSED"));
        assert!(report.contains("**Files Scanned**: 4"));
        assert!(!report.contains("## Broken Links"));
    }

    #[test]
    fn findings_render_into_their_sections() {
        let result = ValidationResult {
            broken_links: vec![BrokenLink {
                source: PathBuf::from("A.md"),
                target: "Missing".to_string(),
            }],
            missing_backlinks: vec![MissingBackLink {
                source: PathBuf::from("A.md"),
                target: PathBuf::from("B.md"),
            }],
            ..ValidationResult::default()
        };

        let report = render(&result);
        assert!(report.contains("**2 ISSUES FOUND**"));
        assert!(report.contains("## Broken Links (1)"));
        assert!(report.contains("- A.md: [[Missing]]"));
        assert!(report.contains("## Missing Bidirectional Links (1)"));
        assert!(report.contains("- B.md should link back to A.md"));
    }
}
