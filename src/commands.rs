//! Core CLI commands for linkvet: check and report.

use std::path::Path;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::Error;
use crate::report as report_render;
use crate::types::ValidationResult;
use crate::validate;

/// Run validation and print findings to stdout.
///
/// Exit code contract: 0 when no finding exists, 1 otherwise. With `json`,
/// the structured result is printed instead of human-readable lines and the
/// same exit contract applies.
///
/// # Errors
///
/// Returns errors from config loading, corpus discovery, or serialization.
pub fn check(root: &Path, json: bool) -> Result<ExitCode, Error> {
    let config = Config::load(root)?;
    let result = validate::run(root, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_findings(&result);
    }

    Ok(exit_code_for(&result))
}

/// Zero findings is success; any finding fails the run.
fn exit_code_for(result: &ValidationResult) -> ExitCode {
    if result.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Print each finding line, then the count breakdown by category.
fn print_findings(result: &ValidationResult) {
    for finding in &result.broken_links {
        println!("BROKEN    {finding}");
    }
    for finding in &result.missing_backlinks {
        println!("BACKLINK  {finding}");
    }
    for finding in &result.incomplete_headers {
        println!("HEADER    {finding}");
    }
    for finding in &result.invalid_header_values {
        println!("VALUE     {finding}");
    }
    for finding in &result.missing_hub_links {
        println!("HUB       {finding}");
    }

    if result.is_clean() {
        println!(
            "All checks passed: {} documents, {} tracked links",
            result.files_scanned, result.links_tracked
        );
        return;
    }

    println!();
    println!(
        "{} issues: {} broken, {} missing backlinks, {} incomplete headers, \
         {} invalid values, {} missing hub links",
        result.total_findings(),
        result.broken_links.len(),
        result.missing_backlinks.len(),
        result.incomplete_headers.len(),
        result.invalid_header_values.len(),
        result.missing_hub_links.len(),
    );
    return;
}

/// Run validation, write the markdown report file, and print the summary.
///
/// # Errors
///
/// Returns errors from config loading, corpus discovery, or report writing.
pub fn report(root: &Path, output: Option<&Path>) -> Result<ExitCode, Error> {
    let config = Config::load(root)?;
    let result = validate::run(root, &config)?;

    let default_path = root.join("link_validation_report.md");
    let report_path = output.unwrap_or(&default_path);
    std::fs::write(report_path, report_render::render(&result))?;
    eprintln!("Wrote report to {}", report_path.display());

    print_findings(&result);
    return Ok(exit_code_for(&result));
}
