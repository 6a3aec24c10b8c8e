use std::path::Path;

use crate::config::Config;
use crate::types::MissingHubLink;

/// Check one hub document's raw reference targets against the required
/// cross-section link set. Returns `None` for non-hub documents and for
/// hubs carrying every required link.
///
/// Matching is loose substring containment on the raw, alias- and
/// anchor-stripped targets, not resolved identity: a required entry like
/// `RUST CONVERSION/Coverage` is satisfied by any reference whose written
/// target contains it.
pub fn check(doc: &Path, raw_targets: &[String], config: &Config) -> Option<MissingHubLink> {
    if !is_hub(doc, config) {
        return None;
    }

    let missing: Vec<String> = config
        .hub_required_links
        .iter()
        .filter(|required| !raw_targets.iter().any(|target| target.contains(required.as_str())))
        .cloned()
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(MissingHubLink {
            doc: doc.to_path_buf(),
            missing,
        })
    }
}

/// A document is a hub when its base name is one of the sentinel names, or
/// when the classification marker appears anywhere in its path.
pub fn is_hub(doc: &Path, config: &Config) -> bool {
    let by_name = doc
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| config.hub_names.iter().any(|hub| hub == name));

    by_name || doc.to_string_lossy().contains(config.hub_marker.as_str())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn targets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn sentinel_base_names_are_hubs() {
        let config = Config::protocol_defaults();
        assert!(is_hub(Path::new("Index.md"), &config));
        assert!(is_hub(Path::new("api/Coverage.md"), &config));
        assert!(!is_hub(Path::new("api/Overview.md"), &config));
    }

    #[test]
    fn path_marker_makes_a_hub() {
        let config = Config::protocol_defaults();
        assert!(is_hub(Path::new("Essential Services/Auth.md"), &config));
    }

    #[test]
    fn non_hub_documents_are_skipped() {
        let config = Config::protocol_defaults();
        assert_eq!(check(Path::new("notes/Auth.md"), &targets(&[]), &config), None);
    }

    #[test]
    fn hub_with_all_links_is_clean() {
        let config = Config::protocol_defaults();
        let refs = targets(&[
            "Coverage",
            "Index",
            "RUST CONVERSION/Coverage",
            "../../Warp/Tasks",
            "../../Warp/Changelog",
        ]);
        assert_eq!(check(Path::new("Index.md"), &refs, &config), None);
    }

    #[test]
    fn containment_match_satisfies_a_required_entry() {
        // `../RUST CONVERSION/Coverage` contains both `Coverage` and the
        // platform-specific `RUST CONVERSION/Coverage` entry.
        let config = Config::protocol_defaults();
        let refs = targets(&[
            "../RUST CONVERSION/Coverage",
            "./Index",
            "../../Warp/Tasks",
            "../../Warp/Changelog",
        ]);
        assert_eq!(check(Path::new("Coverage.md"), &refs, &config), None);
    }

    #[test]
    fn missing_entries_aggregate_into_one_finding() {
        let config = Config::protocol_defaults();
        let refs = targets(&["Coverage", "Index", "RUST CONVERSION/Coverage"]);
        let finding = check(Path::new("Index.md"), &refs, &config).unwrap();
        assert_eq!(
            finding.missing,
            vec![
                "../../Warp/Tasks".to_string(),
                "../../Warp/Changelog".to_string()
            ]
        );
    }
}
