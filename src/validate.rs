use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;
use crate::extract;
use crate::frontmatter;
use crate::graph::LinkGraph;
use crate::hub;
use crate::resolver::{self, Resolution};
use crate::scanner::Corpus;
use crate::schema;
use crate::types::{BrokenLink, ValidationResult};

/// Run the full validation over the corpus under `root`.
///
/// Single pass per document: parse the header, validate the schema, extract
/// and resolve every reference. The backlink check runs only after every
/// document has been processed, because it needs the complete graph; an
/// edge from a not-yet-scanned document would otherwise look asymmetric.
/// The hub check then runs over the collected raw reference targets.
///
/// An unreadable or undecodable document is warned about on stderr and
/// skipped; it never aborts the run. The result is a pure function of the
/// corpus text content.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if `root` does not exist. Everything else
/// is a finding or a warning.
pub fn run(root: &Path, config: &Config) -> Result<ValidationResult, Error> {
    let corpus = Corpus::discover(root)?;
    let pattern = extract::wikilink_regex();

    let mut broken_links = Vec::new();
    let mut incomplete_headers = Vec::new();
    let mut invalid_header_values = Vec::new();
    let mut graph = LinkGraph::default();
    let mut raw_targets_by_doc: Vec<(PathBuf, Vec<String>)> = Vec::new();

    for doc in corpus.docs() {
        let content = match corpus.read(doc) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: could not read {}: {e}", doc.display());
                continue;
            },
        };

        let (header, _body) = frontmatter::parse(&content);
        let header_findings = schema::validate_header(doc, &header, config);
        if let Some(finding) = header_findings.incomplete {
            incomplete_headers.push(finding);
        }
        invalid_header_values.extend(header_findings.invalid_values);

        // References are extracted from the full text: the header's own
        // `links` field participates in the graph like any body reference.
        let references = extract::wikilinks(&pattern, &content);
        let mut raw_targets = Vec::with_capacity(references.len());
        for reference in references {
            match resolver::resolve(&corpus, &reference.target, doc) {
                Resolution::Inside(target) => graph.record(doc, &target),
                Resolution::Outside => {},
                Resolution::Unresolved => broken_links.push(BrokenLink {
                    source: doc.clone(),
                    target: reference.target.clone(),
                }),
            }
            raw_targets.push(reference.target);
        }
        raw_targets_by_doc.push((doc.clone(), raw_targets));
    }

    let missing_backlinks = graph.missing_backlinks(config);
    let missing_hub_links = raw_targets_by_doc
        .iter()
        .filter_map(|(doc, raw_targets)| hub::check(doc, raw_targets, config))
        .collect();

    Ok(ValidationResult {
        broken_links,
        files_scanned: corpus.docs().len(),
        incomplete_headers,
        invalid_header_values,
        links_tracked: graph.edge_count(),
        missing_backlinks,
        missing_hub_links,
    })
}
