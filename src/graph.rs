use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::types::MissingBackLink;

/// Directed link graph over the corpus, derived solely from references that
/// resolved to documents inside the corpus root.
///
/// Repeated references from one document to the same target collapse to a
/// single logical edge. Adjacency is ordered so traversal, and therefore
/// finding order, is identical across runs over an unchanged corpus.
#[derive(Debug, Default)]
pub struct LinkGraph {
    /// Document to the set of documents it references.
    forward: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
    /// Document to the set of documents referencing it.
    reverse: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
}

impl LinkGraph {
    /// Number of distinct forward edges.
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }

    /// Whether `target`'s own forward adjacency contains `source`.
    fn links_back(&self, target: &Path, source: &Path) -> bool {
        self.forward
            .get(target)
            .is_some_and(|targets| targets.contains(source))
    }

    /// For every forward edge (A, B), require that B also references A.
    /// Exempt edges whose target base name belongs to the configured sink
    /// set: index/coverage/readme style documents are referenced broadly
    /// and need not reciprocate. One finding per asymmetric edge.
    pub fn missing_backlinks(&self, config: &Config) -> Vec<MissingBackLink> {
        let mut findings = Vec::new();
        for (source, targets) in &self.forward {
            for target in targets {
                if self.links_back(target, source) || is_exempt_sink(target, config) {
                    continue;
                }
                findings.push(MissingBackLink {
                    source: source.clone(),
                    target: target.clone(),
                });
            }
        }
        findings
    }

    /// Record one resolved in-corpus edge in both adjacency directions.
    pub fn record(&mut self, source: &Path, target: &Path) {
        self.forward
            .entry(source.to_path_buf())
            .or_default()
            .insert(target.to_path_buf());
        self.reverse
            .entry(target.to_path_buf())
            .or_default()
            .insert(source.to_path_buf());
    }
}

/// One-way links into sink documents are acceptable by protocol.
fn is_exempt_sink(target: &Path, config: &Config) -> bool {
    target
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| config.sink_names.iter().any(|sink| sink == name))
}
