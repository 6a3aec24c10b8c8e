/// Core domain types for linkvet references, findings, and results.
use std::fmt;
use std::path::PathBuf;

/// A reference whose raw target could not be mapped to any existing
/// document. Terminal: reported, never retried.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BrokenLink {
    /// Document containing the unresolvable reference.
    pub source: PathBuf,
    /// The raw target string as written, alias and anchor stripped.
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [[{}]]", self.source.display(), self.target)
    }
}

/// A document header missing one or more required fields. One finding per
/// document, listing every missing field together.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IncompleteHeader {
    /// Document whose header is incomplete.
    pub doc: PathBuf,
    /// Required field names absent from the header, in configured order.
    pub missing: Vec<String>,
}

impl fmt::Display for IncompleteHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Missing header fields: {}",
            self.doc.display(),
            self.missing.join(", ")
        )
    }
}

/// A header field whose value falls outside its closed domain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InvalidHeaderValue {
    /// Document whose header holds the out-of-domain value.
    pub doc: PathBuf,
    /// Name of the offending field.
    pub field: String,
    /// The out-of-domain value, rendered as text.
    pub value: String,
}

impl fmt::Display for InvalidHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Invalid {} value: {}",
            self.doc.display(),
            self.field,
            self.value
        )
    }
}

/// An asymmetric edge: `source` references `target`, but `target` does not
/// reference `source` and is not an exempted sink document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MissingBackLink {
    /// Document that holds the one-way reference.
    pub source: PathBuf,
    /// Document that should link back to `source`.
    pub target: PathBuf,
}

impl fmt::Display for MissingBackLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} should link back to {}",
            self.target.display(),
            self.source.display()
        )
    }
}

/// A hub document missing entries from the required cross-section link set.
/// One finding per hub document, listing every missing entry together.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MissingHubLink {
    /// The hub document.
    pub doc: PathBuf,
    /// Required link targets with no containing raw reference, in configured order.
    pub missing: Vec<String>,
}

impl fmt::Display for MissingHubLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Missing required hub links: {}",
            self.doc.display(),
            self.missing.join(", ")
        )
    }
}

/// A wikilink token as written in a document, before resolution.
/// Alias and anchor are semantically irrelevant to resolution and kept only
/// for completeness; they are stripped before the target is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    /// Display alias following a `|`, if any.
    pub alias: Option<String>,
    /// Anchor fragment following a `#`, if any (only parsed when no alias).
    pub anchor: Option<String>,
    /// The resolution target, whitespace-trimmed.
    pub target: String,
}

/// Aggregated outcome of one validation run: five finding categories plus
/// corpus statistics. A pure function of the corpus text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    /// References that resolved to no existing document.
    pub broken_links: Vec<BrokenLink>,
    /// Number of documents scanned.
    pub files_scanned: usize,
    /// Headers missing required fields.
    pub incomplete_headers: Vec<IncompleteHeader>,
    /// Header fields with out-of-domain values.
    pub invalid_header_values: Vec<InvalidHeaderValue>,
    /// Number of in-corpus forward edges recorded in the link graph.
    pub links_tracked: usize,
    /// Non-exempt asymmetric edges.
    pub missing_backlinks: Vec<MissingBackLink>,
    /// Hub documents missing required cross-section links.
    pub missing_hub_links: Vec<MissingHubLink>,
}

impl ValidationResult {
    /// Whether the run produced no findings in any category.
    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    /// Total finding count across all five categories.
    pub fn total_findings(&self) -> usize {
        self.broken_links
            .len()
            .saturating_add(self.missing_backlinks.len())
            .saturating_add(self.incomplete_headers.len())
            .saturating_add(self.invalid_header_values.len())
            .saturating_add(self.missing_hub_links.len())
    }
}
