use std::path::{Component, Path, PathBuf};

use crate::scanner::Corpus;

/// Outcome of resolving one raw reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved to a document inside the corpus root; carries its identity.
    Inside(PathBuf),
    /// Resolved to an existing file outside the corpus root. Valid, but
    /// excluded from the link graph and the backlink requirement.
    Outside,
    /// No existing document matched. Reported as a broken link.
    Unresolved,
}

/// Resolve a raw reference target against the corpus.
///
/// Resolution order, first match wins:
/// 1. `../`-prefixed: relative to the referring document's directory.
/// 2. `./`-prefixed: marker stripped, relative to the same directory.
/// 3. Contains a separator: rooted at the corpus root if that file exists
///    as written, otherwise relative to the referring document's directory.
/// 4. Bare name: `<name>.md` beside the referring document, otherwise the
///    first corpus document (in scan order) whose base name equals the
///    target.
///
/// The winning candidate gets a `.md` extension appended when it has none,
/// then must exist on disk to count as resolved. Step 4's global fallback
/// inherits the corpus scan order, so duplicate base names resolve
/// traversal-order-dependently.
pub fn resolve(corpus: &Corpus, target: &str, source: &Path) -> Resolution {
    let source_dir = source.parent().unwrap_or(Path::new(""));

    let candidate = if target.starts_with("../") {
        normalize_path(&source_dir.join(target))
    } else if let Some(rest) = target.strip_prefix("./") {
        normalize_path(&source_dir.join(rest))
    } else if target.contains('/') {
        let rooted = normalize_path(Path::new(target));
        if corpus.root().join(&rooted).exists() {
            rooted
        } else {
            normalize_path(&source_dir.join(target))
        }
    } else {
        let beside = source_dir.join(format!("{target}.md"));
        if corpus.root().join(&beside).exists() {
            beside
        } else {
            let Some(doc) = corpus
                .docs()
                .iter()
                .find(|doc| doc.file_stem().is_some_and(|stem| stem == target))
            else {
                return Resolution::Unresolved;
            };
            doc.clone()
        }
    };

    let candidate = ensure_markdown_extension(candidate);
    if !corpus.root().join(&candidate).exists() {
        return Resolution::Unresolved;
    }

    if escapes_root(&candidate) {
        Resolution::Outside
    } else {
        Resolution::Inside(candidate)
    }
}

/// Append the default document extension when the candidate has none.
fn ensure_markdown_extension(mut candidate: PathBuf) -> PathBuf {
    if candidate.extension().is_none() {
        candidate.set_extension("md");
    }
    candidate
}

/// A normalized root-relative candidate escapes the corpus when it still
/// begins with a parent-directory component.
fn escapes_root(candidate: &Path) -> bool {
    matches!(candidate.components().next(), Some(Component::ParentDir))
}

/// Collapse `.` and `..` components in a path without touching the filesystem.
/// Preserves leading `..` when there is nothing left to pop.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        push_normalized_component(&mut components, component);
    }
    components.iter().collect()
}

/// Handle a single path component during normalization.
/// Pops the last component for `..` when possible, preserves it otherwise.
fn push_normalized_component<'a>(
    components: &mut Vec<Component<'a>>,
    component: Component<'a>,
) {
    match component {
        Component::CurDir => {}
        Component::ParentDir => {
            let can_pop = matches!(
                components.last(),
                Some(c) if !matches!(c, Component::ParentDir)
            );
            if can_pop { components.pop(); } else { components.push(component); }
        }
        other => components.push(other),
    }
}
