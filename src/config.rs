use std::path::Path;

use crate::error::Error;

/// Validation policy loaded from `.linkvet.toml`.
///
/// Every constant the checks depend on lives here rather than in the checks
/// themselves, so the core stays corpus-agnostic and testable against
/// synthetic fixtures. Defaults reproduce the documentation protocol this
/// tool was built for; any field can be overridden per corpus.
pub struct Config {
    /// Closed domain for the `category` header field.
    pub categories: Vec<String>,
    /// A document whose path contains this marker anywhere qualifies as a hub.
    pub hub_marker: String,
    /// Documents with one of these base names qualify as hubs.
    pub hub_names: Vec<String>,
    /// Targets every hub document must reference, matched by substring
    /// against its raw reference targets.
    pub hub_required_links: Vec<String>,
    /// Header fields every document must carry.
    pub required_fields: Vec<String>,
    /// Base names of sink documents exempt from the backlink requirement.
    pub sink_names: Vec<String>,
    /// Closed domain for the `status` header field.
    pub statuses: Vec<String>,
}

/// Raw TOML structure for `.linkvet.toml`. Absent keys fall back to the
/// documented protocol defaults.
#[derive(serde::Deserialize)]
struct LinkvetTomlConfig {
    #[serde(default = "default_categories")]
    categories: Vec<String>,
    #[serde(default = "default_hub_marker")]
    hub_marker: String,
    #[serde(default = "default_hub_names")]
    hub_names: Vec<String>,
    #[serde(default = "default_hub_required_links")]
    hub_required_links: Vec<String>,
    #[serde(default = "default_required_fields")]
    required_fields: Vec<String>,
    #[serde(default = "default_sink_names")]
    sink_names: Vec<String>,
    #[serde(default = "default_statuses")]
    statuses: Vec<String>,
}

fn default_categories() -> Vec<String> {
    to_strings(&["Essential", "Semi-Essential", "Non-Essential", "Disconnected"])
}

fn default_hub_marker() -> String {
    "Essential".to_string()
}

fn default_hub_names() -> Vec<String> {
    to_strings(&["Index.md", "Coverage.md"])
}

fn default_hub_required_links() -> Vec<String> {
    to_strings(&[
        "Coverage",
        "Index",
        "RUST CONVERSION/Coverage",
        "../../Warp/Tasks",
        "../../Warp/Changelog",
    ])
}

fn default_required_fields() -> Vec<String> {
    to_strings(&[
        "status",
        "source_path",
        "last_scanned",
        "tags",
        "links",
        "category",
        "migration_priority",
        "reuse_potential",
    ])
}

fn default_sink_names() -> Vec<String> {
    to_strings(&[
        "Index.md",
        "Coverage.md",
        "README.md",
        "AGENTS.md",
        "Changelog.md",
        "Tasks.md",
    ])
}

fn default_statuses() -> Vec<String> {
    to_strings(&["todo", "partial", "done"])
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Config {
    /// The protocol defaults, as used when no `.linkvet.toml` exists.
    pub fn protocol_defaults() -> Self {
        Self {
            categories: default_categories(),
            hub_marker: default_hub_marker(),
            hub_names: default_hub_names(),
            hub_required_links: default_hub_required_links(),
            required_fields: default_required_fields(),
            sink_names: default_sink_names(),
            statuses: default_statuses(),
        }
    }

    /// Load config from `.linkvet.toml` in the given root directory.
    /// Returns the protocol defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; never silently
    /// falls back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".linkvet.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::protocol_defaults());
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: LinkvetTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            categories: raw.categories,
            hub_marker: raw.hub_marker,
            hub_names: raw.hub_names,
            hub_required_links: raw.hub_required_links,
            required_fields: raw.required_fields,
            sink_names: raw.sink_names,
            statuses: raw.statuses,
        })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_eight_required_fields() {
        let config = Config::protocol_defaults();
        assert_eq!(config.required_fields.len(), 8);
        assert!(config.statuses.contains(&"done".to_string()));
        assert!(config.categories.contains(&"Disconnected".to_string()));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.hub_marker, "Essential");
        assert_eq!(config.sink_names.len(), 6);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".linkvet.toml"),
            "sink_names = [\"Hub.md\"]\nstatuses = [\"draft\", \"final\"]\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.sink_names, vec!["Hub.md".to_string()]);
        assert_eq!(config.statuses, vec!["draft".to_string(), "final".to_string()]);
        assert_eq!(config.required_fields.len(), 8);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".linkvet.toml"), "sink_names = not toml").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::TomlDe(_))));
    }
}
