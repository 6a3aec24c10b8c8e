/// Crate-level error types for linkvet.
use std::path::PathBuf;

/// All errors in linkvet carry enough context to produce a useful diagnostic
/// without a debugger. Recoverable conditions (broken links, malformed
/// headers, unreadable documents) are findings or warnings, never errors.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// Structured result could not be serialized for `--json` output.
    #[error("json serialize: {0}")]
    Json(
        /// The wrapped JSON serialization error.
        #[from]
        serde_json::Error,
    ),

    /// The corpus root directory does not exist. The only fatal corpus
    /// condition: nothing can be validated without a root.
    #[error("corpus root not found: {}", path.display())]
    RootNotFound {
        /// Path that was given as the corpus root.
        path: PathBuf,
    },

    /// Config file exists but its TOML is malformed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
