use std::path::PathBuf;

use thiserror::Error;

/// Fatal conversion failures. Anything recoverable is a `Diagnostic` instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source report could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination report or diagnostics file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not valid YAML or has a value of the wrong type
    #[error("malformed YAML report ({context}): {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required key is absent or null
    #[error("malformed report: missing required field `{path}`")]
    MissingField { path: String },

    /// Diagnostic could not be encoded as JSON
    #[error("failed to encode diagnostic: {0}")]
    DiagnosticEncode(#[from] serde_json::Error),
}
