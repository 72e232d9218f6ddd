//! Error types for launchplist-core.

use std::path::PathBuf;

use thiserror::Error;

/// A value was rejected by a setter before it reached the record.
///
/// Renders as `"<field> <reason>"`, e.g. `Disabled must be a boolean`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    /// The launchd key (or calendar field) that was rejected.
    pub field: String,
    /// What the field expected.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// All errors from the file-facing surface: job files, serialization, writes.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A job field failed validation.
    #[error("invalid job: {0}")]
    Validation(#[from] ValidationError),

    /// The plist reader or writer failed.
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    /// An existing plist file whose root is not a dictionary.
    #[error("plist at {path} is not a dictionary")]
    NotADictionary { path: PathBuf },

    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse job file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/Library/LaunchAgents`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The record has no `Label`, so there is no file name to write to.
    #[error("job has no Label; cannot derive a plist file name")]
    MissingLabel,
}

/// Convenience constructor for [`LaunchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LaunchError {
    LaunchError::Io {
        path: path.into(),
        source,
    }
}
