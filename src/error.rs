use std::path::PathBuf;

/// Errors raised around the review page: loading inputs and config,
/// validating the slot set, and serializing output.
///
/// Building a page never produces one of these. Missing sources and
/// unknown keys degrade to placeholders instead.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input or config document could not be parsed
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON serialization of the page model failed
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured slot list is empty or has duplicate/empty keys
    #[error("invalid slot configuration: {0}")]
    InvalidSlots(String),

    /// Requested output format is not one of html, console, json
    #[error("unknown output format '{0}' (expected html, console or json)")]
    UnknownFormat(String),
}

impl ReviewError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReviewError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        ReviewError::Parse {
            path: path.into(),
            source,
        }
    }
}
