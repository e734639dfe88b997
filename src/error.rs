use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Fatal failures. Skipped records are counted in `ConvertStats`, never reported here.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {path:?} as UTF-16LE: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("cannot parse settings {path:?}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected settings layout in {path:?}: {reason}")]
    SettingsShape { path: PathBuf, reason: String },

    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
