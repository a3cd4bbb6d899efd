// src/error.rs
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a user action can fail with.
///
/// The enum is `Clone` because finished actions travel back to the window
/// inside GUI messages, hence the `Arc` around `io::Error`.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The user closed the file picker without choosing anything.
    #[error("file selection was canceled")]
    Canceled,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The native dialog task died before reporting a choice.
    #[error("file picker failed: {0}")]
    Picker(String),

    #[error("could not parse workbook: {0}")]
    Parse(String),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("No data available for export.")]
    NoDataAvailable,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Cancellation is the one failure that never reaches the user.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Error::Canceled)
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
