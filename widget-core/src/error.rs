use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that end a single search attempt.
///
/// The `Display` text is what the widget shows in its error slot.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The query was empty after trimming; no request was made.
    #[error("Please enter a city name.")]
    EmptyQuery,

    /// The provider answered with a non-success status.
    #[error("City not found")]
    NotFound { status: u16 },

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("Failed to parse OpenWeather {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Transport-level failures of an [`crate::HttpClient`].
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to send request to {url}: {message}")]
    Send { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write store file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Store file {} is not a valid JSON object: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize store value: {0}")]
    Serialize(#[from] serde_json::Error),
}
