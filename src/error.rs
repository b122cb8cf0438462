//! Every way a lookup can fail.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single `movie` invocation. The caller decides how to render
/// it and which exit status to use.
#[derive(Debug, Error)]
pub enum LookupError {
    /// `OMDB_API_KEY` is unset or empty. Raised before any request is built.
    #[error("OMDB_API_KEY not found in environment.")]
    MissingApiKey,

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// Transport-level failure (refused connection, DNS, timeout, ...).
    #[error("Network error: {}", with_causes(.0))]
    Network(#[source] reqwest::Error),

    /// Non-2xx status. `body` is the raw response text.
    #[error("HTTP Error: {status}")]
    Http { status: StatusCode, body: String },

    /// OMDb answered `"Response": "False"`.
    #[error("Error: {0}")]
    Api(String),

    /// Body was not the JSON object OMDb normally returns.
    #[error("Error: could not parse OMDb response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// A successful response lacked a field the summary needs.
    #[error("Error: OMDb response is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("Error: failed to write {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `err` followed by each of its sources, `: `-separated.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
