//! Error taxonomy for the reporting pipeline.

use thiserror::Error;

/// Errors raised by the pipeline stages.
///
/// Each variant carries the offending path or URL so a log line locates the
/// failing stage without extra context.
#[derive(Debug, Error)]
pub enum Error {
    /// The credential store exists but cannot be read or decoded.
    #[error("credential file {path}: {reason}")]
    CredentialFile { path: String, reason: String },

    /// Login against the controller's session endpoint failed.
    #[error("authentication against {url} failed: {reason}")]
    Authentication { url: String, reason: String },

    /// An inventory endpoint returned a non-success status or an unexpected payload.
    #[error("api request to {url} failed: {reason}")]
    Api { url: String, reason: String },

    /// A report artifact could not be written.
    #[error("cannot write report {path}: {reason}")]
    ReportWrite { path: String, reason: String },
}
