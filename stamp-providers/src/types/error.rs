//! Error types for stamp provider operations

use thiserror::Error;

/// Result type for stamp provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors raised while checking a stamp.
///
/// A check that simply fails is not an error, it is reported as an invalid
/// [`common_types::VerifiedPayload`].
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The scoring model could not be reached or returned an unusable response
    #[error("Error fetching model data ({subpath}) from {host}: {reason}")]
    ModelUnavailable {
        /// Model sub-path that was requested
        subpath: String,
        /// Scoring service host that was requested
        host: String,
        /// Underlying transport or decoding failure
        reason: String,
    },

    /// The operation is not supported by this platform
    #[error("Method not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ProviderError {
    pub(crate) fn model_unavailable(subpath: &str, host: &str, reason: impl ToString) -> Self {
        let err = Self::ModelUnavailable {
            subpath: subpath.to_string(),
            host: host.to_string(),
            reason: reason.to_string(),
        };
        tracing::error!("{err}");
        err
    }
}
