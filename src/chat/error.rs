//! Errors raised by chat backends.

use thiserror::Error;

/// Failure of a single chat round-trip.
///
/// The widget never shows these to the visitor; every variant collapses into
/// the configured fallback message and is only logged.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request could not be sent or the reply could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("chat endpoint returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}
