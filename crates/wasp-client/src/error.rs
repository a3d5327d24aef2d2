//! Storage client error types.

/// Errors constructing a [`StorageClient`](crate::StorageClient).
///
/// Failures of individual writes are reported as
/// [`wasp_core::GatewayError`] instead, so the publish loop can record them.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {source}")]
    Http { source: reqwest::Error },
}
