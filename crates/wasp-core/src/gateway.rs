//! # Storage Gateway Seam
//!
//! The publish loop writes through [`StorageGateway`] and never sees HTTP.
//! `wasp-client` provides the network implementation; tests use in-memory
//! recorders.

use std::future::Future;

use bytes::Bytes;
use mime::Mime;

use crate::error::GatewayError;
use crate::resource::ResourceName;
use crate::space::SpaceHandle;

/// One authenticated write of a resource's full content.
#[derive(Debug, Clone)]
pub struct PutRequest<'a> {
    pub resource: &'a ResourceName,
    pub body: Bytes,
    /// Sent as `Content-Type` when present.
    pub media_type: Option<&'a Mime>,
}

/// Response status of a completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PutOutcome {
    pub status: u16,
}

impl PutOutcome {
    /// A 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs signed writes against a storage space.
///
/// Any response, success or not, is an `Ok(PutOutcome)`; `Err` is reserved
/// for requests that never produced a response. Implementations must be
/// `Send + Sync` so writes can run concurrently against one gateway.
pub trait StorageGateway: Send + Sync {
    fn put(
        &self,
        space: &SpaceHandle,
        request: PutRequest<'_>,
    ) -> impl Future<Output = Result<PutOutcome, GatewayError>> + Send;
}
