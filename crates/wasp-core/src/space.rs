//! # Space Handle
//!
//! Pairs the signing identity with the resolved space. Built once per run
//! and shared read-only by every write.

use url::Url;
use wasp_crypto::Identity;

use crate::address::{ResolvedSpace, SpaceId};
use crate::error::GatewayError;
use crate::resource::ResourceName;

/// The identity that signs writes plus the space they target.
#[derive(Debug)]
pub struct SpaceHandle {
    identity: Identity,
    space: ResolvedSpace,
}

impl SpaceHandle {
    pub fn new(identity: Identity, space: ResolvedSpace) -> Self {
        Self { identity, space }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn space(&self) -> &ResolvedSpace {
        &self.space
    }

    pub fn space_id(&self) -> SpaceId {
        self.space.space_id()
    }

    /// `<origin>/space/<uuid>`.
    pub fn space_url(&self) -> Url {
        self.space.space_url()
    }

    /// Absolute URL of a resource: `<origin>/space/<uuid>/resource/<name>`.
    ///
    /// Each `/`-separated part of the name is percent-encoded on its own.
    /// A trailing `/` (container alias) is kept, and the empty name maps to
    /// `.../resource/`. Names with a `.` or `..` segment are refused, since
    /// URL normalization would fold them onto another resource.
    pub fn resource_url(&self, name: &ResourceName) -> Result<Url, GatewayError> {
        if name.has_dot_segment() {
            return Err(GatewayError::Request {
                resource: name.to_string(),
                reason: "'.' and '..' segments are removed by URL normalization".into(),
            });
        }
        let mut url = self.space.origin.clone();
        url.set_path(&format!("/space/{}/resource/", self.space_id()));
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(name.as_str().split('/'));
        }
        Ok(url)
    }

    /// Path component of [`resource_url`](Self::resource_url), used for
    /// logging and request signing.
    pub fn resource_path(&self, name: &ResourceName) -> Result<String, GatewayError> {
        self.resource_url(name).map(|url| url.path().to_string())
    }
}
