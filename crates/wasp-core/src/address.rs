//! # Space Address Resolution
//!
//! A storage URL names a storage origin and, optionally, an existing space:
//!
//! ```text
//! scheme://host[:port][/<prefix>...]/space/<uuid>[/<subpath>]
//! ```
//!
//! The path is read by a small tokenizer ([`parse_space_path`]) rather than
//! a single regex, so each branch of the grammar is visible on its own:
//!
//! | Path | Result |
//! |------|--------|
//! | empty or `/` | new space (bare origin) |
//! | `.../space/` or `.../space` | new space |
//! | `.../space/<uuid>[/rest]` | existing space, `rest` kept as sub-path |
//! | `.../space/<not-a-uuid>` | [`AddressError::InvalidSpaceId`] |
//! | any other non-empty path | [`AddressError::MissingSpaceSegment`] |
//!
//! Writes always go to the URL's origin; any path prefix before `space` is
//! not carried into resource URLs.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::AddressError;

/// Storage endpoint used when no URL is supplied.
pub const DEFAULT_STORAGE_URL: &str = "https://wallet-attached-storage.bengo.is";

const SPACE_SEGMENT: &str = "space";

/// Identifier of a storage space. Always a valid UUID by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(Uuid);

impl SpaceId {
    /// Mint a new random (v4) space identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SpaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SpaceId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AddressError::InvalidSpaceId {
                segment: s.to_string(),
            })
    }
}

/// A space identifier plus an optional sub-path.
///
/// The sub-path is accepted and kept but not used for routing writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceAddress {
    pub space_id: SpaceId,
    pub sub_path: Option<String>,
}

/// What a URL path says about the target space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpacePath {
    /// The URL is a bare origin.
    Root,
    /// A `space` segment with no id after it.
    Unassigned { sub_path: Option<String> },
    /// A `space` segment followed by a valid id.
    Assigned(SpaceAddress),
}

/// Tokenize a URL path against the space grammar.
pub fn parse_space_path(path: &str) -> Result<SpacePath, AddressError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Ok(SpacePath::Root);
    }

    let mut segments = trimmed.split('/');
    if !segments.any(|segment| segment == SPACE_SEGMENT) {
        return Err(AddressError::MissingSpaceSegment {
            path: path.to_string(),
        });
    }

    let id = segments.next().unwrap_or_default();
    let rest = segments.collect::<Vec<_>>().join("/");
    let sub_path = if rest.trim_matches('/').is_empty() {
        None
    } else {
        Some(rest)
    };

    if id.is_empty() {
        return Ok(SpacePath::Unassigned { sub_path });
    }
    Ok(SpacePath::Assigned(SpaceAddress {
        space_id: id.parse()?,
        sub_path,
    }))
}

/// A space address together with the storage origin it lives on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpace {
    /// Scheme, host, and port of the storage service, with an empty path.
    pub origin: Url,
    pub address: SpaceAddress,
    /// `true` when the space id was minted rather than read from the URL.
    pub generated: bool,
}

impl ResolvedSpace {
    /// Rendered space URL: `<origin>/space/<uuid>`.
    pub fn space_url(&self) -> Url {
        let mut url = self.origin.clone();
        url.set_path(&format!("/{SPACE_SEGMENT}/{}", self.address.space_id));
        url
    }

    pub fn space_id(&self) -> SpaceId {
        self.address.space_id
    }
}

/// Resolve a storage URL (or the default endpoint) into a space.
///
/// A missing space id yields a freshly minted one; a path without a `space`
/// segment is an error.
pub fn resolve_space(url: Option<&str>) -> Result<ResolvedSpace, AddressError> {
    let raw = url.map(str::trim).filter(|u| !u.is_empty()).unwrap_or(DEFAULT_STORAGE_URL);
    let invalid = |reason: String| AddressError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", parsed.scheme())));
    }
    let origin = Url::parse(&parsed.origin().ascii_serialization())
        .map_err(|e| invalid(e.to_string()))?;

    let (address, generated) = match parse_space_path(parsed.path())? {
        SpacePath::Root => (
            SpaceAddress {
                space_id: SpaceId::new(),
                sub_path: None,
            },
            true,
        ),
        SpacePath::Unassigned { sub_path } => (
            SpaceAddress {
                space_id: SpaceId::new(),
                sub_path,
            },
            true,
        ),
        SpacePath::Assigned(address) => (address, false),
    };

    tracing::debug!(
        origin = %origin,
        space = %address.space_id,
        generated,
        "resolved space address"
    );

    Ok(ResolvedSpace {
        origin,
        address,
        generated,
    })
}
