//! # wasp-core -- Publish Engine
//!
//! Turns a local file selection plus a naming convention into a
//! deterministic sequence of writes against a storage space:
//!
//! - [`address`] -- parse a storage URL into a space address, or mint one.
//! - [`enumerate`] -- resolve selection patterns to candidate paths.
//! - [`resource`] -- map local paths to resource names; container aliases.
//! - [`media`] -- media type inference from file extensions.
//! - [`space`] -- the [`SpaceHandle`] pairing an identity with an address.
//! - [`gateway`] -- the [`StorageGateway`] seam the publish loop writes through.
//! - [`publish`] -- plan and execute the writes, producing a [`PublishSummary`].
//!
//! ## Failure Model
//!
//! Identity and address errors are fatal and surface before any write.
//! Individual write failures are recorded in the summary and never abort
//! sibling writes unless strict mode is requested.

pub mod address;
pub mod enumerate;
pub mod error;
pub mod gateway;
pub mod media;
pub mod publish;
pub mod resource;
pub mod space;

pub use address::{resolve_space, ResolvedSpace, SpaceAddress, SpaceId, DEFAULT_STORAGE_URL};
pub use enumerate::FileSelection;
pub use error::{AddressError, EnumerateError, GatewayError};
pub use gateway::{PutOutcome, PutRequest, StorageGateway};
pub use publish::{
    plan, publish, PlannedFile, PublishOptions, PublishPlan, PublishRecord, PublishSummary,
    WriteKind, WriteOp, WriteOutcome,
};
pub use resource::{is_lossless, map_resource_name, strip_prefix, ResourceName, StripMode};
pub use space::SpaceHandle;
