//! # wasp-crypto -- Space Signing Identities
//!
//! Provides the identity that authorizes writes to a storage space:
//!
//! - **Ed25519** key generation, signing, and verification.
//! - **did:key** controller identifiers derived from the public key.
//! - **Key files**: the hex seed encoding accepted by `--id` and written by
//!   `wasp keygen`.
//!
//! ## Crate Policy
//!
//! - No dependency on any other workspace crate.
//! - Private key bytes are never serialized or logged. [`Identity`] does not
//!   implement `Serialize` and its `Debug` output is redacted.
//! - No mocking of cryptographic operations in tests.

pub mod did;
pub mod error;
pub mod identity;

pub use did::Did;
pub use error::{CryptoError, KeyParseError};
pub use identity::{resolve_identity, verify, Identity, PublicKey, Signature};
