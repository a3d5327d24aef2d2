//! # Identity Error Types
//!
//! Key parsing failures are fatal for a publish run and are reported
//! before any network activity. Verification and DID errors are used by
//! callers that check signatures after the fact.

use thiserror::Error;

/// Supplied key material could not be turned into an [`Identity`](crate::Identity).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyParseError {
    /// The key material was empty after trimming whitespace.
    #[error("key material is empty")]
    Empty,

    /// The key material has neither the seed nor the keypair length.
    #[error("key material must be 64 hex chars (seed) or 128 hex chars (seed + public key), got {0}")]
    InvalidLength(usize),

    /// The key material contains non-hex characters.
    #[error("key material is not valid hex: {0}")]
    HexDecode(String),

    /// A 128-char keypair whose public half was not derived from its seed.
    #[error("public key half does not match the key derived from the seed")]
    PublicKeyMismatch,
}

/// Errors from signature verification and DID handling.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Ed25519 signature verification failed.
    #[error("Ed25519 verification failed: {0}")]
    VerificationFailed(String),

    /// Invalid Ed25519 public key bytes.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// A `did:key` identifier that does not encode an Ed25519 public key.
    #[error("invalid did:key identifier \"{did}\": {reason}")]
    InvalidDid {
        /// The rejected identifier.
        did: String,
        /// Why it was rejected.
        reason: String,
    },
}
