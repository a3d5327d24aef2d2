//! # did:key Controller Identifiers
//!
//! A space is owned by the controller of an Ed25519 key. The controller is
//! named by a `did:key` identifier: the multicodec-prefixed public key
//! (`0xed 0x01` for ed25519-pub) encoded as base58btc multibase (`z...`).

use crate::error::CryptoError;
use crate::identity::PublicKey;

const DID_KEY_PREFIX: &str = "did:key:";

/// Multicodec varint prefix for an Ed25519 public key.
const ED25519_PUB_CODEC: [u8; 2] = [0xed, 0x01];

/// A `did:key` identifier for an Ed25519 public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Did(String);

impl Did {
    /// Derive the controller identifier for a public key.
    pub fn from_public_key(key: &PublicKey) -> Self {
        let mut bytes = Vec::with_capacity(ED25519_PUB_CODEC.len() + 32);
        bytes.extend_from_slice(&ED25519_PUB_CODEC);
        bytes.extend_from_slice(key.as_bytes());
        Self(format!("{DID_KEY_PREFIX}z{}", bs58::encode(bytes).into_string()))
    }

    /// Parse a `did:key` string, validating that it names an Ed25519 key.
    pub fn parse(did: &str) -> Result<Self, CryptoError> {
        Self::decode_public_key(did)?;
        Ok(Self(did.to_string()))
    }

    /// The full identifier, e.g. `did:key:z6Mk...`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The multibase-encoded key, i.e. the part after `did:key:`.
    pub fn multibase(&self) -> &str {
        &self.0[DID_KEY_PREFIX.len()..]
    }

    /// Verification method id used as `keyId` when signing requests.
    pub fn key_id(&self) -> String {
        format!("{}#{}", self.0, self.multibase())
    }

    /// Recover the public key this identifier encodes.
    pub fn public_key(&self) -> Result<PublicKey, CryptoError> {
        Self::decode_public_key(&self.0)
    }

    fn decode_public_key(did: &str) -> Result<PublicKey, CryptoError> {
        let invalid = |reason: &str| CryptoError::InvalidDid {
            did: did.to_string(),
            reason: reason.to_string(),
        };
        let multibase = did
            .strip_prefix(DID_KEY_PREFIX)
            .ok_or_else(|| invalid("missing did:key: prefix"))?;
        let encoded = multibase
            .strip_prefix('z')
            .ok_or_else(|| invalid("multibase must be base58btc ('z')"))?;
        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| invalid(&format!("base58 decode failed: {e}")))?;
        let key = bytes
            .strip_prefix(&ED25519_PUB_CODEC)
            .ok_or_else(|| invalid("not an ed25519-pub multicodec key"))?;
        let key: [u8; 32] = key
            .try_into()
            .map_err(|_| invalid(&format!("expected 32 key bytes, got {}", key.len())))?;
        Ok(PublicKey::from_bytes(key))
    }
}

impl std::fmt::Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
