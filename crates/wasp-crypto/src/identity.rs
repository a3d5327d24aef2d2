//! # Space Signing Identity
//!
//! An [`Identity`] is an Ed25519 keypair plus the `did:key` controller
//! derived from its public key. It is created once per run, either freshly
//! generated or parsed from supplied key material, and never changes.
//!
//! ## Key Encoding
//!
//! Key material is hex text, surrounding whitespace ignored:
//!
//! - 64 hex chars: the 32-byte seed (the format `wasp keygen` writes).
//! - 128 hex chars: seed followed by the 32-byte public key. The public half
//!   must match the key derived from the seed.

use ed25519_dalek::{Signer, Verifier};
use rand_core::OsRng;
use zeroize::Zeroizing;

use crate::did::Did;
use crate::error::{CryptoError, KeyParseError};

/// An Ed25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

/// An Ed25519 signature (64 bytes).
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; 64]);

/// A signing identity bound to a storage space.
///
/// Does not implement `Serialize` or `Clone`. The signing key is zeroized on
/// drop by `ed25519-dalek`.
pub struct Identity {
    signing_key: ed25519_dalek::SigningKey,
    controller: Did,
}

// ---------------------------------------------------------------------------
// PublicKey / Signature
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Create a public key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte public key.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the public key as lowercase hex.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    fn to_verifying_key(self) -> Result<ed25519_dalek::VerifyingKey, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(&self.0)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({}...)", bytes_to_hex(&self.0[..4]))
    }
}

impl Signature {
    /// Return the raw 64-byte signature.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", bytes_to_hex(&self.0[..4]))
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

impl Identity {
    /// Generate a fresh identity from the operating system CSPRNG.
    pub fn generate() -> Self {
        Self::from_signing_key(ed25519_dalek::SigningKey::generate(&mut OsRng))
    }

    /// Create an identity from a 32-byte seed. Deterministic.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(ed25519_dalek::SigningKey::from_bytes(seed))
    }

    /// Parse hex key material (see module docs for the accepted encodings).
    pub fn from_key_material(material: &str) -> Result<Self, KeyParseError> {
        let material = material.trim();
        if material.is_empty() {
            return Err(KeyParseError::Empty);
        }
        if material.len() != 64 && material.len() != 128 {
            return Err(KeyParseError::InvalidLength(material.len()));
        }
        let bytes = Zeroizing::new(hex_to_bytes(material)?);

        let mut seed = Zeroizing::new([0u8; 32]);
        seed.copy_from_slice(&bytes[..32]);
        let identity = Self::from_seed(&seed);

        if bytes.len() == 64 && identity.public_key().as_bytes()[..] != bytes[32..] {
            return Err(KeyParseError::PublicKeyMismatch);
        }
        Ok(identity)
    }

    fn from_signing_key(signing_key: ed25519_dalek::SigningKey) -> Self {
        let public = PublicKey(signing_key.verifying_key().to_bytes());
        Self {
            controller: Did::from_public_key(&public),
            signing_key,
        }
    }

    /// The `did:key` controller that owns spaces created by this identity.
    pub fn controller(&self) -> &Did {
        &self.controller
    }

    /// Verification method id (`<did>#<multibase>`) used in request signatures.
    pub fn key_id(&self) -> String {
        self.controller.key_id()
    }

    /// The public half of the keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign arbitrary bytes.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }

    /// Encode the seed as 64 hex chars, the key file format.
    pub fn seed_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(bytes_to_hex(self.signing_key.as_bytes()))
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("controller", &self.controller.as_str())
            .field("signing_key", &"<private>")
            .finish()
    }
}

/// Resolve the identity for a run.
///
/// Parses `material` when present; otherwise mints a fresh identity. Parse
/// failures are fatal to the caller and must abort before any write.
pub fn resolve_identity(material: Option<&str>) -> Result<Identity, KeyParseError> {
    match material {
        Some(material) => Identity::from_key_material(material),
        None => Ok(Identity::generate()),
    }
}

/// Verify a signature over `message` by `public_key`.
pub fn verify(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<(), CryptoError> {
    let vk = public_key.to_verifying_key()?;
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    vk.verify(message, &sig)
        .map_err(|e| CryptoError::VerificationFailed(e.to_string()))
}

// ---------------------------------------------------------------------------
// Hex utilities
// ---------------------------------------------------------------------------

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, KeyParseError> {
    if let Some(pos) = hex.find(|c: char| !c.is_ascii_hexdigit()) {
        return Err(KeyParseError::HexDecode(format!("non-hex character at position {pos}")));
    }
    if hex.len() % 2 != 0 {
        return Err(KeyParseError::HexDecode("odd number of hex digits".into()));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| KeyParseError::HexDecode(format!("position {i}: {e}")))
        })
        .collect()
}
