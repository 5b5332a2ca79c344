//! Keyed commitments for the fair-random protocol.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use std::fmt;

use super::sampling::{sample_uniform, CryptoError};

type HmacSha256 = Hmac<Sha256>;

/// 32-byte MAC key, generated fresh for a single commitment
#[derive(Clone, PartialEq, Eq)]
pub struct MacKey([u8; 32]);

impl MacKey {
    /// Generate a new key from a cryptographically secure source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MacKey {
    /// Uppercase hex, the form the human feeds into their own HMAC check
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// Digest = HMAC-SHA256(key, decimal encoding of the committed value)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// MAC the decimal-string encoding of `value` under `key`
    pub fn compute(key: &MacKey, value: i32) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(value.to_string().as_bytes());
        let result = mac.finalize().into_bytes();
        Self(result.into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and value reproduce this digest
    pub fn verify(&self, key: &MacKey, value: i32) -> bool {
        *self == Self::compute(key, value)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// One run of the fair-random protocol: a secret value sampled uniformly
/// over an inclusive range, a fresh key, and the digest that binds them.
///
/// The digest is safe to disclose immediately; `value` and the key behind
/// `reveal` must only be disclosed after the counterpart's contribution is
/// locked in. That ordering is the caller's responsibility, this type is a
/// pure primitive.
pub struct Commitment {
    value: i32,
    key: MacKey,
    digest: Digest,
}

impl Commitment {
    /// Generate a commitment over `min..=max` from the operating system's
    /// entropy source
    pub fn generate(min: i32, max: i32) -> Result<Self, CryptoError> {
        Self::generate_with(&mut OsRng, min, max)
    }

    /// Generate a commitment over `min..=max` from the supplied source
    pub fn generate_with<R: RngCore + CryptoRng>(
        rng: &mut R,
        min: i32,
        max: i32,
    ) -> Result<Self, CryptoError> {
        let value = sample_uniform(rng, min, max)?;
        let key = MacKey::generate(rng)?;
        let digest = Digest::compute(&key, value);
        Ok(Self { value, key, digest })
    }

    /// The digest to publish before collecting the counterpart's response
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The committed secret value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Disclose the MAC key. Idempotent: every call returns the same key.
    pub fn reveal(&self) -> &MacKey {
        &self.key
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The secret value and key stay out of debug output.
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}
