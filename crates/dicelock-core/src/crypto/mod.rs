//! Cryptographic primitives for the fair-random protocol.
//!
//! This module provides:
//! - MacKey and Digest for the keyed commit-reveal scheme
//! - Commitment binding a sampled value to its digest and reveal key
//! - Unbiased rejection sampling over an arbitrary inclusive range

mod commitment;
mod sampling;

pub use commitment::{Commitment, Digest, MacKey};
pub use sampling::{sample_uniform, CryptoError};
