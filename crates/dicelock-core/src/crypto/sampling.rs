//! Unbiased integer sampling over an arbitrary inclusive range.

use rand::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors from the fair-random primitives
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid range: {min}..={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}

/// Draw a uniformly distributed value in `min..=max` from `rng`.
///
/// Samples are 31-bit nonnegative integers (4 bytes with the sign bit
/// cleared). Draws at or above the largest multiple of the range size are
/// discarded, so every residue class is equiprobable even when the range
/// size does not divide the sample space evenly.
pub fn sample_uniform<R: RngCore + CryptoRng>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> Result<i32, CryptoError> {
    if max < min {
        return Err(CryptoError::InvalidRange { min, max });
    }
    let span = i64::from(max) - i64::from(min) + 1;
    if span > i64::from(i32::MAX) {
        // Wider than the 31-bit sample space; no caller gets near this.
        return Err(CryptoError::InvalidRange { min, max });
    }
    let span = span as i32;
    let limit = i32::MAX / span * span;

    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        let sample = (u32::from_le_bytes(buf) & 0x7FFF_FFFF) as i32;
        if sample < limit {
            return Ok(min + sample % span);
        }
    }
}
