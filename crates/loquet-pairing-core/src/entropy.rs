//! Cryptographic randomness for passcodes and salts.
//!
//! All production randomness comes from the OS CSPRNG via [`OsEntropy`].
//! The [`EntropySource`] capability exists so deterministic doubles can
//! replace OS entropy in tests without touching production code paths.
//! A failed read is fatal — there is no fallback source.

use data_encoding::BASE64;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::PairingError;
use crate::payload::{is_weak_passcode, MAX_PASSCODE};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// Smallest bit mask covering `0..=MAX_PASSCODE` (27 bits).
const PASSCODE_MASK: u32 = 0x07FF_FFFF;

/// Upper bound on rejection-sampling draws. Each draw is accepted with
/// probability ≈ 0.745, so hitting this bound means the entropy source is
/// not producing uniform bits.
const MAX_SAMPLING_ATTEMPTS: usize = 100;

// ---------------------------------------------------------------------------
// Entropy capability
// ---------------------------------------------------------------------------

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::Entropy`] if the source cannot be read.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PairingError>;
}

/// The OS CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PairingError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| PairingError::Entropy(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random setup passcode from the OS CSPRNG.
///
/// # Errors
///
/// Propagates [`PairingError::Entropy`] from the source, or
/// [`PairingError::SamplingExhausted`] if the retry bound is hit.
pub fn generate_random_passcode() -> Result<u32, PairingError> {
    generate_random_passcode_from(&mut OsEntropy)
}

/// Generate a random setup passcode from a caller-supplied source.
///
/// Draws 27 masked bits per attempt and rejects values above
/// [`MAX_PASSCODE`] or in the weak-passcode denylist. Rejection keeps the
/// accepted distribution uniform over the valid passcode space — values
/// are never clamped into range.
///
/// # Errors
///
/// Propagates [`PairingError::Entropy`] from the source, or
/// [`PairingError::SamplingExhausted`] if the retry bound is hit.
pub fn generate_random_passcode_from(
    source: &mut impl EntropySource,
) -> Result<u32, PairingError> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let mut raw = [0u8; 4];
        source.fill(&mut raw)?;
        let candidate = u32::from_le_bytes(raw) & PASSCODE_MASK;
        if candidate <= MAX_PASSCODE && !is_weak_passcode(candidate) {
            return Ok(candidate);
        }
    }
    Err(PairingError::SamplingExhausted {
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Generate a 32-byte random salt from the OS CSPRNG.
///
/// Returns the raw bytes together with their base64 rendering for
/// storage and display.
///
/// # Errors
///
/// Propagates [`PairingError::Entropy`] from the source.
pub fn generate_random_salt() -> Result<([u8; SALT_LEN], String), PairingError> {
    generate_random_salt_from(&mut OsEntropy)
}

/// Generate a 32-byte random salt from a caller-supplied source.
///
/// # Errors
///
/// Propagates [`PairingError::Entropy`] from the source.
pub fn generate_random_salt_from(
    source: &mut impl EntropySource,
) -> Result<([u8; SALT_LEN], String), PairingError> {
    let mut salt = [0u8; SALT_LEN];
    source.fill(&mut salt)?;
    let encoded = BASE64.encode(&salt);
    Ok((salt, encoded))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
