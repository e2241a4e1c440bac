//! Error types for `loquet-pairing-core`.

use thiserror::Error;

/// Errors produced by pairing-artifact generation.
#[derive(Debug, Error)]
pub enum PairingError {
    /// The OS secure random source could not be read — fatal to the
    /// calling operation; never falls back to a non-cryptographic source.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Scalar multiplication produced the point at infinity — indicates a
    /// defect in scalar derivation or curve parameters.
    #[error("scalar multiplication produced the point at infinity")]
    InvalidPoint,

    /// Caller-supplied value outside its declared range (discriminator or
    /// passcode bit width, denylisted passcode, non-digit checksum input,
    /// zero iteration count).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// The passcode rejection-sampling loop hit its retry bound without
    /// producing an acceptable value — the entropy source is suspect.
    #[error("rejection sampling exhausted after {attempts} attempts")]
    SamplingExhausted {
        /// Number of draws attempted before giving up.
        attempts: usize,
    },
}
