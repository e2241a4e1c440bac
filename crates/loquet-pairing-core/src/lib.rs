//! `loquet-pairing-core` — commissioning pairing artifacts for LOQUET.
//!
//! Produces the two artifacts that onboard a device into the
//! commissioning protocol: the human-typeable manual setup code
//! (bit-packed decimal chunks plus a Verhoeff check digit) and the
//! SPAKE2+ verifier (PBKDF2-stretched passcode reduced into the P-256
//! scalar field, with `L = w1·G`). Pure library: zero network, zero
//! async, zero persistence.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod checksum;
pub mod entropy;
pub mod error;
pub mod manual_code;
pub mod payload;
pub mod spake2p;

pub use checksum::{compute_check_digit, validate_check_digit};
pub use entropy::{
    generate_random_passcode, generate_random_passcode_from, generate_random_salt,
    generate_random_salt_from, EntropySource, OsEntropy, SALT_LEN,
};
pub use error::PairingError;
pub use manual_code::{generate_manual_code, ManualCode, LONG_CODE_LEN, SHORT_CODE_LEN};
pub use payload::{
    is_weak_passcode, CommissioningFlow, PayloadContents, MAX_DISCRIMINATOR, MAX_PASSCODE,
    PASSCODE_DENYLIST,
};
pub use spake2p::{
    generate_random_verifier_parameters, generate_random_verifier_parameters_from,
    generate_verifier, VerifierParameters, DEFAULT_ITERATIONS, VERIFIER_LEN,
};
