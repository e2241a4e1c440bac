//! SPAKE2+ verifier derivation over NIST P-256.
//!
//! An accessory stores the verifier — `w0` scalar followed by the
//! uncompressed `L = w1·G` point — instead of the plaintext passcode. The
//! passcode space is only ~8×10⁷ values, so the PBKDF2 iteration count is
//! the sole mitigation against offline guessing; derivation only, the
//! exchange protocol itself lives elsewhere.
//!
//! Pipeline: passcode (4 bytes little-endian) → PBKDF2-HMAC-SHA-256 →
//! two 40-byte halves → 384-bit reduction mod the group order → `w0`,
//! `w1` → `L = w1·G` → 97-byte assembly.

use std::fmt;

use p256::elliptic_curve::bigint::{Encoding, NonZero, U384};
use p256::elliptic_curve::group::Group;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::elliptic_curve::PrimeField;
use p256::{FieldBytes, ProjectivePoint, Scalar};
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::{
    generate_random_passcode_from, generate_random_salt_from, EntropySource, OsEntropy, SALT_LEN,
};
use crate::error::PairingError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Group order byte length for P-256.
const SCALAR_LEN: usize = 32;

/// Bytes of PBKDF2 output per scalar: order length plus an 8-byte margin
/// so the modulo reduction bias is cryptographically negligible.
const W_LEN: usize = SCALAR_LEN + 8;

/// Working width of the wide reduction (384 bits).
const WIDE_LEN: usize = 48;

/// Verifier length: `w0` (32) followed by the SEC1 uncompressed `L`
/// point (1 + 32 + 32). Always exactly this long.
pub const VERIFIER_LEN: usize = 97;

/// Default PBKDF2 iteration count for the orchestrated generator — the
/// recommended production minimum. Callers of [`generate_verifier`]
/// supply their own work factor.
pub const DEFAULT_ITERATIONS: u16 = 1000;

/// The P-256 group order, zero-extended to 384 bits for wide reduction.
const ORDER_WIDE: U384 = U384::from_be_hex(
    "00000000000000000000000000000000ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The full parameter bundle an accessory is provisioned with.
///
/// The plaintext passcode is delivered out-of-band and must not be
/// persisted long-term; salt, iteration count and verifier are persisted
/// alongside the device identity. The whole bundle zeroizes on drop and
/// the passcode is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct VerifierParameters {
    /// Plaintext setup passcode.
    pub passcode: u32,
    /// Random salt fed to the key stretch.
    pub salt: [u8; SALT_LEN],
    /// Base64 rendering of the salt for storage and display.
    pub salt_base64: String,
    /// PBKDF2 iteration count.
    pub iterations: u16,
    /// 97-byte verifier, safe to persist.
    pub verifier: Vec<u8>,
}

impl fmt::Debug for VerifierParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierParameters")
            .field("passcode", &"***")
            .field("salt_base64", &self.salt_base64)
            .field("iterations", &self.iterations)
            .field("verifier", &format_args!("[{} bytes]", self.verifier.len()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

/// Derive the SPAKE2+ verifier for a passcode.
///
/// Deterministic: the same `(passcode, salt, iterations)` triple always
/// yields the same 97 bytes.
///
/// # Errors
///
/// - [`PairingError::Precondition`] if `iterations` is zero (the stretch
///   must not be a no-op).
/// - [`PairingError::InvalidPoint`] if `w1·G` is the point at infinity.
///   That is cryptographically impossible for a non-zero scalar and
///   signals a defect in scalar derivation or curve parameters — the
///   verifier is refused, never substituted.
pub fn generate_verifier(
    passcode: u32,
    salt: &[u8],
    iterations: u16,
) -> Result<[u8; VERIFIER_LEN], PairingError> {
    if iterations == 0 {
        return Err(PairingError::Precondition(
            "iteration count must be non-zero".to_string(),
        ));
    }

    let mut stretched = [0u8; 2 * W_LEN];
    pbkdf2_hmac::<Sha256>(
        &passcode.to_le_bytes(),
        salt,
        u32::from(iterations),
        &mut stretched,
    );

    let (w0_half, w1_half) = stretched.split_at(W_LEN);
    let w0_bytes = reduce_mod_order(w0_half)?;
    let mut w1_bytes = reduce_mod_order(w1_half)?;
    stretched.zeroize();

    let w1 = scalar_from_be(&w1_bytes)?;
    w1_bytes.zeroize();

    let l_point = ProjectivePoint::GENERATOR * w1;
    if bool::from(l_point.is_identity()) {
        return Err(PairingError::InvalidPoint);
    }
    let encoded = l_point.to_affine().to_encoded_point(false);

    let mut verifier = [0u8; VERIFIER_LEN];
    verifier[..SCALAR_LEN].copy_from_slice(&w0_bytes);
    verifier[SCALAR_LEN..].copy_from_slice(encoded.as_bytes());
    Ok(verifier)
}

/// Interpret a big-endian byte string as an integer and reduce it modulo
/// the group order, returning the canonical 32-byte encoding.
fn reduce_mod_order(wide_be: &[u8]) -> Result<[u8; SCALAR_LEN], PairingError> {
    let mut padded = [0u8; WIDE_LEN];
    // Inputs are at most W_LEN (40) bytes, well inside the working width.
    let offset = WIDE_LEN.saturating_sub(wide_be.len());
    padded[offset..].copy_from_slice(wide_be);

    let value = U384::from_be_slice(&padded);
    let order =
        Option::<NonZero<U384>>::from(NonZero::new(ORDER_WIDE)).expect("the group order is non-zero");
    let reduced = value % &order;
    padded.zeroize();

    encode_fixed_be::<SCALAR_LEN>(&reduced.to_be_bytes())
}

/// Parse a canonical 32-byte big-endian scalar.
fn scalar_from_be(bytes: &[u8; SCALAR_LEN]) -> Result<Scalar, PairingError> {
    let repr = FieldBytes::from(*bytes);
    Option::<Scalar>::from(Scalar::from_repr(repr)).ok_or_else(|| {
        PairingError::Precondition("scalar not in canonical group order range".to_string())
    })
}

/// Left-pad a big-endian integer into a fixed-width array.
///
/// Rejects values wider than `WIDTH` instead of truncating — fixed-width
/// serialization must never be variable-width or lossy.
fn encode_fixed_be<const WIDTH: usize>(be_bytes: &[u8]) -> Result<[u8; WIDTH], PairingError> {
    let excess = be_bytes.len().saturating_sub(WIDTH);
    if be_bytes[..excess].iter().any(|&b| b != 0) {
        return Err(PairingError::Precondition(format!(
            "integer does not fit in {WIDTH} bytes"
        )));
    }

    let significant = &be_bytes[excess..];
    let mut out = [0u8; WIDTH];
    // significant.len() <= WIDTH by construction of excess.
    #[allow(clippy::arithmetic_side_effects)]
    out[WIDTH - significant.len()..].copy_from_slice(significant);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Generate a complete random parameter bundle from the OS CSPRNG using
/// [`DEFAULT_ITERATIONS`].
///
/// # Errors
///
/// Propagates any error from passcode/salt sampling or verifier
/// derivation.
pub fn generate_random_verifier_parameters() -> Result<VerifierParameters, PairingError> {
    generate_random_verifier_parameters_from(&mut OsEntropy)
}

/// Generate a complete random parameter bundle from a caller-supplied
/// entropy source.
///
/// # Errors
///
/// Propagates any error from passcode/salt sampling or verifier
/// derivation.
pub fn generate_random_verifier_parameters_from(
    source: &mut impl EntropySource,
) -> Result<VerifierParameters, PairingError> {
    let passcode = generate_random_passcode_from(source)?;
    let (salt, salt_base64) = generate_random_salt_from(source)?;
    let verifier = generate_verifier(passcode, &salt, DEFAULT_ITERATIONS)?;

    Ok(VerifierParameters {
        passcode,
        salt,
        salt_base64,
        iterations: DEFAULT_ITERATIONS,
        verifier: verifier.to_vec(),
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
