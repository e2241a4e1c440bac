//! Manual setup code generation.
//!
//! Packs a [`PayloadContents`] into fixed-width decimal chunks and appends
//! a Verhoeff check digit. The short form (standard flow) is 11 digits;
//! the long form additionally discloses vendor and product IDs and is 21
//! digits. Generation is deterministic: one payload, one code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checksum::compute_check_digit;
use crate::error::PairingError;
use crate::payload::PayloadContents;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const CHUNK1_DIGITS: usize = 1;
const CHUNK2_DIGITS: usize = 5;
const CHUNK3_DIGITS: usize = 4;
const VENDOR_ID_DIGITS: usize = 5;
const PRODUCT_ID_DIGITS: usize = 5;

/// Length of a standard-flow manual code, check digit included.
pub const SHORT_CODE_LEN: usize = 11;

/// Length of a non-standard-flow manual code, check digit included.
pub const LONG_CODE_LEN: usize = 21;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// An immutable, checksummed manual setup code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualCode(String);

impl ManualCode {
    /// The code as a decimal string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the long (vendor/product-disclosing) form.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.0.len() == LONG_CODE_LEN
    }
}

impl fmt::Display for ManualCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Bit-field encoder
// ---------------------------------------------------------------------------

/// Chunk 1: `version(=0) << 3 | vid_pid_present << 2 | discriminator[11:10]`.
///
/// The discriminator is pre-validated to 12 bits, so the shift leaves at
/// most two bits and the chunk is a single decimal digit.
fn chunk1(payload: &PayloadContents) -> u8 {
    let vid_pid_present = u8::from(payload.commissioning_flow.requires_vendor_product());
    let discriminator_high = (payload.discriminator >> 10) as u8 & 0x0F;
    vid_pid_present << 2 | discriminator_high
}

/// Chunk 2: discriminator bits 9..8 above the low 14 passcode bits.
fn chunk2(payload: &PayloadContents) -> u16 {
    let discriminator_mid = (payload.discriminator & 0x0300) << 6;
    let passcode_low = (payload.setup_passcode & 0x3FFF) as u16;
    discriminator_mid | passcode_low
}

/// Chunk 3: the remaining high-order passcode bits.
fn chunk3(payload: &PayloadContents) -> u16 {
    (payload.setup_passcode >> 14) as u16
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generate the manual setup code for a payload.
///
/// # Errors
///
/// Returns [`PairingError::Precondition`] when
/// [`PayloadContents::validate`] rejects the payload. Checksum computation
/// itself cannot fail on the generated digit string.
pub fn generate_manual_code(payload: &PayloadContents) -> Result<ManualCode, PairingError> {
    payload.validate()?;

    let mut digits = format!(
        "{c1:0w1$}{c2:0w2$}{c3:0w3$}",
        c1 = chunk1(payload),
        w1 = CHUNK1_DIGITS,
        c2 = chunk2(payload),
        w2 = CHUNK2_DIGITS,
        c3 = chunk3(payload),
        w3 = CHUNK3_DIGITS,
    );

    if payload.commissioning_flow.requires_vendor_product() {
        digits.push_str(&format!(
            "{vid:0wv$}{pid:0wp$}",
            vid = payload.vendor_id,
            wv = VENDOR_ID_DIGITS,
            pid = payload.product_id,
            wp = PRODUCT_ID_DIGITS,
        ));
    }

    let check = compute_check_digit(&digits)?;
    digits.push(char::from(b'0' + check));
    Ok(ManualCode(digits))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
