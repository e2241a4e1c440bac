//! Commissioning payload descriptor and its validity rules.
//!
//! A [`PayloadContents`] bundles everything the manual-code encoder packs:
//! setup passcode, discriminator, commissioning flow and (for non-standard
//! flows) vendor/product identifiers. Validation is explicit — out-of-range
//! fields are rejected up front, never silently masked down to width.

use serde::{Deserialize, Serialize};

use crate::error::PairingError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest valid setup passcode (eight decimal digits).
pub const MAX_PASSCODE: u32 = 99_999_999;

/// Largest valid discriminator (12 bits).
pub const MAX_DISCRIMINATOR: u16 = 0x0FFF;

/// Passcodes an installer could trivially guess: all-repeated-digit values
/// and the two straight keypad runs. Rejected both at payload validation
/// and by the random passcode sampler.
pub static PASSCODE_DENYLIST: [u32; 12] = [
    0, 11_111_111, 22_222_222, 33_333_333, 44_444_444, 55_555_555, 66_666_666, 77_777_777,
    88_888_888, 99_999_999, 12_345_678, 87_654_321,
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Commissioning flow selector.
///
/// Any flow other than [`Standard`](Self::Standard) requires the manual code
/// to disclose vendor and product identifiers (the long, 21-digit form).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommissioningFlow {
    /// Device commissions immediately after entering pairing mode.
    #[default]
    Standard,
    /// Device requires a user action before it can be commissioned.
    UserIntent,
    /// Device requires a vendor-specific out-of-band step.
    Custom,
}

impl CommissioningFlow {
    /// Whether vendor/product identifiers must appear in the manual code.
    #[must_use]
    pub const fn requires_vendor_product(self) -> bool {
        !matches!(self, Self::Standard)
    }
}

/// The fields packed into a manual setup code.
///
/// `vendor_id` and `product_id` are sourced by the caller and only
/// meaningful when `commissioning_flow` is not `Standard`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadContents {
    /// Setup passcode, 0..=[`MAX_PASSCODE`], excluding [`PASSCODE_DENYLIST`].
    pub setup_passcode: u32,
    /// Device discriminator, 12 bits.
    pub discriminator: u16,
    /// Commissioning flow selector.
    pub commissioning_flow: CommissioningFlow,
    /// Vendor identifier (16 bits).
    pub vendor_id: u16,
    /// Product identifier (16 bits).
    pub product_id: u16,
}

impl PayloadContents {
    /// Check every field against its declared range.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::Precondition`] if the discriminator exceeds
    /// 12 bits, the passcode exceeds [`MAX_PASSCODE`], or the passcode is
    /// denylisted.
    pub fn validate(&self) -> Result<(), PairingError> {
        if self.discriminator > MAX_DISCRIMINATOR {
            return Err(PairingError::Precondition(format!(
                "discriminator {} exceeds 12 bits (max {MAX_DISCRIMINATOR})",
                self.discriminator
            )));
        }
        if self.setup_passcode > MAX_PASSCODE {
            return Err(PairingError::Precondition(format!(
                "passcode {} out of range (max {MAX_PASSCODE})",
                self.setup_passcode
            )));
        }
        if is_weak_passcode(self.setup_passcode) {
            return Err(PairingError::Precondition(format!(
                "passcode {:08} is denylisted as trivially guessable",
                self.setup_passcode
            )));
        }
        Ok(())
    }
}

/// Whether a passcode belongs to [`PASSCODE_DENYLIST`].
#[must_use]
pub fn is_weak_passcode(passcode: u32) -> bool {
    PASSCODE_DENYLIST.contains(&passcode)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
