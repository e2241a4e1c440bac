//! Verhoeff check-digit engine.
//!
//! Dihedral-group D5 checksum over decimal strings: catches every
//! single-digit substitution and every adjacent-digit transposition, which
//! is exactly what hand-typed setup codes need. The multiplication,
//! permutation and inverse tables below are the standard published tables;
//! they are process-wide statics and never mutated.

use crate::error::PairingError;

// ── Tables ──────────────────────────────────────────────────────────

/// D5 group multiplication table.
static MUL: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation table, indexed by digit position mod 8.
static PERM: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverse table.
static INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

// ── Public API ──────────────────────────────────────────────────────

/// Compute the Verhoeff check digit for a decimal string.
///
/// The returned digit is the one to append; `validate_check_digit` accepts
/// the concatenation. Positions are counted right-to-left starting at 1,
/// reserving position 0 for the check digit itself.
///
/// # Errors
///
/// Returns [`PairingError::Precondition`] if `digits` contains anything but
/// ASCII digits. A code that cannot be checksummed must never be emitted.
pub fn compute_check_digit(digits: &str) -> Result<u8, PairingError> {
    let mut interim = 0u8;
    for (offset, ch) in digits.chars().rev().enumerate() {
        let digit = decimal_value(ch)?;
        // Position 0 is reserved for the (future) check digit.
        let position = offset.wrapping_add(1) % PERM.len();
        interim = MUL[usize::from(interim)][usize::from(PERM[position][usize::from(digit)])];
    }
    Ok(INV[usize::from(interim)])
}

/// Validate a decimal string whose last character is its check digit.
///
/// # Errors
///
/// Returns [`PairingError::Precondition`] if `code` is empty or contains
/// anything but ASCII digits.
pub fn validate_check_digit(code: &str) -> Result<bool, PairingError> {
    if code.is_empty() {
        return Err(PairingError::Precondition(
            "cannot validate an empty code".to_string(),
        ));
    }
    let mut interim = 0u8;
    for (position, ch) in code.chars().rev().enumerate() {
        let digit = decimal_value(ch)?;
        interim = MUL[usize::from(interim)][usize::from(PERM[position % PERM.len()][usize::from(digit)])];
    }
    Ok(interim == 0)
}

/// Map an ASCII digit to its value.
fn decimal_value(ch: char) -> Result<u8, PairingError> {
    match ch.to_digit(10) {
        // to_digit(10) is always < 10, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        Some(digit) => Ok(digit as u8),
        None => Err(PairingError::Precondition(format!(
            "non-digit character {ch:?} in checksum input"
        ))),
    }
}

// ── Unit tests ──────────────────────────────────────────────────────
