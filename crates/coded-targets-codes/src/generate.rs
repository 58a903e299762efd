//! Enumeration of canonical ring codes.

use crate::rotation::is_canonical;

/// Narrowest supported ring.
pub const MIN_BITS: u32 = 4;
/// Widest supported ring.
pub const MAX_BITS: u32 = 16;

/// Code engine errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    #[error("bits must be between {MIN_BITS} and {MAX_BITS} (got {0})")]
    BitsOutOfRange(u32),
    #[error("code {value} does not fit in {bits} bits")]
    ValueTooWide { value: u32, bits: u32 },
}

/// Reject ring widths outside `MIN_BITS..=MAX_BITS`.
#[inline]
pub fn check_bits(bits: u32) -> Result<(), CodeError> {
    if (MIN_BITS..=MAX_BITS).contains(&bits) {
        Ok(())
    } else {
        Err(CodeError::BitsOutOfRange(bits))
    }
}

/// Scan `1..2^bits` in increasing order and keep the first `n` canonical codes.
///
/// The result is shorter than `n` when the domain runs out. Zero is never
/// produced: an empty ring cannot be told apart from a missing one.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug"))]
pub fn generate_codes(bits: u32, n: usize) -> Result<Vec<u32>, CodeError> {
    check_bits(bits)?;
    Ok((1..(1u32 << bits))
        .filter(|&code| is_canonical(code, bits))
        .take(n)
        .collect())
}
