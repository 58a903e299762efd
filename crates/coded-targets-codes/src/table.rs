//! Lazily computed per-width code tables.
//!
//! Each width gets one `OnceLock` holding the complete list of nonzero
//! canonical codes. Callers only ever see a fully built table, and any
//! request is served as a prefix of it, so the cached path returns exactly
//! what [`generate_codes`](crate::generate_codes) would.

use std::sync::OnceLock;

use crate::generate::{check_bits, generate_codes, CodeError, MAX_BITS, MIN_BITS};

const TABLE_COUNT: usize = (MAX_BITS - MIN_BITS + 1) as usize;

static TABLES: [OnceLock<Vec<u32>>; TABLE_COUNT] = [const { OnceLock::new() }; TABLE_COUNT];

/// Every nonzero canonical code for `bits`, in increasing order.
pub fn code_table(bits: u32) -> Result<&'static [u32], CodeError> {
    check_bits(bits)?;
    let slot = &TABLES[(bits - MIN_BITS) as usize];
    let table = slot.get_or_init(|| {
        let codes = generate_codes(bits, usize::MAX).unwrap_or_default();
        log::debug!("built {}-bit code table with {} codes", bits, codes.len());
        codes
    });
    Ok(table.as_slice())
}

/// First `n` canonical codes for `bits`, served from the cached table.
pub fn ring_codes(bits: u32, n: usize) -> Result<Vec<u32>, CodeError> {
    let table = code_table(bits)?;
    Ok(table[..n.min(table.len())].to_vec())
}

/// Number of distinct marker identities a `bits`-wide ring can carry.
pub fn canonical_code_count(bits: u32) -> Result<usize, CodeError> {
    Ok(code_table(bits)?.len())
}
