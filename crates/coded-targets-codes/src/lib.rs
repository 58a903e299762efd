//! Rotation-invariant ring codes for circular coded targets.
//!
//! A coded target carries its identity in a ring of `bits` equal angular
//! segments around a solid centre dot. Since the camera sees the marker at an
//! arbitrary in-plane rotation, only the *cyclic class* of the segment pattern
//! is observable. This crate works with one representative per class, the
//! numerically smallest rotation, and hands out those representatives as
//! marker codes.
//!
//! ```
//! use coded_targets_codes::{canonical_code, generate_codes, rotate_code};
//!
//! let codes = generate_codes(8, 4).unwrap();
//! assert_eq!(codes, vec![1, 3, 5, 7]);
//! // Any rotation of a marker decodes back to its assigned code.
//! assert_eq!(canonical_code(rotate_code(codes[3], 8, 5), 8), codes[3]);
//! ```

mod code;
mod generate;
mod rotation;
mod table;

pub use code::RingCode;
pub use generate::{check_bits, generate_codes, CodeError, MAX_BITS, MIN_BITS};
pub use rotation::{
    canonical_code, canonical_shift, code_bits_string, is_canonical, rotate_code,
    MAX_ROTATION_BITS,
};
pub use table::{canonical_code_count, code_table, ring_codes};
