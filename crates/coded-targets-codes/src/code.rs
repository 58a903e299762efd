//! A ring code paired with its width.

use serde::{Deserialize, Serialize};

use crate::generate::{check_bits, CodeError};
use crate::rotation::{code_bits_string, is_canonical};

/// One marker identity: which of the `bits` ring segments are filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RingCode {
    pub value: u32,
    pub bits: u32,
}

impl RingCode {
    /// Build a code, checking the width and that `value` fits in it.
    pub fn new(value: u32, bits: u32) -> Result<Self, CodeError> {
        check_bits(bits)?;
        if value >= 1 << bits {
            return Err(CodeError::ValueTooWide { value, bits });
        }
        Ok(Self { value, bits })
    }

    /// Whether segment `i` is filled.
    #[inline]
    pub fn is_set(&self, i: u32) -> bool {
        i < self.bits && (self.value >> i) & 1 == 1
    }

    /// Indices of the filled segments, lowest first.
    pub fn filled_segments(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.bits).filter(move |&i| self.is_set(i))
    }

    #[inline]
    pub fn is_canonical(&self) -> bool {
        is_canonical(self.value, self.bits)
    }

    /// MSB-first bit pattern, e.g. `00001011`.
    pub fn bit_string(&self) -> String {
        code_bits_string(self.value, self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_segments_follow_set_bits() {
        let code = RingCode::new(0b1000_0101, 8).expect("code");
        let segs: Vec<u32> = code.filled_segments().collect();
        assert_eq!(segs, vec![0, 2, 7]);
        assert_eq!(code.bit_string(), "10000101");
    }

    #[test]
    fn rejects_value_wider_than_ring() {
        assert_eq!(
            RingCode::new(16, 4),
            Err(CodeError::ValueTooWide { value: 16, bits: 4 })
        );
    }

    #[test]
    fn zero_has_no_segments() {
        let code = RingCode::new(0, 8).expect("code");
        assert_eq!(code.filled_segments().count(), 0);
        assert!(code.is_canonical());
    }
}
