//! Cyclic rotation and canonical form of ring codes.
//!
//! A ring with `bits` segments is read as a `bits`-wide binary word, bit `i`
//! being segment `i`. Rotating the physical marker by one segment rotates the
//! word by one position, so every orientation of the same marker is one of
//! the `bits` cyclic rotations of its code. The canonical form picks the
//! numerically smallest of those rotations.

/// Largest ring width the rotation helpers accept.
pub const MAX_ROTATION_BITS: u32 = 32;

#[inline]
fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Circular left shift of the low `bits` bits of `code` by `k` positions.
///
/// `k` may be negative or larger than `bits`; only `k mod bits` matters.
/// Bits above `bits` in the input are ignored.
pub fn rotate_code(code: u32, bits: u32, k: i32) -> u32 {
    debug_assert!(
        (1..=MAX_ROTATION_BITS).contains(&bits),
        "bits {bits} outside 1..={MAX_ROTATION_BITS}"
    );
    let m = mask(bits);
    let word = u64::from(code) & m;
    let shift = k.rem_euclid(bits as i32) as u32;
    if shift == 0 {
        return word as u32;
    }
    (((word << shift) | (word >> (bits - shift))) & m) as u32
}

/// Smallest value among all `bits` cyclic rotations of `code`.
///
/// `0` maps to itself.
pub fn canonical_code(code: u32, bits: u32) -> u32 {
    (0..bits as i32)
        .map(|k| rotate_code(code, bits, k))
        .min()
        .unwrap_or(code)
}

/// True if no rotation of `code` is numerically smaller than `code` itself.
#[inline]
pub fn is_canonical(code: u32, bits: u32) -> bool {
    canonical_code(code, bits) == code
}

/// Rotation `k` in `0..bits` that turns `code` into its canonical form.
///
/// For codes with rotational symmetry several shifts qualify; the smallest
/// one is returned.
pub fn canonical_shift(code: u32, bits: u32) -> u32 {
    let target = canonical_code(code, bits);
    (0..bits)
        .find(|&k| rotate_code(code, bits, k as i32) == target)
        .unwrap_or(0)
}

/// MSB-first binary rendering of the low `bits` bits of `code`.
pub fn code_bits_string(code: u32, bits: u32) -> String {
    (0..bits)
        .rev()
        .map(|i| if (code >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_left_moves_low_bit_up() {
        assert_eq!(rotate_code(1, 8, 1), 2);
        assert_eq!(rotate_code(0b0000_1111, 8, 4), 0b1111_0000);
        assert_eq!(rotate_code(0b1000_0000, 8, 1), 1);
    }

    #[test]
    fn full_turn_is_identity() {
        assert_eq!(rotate_code(1, 8, 8), 1);
        let code = 0b1011_0010_0110_0001;
        let mut r = code;
        for _ in 0..16 {
            r = rotate_code(r, 16, 1);
        }
        assert_eq!(r, code);
    }

    #[test]
    fn negative_and_large_shifts_reduce_mod_bits() {
        let code = 0b0110_1001;
        assert_eq!(rotate_code(code, 8, -1), rotate_code(code, 8, 7));
        assert_eq!(rotate_code(code, 8, 19), rotate_code(code, 8, 3));
        assert_eq!(rotate_code(code, 8, -16), code);
    }

    #[test]
    fn rotation_ignores_bits_above_width() {
        assert_eq!(rotate_code(0b1_0001, 4, 0), 0b0001);
        assert_eq!(rotate_code(0b1_0001, 4, 1), 0b0010);
    }

    #[test]
    fn rotation_supports_full_32_bit_words() {
        assert_eq!(rotate_code(0x8000_0001, 32, 1), 0x0000_0003);
        assert_eq!(rotate_code(0x8000_0001, 32, -1), 0xC000_0000);
    }

    #[test]
    fn canonical_examples() {
        assert_eq!(canonical_code(2, 8), 1);
        assert_eq!(canonical_code(4, 8), 1);
        assert_eq!(canonical_code(3, 8), 3);
        assert_eq!(canonical_code(0b1100_0000, 8), 3);
        assert_eq!(canonical_code(0, 8), 0);
        assert_eq!(canonical_code(0xFF, 8), 0xFF);
    }

    #[test]
    fn is_canonical_examples() {
        assert!(is_canonical(1, 8));
        assert!(!is_canonical(2, 8));
        assert!(is_canonical(3, 8));
        assert!(is_canonical(0, 8));
    }

    #[test]
    fn canonical_is_idempotent_and_rotation_invariant() {
        for bits in [4u32, 5, 7, 8, 11] {
            for code in 0..(1u32 << bits) {
                let c = canonical_code(code, bits);
                assert_eq!(canonical_code(c, bits), c, "code {code} bits {bits}");
                for k in -(bits as i32)..(2 * bits as i32) {
                    let r = rotate_code(code, bits, k);
                    assert_eq!(canonical_code(r, bits), c, "code {code} bits {bits} k {k}");
                }
            }
        }
    }

    #[test]
    fn canonical_shift_reaches_canonical_form() {
        let bits = 12;
        for code in [0b1000_0000_0000, 0b0110_0000_0011, 0b1010_1010_1010, 0] {
            let k = canonical_shift(code, bits);
            assert!(k < bits);
            assert_eq!(
                rotate_code(code, bits, k as i32),
                canonical_code(code, bits)
            );
        }
    }

    #[test]
    fn bits_string_is_msb_first() {
        assert_eq!(code_bits_string(0b0000_1011, 8), "00001011");
        assert_eq!(code_bits_string(1, 4), "0001");
    }
}
