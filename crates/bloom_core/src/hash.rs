//! Seeded polynomial hash mapping an element to a bit index in `[0, FILTER_BITS)`.

use crate::consts::{FILTER_BITS, HASH_MULTIPLIER};

/// Single hash family reseeded per slot, not two independent functions:
/// the two indices for an element come from calling this with
/// `SEED_FIRST` and `SEED_SECOND` on the same bytes.
#[inline]
pub fn bit_index(text: &[u8], seed: u32) -> usize {
    let mut acc = seed;
    for &b in text {
        acc = acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as u32);
    }
    (acc as usize) % FILTER_BITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SEED_FIRST, SEED_SECOND};

    #[test]
    fn deterministic_and_in_range() {
        for text in [&b""[..], b"foo", b"bar", b"a longer element value"] {
            for seed in [SEED_FIRST, SEED_SECOND] {
                let i = bit_index(text, seed);
                assert!(i < FILTER_BITS);
                assert_eq!(i, bit_index(text, seed));
            }
        }
    }

    #[test]
    fn empty_input_is_seed_mod_m() {
        assert_eq!(bit_index(b"", SEED_FIRST), 17);
        assert_eq!(bit_index(b"", SEED_SECOND), 31);
    }

    #[test]
    fn matches_reference_values() {
        // acc = ((17*101 + 'a')*101 + 'b') % 1000, computed by hand.
        let mut acc = 17u32;
        for &b in b"ab" {
            acc = acc.wrapping_mul(101).wrapping_add(b as u32);
        }
        assert_eq!(bit_index(b"ab", 17), (acc as usize) % 1000);
        assert_eq!(bit_index(b"ab", 17), 312);
    }

    #[test]
    fn wraps_on_long_input() {
        // Long enough to overflow u32 many times over; must not panic.
        let long = vec![0xFFu8; 4096];
        assert!(bit_index(&long, SEED_FIRST) < FILTER_BITS);
    }
}
