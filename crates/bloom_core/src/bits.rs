//! Packed bit operations over a fixed-size byte buffer.
//!
//! Bit `i` lives at byte `i/8`, position `i%8` (little-endian bit order
//! within the byte). Callers guarantee `index < buffer.len() * 8`.

#[inline]
pub fn set_bit(bits: &mut [u8], index: usize) {
    bits[index / 8] |= 1u8 << (index % 8);
}

#[inline]
pub fn check_bit(bits: &[u8], index: usize) -> bool {
    (bits[index / 8] & (1u8 << (index % 8))) != 0
}
