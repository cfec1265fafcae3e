// crates/bloom_core/src/consts.rs

/// Filter width in bits. Fixed for the lifetime of every filter; there is
/// no resizing and no per-key configuration.
pub const FILTER_BITS: usize = 1000;

/// Persisted size of one filter: a flat byte string, no header, no magic.
/// Any stored value of a different length is not a valid filter.
pub const FILTER_BYTES: usize = (FILTER_BITS + 7) / 8;

/// Multiplier of the polynomial hash. Observable false-positive behavior
/// depends on this exact value; do not change it.
pub const HASH_MULTIPLIER: u32 = 101;

/// Seeds deriving the two bit indices from the same base hash.
pub const SEED_FIRST: u32 = 17;
pub const SEED_SECOND: u32 = 31;

const _: () = { assert!(FILTER_BYTES == 125); };
