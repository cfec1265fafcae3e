//! Fixed-layout Bloom filter value: 1000 bits, two seeded hash slots.

use crate::bits::{check_bit, set_bit};
use crate::consts::{FILTER_BYTES, SEED_FIRST, SEED_SECOND};
use crate::hash::bit_index;

/// Outcome of a membership probe. A Bloom filter can report false
/// positives but never false negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    PossiblyPresent,
    DefinitelyAbsent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bloom {
    bytes: Vec<u8>,
}

impl Bloom {
    /// Fresh all-zero filter.
    pub fn new() -> Self {
        Self { bytes: vec![0u8; FILTER_BYTES] }
    }

    /// Adopt persisted bytes. Only a buffer of exactly `FILTER_BYTES` is a
    /// valid filter; anything else is rejected and the caller resets.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        if bytes.len() == FILTER_BYTES {
            Some(Self { bytes })
        } else {
            None
        }
    }

    /// Record an element. Sets the two derived bits; bits only ever
    /// transition 0→1, so repeated inserts are idempotent.
    pub fn insert(&mut self, element: &[u8]) {
        set_bit(&mut self.bytes, bit_index(element, SEED_FIRST));
        set_bit(&mut self.bytes, bit_index(element, SEED_SECOND));
    }

    /// Probe for an element: possibly present iff both derived bits are set.
    pub fn contains(&self, element: &[u8]) -> Membership {
        let hit = check_bit(&self.bytes, bit_index(element, SEED_FIRST))
            && check_bit(&self.bytes, bit_index(element, SEED_SECOND));
        if hit {
            Membership::PossiblyPresent
        } else {
            Membership::DefinitelyAbsent
        }
    }

    /// Number of set bits (advisory, used by introspection tooling).
    pub fn set_bits(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for Bloom {
    fn default() -> Self {
        Self::new()
    }
}
