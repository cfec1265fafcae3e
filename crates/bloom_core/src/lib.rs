pub mod consts;
pub mod errors;
pub mod hash;
pub mod bits;
pub mod filter;
pub mod store;
pub mod filter_store;

pub use consts::{FILTER_BITS, FILTER_BYTES, HASH_MULTIPLIER, SEED_FIRST, SEED_SECOND};
pub use errors::{BloomError, Result};
pub use filter::{Bloom, Membership};
pub use filter_store::FilterStore;
pub use store::{ByteStore, DirStore, MemStore};
