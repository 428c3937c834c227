//! Label hashing — derives an entry's numeric id from its label.
//!
//! The id is the primary key of the `entry` table, so this function must never
//! change: every stored row is checked against it on load.

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit hash over raw bytes.
#[must_use]
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
  let mut hash = OFFSET_BASIS;
  let mut i = 0;

  while i < bytes.len() {
    hash ^= bytes[i] as u32;
    hash = hash.wrapping_mul(PRIME);
    i += 1;
  }

  hash
}

/// The entry id for `label`, hashed over its UTF-8 bytes.
#[must_use]
pub const fn label_id(label: &str) -> u32 { fnv1a_32(label.as_bytes()) }
