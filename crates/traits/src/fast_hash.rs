//! Seeded one-shot hash traits.

use core::fmt::Debug;

/// A fast seeded hash for hash tables.
///
/// Implementors are keyed PRFs sized for short inputs: bucket selection,
/// Bloom filters, and tables that face attacker-chosen keys. With a secret
/// seed they resist hash flooding. They are **not** collision-resistant
/// digests and must not be used for signatures or password hashing.
///
/// This trait is intentionally one-shot. The whole input must be available
/// as one contiguous slice.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (for SipHash, the two key words).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using the all-zero seed.
  ///
  /// A zero seed gives no flooding resistance; prefer [`Self::hash_with_seed`].
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
