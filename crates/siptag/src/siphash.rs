//! SipHash engine.
//!
//! SipHash is a *keyed* PRF built for short inputs: hash-table bucket
//! selection, Bloom filters, and tables that must survive collision attacks on
//! untrusted keys. It is not a collision-resistant digest.
//!
//! One engine body serves both variants. The round counts are const
//! parameters: SipHash-2-4 (`C = 2`, `D = 4`) backs the tag API, SipHash-1-3
//! (`C = 1`, `D = 3`) is the lighter hash-table variant.
//!
//! Every call is self-contained: the state is built on the stack, wiped when
//! it goes out of scope, and nothing is cached between calls.

use traits::FastHash;
use zeroize::Zeroize as _;

use crate::KEY_SIZE;

/// SipHash-1-3 (hash tables only; use [`SipHash24`] for tags).
#[derive(Clone, Debug, Default)]
pub struct SipHash13;

/// SipHash-2-4.
#[derive(Clone, Debug, Default)]
pub struct SipHash24;

// "somepseu", "dorandom", "lygenera", "tedbytes", most significant byte first.
const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

/// Split a 16-byte key into the two little-endian words `[k0, k1]`.
///
/// `SipHash24::hash_with_seed(key_words(&key), m).to_le_bytes()` is the same
/// 8 bytes that [`crate::compute_tag`] writes for `key`.
#[inline]
#[must_use]
pub const fn key_words(key: &[u8; KEY_SIZE]) -> [u64; 2] {
  let [b0, b1, b2, b3, b4, b5, b6, b7, b8, b9, b10, b11, b12, b13, b14, b15] = *key;
  [
    u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
    u64::from_le_bytes([b8, b9, b10, b11, b12, b13, b14, b15]),
  ]
}

/// The four-word permutation state. Lives on the stack for one call and is
/// zeroized on drop.
#[derive(Debug, PartialEq, Eq)]
struct SipState {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
}

impl SipState {
  #[inline(always)]
  const fn new(key: [u64; 2]) -> Self {
    let [k0, k1] = key;
    Self {
      v0: C0 ^ k0,
      v1: C1 ^ k1,
      v2: C2 ^ k0,
      v3: C3 ^ k1,
    }
  }

  #[inline(always)]
  fn round(&mut self) {
    self.v0 = self.v0.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(13);
    self.v1 ^= self.v0;
    self.v0 = self.v0.rotate_left(32);

    self.v2 = self.v2.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(16);
    self.v3 ^= self.v2;

    self.v0 = self.v0.wrapping_add(self.v3);
    self.v3 = self.v3.rotate_left(21);
    self.v3 ^= self.v0;

    self.v2 = self.v2.wrapping_add(self.v1);
    self.v1 = self.v1.rotate_left(17);
    self.v1 ^= self.v2;
    self.v2 = self.v2.rotate_left(32);
  }

  /// Absorb one message word: `v3 ^= m`, `C` rounds, `v0 ^= m`.
  #[inline(always)]
  fn absorb<const C: usize>(&mut self, m: u64) {
    self.v3 ^= m;
    for _ in 0..C {
      self.round();
    }
    self.v0 ^= m;
  }

  #[inline(always)]
  fn finish<const D: usize>(mut self) -> u64 {
    self.v2 ^= 0xff;
    for _ in 0..D {
      self.round();
    }
    self.v0 ^ self.v1 ^ self.v2 ^ self.v3
  }

  #[inline]
  fn wipe(&mut self) {
    self.v0.zeroize();
    self.v1.zeroize();
    self.v2.zeroize();
    self.v3.zeroize();
  }
}

impl Drop for SipState {
  fn drop(&mut self) {
    self.wipe();
  }
}

/// Final word: low byte of the total length in bits 56..64, then the 0-7
/// trailing bytes in little-endian positions, folded in one at a time.
#[inline(always)]
fn tail_word(tail: &[u8], len: usize) -> u64 {
  debug_assert!(tail.len() < 8);
  let mut b = (len as u64) << 56;
  for (i, &byte) in tail.iter().enumerate() {
    b |= u64::from(byte) << (8 * i);
  }
  b
}

#[inline(always)]
fn sip<const C: usize, const D: usize>(key: [u64; 2], data: &[u8]) -> u64 {
  let mut state = SipState::new(key);

  let (blocks, tail) = data.as_chunks::<8>();
  for block in blocks {
    state.absorb::<C>(u64::from_le_bytes(*block));
  }

  state.absorb::<C>(tail_word(tail, data.len()));
  state.finish::<D>()
}

/// SipHash-1-3 of `data` under the key words `[k0, k1]`.
#[inline]
pub(crate) fn siphash13(key: [u64; 2], data: &[u8]) -> u64 {
  sip::<1, 3>(key, data)
}

/// SipHash-2-4 of `data` under the key words `[k0, k1]`.
#[inline]
pub(crate) fn siphash24(key: [u64; 2], data: &[u8]) -> u64 {
  sip::<2, 4>(key, data)
}

impl FastHash for SipHash13 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    siphash13(seed, data)
  }
}

impl FastHash for SipHash24 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    siphash24(seed, data)
  }
}
