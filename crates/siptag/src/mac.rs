//! SipHash-2-4 keyed tags.

use subtle::ConstantTimeEq as _;
use traits::{InvalidArgument, Mac};
use zeroize::Zeroize as _;

use crate::{
  KEY_SIZE, TAG_SIZE,
  siphash::{SipHash24, key_words, siphash24},
};

/// Tag of `message` under a key already known to be [`KEY_SIZE`] bytes.
///
/// This is the infallible core of [`crate::compute_tag`].
///
/// ```
/// let key = [0u8; siptag::KEY_SIZE];
/// let t = siptag::tag(&key, b"hello world");
///
/// let mut out = [0u8; siptag::TAG_SIZE];
/// siptag::compute_tag(&mut out, b"hello world", &key).unwrap();
/// assert_eq!(t, out);
/// ```
#[inline]
#[must_use]
pub fn tag(key: &[u8; KEY_SIZE], message: &[u8]) -> [u8; TAG_SIZE] {
  let mut out = [0u8; TAG_SIZE];
  tag_into(&mut out, key, message);
  out
}

#[inline]
fn tag_into(out: &mut [u8; TAG_SIZE], key: &[u8; KEY_SIZE], message: &[u8]) {
  let mut words = key_words(key);
  *out = siphash24(words, message).to_le_bytes();
  words.zeroize();
}

#[inline]
fn key_array(key: &[u8]) -> Result<&[u8; KEY_SIZE], InvalidArgument> {
  key
    .try_into()
    .map_err(|_| InvalidArgument::key_length(KEY_SIZE, key.len()))
}

/// Verify into a caller-provided scratch slot, which is all zeros on return.
fn verify_with_scratch(
  scratch: &mut [u8; TAG_SIZE],
  tag: &[u8],
  message: &[u8],
  key: &[u8],
) -> Result<bool, InvalidArgument> {
  tag_into(scratch, key_array(key)?, message);
  // Length mismatch compares unequal.
  let matched = bool::from(scratch.as_slice().ct_eq(tag));
  scratch.zeroize();
  Ok(matched)
}

impl Mac for SipHash24 {
  const KEY_SIZE: usize = KEY_SIZE;
  const TAG_SIZE: usize = TAG_SIZE;

  fn compute_tag(tag_out: &mut [u8], message: &[u8], key: &[u8]) -> Result<(), InvalidArgument> {
    let tag_len = tag_out.len();
    let tag_out: &mut [u8; TAG_SIZE] = tag_out
      .try_into()
      .map_err(|_| InvalidArgument::tag_buffer_length(TAG_SIZE, tag_len))?;
    let key = key_array(key)?;

    tag_into(tag_out, key, message);
    Ok(())
  }

  fn verify_tag(tag: &[u8], message: &[u8], key: &[u8]) -> Result<bool, InvalidArgument> {
    let mut expected = [0u8; TAG_SIZE];
    verify_with_scratch(&mut expected, tag, message, key)
  }
}
