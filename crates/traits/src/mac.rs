//! Fixed-size keyed tag traits.

use crate::{InvalidArgument, VerificationError};

/// A keyed tag over byte messages.
///
/// Keys and tags have fixed sizes. Length contract violations surface as
/// [`InvalidArgument`] before any computation; a tag that simply does not
/// match is a normal `Ok(false)`.
pub trait Mac {
  /// Key size in bytes.
  const KEY_SIZE: usize;

  /// Tag size in bytes.
  const TAG_SIZE: usize;

  /// Write the tag of `message` under `key` into `tag_out`.
  ///
  /// # Errors
  ///
  /// [`InvalidArgument::TagBufferLength`] if `tag_out.len() != TAG_SIZE`,
  /// [`InvalidArgument::KeyLength`] if `key.len() != KEY_SIZE`. Nothing is
  /// written to `tag_out` on error.
  fn compute_tag(tag_out: &mut [u8], message: &[u8], key: &[u8]) -> Result<(), InvalidArgument>;

  /// Check `tag` against the tag of `message` under `key` in constant time.
  ///
  /// `tag` may have any length; a length other than `TAG_SIZE` is a mismatch.
  ///
  /// # Errors
  ///
  /// [`InvalidArgument::KeyLength`] if `key.len() != KEY_SIZE`.
  fn verify_tag(tag: &[u8], message: &[u8], key: &[u8]) -> Result<bool, InvalidArgument>;

  /// Like [`Self::verify_tag`], but folds every failure into one opaque error.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] on mismatch or malformed key.
  #[inline]
  fn verify(tag: &[u8], message: &[u8], key: &[u8]) -> Result<(), VerificationError> {
    if Self::verify_tag(tag, message, key)? {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}
