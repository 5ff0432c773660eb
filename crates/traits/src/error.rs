//! Error types for keyed hash operations.
//!
//! Minimal error types designed to prevent information leakage. Length
//! failures describe the caller's mistake; verification failures say nothing.

use core::fmt;

/// A fixed-size argument had the wrong length.
///
/// Both variants are caller bugs: retrying with the same input fails the same
/// way. They are detected before any state is touched, so nothing has been
/// written to the output buffer when one is returned.
///
/// # Examples
///
/// ```
/// use traits::InvalidArgument;
///
/// let err = InvalidArgument::key_length(16, 15);
/// assert_eq!(err.parameter(), "key");
/// assert_eq!(err.to_string(), "invalid key length: expected 16 bytes, got 15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidArgument {
  /// The key is not exactly `expected` bytes.
  KeyLength { expected: usize, actual: usize },
  /// The output tag buffer is not exactly `expected` bytes.
  TagBufferLength { expected: usize, actual: usize },
}

impl InvalidArgument {
  #[inline]
  #[must_use]
  pub const fn key_length(expected: usize, actual: usize) -> Self {
    Self::KeyLength { expected, actual }
  }

  #[inline]
  #[must_use]
  pub const fn tag_buffer_length(expected: usize, actual: usize) -> Self {
    Self::TagBufferLength { expected, actual }
  }

  /// Name of the offending parameter.
  #[inline]
  #[must_use]
  pub const fn parameter(&self) -> &'static str {
    match self {
      Self::KeyLength { .. } => "key",
      Self::TagBufferLength { .. } => "tag",
    }
  }

  /// Required length in bytes.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    match *self {
      Self::KeyLength { expected, .. } | Self::TagBufferLength { expected, .. } => expected,
    }
  }

  /// Length the caller actually supplied.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    match *self {
      Self::KeyLength { actual, .. } | Self::TagBufferLength { actual, .. } => actual,
    }
  }
}

impl fmt::Display for InvalidArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "invalid {} length: expected {} bytes, got {}",
      self.parameter(),
      self.expected(),
      self.actual()
    )
  }
}

impl core::error::Error for InvalidArgument {}

/// Verification failed.
///
/// Returned when a tag does not match. Intentionally opaque to prevent
/// timing side-channels.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(matched: bool) -> Result<(), VerificationError> {
///   if matched { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(verify(false).is_err());
/// ```
///
/// # Security
///
/// This error provides no details about the failure. The underlying
/// verification should use constant-time comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

impl From<InvalidArgument> for VerificationError {
  #[inline]
  fn from(_: InvalidArgument) -> Self {
    Self::new()
  }
}
