//! SipHash-2-4 keyed tags.
//!
//! `siptag` computes and verifies 8-byte SipHash-2-4 tags over byte messages
//! with a 16-byte key. It is meant for short-input keyed hashing: hash-table
//! bucket selection, hash tables that must resist flooding, Bloom filters.
//!
//! It is **not** a general-purpose or collision-resistant hash. Do not use it
//! for password hashing or signatures. Input is one-shot; there is no
//! streaming state.
//!
//! # Quick Start
//!
//! ```
//! let key = [7u8; siptag::KEY_SIZE];
//!
//! let mut tag = [0u8; siptag::TAG_SIZE];
//! siptag::compute_tag(&mut tag, b"bucket-key", &key)?;
//!
//! assert!(siptag::verify_tag(&tag, b"bucket-key", &key)?);
//! assert!(!siptag::verify_tag(&tag, b"other-key", &key)?);
//! # Ok::<(), siptag::InvalidArgument>(())
//! ```
//!
//! For hash tables, [`SipHash24`] and [`SipHash13`] also implement
//! [`FastHash`] with the key as two little-endian words (see [`key_words`]).
//!
//! Every call is a pure function of key and message. There is no global
//! state, no caching, and no environment lookup; the permutation state and
//! the recomputed tag in [`verify_tag`] are wiped before returning.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::error::Error` plumbing in `subtle`/`zeroize`/`traits` |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod mac;
mod siphash;

pub use mac::tag;
pub use siphash::{SipHash13, SipHash24, key_words};
pub use traits::{FastHash, InvalidArgument, Mac, VerificationError};

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Tag size in bytes.
pub const TAG_SIZE: usize = 8;

/// Write the SipHash-2-4 tag of `message` under `key` into `tag_out`.
///
/// # Errors
///
/// [`InvalidArgument::TagBufferLength`] if `tag_out` is not [`TAG_SIZE`]
/// bytes, otherwise [`InvalidArgument::KeyLength`] if `key` is not
/// [`KEY_SIZE`] bytes. `tag_out` is left untouched on error.
#[inline]
pub fn compute_tag(tag_out: &mut [u8], message: &[u8], key: &[u8]) -> Result<(), InvalidArgument> {
  SipHash24::compute_tag(tag_out, message, key)
}

/// Check `tag` against the SipHash-2-4 tag of `message` under `key`.
///
/// The comparison runs in constant time and the recomputed tag is wiped
/// before returning. A `tag` of the wrong length is `Ok(false)`.
///
/// # Errors
///
/// [`InvalidArgument::KeyLength`] if `key` is not [`KEY_SIZE`] bytes.
#[inline]
pub fn verify_tag(tag: &[u8], message: &[u8], key: &[u8]) -> Result<bool, InvalidArgument> {
  SipHash24::verify_tag(tag, message, key)
}
