//! Core traits for the siptag crates.
//!
//! This crate provides the small vocabulary that keyed hash implementations
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | Seeded one-shot hashes for hash tables | SipHash-1-3, SipHash-2-4 |
//! | [`Mac`] | Fixed-size keyed tags with verification | SipHash-2-4 |
//!
//! # Error Types
//!
//! - [`InvalidArgument`] - A fixed-size key or output buffer had the wrong length
//! - [`VerificationError`] - Opaque error for tag verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
mod mac;

pub use error::{InvalidArgument, VerificationError};
pub use fast_hash::FastHash;
pub use mac::Mac;
