//! Tag API fuzzing: arbitrary key, output and tag lengths, with `siphasher`
//! as the reference for well-formed inputs.
//!
//! Input layout: `[key_len, tag_len, key.., tag.., message..]`, lengths taken
//! modulo 32 so malformed sizes are common.

#![no_main]

use core::hash::Hasher as _;

use libfuzzer_sys::fuzz_target;
use siptag::{InvalidArgument, KEY_SIZE, TAG_SIZE, compute_tag, key_words, verify_tag};

fn reference(key: &[u8; KEY_SIZE], message: &[u8]) -> [u8; TAG_SIZE] {
  let [k0, k1] = key_words(key);
  let mut h = siphasher::sip::SipHasher24::new_with_keys(k0, k1);
  h.write(message);
  h.finish().to_le_bytes()
}

fuzz_target!(|input: &[u8]| {
  let [key_len, tag_len, rest @ ..] = input else {
    return;
  };
  let key_len = usize::from(*key_len % 32).min(rest.len());
  let (key, rest) = rest.split_at(key_len);
  let tag_len = usize::from(*tag_len % 32).min(rest.len());
  let (candidate, message) = rest.split_at(tag_len);

  let mut out = vec![0xA5u8; tag_len];
  match compute_tag(&mut out, message, key) {
    Ok(()) => {
      let key: &[u8; KEY_SIZE] = key.try_into().expect("accepted key is 16 bytes");
      assert_eq!(out.as_slice(), reference(key, message).as_slice(), "len={}", message.len());
      assert_eq!(verify_tag(&out, message, key), Ok(true));
      assert_eq!(verify_tag(candidate, message, key), Ok(candidate == out.as_slice()));
    }
    Err(InvalidArgument::TagBufferLength { .. }) => {
      assert_ne!(tag_len, TAG_SIZE);
      assert!(out.iter().all(|&b| b == 0xA5));
    }
    Err(err) => {
      assert_eq!(err, InvalidArgument::key_length(KEY_SIZE, key.len()));
      assert!(out.iter().all(|&b| b == 0xA5));
      assert_eq!(verify_tag(candidate, message, key), Err(err));
    }
  }
});
