//! Digest serialization.

use super::compress::State;
use super::constants::DIGEST_LEN;

/// A finished SHA-256 digest.
pub type Digest = [u8; DIGEST_LEN];

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Serialize the accumulator big-endian, word by word.
pub fn finalize(state: &State) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Render a digest as 64 lowercase hex characters.
pub fn hex(digest: &Digest) -> String {
    let mut s = String::with_capacity(DIGEST_LEN * 2);
    for &b in digest {
        s.push(HEX_DIGITS[(b >> 4) as usize] as char);
        s.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    s
}
