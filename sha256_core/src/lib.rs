//! FIPS 180-4 SHA-256 in pure Rust.
//!
//! The public surface is deliberately small: [`digest`] for byte messages,
//! [`digest_bits`] for messages whose length is not a whole number of bytes,
//! [`digest_reader`] for hashing a `Read` source without buffering it, and
//! [`hex`] for display.

pub mod error;
pub mod hash;
pub mod logger;

pub use error::{HashError, Result};
pub use hash::assemble::{hex, Digest};
pub use hash::constants::DIGEST_LEN;
pub use hash::{digest, digest_bits, digest_reader};
