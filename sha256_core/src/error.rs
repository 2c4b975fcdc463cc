//! Hashing error types.

use std::fmt;
use std::io;

/// Failure conditions of a digest computation.
#[derive(Debug)]
pub enum HashError {
    /// Message bit length does not fit the 64-bit length field.
    InputTooLarge { bits: u128 },
    /// `digest_bits` was given a bit length that does not match the byte buffer.
    BitLengthMismatch { bit_len: u64, byte_len: usize },
    /// Reading the message from a `Read` source failed.
    Io(io::Error),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InputTooLarge { bits } => {
                write!(f, "input too large: {bits} bits exceeds the 64-bit length field")
            }
            HashError::BitLengthMismatch { bit_len, byte_len } => {
                write!(f, "bit length {bit_len} does not match a buffer of {byte_len} bytes")
            }
            HashError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HashError {
    fn from(e: io::Error) -> Self {
        HashError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, HashError>;
