//! SHA-256 hash engine.
//!
//! Stages run strictly forward: [`padding`] turns the message into 512-bit
//! blocks, [`schedule`] expands each block to 64 words, [`compress`] folds the
//! schedule into the eight-word accumulator, and [`assemble`] serializes the
//! final accumulator. Blocks chain through the accumulator, so one message is
//! always hashed block after block on one thread.

pub mod assemble;
pub mod compress;
pub mod constants;
pub(crate) mod engine;
pub mod padding;
pub mod schedule;

use std::io::{ErrorKind, Read};

use self::assemble::{finalize, Digest};
use self::compress::compress;
use self::constants::H0;
use self::engine::Engine;
use self::padding::Blocks;
use self::schedule::expand;
use crate::error::Result;

const READ_CHUNK: usize = 16 * 1024;

/// SHA-256 of a byte message.
///
/// Fails only with [`HashError::InputTooLarge`](crate::HashError::InputTooLarge)
/// when the message is 2^61 bytes or longer.
pub fn digest(message: &[u8]) -> Result<Digest> {
    Ok(run(padding::blocks(message)?))
}

/// SHA-256 of the first `bit_len` bits of `data`, most significant bit first.
///
/// `data` must be exactly `ceil(bit_len / 8)` bytes long; unused low bits of
/// the last byte are ignored.
pub fn digest_bits(data: &[u8], bit_len: u64) -> Result<Digest> {
    Ok(run(padding::blocks_bits(data, bit_len)?))
}

/// SHA-256 of everything `reader` yields until end of input.
///
/// Input is consumed in fixed-size chunks; nothing beyond one block and the
/// read buffer is held. `Interrupted` reads are retried.
pub fn digest_reader<R: Read>(mut reader: R) -> Result<Digest> {
    let mut engine = Engine::new();
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        engine.absorb(&buf[..n])?;
    }
    Ok(engine.finish())
}

fn run(blocks: Blocks<'_>) -> Digest {
    let mut acc = H0;
    for block in blocks {
        acc = compress(acc, &expand(&block));
    }
    finalize(&acc)
}
