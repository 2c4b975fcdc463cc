//! Merkle–Damgård message padding (FIPS 180-4 §5.1.1).
//!
//! A message of `L` bits is followed by a single `1` bit, the minimal run of
//! `0` bits that brings the length to 448 mod 512, and `L` as a 64-bit
//! big-endian integer. Everything before the last partial block is already
//! block-aligned, so only the tail (one or two blocks) is ever built here;
//! full blocks are borrowed straight from the message.

use std::slice::ChunksExact;

use super::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use super::schedule::Block;
use crate::error::{HashError, Result};

const BLOCK_BITS: u64 = (BLOCK_LEN * 8) as u64;

/// Bit length of a byte message, rejecting lengths the 64-bit field cannot hold.
pub fn bit_length(byte_len: usize) -> Result<u64> {
    let bits = byte_len as u128 * 8;
    u64::try_from(bits).map_err(|_| HashError::InputTooLarge { bits })
}

/// Check that `data` holds exactly the bytes needed for `bit_len` bits.
pub fn check_bit_length(data: &[u8], bit_len: u64) -> Result<()> {
    let needed = bit_len.div_ceil(8);
    if data.len() as u128 != needed as u128 {
        return Err(HashError::BitLengthMismatch { bit_len, byte_len: data.len() });
    }
    Ok(())
}

/// Number of 512-bit blocks in the padded stream of a `bit_len`-bit message.
pub fn block_count(bit_len: u64) -> u64 {
    let padded = bit_len as u128 + 1 + (LENGTH_FIELD_LEN * 8) as u128;
    padded.div_ceil(BLOCK_BITS as u128) as u64
}

/// The final one or two padded blocks of a message.
#[derive(Clone, Debug)]
pub(crate) struct PaddedTail {
    blocks: [Block; 2],
    count: usize,
}

impl PaddedTail {
    /// Pad the trailing `tail_bits` (< 512) of a message whose total length is
    /// `total_bits`. `tail` must hold at least `ceil(tail_bits / 8)` bytes;
    /// bits past `tail_bits` in the last byte are cleared.
    pub(crate) fn new(tail: &[u8], tail_bits: usize, total_bits: u64) -> Self {
        debug_assert!(tail_bits < BLOCK_LEN * 8);
        let mut buf = [0u8; 2 * BLOCK_LEN];
        let full_bytes = tail_bits / 8;
        let spare = tail_bits % 8;
        buf[..full_bytes].copy_from_slice(&tail[..full_bytes]);
        if spare == 0 {
            buf[full_bytes] = 0x80;
        } else {
            let kept = tail[full_bytes] & (0xffu8 << (8 - spare));
            buf[full_bytes] = kept | (0x80 >> spare);
        }

        let count = if tail_bits + 1 + LENGTH_FIELD_LEN * 8 <= BLOCK_LEN * 8 { 1 } else { 2 };
        let end = count * BLOCK_LEN;
        buf[end - LENGTH_FIELD_LEN..end].copy_from_slice(&total_bits.to_be_bytes());

        let mut blocks = [[0u8; BLOCK_LEN]; 2];
        for (dst, src) in blocks.iter_mut().zip(buf.chunks_exact(BLOCK_LEN)) {
            dst.copy_from_slice(src);
        }
        PaddedTail { blocks, count }
    }

    pub(crate) fn blocks(&self) -> &[Block] {
        &self.blocks[..self.count]
    }
}

/// Iterator over the padded blocks of a message, in order.
pub struct Blocks<'a> {
    full: ChunksExact<'a, u8>,
    tail: PaddedTail,
    tail_pos: usize,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(chunk) = self.full.next() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            return Some(block);
        }
        let block = self.tail.blocks().get(self.tail_pos).copied();
        self.tail_pos += 1;
        block
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.full.len() + self.tail.blocks().len().saturating_sub(self.tail_pos);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Blocks<'_> {}

/// Padded blocks of a byte message.
pub fn blocks(message: &[u8]) -> Result<Blocks<'_>> {
    let bit_len = bit_length(message.len())?;
    Ok(bit_blocks(message, bit_len))
}

/// Padded blocks of the first `bit_len` bits of `data`.
pub fn blocks_bits(data: &[u8], bit_len: u64) -> Result<Blocks<'_>> {
    check_bit_length(data, bit_len)?;
    Ok(bit_blocks(data, bit_len))
}

fn bit_blocks(data: &[u8], bit_len: u64) -> Blocks<'_> {
    let full_len = (bit_len / BLOCK_BITS) as usize * BLOCK_LEN;
    let (head, tail) = data.split_at(full_len);
    Blocks {
        full: head.chunks_exact(BLOCK_LEN),
        tail: PaddedTail::new(tail, (bit_len % BLOCK_BITS) as usize, bit_len),
        tail_pos: 0,
    }
}

/// Materialize the whole padded stream of a byte message.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    Ok(collect(blocks(message)?))
}

/// Materialize the whole padded stream of the first `bit_len` bits of `data`.
pub fn pad_bits(data: &[u8], bit_len: u64) -> Result<Vec<u8>> {
    Ok(collect(blocks_bits(data, bit_len)?))
}

fn collect(blocks: Blocks<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(blocks.len() * BLOCK_LEN);
    for block in blocks {
        out.extend_from_slice(&block);
    }
    out
}
