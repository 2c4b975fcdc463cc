//! Block engine: accumulator, partial block and running bit count.
//!
//! Bytes are absorbed in arbitrary slices; every block is compressed as soon
//! as it is complete, so memory stays at one block regardless of input size.

use super::assemble::{finalize, Digest};
use super::compress::{compress, State};
use super::constants::{BLOCK_LEN, H0};
use super::padding::PaddedTail;
use super::schedule::{expand, Block};
use crate::error::{HashError, Result};

pub(crate) struct Engine {
    state: State,
    buffer: Block,
    buffered: usize,
    total_bits: u64,
}

impl Engine {
    pub(crate) fn new() -> Self {
        Engine { state: H0, buffer: [0u8; BLOCK_LEN], buffered: 0, total_bits: 0 }
    }

    pub(crate) fn absorb(&mut self, mut data: &[u8]) -> Result<()> {
        let bits = self.total_bits as u128 + data.len() as u128 * 8;
        self.total_bits = u64::try_from(bits).map_err(|_| HashError::InputTooLarge { bits })?;

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_LEN {
                return Ok(());
            }
            let block = self.buffer;
            self.process(&block);
            self.buffered = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.process(&block);
        }
        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Digest {
        let tail = PaddedTail::new(&self.buffer[..self.buffered], self.buffered * 8, self.total_bits);
        for block in tail.blocks() {
            self.process(block);
        }
        finalize(&self.state)
    }

    fn process(&mut self, block: &Block) {
        self.state = compress(self.state, &expand(block));
    }
}
