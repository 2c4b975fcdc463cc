//! Message schedule expansion (FIPS 180-4 §6.2.2 step 1).

use super::constants::{BLOCK_LEN, SCHEDULE_LEN};

/// One 512-bit message block.
pub type Block = [u8; BLOCK_LEN];
/// The 64-word expanded schedule of one block.
pub type Schedule = [u32; SCHEDULE_LEN];

#[inline] fn ssig0(x: u32) -> u32 { x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3) }
#[inline] fn ssig1(x: u32) -> u32 { x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10) }

/// Read a block as sixteen big-endian words.
pub fn block_words(block: &Block) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Expand one block into its 64-word schedule.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_LEN];
    w[..16].copy_from_slice(&block_words(block));
    for t in 16..SCHEDULE_LEN {
        w[t] = w[t - 16]
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig1(w[t - 2]));
    }
    w
}
