//! The 64-round SHA-256 compression function (FIPS 180-4 §6.2.2 steps 2-4).

use super::constants::{K, STATE_WORDS};
use super::schedule::Schedule;

/// The eight-word hash accumulator, also used for the working registers a..h.
pub type State = [u32; STATE_WORDS];

#[inline] fn ch(x: u32, y: u32, z: u32) -> u32 { (x & y) ^ (!x & z) }
#[inline] fn maj(x: u32, y: u32, z: u32) -> u32 { (x & y) ^ (x & z) ^ (y & z) }
#[inline] fn bsig0(x: u32) -> u32 { x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22) }
#[inline] fn bsig1(x: u32) -> u32 { x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25) }

/// One round over registers `[a, b, c, d, e, f, g, h]` with round constant `k`
/// and schedule word `w`.
#[inline]
pub fn round(regs: State, k: u32, w: u32) -> State {
    let [a, b, c, d, e, f, g, h] = regs;
    let t1 = h
        .wrapping_add(bsig1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = bsig0(a).wrapping_add(maj(a, b, c));
    [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Fold one block's schedule into the accumulator and return the new accumulator.
pub fn compress(acc: State, schedule: &Schedule) -> State {
    let regs = K
        .iter()
        .zip(schedule.iter())
        .fold(acc, |regs, (&k, &w)| round(regs, k, w));

    let mut next = acc;
    for (word, reg) in next.iter_mut().zip(regs) {
        *word = word.wrapping_add(reg);
    }
    next
}
