//! Fixed SHA-256 tables and sizes.

/// Bytes per message block (512 bits).
pub const BLOCK_LEN: usize = 64;
/// Words in the expanded message schedule.
pub const SCHEDULE_LEN: usize = 64;
/// Words in the hash accumulator.
pub const STATE_WORDS: usize = 8;
/// Bytes in a finished digest (256 bits).
pub const DIGEST_LEN: usize = 32;
/// Bytes reserved at the end of the last block for the message bit length.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Initial hash values: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes (2..19).
pub const H0: [u32; STATE_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots
/// of the first 64 primes (2..311).
pub const K: [u32; SCHEDULE_LEN] = [
    0x428a2f98,0x71374491,0xb5c0fbcf,0xe9b5dba5,0x3956c25b,0x59f111f1,0x923f82a4,0xab1c5ed5,
    0xd807aa98,0x12835b01,0x243185be,0x550c7dc3,0x72be5d74,0x80deb1fe,0x9bdc06a7,0xc19bf174,
    0xe49b69c1,0xefbe4786,0x0fc19dc6,0x240ca1cc,0x2de92c6f,0x4a7484aa,0x5cb0a9dc,0x76f988da,
    0x983e5152,0xa831c66d,0xb00327c8,0xbf597fc7,0xc6e00bf3,0xd5a79147,0x06ca6351,0x14292967,
    0x27b70a85,0x2e1b2138,0x4d2c6dfc,0x53380d13,0x650a7354,0x766a0abb,0x81c2c92e,0x92722c85,
    0xa2bfe8a1,0xa81a664b,0xc24b8b70,0xc76c51a3,0xd192e819,0xd6990624,0xf40e3585,0x106aa070,
    0x19a4c116,0x1e376c08,0x2748774c,0x34b0bcb5,0x391c0cb3,0x4ed8aa4a,0x5b9cca4f,0x682e6ff3,
    0x748f82ee,0x78a5636f,0x84c87814,0x8cc70208,0x90befffa,0xa4506ceb,0xbef9a3f7,0xc67178f2,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn primes(n: usize) -> Vec<u128> {
        let mut out = Vec::with_capacity(n);
        let mut candidate = 2u128;
        while out.len() < n {
            if out.iter().take_while(|&&p| p * p <= candidate).all(|&p| candidate % p != 0) {
                out.push(candidate);
            }
            candidate += 1;
        }
        out
    }

    /// Largest `r` with `r^exp <= x`, by bisection.
    fn int_root(x: u128, exp: u32) -> u128 {
        let (mut lo, mut hi) = (0u128, 1u128 << (128 / exp));
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            match mid.checked_pow(exp) {
                Some(v) if v <= x => lo = mid,
                _ => hi = mid - 1,
            }
        }
        lo
    }

    #[test]
    fn spot_values() {
        assert_eq!(K[0], 0x428a2f98);
        assert_eq!(K[63], 0xc67178f2);
        assert_eq!(H0[0], 0x6a09e667);
        assert_eq!(H0[7], 0x5be0cd19);
    }

    #[test]
    fn initial_values_are_square_root_fractions() {
        // floor(frac(sqrt(p)) * 2^32) == low 32 bits of isqrt(p * 2^64)
        for (i, p) in primes(STATE_WORDS).into_iter().enumerate() {
            let root = int_root(p << 64, 2);
            assert_eq!(root as u32, H0[i], "H0[{i}] for prime {p}");
        }
    }

    #[test]
    fn round_constants_are_cube_root_fractions() {
        // floor(frac(cbrt(p)) * 2^32) == low 32 bits of icbrt(p * 2^96)
        let ps = primes(SCHEDULE_LEN);
        assert_eq!(ps[SCHEDULE_LEN - 1], 311);
        for (i, p) in ps.into_iter().enumerate() {
            let root = int_root(p << 96, 3);
            assert_eq!(root as u32, K[i], "K[{i}] for prime {p}");
        }
    }
}
