#![no_main]
use libfuzzer_sys::fuzz_target;
use sha256_core::{digest, digest_bits};

fuzz_target!(|data: &[u8]| {
    let Some((&spare, message)) = data.split_first() else { return };
    let bits = message.len() as u64 * 8;
    if bits == 0 {
        assert_eq!(digest_bits(message, 0).unwrap(), digest(message).unwrap());
        return;
    }
    let bit_len = bits - (spare % 8) as u64;
    let d = digest_bits(message, bit_len).unwrap();
    if bit_len == bits {
        assert_eq!(d, digest(message).unwrap());
    }
});
