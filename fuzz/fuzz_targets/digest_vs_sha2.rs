#![no_main]
use libfuzzer_sys::fuzz_target;
use sha2::{Digest as _, Sha256};
use sha256_core::digest;

fuzz_target!(|data: &[u8]| {
    let want: [u8; 32] = Sha256::digest(data).into();
    assert_eq!(digest(data).unwrap(), want);
});
