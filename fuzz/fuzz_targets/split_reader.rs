#![no_main]
use libfuzzer_sys::fuzz_target;
use sha256_core::{digest, digest_reader};
use std::io::Read;

/// Hands out the input in chunks whose sizes come from the input itself.
struct Choppy<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
}

impl Read for Choppy<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let step = match self.sizes.split_first() {
            Some((&s, rest)) => {
                self.sizes = rest;
                s as usize + 1
            }
            None => self.data.len(),
        };
        let n = step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fuzz_target!(|data: &[u8]| {
    let (sizes, message) = data.split_at(data.len() / 4);
    let reader = Choppy { data: message, sizes };
    assert_eq!(digest_reader(reader).unwrap(), digest(message).unwrap());
});
