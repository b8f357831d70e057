#![no_main]

use libfuzzer_sys::fuzz_target;

// Both decode paths must return an error on arbitrary input, never panic
// or index out of bounds.
fuzz_target!(|data: &[u8]| {
    let _ = murmur_wav::decode_bytes(data);
    let _ = murmur_wav::decode_strict_bytes(data);
    let _ = murmur_wav::inspect(data);
});
