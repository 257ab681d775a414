#![no_main]

use bitgrain::float::{self, FloatFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let bits = u64::from_le_bytes(data[..8].try_into().unwrap());
    // Keep the total width within a u64: 1 sign bit + exponent + mantissa.
    let exp_bits = u32::from(data[8] % 12);
    let mant_bits = u32::from(data[9] % 52);
    let narrow = FloatFormat::new(exp_bits, mant_bits);

    // Must never panic, for any pattern and any layout.
    let resized = float::resize(bits, FloatFormat::F64, narrow);
    assert_eq!(resized >> narrow.total_bits().min(63), 0, "stray high bits");

    // Sign always survives.
    let sign = (resized >> (narrow.total_bits() - 1)) & 1;
    assert_eq!(sign, bits >> 63, "sign lost");

    // Identical layouts are the identity.
    assert_eq!(float::resize(bits, FloatFormat::F64, FloatFormat::F64), bits);

    // Widening back never panics either.
    let _ = float::to_f64(resized, narrow);
});
