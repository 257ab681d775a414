#![no_main]

use bitgrain::{BitBuffer, Growth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte selects the growth policy, the rest are (value: i32, width)
    // pairs packed as 5-byte chunks.
    let growth = if data[0] & 1 == 0 {
        Growth::Double
    } else {
        Growth::OneAndHalf
    };
    let mut buf = BitBuffer::new(1, growth).unwrap();

    let mut fields = Vec::new();
    for chunk in data[1..].chunks(5) {
        if chunk.len() < 5 {
            break;
        }
        let value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let width = u32::from(chunk[4] % 32) + 1;
        buf.write(value, width);
        fields.push((value, width));
    }

    // Property 1: packing density
    let total_bits: usize = fields.iter().map(|&(_, w)| w as usize).sum();
    assert_eq!(buf.bit_len(), total_bits, "bit length mismatch");
    assert_eq!(buf.len(), total_bits.div_ceil(8), "byte length mismatch");

    // Property 2: every field reads back sign-extended
    for (value, width) in fields {
        let expected = (i64::from(value) << (64 - width)) >> (64 - width);
        assert_eq!(
            i64::from(buf.read::<i32>(width)),
            expected,
            "roundtrip mismatch"
        );
    }
});
