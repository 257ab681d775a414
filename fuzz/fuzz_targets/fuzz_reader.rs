#![no_main]

use bitgrain::{BitBuffer, BitReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Arbitrary bytes, arbitrary read widths - must never panic and never
    // advance past the input.
    let (widths, payload) = data.split_at(data.len() / 2);

    let mut rd = BitReader::new(payload);
    for &w in widths {
        let before = rd.bit_pos();
        let value = rd.read_bits(u32::from(w));
        if rd.bit_pos() == before {
            // Rejected read: invalid width or underrun, and the result is 0.
            assert_eq!(value, 0);
        } else {
            assert_eq!(rd.bit_pos() - before, w as usize);
        }
        assert!(rd.bit_pos() <= payload.len() * 8);
    }

    if !payload.is_empty() {
        let mut buf = BitBuffer::from_bytes(payload).unwrap();
        let mut consumed = 0usize;
        for &w in widths {
            let _ = buf.read::<i64>(u32::from(w));
            consumed += w as usize;
            if consumed > payload.len() * 8 {
                break;
            }
        }
    }
});
