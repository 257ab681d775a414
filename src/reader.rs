//! Zero-copy bit reader over a borrowed byte slice.

use crate::value::{extend_sign, Packable};

/// Reads bit-packed fields from a borrowed slice without copying it.
///
/// The read cursor is bounded by the slice length in bits; a read that would
/// run past the end returns 0 and does not advance. Use
/// [`crate::BitBuffer::from_bytes`] instead when the reader must own its
/// data.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    read_pos: usize,
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, read_pos: 0 }
    }

    /// Bit offset of the next read
    #[inline]
    #[must_use]
    pub fn bit_pos(&self) -> usize {
        self.read_pos
    }

    /// Number of unread bits left in the slice
    #[inline]
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.read_pos
    }

    /// Read `bits` bits as an unsigned value, MSB first.
    ///
    /// Returns 0 without advancing when `bits` is outside `1..=64` or the
    /// field would run past the end of the slice.
    pub fn read_bits(&mut self, bits: u32) -> u64 {
        if bits == 0 || bits > 64 || bits as usize > self.remaining_bits() {
            return 0;
        }

        let mut acc = 0u64;
        let mut remaining = bits;
        while remaining > 0 {
            let byte = self.read_pos >> 3;
            let bit = (self.read_pos & 7) as u32;
            let take = (8 - bit).min(remaining);
            let chunk = (self.data[byte] << bit) >> (8 - take);
            acc = (acc << take) | u64::from(chunk);
            self.read_pos += take as usize;
            remaining -= take;
        }
        acc
    }

    /// Read a `bits`-wide field as a signed value of type `T`,
    /// sign-extending bit `bits - 1` through the full width of `T`.
    #[inline]
    pub fn read<T: Packable>(&mut self, bits: u32) -> T {
        if bits == 0 || bits > T::BITS {
            return T::default();
        }
        T::from_raw(extend_sign(self.read_bits(bits), bits))
    }
}
