//! Bit-addressable buffer with independent write and read cursors.

use serde::{Deserialize, Serialize};

use crate::error::BufferError;
use crate::value::{extend_sign, Packable};

/// Capacity growth policy applied when a write outruns the backing storage.
///
/// Growth repeats from the current capacity until the pending write fits,
/// since a single wide write can need more than one growth step provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Growth {
    /// Double the capacity on each step
    #[default]
    Double,
    /// Grow by half the current capacity, at least one byte, on each step
    OneAndHalf,
}

impl Growth {
    #[inline]
    fn next(self, capacity: usize) -> usize {
        match self {
            Self::Double => capacity * 2,
            Self::OneAndHalf => capacity + (capacity / 2).max(1),
        }
    }
}

/// A growable byte buffer addressed at bit granularity.
///
/// Fields of 1-64 bits are packed MSB-first with no padding between them.
/// The write cursor marks where the next field lands; the read cursor marks
/// the next unread bit and can be replayed independently of writing.
///
/// All storage is zero-initialized and stays zero beyond the written region,
/// because writes OR their bits into place. Bytes the cursor has passed are
/// never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitBuffer {
    /// Backing storage; the vector length is the capacity
    storage: Vec<u8>,
    /// Bit offset of the next write
    write_pos: usize,
    /// Bit offset of the next read
    read_pos: usize,
    growth: Growth,
}

impl BitBuffer {
    /// Create a buffer with the given initial capacity in bytes.
    ///
    /// # Errors
    /// Returns [`BufferError::ZeroCapacity`] if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize, growth: Growth) -> Result<Self, BufferError> {
        if initial_capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: vec![0u8; initial_capacity],
            write_pos: 0,
            read_pos: 0,
            growth,
        })
    }

    /// Create a buffer for reading from an existing byte slice.
    ///
    /// The data is copied; the write cursor starts at the end of the input
    /// so every bit of it is readable, and the read cursor starts at zero.
    ///
    /// # Errors
    /// Returns [`BufferError::EmptySource`] if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BufferError> {
        if bytes.is_empty() {
            return Err(BufferError::EmptySource);
        }
        Ok(Self {
            storage: bytes.to_vec(),
            write_pos: bytes.len() * 8,
            read_pos: 0,
            growth: Growth::default(),
        })
    }

    /// Number of bytes written, counting a partially-filled trailing byte
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        (self.write_pos + 7) >> 3
    }

    /// `true` if nothing has been written yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.write_pos == 0
    }

    /// Current capacity of the backing storage in bytes
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bit offset of the next write
    #[inline]
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.write_pos
    }

    /// Number of readable bits left before the read cursor hits the end
    /// of the written region (rounded up to whole bytes)
    #[inline]
    #[must_use]
    pub fn remaining_bits(&self) -> usize {
        self.len() * 8 - self.read_pos
    }

    /// The growth policy this buffer was created with
    #[inline]
    #[must_use]
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Write the low `bits` bits of `value`, MSB first.
    ///
    /// `bits` outside `1..=64` is a caller-contract violation and a silent
    /// no-op: nothing is written and the cursor does not move.
    pub fn write_bits(&mut self, value: u64, bits: u32) {
        if bits == 0 || bits > 64 {
            return;
        }
        self.ensure_capacity(bits);

        let mut remaining = bits;
        while remaining > 0 {
            let byte = self.write_pos >> 3;
            let available = 8 - (self.write_pos & 7) as u32;
            let take = available.min(remaining);
            // Top `take` bits of the not-yet-written portion of `value`,
            // shifted into place within the destination byte.
            let chunk = ((value << (64 - remaining)) >> (64 - take)) as u8;
            self.storage[byte] |= chunk << (available - take);
            self.write_pos += take as usize;
            remaining -= take;
        }
    }

    /// Write a typed value as a `bits`-wide field.
    ///
    /// Negative values are written as the low `bits` bits of their two's
    /// complement representation. `bits` outside `1..=T::BITS` is a no-op.
    #[inline]
    pub fn write<T: Packable>(&mut self, value: T, bits: u32) {
        if bits == 0 || bits > T::BITS {
            return;
        }
        self.write_bits(value.to_raw(), bits);
    }

    /// Read `bits` bits at the read cursor as an unsigned value.
    ///
    /// Returns 0 without advancing the cursor when `bits` is outside
    /// `1..=64` or when the field would run past the written length.
    pub fn read_bits(&mut self, bits: u32) -> u64 {
        if bits == 0 || bits > 64 {
            return 0;
        }
        let required = (self.read_pos + bits as usize + 7) >> 3;
        if required > self.len() {
            return 0;
        }

        let mut acc = 0u64;
        let mut remaining = bits;
        while remaining > 0 {
            let byte = self.read_pos >> 3;
            let bit = (self.read_pos & 7) as u32;
            let take = (8 - bit).min(remaining);
            let chunk = (self.storage[byte] << bit) >> (8 - take);
            acc = (acc << take) | u64::from(chunk);
            self.read_pos += take as usize;
            remaining -= take;
        }
        acc
    }

    /// Read a `bits`-wide field as a signed value of type `T`.
    ///
    /// If bit `bits - 1` of the field is set, the value is sign-extended to
    /// the full width of `T`. Underrun and invalid widths return 0 without
    /// advancing the cursor, indistinguishable from a zero field.
    #[inline]
    pub fn read<T: Packable>(&mut self, bits: u32) -> T {
        if bits == 0 || bits > T::BITS {
            return T::default();
        }
        T::from_raw(extend_sign(self.read_bits(bits), bits))
    }

    /// Copy the written bytes into a fresh, independently owned vector.
    ///
    /// Empty when nothing has been written.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage[..self.len()].to_vec()
    }

    /// Borrow the written prefix of the backing storage without copying.
    ///
    /// The view is invalidated (in the borrow-checker sense) by any
    /// subsequent write, which may also reallocate the storage.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len()]
    }

    /// Grow the storage until a `bits`-wide write at the cursor fits.
    fn ensure_capacity(&mut self, bits: u32) {
        let required = (self.write_pos + bits as usize + 7) >> 3;
        if required <= self.storage.len() {
            return;
        }
        let mut capacity = self.storage.len();
        while capacity < required {
            capacity = self.growth.next(capacity);
        }
        // New bytes must be zero for the OR-based write path.
        self.storage.resize(capacity, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_step() {
        assert_eq!(Growth::Double.next(2), 4);
        assert_eq!(Growth::Double.next(4), 8);
        assert_eq!(Growth::OneAndHalf.next(2), 3);
        assert_eq!(Growth::OneAndHalf.next(3), 4);
        assert_eq!(Growth::OneAndHalf.next(4), 6);
        // Minimum one byte step
        assert_eq!(Growth::OneAndHalf.next(1), 2);
    }

    #[test]
    fn test_write_crossing_byte_boundary() {
        let mut buf = BitBuffer::new(4, Growth::Double).unwrap();
        buf.write_bits(0b101, 3);
        buf.write_bits(0xABC, 9); // only the low 9 bits (0b0_1011_1100) land
        assert_eq!(buf.as_bytes(), &[0b1010_1011, 0b1100_0000]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_single_growth_step_covers_wide_write() {
        // One OneAndHalf step from 1 byte is 2 bytes; a 64-bit write needs 8.
        let mut buf = BitBuffer::new(1, Growth::OneAndHalf).unwrap();
        buf.write_bits(u64::MAX, 64);
        assert!(buf.capacity() >= 8);
        assert_eq!(buf.to_vec(), vec![0xFF; 8]);
    }
}
