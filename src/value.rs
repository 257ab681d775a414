//! Width classes for typed bit-packed writes and reads.
//!
//! Uses the sealed trait pattern to restrict the buffer's typed entry points
//! to the three supported integer widths.

use std::fmt::Debug;

/// Private module to seal the trait - users cannot implement `Packable` for other types
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Integer types that can be written to and read from a bit buffer.
///
/// This trait is sealed - it can only be implemented for `i8`, `i32`, and
/// `i64`. The type chosen bounds the valid field width: an `i8` field is
/// 1-8 bits wide, an `i32` field 1-32, an `i64` field 1-64.
pub trait Packable: private::Sealed + Copy + Debug + Default + PartialEq {
    /// Full width of the type in bits; also the widest valid field width
    const BITS: u32;

    /// The type's two's-complement bit pattern, zero-extended to 64 bits.
    ///
    /// The writer slices off the low `bits` of this pattern, so negative
    /// values need no special casing.
    fn to_raw(self) -> u64;

    /// Reconstruct a value from a sign-extended 64-bit pattern
    fn from_raw(raw: u64) -> Self;
}

impl Packable for i8 {
    const BITS: u32 = 8;

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self as u8)
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        raw as u8 as Self
    }
}

impl Packable for i32 {
    const BITS: u32 = 32;

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self as u32)
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        raw as u32 as Self
    }
}

impl Packable for i64 {
    const BITS: u32 = 64;

    #[inline]
    fn to_raw(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        raw as Self
    }
}

/// Replicate bit `bits - 1` of `value` into all higher bits.
#[inline]
pub(crate) fn extend_sign(value: u64, bits: u32) -> u64 {
    if bits == 0 || bits >= 64 {
        return value;
    }
    if value & (1u64 << (bits - 1)) != 0 {
        value | (u64::MAX << bits)
    } else {
        value
    }
}
