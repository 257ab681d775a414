//! Floating-point bit-width resizing.
//!
//! Re-encodes an IEEE-754-style bit pattern `[sign:1][exponent][mantissa]`
//! into the same layout with different exponent and mantissa widths. The
//! exponent is rebiased, the mantissa truncated (no rounding) or
//! zero-extended, and the zero / saturated exponent conventions for zero,
//! subnormals, infinities and NaNs are carried over.
//!
//! The transform is pure and stateless; resizing narrow and back merely
//! drops the precision the narrow mantissa could not hold.

use serde::{Deserialize, Serialize};

/// Bit layout of a floating-point format: 1 sign bit, then `exp_bits`
/// exponent bits, then `mant_bits` mantissa bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatFormat {
    /// Width of the exponent field; 0 means no exponent field at all
    pub exp_bits: u32,
    /// Width of the mantissa field
    pub mant_bits: u32,
}

impl FloatFormat {
    /// IEEE 754 double precision (binary64)
    pub const F64: Self = Self::new(11, 52);

    /// IEEE 754 single precision (binary32)
    pub const F32: Self = Self::new(8, 23);

    #[must_use]
    pub const fn new(exp_bits: u32, mant_bits: u32) -> Self {
        Self { exp_bits, mant_bits }
    }

    /// Total field width including the sign bit
    #[must_use]
    pub const fn total_bits(self) -> u32 {
        1 + self.exp_bits + self.mant_bits
    }

    /// Exponent bias: `(2^exp_bits - 1) >> 1`
    #[must_use]
    pub const fn bias(self) -> u64 {
        mask(self.exp_bits) >> 1
    }
}

/// Low `bits` bits set.
#[inline]
const fn mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Re-encode the bit pattern `bits` from the `src` layout into `dst`.
///
/// Exponent handling:
/// - a zero source exponent (zero or subnormal) stays zero
/// - an all-ones source exponent (infinity/NaN sentinel) maps to the
///   destination all-ones value; NaN payload distinctions are lost
/// - anything else is rebiased. The rebias wraps when the true exponent does
///   not fit the destination width; choosing widths compatible with the
///   expected value range is the caller's responsibility.
///
/// A source with no exponent field (`exp_bits == 0`) is treated as carrying
/// an implicit exponent of 1.
///
/// The mantissa is shifted to the destination width: widening zero-extends
/// the low bits, narrowing truncates them without rounding.
#[must_use]
pub fn resize(bits: u64, src: FloatFormat, dst: FloatFormat) -> u64 {
    let dst_exp_mask = mask(dst.exp_bits);
    let dst_bias = dst_exp_mask >> 1;

    let dst_exponent = if dst.exp_bits == 0 {
        0
    } else if src.exp_bits == 0 {
        (1 + dst_bias) & dst_exp_mask
    } else {
        let src_exp_mask = mask(src.exp_bits);
        let src_exponent = (bits >> src.mant_bits) & src_exp_mask;

        if src_exponent == 0 {
            0
        } else if src_exponent == src_exp_mask {
            dst_exp_mask
        } else {
            let src_bias = src_exp_mask >> 1;
            src_exponent.wrapping_sub(src_bias).wrapping_add(dst_bias) & dst_exp_mask
        }
    };

    let src_mantissa = bits & mask(src.mant_bits);
    let dst_mantissa = if dst.mant_bits >= src.mant_bits {
        src_mantissa << (dst.mant_bits - src.mant_bits)
    } else {
        src_mantissa >> (src.mant_bits - dst.mant_bits)
    } & mask(dst.mant_bits);

    let sign = (bits >> (src.exp_bits + src.mant_bits)) & 1;
    (((sign << dst.exp_bits) | dst_exponent) << dst.mant_bits) | dst_mantissa
}

/// Resize a native `f64` into the `dst` layout.
#[inline]
#[must_use]
pub fn resize_f64(value: f64, dst: FloatFormat) -> u64 {
    resize(value.to_bits(), FloatFormat::F64, dst)
}

/// Resize a native `f32` into the `dst` layout.
#[inline]
#[must_use]
pub fn resize_f32(value: f32, dst: FloatFormat) -> u64 {
    resize(u64::from(value.to_bits()), FloatFormat::F32, dst)
}

/// Widen a resized pattern back to a native `f64`.
#[inline]
#[must_use]
pub fn to_f64(bits: u64, src: FloatFormat) -> f64 {
    f64::from_bits(resize(bits, src, FloatFormat::F64))
}

/// Widen a resized pattern back to a native `f32`.
#[inline]
#[must_use]
pub fn to_f32(bits: u64, src: FloatFormat) -> f32 {
    f32::from_bits(resize(bits, src, FloatFormat::F32) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout_is_identity() {
        for bits in [0u64, 1, f64::to_bits(3.5), u64::MAX, 0x8000_0000_0000_0000] {
            assert_eq!(resize(bits, FloatFormat::F64, FloatFormat::F64), bits);
        }
    }

    #[test]
    fn test_bias() {
        assert_eq!(FloatFormat::F64.bias(), 1023);
        assert_eq!(FloatFormat::F32.bias(), 127);
        assert_eq!(FloatFormat::new(5, 10).bias(), 15);
        assert_eq!(FloatFormat::new(0, 10).bias(), 0);
    }

    #[test]
    fn test_no_exponent_source_gets_implicit_one() {
        // [sign:1][mantissa:4] with mantissa 0b1000 -> 1.5 in a 3/4 layout
        let bits = 0b0_1000;
        let out = resize(bits, FloatFormat::new(0, 4), FloatFormat::new(3, 4));
        // exponent = 1 + bias(3) = 4, mantissa unchanged
        assert_eq!(out, (0b100 << 4) | 0b1000);
    }
}
