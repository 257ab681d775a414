//! `bitgrain` - Bit-granular packing for compact binary records
//!
//! A growable buffer that writes and reads values at arbitrary bit widths
//! (1-64 bits) instead of rounding every field up to 8/16/32/64 bits, plus a
//! companion routine that re-encodes IEEE-754-style floating-point values
//! between arbitrary exponent/mantissa widths. Together they let a caller
//! serialize structured data (geographic coordinates, sensor telemetry) into
//! the minimum number of bits the value range actually needs.
//!
//! # Features
//! - **Arbitrary field widths**: pack a 3-bit flag next to a 34-bit coordinate
//!   with no padding between them
//! - **Independent cursors**: one write cursor, one read cursor, so a buffer
//!   can be replayed while it is still being built
//! - **On-demand growth**: backing storage grows by a runtime-selected policy
//!   (doubling or one-and-a-half) until the pending write fits
//! - **Signed reads**: narrow fields are sign-extended back to their full
//!   integer width
//! - **Float resizing**: rebias exponents and truncate/extend mantissas to
//!   fit a double into, say, 34 bits while keeping ~1e-6 precision
//!
//! # Example
//! ```
//! use bitgrain::{float, BitBuffer, FloatFormat, Growth};
//!
//! // A longitude needs ~1e-6 precision: 6 exponent bits + 27 mantissa bits.
//! let fmt = FloatFormat::new(6, 27);
//! let lon = float::resize_f64(123.456789, fmt);
//!
//! let mut buf = BitBuffer::new(8, Growth::Double).unwrap();
//! buf.write_bits(lon, fmt.total_bits()); // 34 bits
//! buf.write(3i32, 3);                    // 3-bit flag
//! let bytes = buf.to_vec();
//! assert_eq!(bytes.len(), 5); // 37 bits -> 5 bytes
//!
//! // The receiving side replays the same sequence of widths.
//! let mut rd = BitBuffer::from_bytes(&bytes).unwrap();
//! let restored = float::to_f64(rd.read_bits(fmt.total_bits()), fmt);
//! assert!((restored - 123.456789).abs() < 1e-6);
//! assert_eq!(rd.read::<i32>(3), 3);
//! ```
//!
//! # Wire Format
//!
//! There is no self-describing framing: the "format" is simply the sequence
//! of fields the encoder wrote, concatenated MSB-first with no padding except
//! zero-filled trailing bits in the final byte. A decoder must replay the
//! exact widths and order the encoder used.
//!
//! Within each byte, the first bit written is the most significant bit.
//! Writing `0b101` (3 bits) into a fresh buffer produces `0b1010_0000`.
//!
//! # Error Handling
//!
//! Construction with a zero capacity or from an empty slice fails with
//! [`BufferError`]. A bit width of 0 or beyond the value type's width is a
//! caller-contract violation and is a silent no-op, never a partial write.
//! A read requesting more bits than remain returns 0 without advancing the
//! cursor; only the caller's knowledge of the expected field sequence can
//! distinguish that from a legitimately-zero field.
//!
//! # Concurrency
//!
//! A buffer is owned and used by exactly one execution context; cursor
//! advancement and storage growth are not atomic. [`float::resize`] is a pure
//! function and safe to call from anywhere.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod buffer;
mod error;
pub mod float;
mod reader;
mod value;


// Re-export public API
pub use buffer::{BitBuffer, Growth};
pub use error::BufferError;
pub use float::FloatFormat;
pub use reader::BitReader;
pub use value::Packable;
