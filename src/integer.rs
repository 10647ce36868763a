//! Prefix integer encoding and decoding per RFC 7541 Section 5.1.
//!
//! Used throughout HPACK for indices, string lengths, and table capacities.
//!
//! An integer is represented in two parts: a prefix that fills the low N
//! bits of a byte shared with the representation opcode (1 ≤ N ≤ 8), and
//! optional continuation bytes if the value does not fit. If I < 2^N - 1
//! the integer lives entirely in the prefix; otherwise the prefix is all
//! ones and the remainder follows in 7-bit little-endian groups.
//!
//! HTTP/2 integers are bounded, so decoding rejects values above 2^32 - 1.

use bytes::{BufMut, BytesMut};

use crate::error::{HpackError, Result};

/// Maximum integer value accepted by the decoder (2^32 - 1).
const MAX_INTEGER: u64 = u32::MAX as u64;

/// Encodes an integer with an N-bit prefix.
///
/// `prefix_mask` carries the representation's opcode bits (the high
/// 8 - N bits of the first byte); the prefix value is OR-combined into it.
///
/// # Panics
///
/// Debug-asserts that `prefix_bits` is in 1..=8. Callers only encode
/// table indices and string lengths, all far below the 2^32 - 1 bound.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use hpack2::integer;
///
/// let mut buf = BytesMut::new();
/// // Encode 10 with a 5-bit prefix, preserving the top 3 bits as 001
/// integer::encode(10, 5, 0b001_00000, &mut buf);
/// assert_eq!(&buf[..], &[0b001_01010]);
/// ```
pub fn encode(value: u64, prefix_bits: u8, prefix_mask: u8, dst: &mut BytesMut) {
    debug_assert!(
        prefix_bits >= 1 && prefix_bits <= 8,
        "prefix_bits must be 1-8"
    );
    debug_assert!(value <= MAX_INTEGER, "value exceeds maximum");

    // Calculate max_prefix safely to avoid shift overflow when prefix_bits == 8
    let max_prefix = if prefix_bits == 8 {
        255u64
    } else {
        (1u64 << prefix_bits) - 1
    };

    if value < max_prefix {
        dst.put_u8(prefix_mask | (value as u8));
        return;
    }

    dst.put_u8(prefix_mask | (max_prefix as u8));
    let mut remaining = value - max_prefix;

    while remaining >= 128 {
        dst.put_u8(((remaining & 0x7F) | 0x80) as u8);
        remaining >>= 7;
    }

    dst.put_u8(remaining as u8);
}

/// Decodes an integer with an N-bit prefix.
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Example
///
/// ```
/// use hpack2::integer;
///
/// let data = &[0b001_01010]; // 10 with 5-bit prefix
/// let (value, consumed) = integer::decode(5, data).unwrap();
/// assert_eq!(value, 10);
/// assert_eq!(consumed, 1);
/// ```
pub fn decode(prefix_bits: u8, data: &[u8]) -> Result<(u64, usize)> {
    if !(1..=8).contains(&prefix_bits) {
        return Err(HpackError::InvalidPrefix(prefix_bits));
    }

    if data.is_empty() {
        return Err(HpackError::UnexpectedEof);
    }

    // Calculate mask safely to avoid shift overflow when prefix_bits == 8
    let mask = if prefix_bits == 8 {
        0xFFu8
    } else {
        (1u8 << prefix_bits) - 1
    };
    let mut value = (data[0] & mask) as u64;

    if value < (mask as u64) {
        // Value fits in prefix
        return Ok((value, 1));
    }

    // Read continuation bytes
    let mut pos = 1;
    let mut shift = 0u32;

    loop {
        if pos >= data.len() {
            return Err(HpackError::UnexpectedEof);
        }

        // A 32-bit value never takes more than five continuation bytes.
        if shift >= 35 {
            return Err(HpackError::IntegerOverflow);
        }

        let byte = data[pos];
        pos += 1;

        value = value
            .checked_add(((byte & 0x7F) as u64) << shift)
            .ok_or(HpackError::IntegerOverflow)?;

        if value > MAX_INTEGER {
            return Err(HpackError::IntegerOverflow);
        }

        if (byte & 0x80) == 0 {
            break;
        }

        shift += 7;
    }

    Ok((value, pos))
}
