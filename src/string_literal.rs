//! String literal encoding and decoding per RFC 7541 Section 5.2.
//!
//! Wire form: `[H | Length (7+)] [data]`. The H bit marks a
//! Huffman-coded payload; the length counts payload octets (post-Huffman
//! when H is set).

use bytes::{Bytes, BytesMut};

use crate::error::{HpackError, Result};
use crate::{huffman, integer};

/// Encodes a string literal, appending to `dst`.
pub fn encode(s: &[u8], huffman_coded: bool, dst: &mut BytesMut) {
    if huffman_coded {
        let mut coded = Vec::with_capacity(huffman::encoded_size(s));
        huffman::encode(s, &mut coded);
        integer::encode(coded.len() as u64, 7, 0x80, dst);
        dst.extend_from_slice(&coded);
    } else {
        integer::encode(s.len() as u64, 7, 0x00, dst);
        dst.extend_from_slice(s);
    }
}

/// Decodes a string literal.
///
/// Returns the decoded octets and the number of input bytes consumed.
pub fn decode(data: &[u8]) -> Result<(Bytes, usize)> {
    if data.is_empty() {
        return Err(HpackError::UnexpectedEof);
    }

    let huffman_coded = (data[0] & 0x80) != 0;
    let (len, consumed) = integer::decode(7, data)?;
    let len = len as usize;

    if consumed + len > data.len() {
        return Err(HpackError::UnexpectedEof);
    }

    let payload = &data[consumed..consumed + len];
    let result = if huffman_coded {
        let mut decoded = Vec::new();
        huffman::decode(payload, &mut decoded)?;
        Bytes::from(decoded)
    } else {
        Bytes::copy_from_slice(payload)
    };

    Ok((result, consumed + len))
}
