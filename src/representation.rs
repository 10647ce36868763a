//! The six HPACK wire representations per RFC 7541 Section 6.
//!
//! Leading-bit patterns, high to low:
//!
//! ```text
//! 1xxxxxxx  Indexed Header Field                   index (7+)
//! 01xxxxxx  Literal with Incremental Indexing      name index (6+)
//! 001xxxxx  Dynamic Table Size Update              max size (5+)
//! 0001xxxx  Literal Never Indexed                  name index (4+)
//! 0000xxxx  Literal without Indexing               name index (4+)
//! ```
//!
//! The five patterns partition all byte values, so classification cannot
//! fail; errors arise only from the integer and string payloads.

use bytes::{Bytes, BytesMut};

use crate::error::{HpackError, Result};
use crate::{integer, string_literal};

/// A header name: either a combined-address-space index (never 0) or a
/// literal octet string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameRef {
    Index(u64),
    Literal(Bytes),
}

/// One wire representation of a header field or table directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// Fully indexed field. Pattern `1` + index (7+).
    Indexed { index: u64 },

    /// Literal field, added to the dynamic table by both peers.
    /// Pattern `01` + name index (6+); index 0 means a literal name.
    IncrementalIndexing { name: NameRef, value: Bytes },

    /// Literal field with no table side effect.
    /// Pattern `0000` + name index (4+).
    WithoutIndexing { name: NameRef, value: Bytes },

    /// Like [`WithoutIndexing`], but intermediaries must forward it
    /// unchanged and never index it. Pattern `0001` + name index (4+).
    ///
    /// [`WithoutIndexing`]: Representation::WithoutIndexing
    NeverIndexed { name: NameRef, value: Bytes },

    /// Dynamic table capacity change. Pattern `001` + max size (5+).
    SizeUpdate { max_size: u64 },
}

impl Representation {
    /// Encodes this representation, appending to `dst`.
    ///
    /// Literal strings are always Huffman-coded on this path.
    pub fn encode(&self, dst: &mut BytesMut) {
        match self {
            Representation::Indexed { index } => {
                integer::encode(*index, 7, 0x80, dst);
            }
            Representation::IncrementalIndexing { name, value } => {
                encode_literal(name, value, 6, 0x40, dst);
            }
            Representation::WithoutIndexing { name, value } => {
                encode_literal(name, value, 4, 0x00, dst);
            }
            Representation::NeverIndexed { name, value } => {
                encode_literal(name, value, 4, 0x10, dst);
            }
            Representation::SizeUpdate { max_size } => {
                integer::encode(*max_size, 5, 0x20, dst);
            }
        }
    }

    /// Decodes one representation from the front of `data`.
    ///
    /// Returns the representation and the number of bytes consumed.
    pub fn decode(data: &[u8]) -> Result<(Self, usize)> {
        let first = *data.first().ok_or(HpackError::UnexpectedEof)?;

        if first & 0x80 != 0 {
            let (index, consumed) = integer::decode(7, data)?;
            Ok((Representation::Indexed { index }, consumed))
        } else if first & 0xC0 == 0x40 {
            let (name, value, consumed) = decode_literal(data, 6)?;
            Ok((Representation::IncrementalIndexing { name, value }, consumed))
        } else if first & 0xE0 == 0x20 {
            let (max_size, consumed) = integer::decode(5, data)?;
            Ok((Representation::SizeUpdate { max_size }, consumed))
        } else if first & 0xF0 == 0x10 {
            let (name, value, consumed) = decode_literal(data, 4)?;
            Ok((Representation::NeverIndexed { name, value }, consumed))
        } else {
            let (name, value, consumed) = decode_literal(data, 4)?;
            Ok((Representation::WithoutIndexing { name, value }, consumed))
        }
    }
}

fn encode_literal(name: &NameRef, value: &Bytes, prefix_bits: u8, prefix_mask: u8, dst: &mut BytesMut) {
    match name {
        NameRef::Index(index) => {
            debug_assert!(*index != 0, "indexed name reference must be non-zero");
            integer::encode(*index, prefix_bits, prefix_mask, dst);
        }
        NameRef::Literal(name) => {
            integer::encode(0, prefix_bits, prefix_mask, dst);
            string_literal::encode(name, true, dst);
        }
    }
    string_literal::encode(value, true, dst);
}

fn decode_literal(data: &[u8], prefix_bits: u8) -> Result<(NameRef, Bytes, usize)> {
    let (index, mut pos) = integer::decode(prefix_bits, data)?;

    let name = if index == 0 {
        let (name, consumed) = string_literal::decode(&data[pos..])?;
        pos += consumed;
        NameRef::Literal(name)
    } else {
        NameRef::Index(index)
    };

    let (value, consumed) = string_literal::decode(&data[pos..])?;
    pos += consumed;

    Ok((name, value, pos))
}
