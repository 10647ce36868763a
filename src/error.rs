//! HPACK error types.
//!
//! Every decoding failure is fatal for the containing header block; the
//! connection layer maps all of these to COMPRESSION_ERROR and tears the
//! connection down with GOAWAY. There is no partial recovery, and after an
//! error the codec state is unspecified.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HpackError>;

/// HPACK codec errors per RFC 7541.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HpackError {
    /// Input ended inside a codec unit (opcode, integer continuation,
    /// string length, or string payload).
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Index 0 where a non-zero index is required, or an index past the
    /// end of the combined static + dynamic address space.
    #[error("invalid table index: {0}")]
    InvalidIndex(u64),

    /// A decoded integer exceeds 2^32 - 1.
    #[error("integer overflow in prefix encoding")]
    IntegerOverflow,

    /// Prefix width outside 1..=8.
    #[error("invalid integer prefix width: {0}")]
    InvalidPrefix(u8),

    /// A bit sequence matches no Huffman code within the maximum code
    /// length.
    #[error("huffman code does not match any symbol")]
    InvalidHuffmanCode,

    /// More than seven bits left over after the last complete symbol.
    #[error("huffman padding exceeds seven bits")]
    PaddingTooLong,

    /// A zero bit in the trailing padding.
    #[error("huffman padding contains a zero bit")]
    InvalidPadding,

    /// A complete EOS symbol appeared in the encoded data.
    #[error("huffman EOS symbol in encoded data")]
    EosDecoded,

    /// A dynamic table size update exceeds the SETTINGS-derived bound.
    #[error("table size update {update} exceeds maximum {max}")]
    SizeUpdateTooLarge { update: u64, max: u64 },

    /// A dynamic table size update after a field representation in the
    /// same header block.
    #[error("table size update after a header field")]
    SizeUpdateAfterField,
}
