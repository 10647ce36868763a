//! HPACK: Header Compression for HTTP/2 (RFC 7541)
//!
//! This crate implements the HPACK codec core: the prefix integer
//! codec, the fixed Huffman string codec, the static and dynamic header
//! tables, and the full encode/decode state machines for all six wire
//! representations, including dynamic table size updates.
//!
//! # Features
//!
//! - **Bit-exact wire format**: interoperates with any conforming peer;
//!   the test suite carries the RFC 7541 Appendix C vectors bit-for-bit.
//! - **Synchronized table state**: encoder and decoder mutate their
//!   dynamic tables identically, so both sides of a connection agree on
//!   the index address space after every header block.
//! - **Safe**: no `unsafe` blocks; strict Huffman padding and EOS
//!   validation, bounded integers, fatal-and-final decode errors.
//!
//! The outer HTTP/2 framer composes HEADERS / CONTINUATION frames around
//! the byte sequences this codec produces and consumes; the codec itself
//! knows nothing of frames, streams, or transport.
//!
//! # Example
//!
//! ```rust
//! use hpack2::{Decoder, Encoder, HeaderField};
//!
//! let mut encoder = Encoder::new(4096);
//! let mut decoder = Decoder::new(4096);
//!
//! let fields = vec![
//!     HeaderField::new(":method", "GET"),
//!     HeaderField::new(":path", "/"),
//!     HeaderField::new("user-agent", "hpack2"),
//! ];
//!
//! let block = encoder.encode(&fields);
//! let decoded = decoder.decode(&block).unwrap();
//!
//! assert_eq!(decoded, fields);
//! ```

pub mod decoder;
pub mod dynamic_table;
pub mod encoder;
pub mod error;
pub mod field;
pub mod huffman;
pub mod indexing;
pub mod integer;
pub mod representation;
pub mod static_table;
pub mod string_literal;

pub use decoder::Decoder;
pub use dynamic_table::DynamicTable;
pub use encoder::Encoder;
pub use error::{HpackError, Result};
pub use field::HeaderField;
pub use representation::{NameRef, Representation};

/// Default dynamic table capacity (SETTINGS_HEADER_TABLE_SIZE default).
pub const DEFAULT_TABLE_CAPACITY: usize = 4096;

impl Default for Encoder {
    fn default() -> Self {
        Encoder::new(DEFAULT_TABLE_CAPACITY)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(DEFAULT_TABLE_CAPACITY)
    }
}
