//! HPACK encoder.
//!
//! Maps each header field to one of the six wire representations and
//! keeps its dynamic table in lockstep with the peer's decoder: both
//! sides mutate their tables identically for every indexing operation,
//! so table state stays synchronized block after block.

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::dynamic_table::DynamicTable;
use crate::field::HeaderField;
use crate::indexing::{self, Match};
use crate::representation::{NameRef, Representation};

/// Static table index of `cookie`.
const COOKIE_INDEX: u64 = 32;
/// Static table index of `set-cookie`.
const SET_COOKIE_INDEX: u64 = 55;

/// HPACK encoder state for one connection direction.
pub struct Encoder {
    table: DynamicTable,
    /// Capacity changes not yet announced on the wire. Emitted, in
    /// order, at the head of the next encoded block.
    pending_size_updates: Vec<u64>,
}

impl Encoder {
    /// Creates an encoder whose dynamic table holds at most `capacity`
    /// octets.
    pub fn new(capacity: usize) -> Self {
        Self {
            table: DynamicTable::new(capacity),
            pending_size_updates: Vec::new(),
        }
    }

    /// Returns the encoder's dynamic table.
    pub fn table(&self) -> &DynamicTable {
        &self.table
    }

    /// Changes the dynamic table capacity in response to a peer SETTINGS
    /// update.
    ///
    /// The change applies to the local table immediately; a Dynamic
    /// Table Size Update representation announcing it is emitted before
    /// any field in the next encoded block.
    pub fn resize(&mut self, new_capacity: usize) {
        self.table.resize(new_capacity);
        self.pending_size_updates.push(new_capacity as u64);
    }

    /// Encodes an ordered list of header fields into one header block.
    pub fn encode(&mut self, fields: &[HeaderField]) -> Bytes {
        let estimate: usize = fields
            .iter()
            .map(|f| f.name.len() + f.value.len() + 4)
            .sum();
        let mut dst = BytesMut::with_capacity(estimate);

        for max_size in self.pending_size_updates.drain(..) {
            trace!(max_size, "emitting table size update");
            Representation::SizeUpdate { max_size }.encode(&mut dst);
        }

        for field in fields {
            self.encode_field(field, &mut dst);
        }

        dst.freeze()
    }

    fn encode_field(&mut self, field: &HeaderField, dst: &mut BytesMut) {
        // cookie and set-cookie go out as un-indexed literals against
        // their static name entry and never touch the dynamic table.
        if let Some(index) = cookie_static_index(&field.name) {
            Representation::WithoutIndexing {
                name: NameRef::Index(index),
                value: field.value.clone(),
            }
            .encode(dst);
            return;
        }

        match indexing::lookup(&self.table, &field.name, &field.value) {
            Some(Match::Full(index)) => {
                Representation::Indexed { index }.encode(dst);
            }
            Some(Match::Name(index)) => {
                Representation::IncrementalIndexing {
                    name: NameRef::Index(index),
                    value: field.value.clone(),
                }
                .encode(dst);
                self.table.insert(field.clone());
            }
            None => {
                Representation::IncrementalIndexing {
                    name: NameRef::Literal(field.name.clone()),
                    value: field.value.clone(),
                }
                .encode(dst);
                self.table.insert(field.clone());
            }
        }
    }
}

/// Case-insensitive check for the cookie headers, returning the static
/// name index to reference.
fn cookie_static_index(name: &[u8]) -> Option<u64> {
    if name.eq_ignore_ascii_case(b"cookie") {
        Some(COOKIE_INDEX)
    } else if name.eq_ignore_ascii_case(b"set-cookie") {
        Some(SET_COOKIE_INDEX)
    } else {
        None
    }
}
