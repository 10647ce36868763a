//! HPACK decoder.
//!
//! A state machine over the octet stream of one header block: classify
//! each representation by its leading bits, reconstruct the field it
//! carries, and mutate the dynamic table exactly as the encoder did.
//! Every error is fatal for the connection; the caller discards the
//! decoder and closes with COMPRESSION_ERROR.

use bytes::Bytes;
use tracing::trace;

use crate::dynamic_table::DynamicTable;
use crate::error::{HpackError, Result};
use crate::field::HeaderField;
use crate::indexing;
use crate::representation::{NameRef, Representation};

/// HPACK decoder state for one connection direction.
pub struct Decoder {
    table: DynamicTable,
    /// SETTINGS_HEADER_TABLE_SIZE bound; size updates above it are
    /// rejected.
    max_capacity: usize,
}

impl Decoder {
    /// Creates a decoder whose dynamic table starts at, and is bounded
    /// by, `max_capacity` octets.
    pub fn new(max_capacity: usize) -> Self {
        Self {
            table: DynamicTable::new(max_capacity),
            max_capacity,
        }
    }

    /// Returns the decoder's dynamic table.
    pub fn table(&self) -> &DynamicTable {
        &self.table
    }

    /// Applies a local SETTINGS change to the size-update bound,
    /// shrinking the table if its current capacity now exceeds it.
    pub fn set_max_capacity(&mut self, max: usize) {
        self.max_capacity = max;
        if self.table.capacity() > max {
            self.table.resize(max);
        }
    }

    /// Decodes one header block into its ordered field list.
    ///
    /// On error the table state is unspecified and the decoder must be
    /// discarded.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<HeaderField>> {
        let mut fields = Vec::new();
        let mut seen_field = false;
        let mut pos = 0;

        while pos < data.len() {
            let (rep, consumed) = Representation::decode(&data[pos..])?;
            pos += consumed;

            match rep {
                Representation::Indexed { index } => {
                    seen_field = true;
                    fields.push(indexing::resolve(&self.table, index)?);
                }
                Representation::IncrementalIndexing { name, value } => {
                    seen_field = true;
                    // Resolve before inserting: the insertion shifts
                    // every dynamic index by one.
                    let name = self.resolve_name(name)?;
                    let field = HeaderField { name, value };
                    fields.push(field.clone());
                    self.table.insert(field);
                }
                Representation::WithoutIndexing { name, value }
                | Representation::NeverIndexed { name, value } => {
                    seen_field = true;
                    let name = self.resolve_name(name)?;
                    fields.push(HeaderField { name, value });
                }
                Representation::SizeUpdate { max_size } => {
                    if seen_field {
                        return Err(HpackError::SizeUpdateAfterField);
                    }
                    if max_size > self.max_capacity as u64 {
                        return Err(HpackError::SizeUpdateTooLarge {
                            update: max_size,
                            max: self.max_capacity as u64,
                        });
                    }
                    trace!(max_size, "applying table size update");
                    self.table.resize(max_size as usize);
                }
            }
        }

        Ok(fields)
    }

    fn resolve_name(&self, name: NameRef) -> Result<Bytes> {
        match name {
            NameRef::Index(index) => Ok(indexing::resolve(&self.table, index)?.name),
            NameRef::Literal(name) => Ok(name),
        }
    }
}
