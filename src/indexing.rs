//! Unified index address space over the static and dynamic tables.
//!
//! Indices 1-61 address the static table; 62..=61+k address the dynamic
//! table, newest entry first. Index 0 is reserved by the wire format and
//! never resolves.

use crate::dynamic_table::DynamicTable;
use crate::error::{HpackError, Result};
use crate::field::HeaderField;
use crate::static_table::{self, STATIC_TABLE_LEN};

/// Outcome of a table lookup, carrying a combined-address-space index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Name and value both matched.
    Full(u64),
    /// Only the name matched.
    Name(u64),
}

/// Searches both tables for the given field.
///
/// Precedence: dynamic full match, static full match, dynamic name match,
/// static name match; the first (lowest-index) hit wins within each
/// table. Returns `None` on a complete miss.
pub fn lookup(table: &DynamicTable, name: &[u8], value: &[u8]) -> Option<Match> {
    if let Some(i) = table.find_exact(name, value) {
        return Some(Match::Full(STATIC_TABLE_LEN + 1 + i as u64));
    }
    if let Some(i) = static_table::find_exact(name, value) {
        return Some(Match::Full(i));
    }
    if let Some(i) = table.find_name(name) {
        return Some(Match::Name(STATIC_TABLE_LEN + 1 + i as u64));
    }
    if let Some(i) = static_table::find_name(name) {
        return Some(Match::Name(i));
    }
    None
}

/// Resolves a combined-address-space index to a header field.
pub fn resolve(table: &DynamicTable, index: u64) -> Result<HeaderField> {
    if index == 0 {
        return Err(HpackError::InvalidIndex(0));
    }
    if let Some(entry) = static_table::get(index) {
        return Ok(HeaderField::new(entry.name, entry.value));
    }
    table
        .get((index - STATIC_TABLE_LEN - 1) as usize)
        .cloned()
        .ok_or(HpackError::InvalidIndex(index))
}
