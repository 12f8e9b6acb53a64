//! # Storage Layer
//!
//! This module defines the storage abstraction for stockroom. The
//! [`StockSource`] trait translates between the in-memory [`Inventory`] and
//! the backing delimited stock file.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemorySource` (no filesystem needed)
//! - Keep business logic **decoupled** from the file format
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: Production storage over the flat stock file
//! - [`memory::InMemorySource`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! One record per line, comma-delimited, five fields in fixed order:
//!
//! ```text
//! country,code,product,cost,quantity
//! ```
//!
//! There is no quoting or escaping; a comma inside a field is indistinguishable
//! from a delimiter and fails the five-field check. Every record line is
//! written with a leading newline, and the first line of the file is skipped
//! unconditionally on load. A freshly seeded file carries a real header
//! there; after the first full rewrite the header's slot is the blank line
//! the leading newline leaves behind, and the skip consumes it the same way.
//! A file whose first line is actual data therefore loses that record
//! silently; an inherited limitation of the format, kept for round-trip
//! fidelity.

use crate::error::{Result, StockError};
use crate::model::Shoe;

pub mod fs;
pub mod memory;

/// The in-memory ledger: an ordered, append-only collection of shoes.
///
/// Insertion order is file order. It is preserved for the process lifetime
/// and is the order a full rewrite serializes back to disk. Nothing removes
/// an element; records only die with the process.
#[derive(Debug, Default)]
pub struct Inventory {
    shoes: Vec<Shoe>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shoe: Shoe) {
        self.shoes.push(shoe);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shoe> {
        self.shoes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shoe> {
        self.shoes.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Shoe> {
        self.shoes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shoe> {
        self.shoes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Shoe;
    type IntoIter = std::slice::Iter<'a, Shoe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Shoe> for Inventory {
    fn from_iter<I: IntoIterator<Item = Shoe>>(iter: I) -> Self {
        Self {
            shoes: iter.into_iter().collect(),
        }
    }
}

/// Abstract interface to the backing stock file.
///
/// Implementations own the record-line format; the rest of the crate only
/// sees whole [`Shoe`] values and [`Inventory`] snapshots.
pub trait StockSource {
    /// Read the whole backing file into a fresh inventory.
    fn load(&self) -> Result<Inventory>;

    /// Append a single record line for a newly added shoe.
    fn append_record(&mut self, shoe: &Shoe) -> Result<()>;

    /// Truncate and rewrite the whole backing file from the inventory, in
    /// inventory order.
    fn rewrite(&mut self, inventory: &Inventory) -> Result<()>;
}

/// Serialize one shoe as a record line, without the leading newline.
pub fn record_line(shoe: &Shoe) -> String {
    format!(
        "{},{},{},{},{}",
        shoe.country, shoe.code, shoe.product, shoe.cost, shoe.quantity
    )
}

/// Parse one record line into a shoe. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_record(line: &str, line_no: usize) -> Result<Shoe> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() != 5 {
        return Err(StockError::Malformed { line: line_no });
    }
    Shoe::from_fields(fields[0], fields[1], fields[2], fields[3], fields[4])
}
