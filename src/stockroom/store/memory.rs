use super::{parse_record, record_line, Inventory, StockSource};
use crate::error::{Result, StockError};
use crate::model::Shoe;

/// In-memory source for testing and development.
///
/// Holds the same record lines a real file would hold after its header, so
/// load/rewrite round-trips exercise the actual format. Does NOT persist
/// data. Can be flipped unavailable to simulate a missing or unwritable
/// backing file.
#[derive(Debug, Default)]
pub struct InMemorySource {
    lines: Vec<String>,
    unavailable: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw record lines (header already stripped).
    pub fn with_records(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            unavailable: false,
        }
    }

    /// Simulate a missing or unwritable backing file.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// The record lines as they would sit in the file, header excluded.
    pub fn record_lines(&self) -> &[String] {
        &self.lines
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(StockError::SourceUnavailable {
                path: "<memory>".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

impl StockSource for InMemorySource {
    fn load(&self) -> Result<Inventory> {
        self.check_available()?;
        let mut inventory = Inventory::new();
        for (line_no, line) in self.lines.iter().enumerate() {
            inventory.append(parse_record(line, line_no + 1)?);
        }
        Ok(inventory)
    }

    fn append_record(&mut self, shoe: &Shoe) -> Result<()> {
        self.check_available()?;
        self.lines.push(record_line(shoe));
        Ok(())
    }

    fn rewrite(&mut self, inventory: &Inventory) -> Result<()> {
        self.check_available()?;
        self.lines = inventory.iter().map(record_line).collect();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// A preloaded source plus the inventory read from it.
    pub struct SourceFixture {
        pub source: InMemorySource,
        pub inventory: Inventory,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
                inventory: Inventory::new(),
            }
        }

        pub fn with_shoe(
            mut self,
            country: &str,
            code: &str,
            product: &str,
            cost: &str,
            quantity: &str,
        ) -> Self {
            let shoe = Shoe::from_fields(country, code, product, cost, quantity).unwrap();
            self.source.append_record(&shoe).unwrap();
            self.inventory.append(shoe);
            self
        }

        /// One generically named shoe per quantity, in order. Handy for the
        /// restock/discount selection scenarios.
        pub fn with_quantities(quantities: &[i64]) -> Self {
            let mut fixture = Self::new();
            for (i, quantity) in quantities.iter().enumerate() {
                fixture = fixture.with_shoe(
                    "UK",
                    &format!("SKU{}", i + 1),
                    &format!("Boot {}", i + 1),
                    "10",
                    &quantity.to_string(),
                );
            }
            fixture
        }
    }
}
