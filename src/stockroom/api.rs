//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all stockroom operations, regardless of the
//! UI being used.
//!
//! The facade owns the in-memory [`Inventory`] and the backing source and
//! threads them through every command call; there is no process-wide
//! shared collection anywhere in the crate.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or terminal formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over StockSource
//!
//! `StockApi<S: StockSource>` is generic over the storage backend:
//! - Production: `StockApi<FileSource>`
//! - Testing: `StockApi<InMemorySource>`

use crate::commands;
use crate::error::Result;
use crate::model::Shoe;
use crate::store::{Inventory, StockSource};

/// The main API facade for stockroom operations.
pub struct StockApi<S: StockSource> {
    inventory: Inventory,
    source: S,
}

impl<S: StockSource> StockApi<S> {
    /// Start with an empty ledger; call [`load`](Self::load) to populate it
    /// from the source.
    pub fn new(source: S) -> Self {
        Self {
            inventory: Inventory::new(),
            source,
        }
    }

    /// Replace the ledger with the source contents.
    ///
    /// On failure the ledger keeps its previous (initially empty) state;
    /// a missing backing file is the caller's to report, not fatal.
    pub fn load(&mut self) -> Result<()> {
        self.inventory = self.source.load()?;
        Ok(())
    }

    pub fn add(
        &mut self,
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.inventory,
            &mut self.source,
            country,
            code,
            product,
            cost,
            quantity,
        )
    }

    pub fn search(&self, code: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.inventory, code)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn value_per_item(&self) -> Result<commands::CmdResult> {
        commands::value::run(&self.inventory)
    }

    pub fn restock_lowest<F>(&mut self, amount_for: F) -> Result<commands::CmdResult>
    where
        F: FnMut(&Shoe) -> u32,
    {
        commands::restock::run(&mut self.inventory, &mut self.source, amount_for)
    }

    pub fn discount_highest<F>(&mut self, discount_for: F) -> Result<commands::CmdResult>
    where
        F: FnMut(&Shoe) -> Option<f64>,
    {
        commands::discount::run(&mut self.inventory, &mut self.source, discount_for)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ValueRow};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::store::memory::InMemorySource;

    fn api_with_records(lines: &[&str]) -> StockApi<InMemorySource> {
        let mut api = StockApi::new(InMemorySource::with_records(lines));
        api.load().unwrap();
        api
    }

    #[test]
    fn load_populates_the_ledger_from_the_source() {
        let api = api_with_records(&["UK,SKU1,Boot,10,4", "US,SKU2,Trainer,20,2"]);
        assert_eq!(api.inventory().len(), 2);
    }

    #[test]
    fn failed_load_leaves_the_ledger_empty() {
        let mut source = InMemorySource::new();
        source.set_unavailable(true);
        let mut api = StockApi::new(source);

        let err = api.load().unwrap_err();
        assert!(matches!(err, StockError::SourceUnavailable { .. }));
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn add_then_search_finds_exactly_the_new_record() {
        let mut api = api_with_records(&["UK,SKU1,Boot,10,4"]);
        api.add("US", "SKU9", "Dunk Low", "89.99", "12").unwrap();

        let result = api.search("SKU9").unwrap();
        assert_eq!(result.listed_shoes.len(), 1);
        let shoe = &result.listed_shoes[0];
        assert_eq!(shoe.country, "US");
        assert_eq!(shoe.product, "Dunk Low");
        assert_eq!(shoe.cost, 89.99);
        assert_eq!(shoe.quantity, 12);
    }

    #[test]
    fn restock_and_discount_persist_through_the_source() {
        let mut api = api_with_records(&["UK,SKU1,Boot,10,3", "US,SKU2,Trainer,20,8"]);

        api.restock_lowest(|_| 2).unwrap();
        api.discount_highest(|_| Some(5.0)).unwrap();

        // Reload from the source: the rewrites must round-trip.
        api.load().unwrap();
        assert_eq!(api.inventory().get(0).unwrap().quantity, 5);
        assert_eq!(api.inventory().get(1).unwrap().cost, 15.0);
    }
}
