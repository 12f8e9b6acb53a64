use super::CmdResult;
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_shoes(inventory.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    #[test]
    fn lists_every_shoe_in_store_order() {
        let fixture = SourceFixture::new()
            .with_shoe("UK", "SKU1", "Boot", "10", "4")
            .with_shoe("US", "SKU2", "Trainer", "20", "2");

        let result = run(&fixture.inventory).unwrap();
        let codes: Vec<&str> = result
            .listed_shoes
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, ["SKU1", "SKU2"]);
    }

    #[test]
    fn repeated_listings_return_identical_results() {
        let fixture = SourceFixture::new().with_shoe("UK", "SKU1", "Boot", "10", "4");
        let first = run(&fixture.inventory).unwrap();
        let second = run(&fixture.inventory).unwrap();
        assert_eq!(first.listed_shoes, second.listed_shoes);
    }
}
