use super::{CmdResult, ValueRow};
use crate::error::Result;
use crate::store::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    let rows = inventory
        .iter()
        .map(|shoe| ValueRow {
            country: shoe.country.clone(),
            product: shoe.product.clone(),
            code: shoe.code.clone(),
            value: shoe.value(),
        })
        .collect();
    Ok(CmdResult::default().with_value_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    #[test]
    fn computes_cost_times_quantity_per_record() {
        let fixture = SourceFixture::new()
            .with_shoe("UK", "SKU1", "Boot", "19.99", "4")
            .with_shoe("US", "SKU2", "Trainer", "20", "2");

        let result = run(&fixture.inventory).unwrap();
        assert_eq!(result.value_rows.len(), 2);
        assert_eq!(result.value_rows[0].value, 79.96);
        assert_eq!(result.value_rows[1].value, 40.0);
    }

    #[test]
    fn report_does_not_mutate_the_inventory() {
        let fixture = SourceFixture::new().with_shoe("UK", "SKU1", "Boot", "19.99", "4");
        let before: Vec<_> = fixture.inventory.iter().cloned().collect();
        run(&fixture.inventory).unwrap();
        let after: Vec<_> = fixture.inventory.iter().cloned().collect();
        assert_eq!(before, after);
    }
}
