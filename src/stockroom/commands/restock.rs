use super::helpers::lowest_quantity_indices;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shoe;
use crate::store::{Inventory, StockSource};

/// Restock every shoe tied for the lowest quantity.
///
/// `amount_for` stands in for the operator: it receives each selected shoe
/// and returns a validated amount to add, with 0 meaning "leave this one
/// alone". The whole inventory is rewritten once after the selection set
/// is processed; the end state matches the rewrite-per-shoe variant.
pub fn run<S, F>(inventory: &mut Inventory, source: &mut S, mut amount_for: F) -> Result<CmdResult>
where
    S: StockSource,
    F: FnMut(&Shoe) -> u32,
{
    let selected = lowest_quantity_indices(inventory);
    let any_selected = !selected.is_empty();
    let mut result = CmdResult::default();

    for index in selected {
        if let Some(shoe) = inventory.get_mut(index) {
            let amount = amount_for(shoe);
            if amount == 0 {
                result.add_message(CmdMessage::info(format!(
                    "Product not restocked: {} ({})",
                    shoe.product, shoe.country
                )));
                continue;
            }
            shoe.quantity += i64::from(amount);
            result.add_message(CmdMessage::success(format!(
                "Quantity for {} ({}) is now {}",
                shoe.product, shoe.country, shoe.quantity
            )));
            result.affected_shoes.push(shoe.clone());
        }
    }

    if any_selected {
        source.rewrite(inventory)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    #[test]
    fn restocks_every_tied_shoe_independently() {
        let SourceFixture {
            mut source,
            mut inventory,
        } = SourceFixture::with_quantities(&[3, 5, 3, 8]);

        // First selected shoe gets 2, second is skipped with 0.
        let mut amounts = [2u32, 0].into_iter();
        let result = run(&mut inventory, &mut source, |_| amounts.next().unwrap()).unwrap();

        let quantities: Vec<i64> = inventory.iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, [5, 5, 3, 8]);
        assert_eq!(result.affected_shoes.len(), 1);
        assert_eq!(result.affected_shoes[0].code, "SKU1");
    }

    #[test]
    fn rewrite_covers_the_whole_inventory() {
        let SourceFixture {
            mut source,
            mut inventory,
        } = SourceFixture::with_quantities(&[3, 5]);

        run(&mut inventory, &mut source, |_| 7).unwrap();

        assert_eq!(
            source.record_lines(),
            ["UK,SKU1,Boot 1,10,10", "UK,SKU2,Boot 2,10,5"]
        );
    }

    #[test]
    fn zero_for_every_shoe_changes_no_quantities() {
        let SourceFixture {
            mut source,
            mut inventory,
        } = SourceFixture::with_quantities(&[3, 3]);

        let result = run(&mut inventory, &mut source, |_| 0).unwrap();

        let quantities: Vec<i64> = inventory.iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, [3, 3]);
        assert!(result.affected_shoes.is_empty());
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn empty_inventory_is_a_no_op() {
        let SourceFixture {
            mut source,
            mut inventory,
        } = SourceFixture::new();

        let result = run(&mut inventory, &mut source, |_| panic!("nothing to select")).unwrap();
        assert!(result.messages.is_empty());
        assert!(source.record_lines().is_empty());
    }

    #[test]
    fn callback_sees_each_selected_shoe() {
        let SourceFixture {
            mut source,
            mut inventory,
        } = SourceFixture::with_quantities(&[3, 5, 3, 8]);

        let mut seen = Vec::new();
        run(&mut inventory, &mut source, |shoe| {
            seen.push(shoe.code.clone());
            0
        })
        .unwrap();

        assert_eq!(seen, ["SKU1", "SKU3"]);
    }
}
