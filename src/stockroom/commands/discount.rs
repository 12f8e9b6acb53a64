use super::helpers::highest_quantity_indices;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shoe;
use crate::store::{Inventory, StockSource};

/// Discount every shoe tied for the highest quantity.
///
/// `discount_for` stands in for the operator: `None` declines the shoe,
/// `Some(amount)` subtracts the amount from its cost. There is no floor at
/// zero: a discount larger than the cost drives it negative. One full
/// rewrite persists the whole inventory after the selection set is
/// processed.
pub fn run<S, F>(
    inventory: &mut Inventory,
    source: &mut S,
    mut discount_for: F,
) -> Result<CmdResult>
where
    S: StockSource,
    F: FnMut(&Shoe) -> Option<f64>,
{
    let selected = highest_quantity_indices(inventory);
    let any_selected = !selected.is_empty();
    let mut result = CmdResult::default();

    for index in selected {
        if let Some(shoe) = inventory.get_mut(index) {
            match discount_for(shoe) {
                Some(amount) => {
                    shoe.cost -= amount;
                    result.add_message(CmdMessage::success(format!(
                        "The new price of {} ({}) is {}",
                        shoe.product, shoe.country, shoe.cost
                    )));
                    result.affected_shoes.push(shoe.clone());
                }
                None => {
                    result.add_message(CmdMessage::info(format!(
                        "Product not discounted: {} ({})",
                        shoe.product, shoe.country
                    )));
                }
            }
        }
    }

    if any_selected {
        source.rewrite(inventory)?;
    }
    Ok(result)
}
