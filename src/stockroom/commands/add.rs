use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shoe;
use crate::store::{Inventory, StockSource};

pub fn run<S: StockSource>(
    inventory: &mut Inventory,
    source: &mut S,
    country: &str,
    code: &str,
    product: &str,
    cost: &str,
    quantity: &str,
) -> Result<CmdResult> {
    // Construction is the validation boundary: a bad cost or quantity
    // leaves both the inventory and the file untouched.
    let shoe = Shoe::from_fields(country, code, product, cost, quantity)?;

    inventory.append(shoe.clone());
    // Not rolled back on failure; memory and disk may diverge until the
    // next successful rewrite.
    source.append_record(&shoe)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added to inventory: {} ({})",
        shoe.product, shoe.code
    )));
    result.affected_shoes.push(shoe);
    Ok(result)
}
