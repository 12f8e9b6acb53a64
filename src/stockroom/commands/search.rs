use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shoe;
use crate::store::Inventory;

pub fn run(inventory: &Inventory, code: &str) -> Result<CmdResult> {
    // Exact, case-sensitive match. Codes are not unique, so every hit is
    // emitted, in store order.
    let matches: Vec<Shoe> = inventory
        .iter()
        .filter(|shoe| shoe.code == code)
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_shoes(matches);
    if result.listed_shoes.is_empty() {
        result.add_message(CmdMessage::error("Product code not found!"));
    }
    Ok(result)
}
