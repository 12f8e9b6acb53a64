use crate::error::{Result, StockError};
use crate::store::Inventory;

/// Indices of every shoe tied for the lowest quantity, in store order.
///
/// The whole tie is the restock selection set, not just the first hit.
pub fn lowest_quantity_indices(inventory: &Inventory) -> Vec<usize> {
    let mut lowest: Option<i64> = None;
    let mut selected = Vec::new();
    for (index, shoe) in inventory.iter().enumerate() {
        match lowest {
            Some(q) if shoe.quantity > q => {}
            Some(q) if shoe.quantity == q => selected.push(index),
            _ => {
                lowest = Some(shoe.quantity);
                selected.clear();
                selected.push(index);
            }
        }
    }
    selected
}

/// Indices of every shoe tied for the highest quantity, in store order.
pub fn highest_quantity_indices(inventory: &Inventory) -> Vec<usize> {
    let mut highest: Option<i64> = None;
    let mut selected = Vec::new();
    for (index, shoe) in inventory.iter().enumerate() {
        match highest {
            Some(q) if shoe.quantity < q => {}
            Some(q) if shoe.quantity == q => selected.push(index),
            _ => {
                highest = Some(shoe.quantity);
                selected.clear();
                selected.push(index);
            }
        }
    }
    selected
}

/// Validate a raw restock amount: a non-negative whole number, where zero
/// is the "leave it alone" sentinel. The CLI owns the re-prompt loop; this
/// only decides valid or not.
pub fn parse_restock_amount(raw: &str) -> Result<u32> {
    raw.trim()
        .parse()
        .map_err(|_| StockError::InvalidAmount(raw.trim().to_string()))
}

/// Validate a raw discount amount. Any decimal is accepted; there is no
/// floor on the resulting cost.
pub fn parse_discount_amount(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| StockError::InvalidAmount(raw.trim().to_string()))
}

/// A yes/no answer for the per-shoe discount prompt.
pub fn parse_choice(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(StockError::InvalidChoice(raw.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    #[test]
    fn lowest_selects_every_tied_shoe_in_order() {
        let fixture = SourceFixture::with_quantities(&[3, 5, 3, 8]);
        assert_eq!(lowest_quantity_indices(&fixture.inventory), [0, 2]);
    }

    #[test]
    fn highest_selects_the_sole_maximum() {
        let fixture = SourceFixture::with_quantities(&[3, 5, 3, 8]);
        assert_eq!(highest_quantity_indices(&fixture.inventory), [3]);
    }

    #[test]
    fn highest_selects_ties_too() {
        let fixture = SourceFixture::with_quantities(&[8, 5, 8]);
        assert_eq!(highest_quantity_indices(&fixture.inventory), [0, 2]);
    }

    #[test]
    fn empty_inventory_selects_nothing() {
        let fixture = SourceFixture::new();
        assert!(lowest_quantity_indices(&fixture.inventory).is_empty());
        assert!(highest_quantity_indices(&fixture.inventory).is_empty());
    }

    #[test]
    fn restock_amount_rejects_negative_and_non_integer() {
        assert_eq!(parse_restock_amount("2").unwrap(), 2);
        assert_eq!(parse_restock_amount("0").unwrap(), 0);
        assert!(matches!(
            parse_restock_amount("-1").unwrap_err(),
            StockError::InvalidAmount(_)
        ));
        assert!(parse_restock_amount("2.5").is_err());
        assert!(parse_restock_amount("lots").is_err());
    }

    #[test]
    fn discount_amount_accepts_any_decimal() {
        assert_eq!(parse_discount_amount("1.50").unwrap(), 1.5);
        // A negative discount is a price increase; the format does not
        // forbid it and neither do we.
        assert_eq!(parse_discount_amount("-2").unwrap(), -2.0);
        assert!(matches!(
            parse_discount_amount("cheap").unwrap_err(),
            StockError::InvalidAmount(_)
        ));
    }

    #[test]
    fn choice_accepts_yes_and_no_in_any_case() {
        assert!(parse_choice("yes").unwrap());
        assert!(parse_choice("YES").unwrap());
        assert!(!parse_choice("No").unwrap());
        assert!(matches!(
            parse_choice("maybe").unwrap_err(),
            StockError::InvalidChoice(_)
        ));
    }
}
