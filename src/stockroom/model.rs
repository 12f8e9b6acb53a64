use std::fmt;

use crate::error::{Result, StockError};

/// Coerce a raw cost field into a decimal value.
///
/// Shared by [`Shoe::from_fields`] and the interactive add prompt, so both
/// accept exactly the same inputs.
pub fn parse_cost(raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| StockError::Conversion {
        wanted: "cost",
        value: raw.trim().to_string(),
    })
}

/// Coerce a raw quantity field into a whole number.
pub fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| StockError::Conversion {
        wanted: "quantity",
        value: raw.trim().to_string(),
    })
}

/// One shoe stock entry.
///
/// The three identity fields are fixed at construction; `cost` and
/// `quantity` are mutated in place by the discount and restock workflows.
/// Codes are not unique: two records may legally share one, and search
/// returns them all.
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: f64,
    pub quantity: i64,
}

impl Shoe {
    /// Build a shoe from the five raw fields.
    ///
    /// This is the validation boundary: cost and quantity are coerced here,
    /// and a record either constructs whole or not at all. No partially
    /// populated shoe ever reaches the inventory.
    pub fn from_fields(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<Self> {
        Ok(Self {
            country: country.to_string(),
            code: code.to_string(),
            product: product.to_string(),
            cost: parse_cost(cost)?,
            quantity: parse_quantity(quantity)?,
        })
    }

    /// Total stock value of this record: unit cost times quantity on hand.
    pub fn value(&self) -> f64 {
        self.cost * self.quantity as f64
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country:  {}", self.country)?;
        writeln!(f, "Code:     {}", self.code)?;
        writeln!(f, "Product:  {}", self.product)?;
        writeln!(f, "Cost:     {}", self.cost)?;
        write!(f, "Quantity: {}", self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_from_raw_fields() {
        let shoe = Shoe::from_fields("South Africa", "SKU44386", "Air Max 90", "59.99", "20")
            .unwrap();
        assert_eq!(shoe.country, "South Africa");
        assert_eq!(shoe.code, "SKU44386");
        assert_eq!(shoe.product, "Air Max 90");
        assert_eq!(shoe.cost, 59.99);
        assert_eq!(shoe.quantity, 20);
    }

    #[test]
    fn tolerates_surrounding_whitespace_in_numerics() {
        let shoe = Shoe::from_fields("UK", "SKU1", "Boot", " 10.5 ", " 4 ").unwrap();
        assert_eq!(shoe.cost, 10.5);
        assert_eq!(shoe.quantity, 4);
    }

    #[test]
    fn rejects_unparseable_cost() {
        let err = Shoe::from_fields("UK", "SKU1", "Boot", "abc", "4").unwrap_err();
        assert!(matches!(err, StockError::Conversion { wanted: "cost", .. }));
    }

    #[test]
    fn rejects_unparseable_quantity() {
        let err = Shoe::from_fields("UK", "SKU1", "Boot", "10.5", "four").unwrap_err();
        assert!(matches!(
            err,
            StockError::Conversion {
                wanted: "quantity",
                ..
            }
        ));
    }

    #[test]
    fn fractional_quantity_is_not_coerced() {
        let err = Shoe::from_fields("UK", "SKU1", "Boot", "10.5", "4.5").unwrap_err();
        assert!(matches!(
            err,
            StockError::Conversion {
                wanted: "quantity",
                ..
            }
        ));
    }

    #[test]
    fn value_is_cost_times_quantity() {
        let shoe = Shoe::from_fields("UK", "SKU1", "Boot", "19.99", "4").unwrap();
        assert_eq!(shoe.value(), 79.96);
    }

    #[test]
    fn display_renders_all_five_fields() {
        let shoe = Shoe::from_fields("UK", "SKU1", "Boot", "10.5", "4").unwrap();
        let rendered = shoe.to_string();
        assert!(rendered.contains("Country:  UK"));
        assert!(rendered.contains("Code:     SKU1"));
        assert!(rendered.contains("Product:  Boot"));
        assert!(rendered.contains("Cost:     10.5"));
        assert!(rendered.contains("Quantity: 4"));
    }
}
