use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Single-operator shoe inventory ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to operate on (overrides the config file)
    #[arg(short, long, global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the whole inventory
    #[command(alias = "ls")]
    List,

    /// Search products by exact code
    #[command(alias = "s")]
    Search {
        /// Product code to look up (case-sensitive)
        code: String,
    },

    /// Add a product to the inventory
    #[command(alias = "a")]
    Add {
        /// Country of origin (prompted for when omitted)
        country: Option<String>,

        /// Product code
        code: Option<String>,

        /// Product name
        product: Option<String>,

        /// Unit cost
        cost: Option<String>,

        /// Quantity in stock
        quantity: Option<String>,
    },

    /// Restock the product(s) with the lowest quantity
    Restock,

    /// Discount the product(s) with the highest quantity
    Discount,

    /// Total stock value of each product
    #[command(alias = "t")]
    Value,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., inventory-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
