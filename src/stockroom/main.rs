use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stockroom::api::{CmdMessage, MessageLevel, StockApi, ValueRow};
use stockroom::commands::helpers::{parse_choice, parse_discount_amount, parse_restock_amount};
use stockroom::config::StockConfig;
use stockroom::error::{Result, StockError};
use stockroom::model::{parse_cost, parse_quantity, Shoe};
use stockroom::store::fs::FileSource;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockApi<FileSource>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { code }) => handle_search(&ctx, &code),
        Some(Commands::Add {
            country,
            code,
            product,
            cost,
            quantity,
        }) => handle_add(&mut ctx, country, code, product, cost, quantity),
        Some(Commands::Restock) => handle_restock(&mut ctx),
        Some(Commands::Discount) => handle_discount(&mut ctx),
        Some(Commands::Value) => handle_value(&ctx),
        Some(Commands::Config { key, value }) => handle_config(key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StockConfig::load(&cwd).unwrap_or_default();
    let file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.get_inventory_file().to_string());

    let mut api = StockApi::new(FileSource::new(file));
    match api.load() {
        Ok(()) => {}
        // A missing ledger is not fatal: start empty and let the first
        // add recreate the file.
        Err(e @ StockError::SourceUnavailable { .. }) => {
            eprintln!("{}", format!("{}, starting with an empty ledger", e).red());
        }
        Err(e) => return Err(e),
    }

    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_inventory(&result.listed_shoes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, code: &str) -> Result<()> {
    let result = ctx.api.search(code)?;
    print_full_shoes(&result.listed_shoes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    country: Option<String>,
    code: Option<String>,
    product: Option<String>,
    cost: Option<String>,
    quantity: Option<String>,
) -> Result<()> {
    let country = field_or_prompt(country, "What country: ")?;
    let code = field_or_prompt(code, "Enter the shoe code: ")?;
    let product = field_or_prompt(product, "Enter the shoe product: ")?;
    let cost = validated_prompt(cost, "Enter the shoe unit cost: ", "Enter a valid price.", |raw| {
        parse_cost(raw).is_ok()
    })?;
    let quantity = validated_prompt(
        quantity,
        "Enter the shoe quantity: ",
        "Enter a whole number.",
        |raw| parse_quantity(raw).is_ok(),
    )?;

    let result = ctx.api.add(&country, &code, &product, &cost, &quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restock(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.restock_lowest(|shoe| {
        println!("\n{}", "Shoe with the lowest quantity:".magenta());
        println!("{}\n", shoe);
        prompt_restock_amount(&shoe.product)
    })?;
    if result.messages.is_empty() {
        println!("No products in the inventory.");
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_discount(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.discount_highest(|shoe| {
        println!("\n{}", "Product with the highest quantity for sale:".magenta());
        println!("{}\n", shoe);
        if !prompt_discount_choice(&shoe.product, &shoe.country) {
            return None;
        }
        prompt_discount_amount()
    })?;
    if result.messages.is_empty() {
        println!("No products in the inventory.");
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_value(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.value_per_item()?;
    print_values(&result.value_rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = StockConfig::load(&cwd).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) => println!("inventory-file = {}", config.get_inventory_file()),
        (Some("inventory-file"), None) => println!("{}", config.get_inventory_file()),
        (Some("inventory-file"), Some(v)) => {
            config.set_inventory_file(&v);
            config.save(&cwd)?;
            println!("{}", format!("inventory-file set to {}", v).green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

// --- Interactive prompts ---
//
// The core validates, the CLI re-prompts: each loop keeps asking until the
// command-layer parser accepts the answer. EOF on stdin falls back to the
// non-mutating choice.

fn read_line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(StockError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(line.trim().to_string())
}

fn field_or_prompt(given: Option<String>, message: &str) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => read_line(message),
    }
}

/// Use the given field as-is (the API will reject it if bad), or prompt
/// until the validator accepts.
fn validated_prompt<V>(
    given: Option<String>,
    message: &str,
    hint: &str,
    validate: V,
) -> Result<String>
where
    V: Fn(&str) -> bool,
{
    if let Some(value) = given {
        return Ok(value);
    }
    loop {
        let raw = read_line(message)?;
        if validate(&raw) {
            return Ok(raw);
        }
        eprintln!("{}", hint.red());
    }
}

fn prompt_restock_amount(product: &str) -> u32 {
    loop {
        let raw = match read_line(&format!(
            "Enter the quantity of {} to add (0 to skip): ",
            product
        )) {
            Ok(raw) => raw,
            Err(_) => return 0,
        };
        match parse_restock_amount(&raw) {
            Ok(amount) => return amount,
            Err(_) => eprintln!("{}", "Enter a non-negative whole number.".red()),
        }
    }
}

fn prompt_discount_choice(product: &str, country: &str) -> bool {
    loop {
        let raw = match read_line(&format!("Discount {} ({})? (yes/no): ", product, country)) {
            Ok(raw) => raw,
            Err(_) => return false,
        };
        match parse_choice(&raw) {
            Ok(choice) => return choice,
            Err(_) => eprintln!("{}", "Enter yes or no.".red()),
        }
    }
}

fn prompt_discount_amount() -> Option<f64> {
    loop {
        let raw = read_line("Enter the amount to discount off the shoe: ").ok()?;
        match parse_discount_amount(&raw) {
            Ok(amount) => return Some(amount),
            Err(_) => eprintln!("{}", "Entry not a valid amount. Please enter a number.".red()),
        }
    }
}

// --- Output ---

const SEP: &str = "⎯";

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_shoes(shoes: &[Shoe]) {
    for (i, shoe) in shoes.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------");
        }
        println!("{}", shoe);
    }
}

fn print_banner(title: &str) {
    let bar = SEP.repeat(20);
    println!("\n{}", format!("{} [{}] {}", bar, title, bar).magenta());
}

fn print_inventory(shoes: &[Shoe]) {
    if shoes.is_empty() {
        println!("No products in the inventory.");
        return;
    }
    print_banner("Inventory");
    let rows: Vec<[String; 5]> = shoes
        .iter()
        .map(|s| {
            [
                s.country.clone(),
                s.code.clone(),
                s.product.clone(),
                s.cost.to_string(),
                s.quantity.to_string(),
            ]
        })
        .collect();
    print_table(
        ["Country", "Code", "Product", "Cost", "Quantity"],
        [false, false, false, true, true],
        &rows,
    );
}

fn print_values(value_rows: &[ValueRow]) {
    if value_rows.is_empty() {
        println!("No products in the inventory.");
        return;
    }
    print_banner("Total Value For Each Shoe");
    let rows: Vec<[String; 4]> = value_rows
        .iter()
        .map(|r| {
            [
                r.country.clone(),
                r.product.clone(),
                r.code.clone(),
                r.value.to_string(),
            ]
        })
        .collect();
    print_table(
        ["Country", "Product", "Code", "Total Value"],
        [false, false, false, true],
        &rows,
    );
}

fn print_table<const N: usize>(headers: [&str; N], numeric: [bool; N], rows: &[[String; N]]) {
    let mut widths: [usize; N] = headers.map(|h| h.width());
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad_cell(h, widths[i], false))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.trim_end().bold());
    println!("{}", SEP.repeat(header.trim_end().width()).dimmed());

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_cell(cell, widths[i], numeric[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Width-aware padding; `{:<width$}` counts chars, not columns.
fn pad_cell(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}
