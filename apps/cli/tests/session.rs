//! Scripted terminal sessions.
//!
//! Each test feeds a whole conversation through an in-memory reader and
//! checks what the clerk would have seen, plus the ledger left behind.

use std::io::Cursor;

use ministore_cli::commands::{product, sale};
use ministore_cli::state::{ConfigState, LedgerState, OutputFormat};
use ministore_cli::{Session, SessionEnd};
use ministore_core::Money;

struct Transcript {
    end: SessionEnd,
    output: String,
    ledger: LedgerState,
}

fn run_with(config: ConfigState, lines: &[&str]) -> Transcript {
    let mut script = lines.join("\n");
    script.push('\n');

    let ledger = LedgerState::new();
    let mut session = Session::new(Cursor::new(script), Vec::new(), ledger.clone(), config);
    let end = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();

    Transcript { end, output, ledger }
}

fn run(lines: &[&str]) -> Transcript {
    run_with(ConfigState::default(), lines)
}

#[test]
fn add_buy_and_exit() {
    let t = run(&["1", "Milk", "2.50", "10", "3", "milk", "4", "y", "0"]);

    assert_eq!(t.end, SessionEnd::Quit);
    assert!(t.output.contains("Product added successfully."));
    assert!(t.output.contains("Confirm the purchase of 4 of Milk? Subtotal: $10.0 (y/n)"));
    assert!(t.output.contains("Purchase successful.\nSubtotal: $10.0"));
    assert!(t.output.ends_with(
        "Thank you for using the Mini-Store.\nTotal accumulated sales: $10.0\nPurchases: 1 | Units sold: 4\n"
    ));

    let milk = product::find_product(&t.ledger, "MILK").unwrap();
    assert_eq!(milk.stock, 6);
    assert_eq!(sale::total_sales(&t.ledger), Money::from_cents(1000));
}

#[test]
fn duplicate_name_is_rejected_before_price() {
    let t = run(&["1", "Milk", "2.50", "10", "1", "  MILK ", "0"]);

    assert!(t.output.contains("The product 'Milk' already exists in the inventory."));
    // The second add never asked for a price
    assert_eq!(t.output.matches("Enter the price:").count(), 1);
    assert_eq!(product::list_inventory(&t.ledger).len(), 1);
}

#[test]
fn invalid_fields_are_asked_again() {
    let t = run(&["1", "Tea", "abc", "-3", "0", "1.20", "2.5", "-1", "7", "0"]);

    assert!(t.output.contains("Invalid price. Please enter a valid number."));
    assert!(t.output.contains("The price must be a positive number."));
    assert!(t.output.contains("Invalid stock. Please enter an integer."));
    assert!(t
        .output
        .contains("The stock cannot be negative. Please enter a non-negative integer."));
    assert_eq!(t.output.matches("Enter the price:").count(), 4);
    assert_eq!(t.output.matches("Enter the stock:").count(), 3);

    let tea = product::find_product(&t.ledger, "tea").unwrap();
    assert_eq!(tea.price_cents, 120);
    assert_eq!(tea.stock, 7);
}

#[test]
fn blank_name_returns_to_menu() {
    let t = run(&["1", "   ", "0"]);

    assert!(t.output.contains("Name cannot be empty."));
    assert!(!t.output.contains("Enter the price:"));
    assert!(product::list_inventory(&t.ledger).is_empty());
}

#[test]
fn buy_on_empty_inventory_is_refused() {
    let t = run(&["3", "0"]);

    assert!(t.output.contains("The inventory is empty. Cannot buy."));
    assert!(!t.output.contains("Enter the quantity:"));
}

#[test]
fn buy_retries_name_and_quantity() {
    let t = run(&[
        "1", "Bread", "1.20", "5", //
        "3", "Cake", "bread", "0", "6", "5", "y", //
        "0",
    ]);

    assert!(t.output.contains("The product 'Cake' does not exist. Please try again."));
    assert!(t.output.contains("The quantity must be a positive number."));
    assert!(t.output.contains("Insufficient stock. Available stock: 5"));
    assert!(t.output.contains("Subtotal: $6.0"));

    assert_eq!(product::find_product(&t.ledger, "Bread").unwrap().stock, 0);
    assert_eq!(sale::total_sales(&t.ledger), Money::from_cents(600));
}

#[test]
fn declined_purchase_changes_nothing() {
    let t = run(&["1", "Egg", "1", "12", "3", "Egg", "2", "n", "0"]);

    assert!(t.output.contains("Purchase canceled."));
    assert!(t.output.contains("Total accumulated sales: $0.0\n"));
    assert!(!t.output.contains("Purchases:"));
    assert_eq!(product::find_product(&t.ledger, "egg").unwrap().stock, 12);
}

#[test]
fn purchase_without_confirmation() {
    let config = ConfigState {
        confirm_purchases: false,
        ..ConfigState::default()
    };
    let t = run_with(config, &["1", "Egg", "1", "12", "3", "Egg", "2", "0"]);

    assert!(!t.output.contains("Confirm the purchase"));
    assert_eq!(product::find_product(&t.ledger, "egg").unwrap().stock, 10);
}

#[test]
fn list_search_and_statistics() {
    let t = run(&[
        "4", //
        "1", "Bread", "1.20", "5", //
        "1", "Milk", "2.50", "10", //
        "1", "Egg", "1.00", "12", //
        "2", "5", "re", "5", "xyz", "5", "", "4", "0",
    ]);

    assert!(t.output.contains("No products to show statistics for."));
    assert!(t.output.contains(
        "--- INVENTORY ---\n\
         Product: Bread | Price: 1.2 | Stock: 5\n\
         Product: Milk | Price: 2.5 | Stock: 10\n\
         Product: Egg | Price: 1.0 | Stock: 12"
    ));
    assert!(t
        .output
        .contains("--- SEARCH RESULTS ---\nProduct: Bread | Price: 1.2 | Stock: 5\n"));
    assert!(t.output.contains("No products were found that match the search."));
    assert!(t.output.contains(
        "--- STATISTICS ---\nCheapest product: Egg (1.0)\nMost expensive product: Milk (2.5)"
    ));
}

#[test]
fn json_output_mode() {
    let config = ConfigState {
        output: OutputFormat::Json,
        confirm_purchases: false,
        ..ConfigState::default()
    };
    let t = run_with(config, &["1", "Milk", "2.50", "10", "3", "Milk", "11", "10", "4", "0"]);

    let documents: Vec<serde_json::Value> = t
        .output
        .lines()
        .filter(|line| line.starts_with('{') || line.starts_with('['))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let added = &documents[0];
    assert_eq!(added["name"], "Milk");
    assert_eq!(added["priceCents"], 250);

    let rejected = documents
        .iter()
        .find(|doc| doc["code"] == "INSUFFICIENT_STOCK")
        .unwrap();
    assert_eq!(rejected["available"], 10);

    let sold = documents.iter().find(|doc| doc["subtotalCents"].is_number()).unwrap();
    assert_eq!(sold["subtotalCents"], 2500);
    assert_eq!(sold["remainingStock"], 0);

    let receipt = documents.last().unwrap();
    assert_eq!(receipt["totalSalesCents"], 2500);
    assert_eq!(receipt["unitsSold"], 10);
}

#[test]
fn end_of_input_mid_purchase_abandons_it() {
    let script = "1\nMilk\n2.50\n10\n3\nMilk\n4\n";
    let ledger = LedgerState::new();
    let mut session = Session::new(
        Cursor::new(script.to_string()),
        Vec::new(),
        ledger.clone(),
        ConfigState::default(),
    );

    assert_eq!(session.run().unwrap(), SessionEnd::EndOfInput);
    assert_eq!(product::find_product(session.ledger(), "milk").unwrap().stock, 10);
    assert!(sale::total_sales(&ledger).is_zero());
}

#[test]
fn search_matches_long_names_and_keeps_spaces() {
    let long_name = "x".repeat(150);
    let t = run(&[
        "1", &long_name, "1", "1", //
        "1", "Rice", "3", "5", //
        "5", &long_name, "5", "ice ", "0",
    ]);

    assert!(t
        .output
        .contains(&format!("--- SEARCH RESULTS ---\nProduct: {} | Price: 1.0 | Stock: 1\n", long_name)));
    assert!(!t.output.contains("Invalid input"));
    // "ice " with its trailing space does not match "Rice"
    assert!(t.output.contains("No products were found that match the search."));
}
