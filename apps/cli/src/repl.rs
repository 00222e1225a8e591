//! # Interactive Session
//!
//! The menu loop. Generic over its reader and writer so tests can script a
//! whole session with an in-memory cursor.
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner + menu                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Select an option:" ◄──────────────────────────────────┐              │
//! │       │                                                  │              │
//! │       ├── 1..5 ──► prompt loop ──► command ──► render ───┤              │
//! │       ├── help / unknown ──► menu ───────────────────────┘              │
//! │       ├── 0 / quit ──► receipt ──► SessionEnd::Quit                     │
//! │       └── end of input ──► receipt ──► SessionEnd::EndOfInput           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field prompts repeat until the value is valid. End of input at a field
//! prompt abandons that operation; nothing is written to the ledger until
//! every field has been accepted.

use std::io::{self, BufRead, Write};

use ministore_core::validation::{validate_price, validate_product_name, validate_stock};
use ministore_core::{CoreError, Money};
use tracing::debug;

use crate::commands::{product, sale};
use crate::error::{ApiError, ErrorCode};
use crate::input::{is_confirmation, parse_count, parse_price, MenuChoice};
use crate::render;
use crate::state::{ConfigState, LedgerState};

const MENU: &str = "\
--- MENU ---
1. Add product
2. List inventory
3. Buy product
4. Statistics
5. Search product
0. Exit";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The clerk chose exit
    Quit,

    /// Input closed at the menu prompt
    EndOfInput,

    /// Ctrl-C
    Interrupted,
}

/// One clerk session over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    ledger: LedgerState,
    config: ConfigState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, ledger: LedgerState, config: ConfigState) -> Self {
        Session {
            input,
            output,
            ledger,
            config,
        }
    }

    /// The ledger this session writes to.
    pub fn ledger(&self) -> &LedgerState {
        &self.ledger
    }

    /// Gives back the writer, for inspecting a finished session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// Only I/O failures are returned as errors; every ledger or input
    /// error is shown to the clerk and the loop continues.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        writeln!(self.output, "Welcome to the {}.", self.config.store_name)?;
        self.show_menu()?;

        loop {
            let Some(line) = self.ask("Select an option:")? else {
                self.finish()?;
                return Ok(SessionEnd::EndOfInput);
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(&ApiError::from(e))?;
                    self.show_menu()?;
                    continue;
                }
            };

            debug!(?choice, "Menu choice");
            match choice {
                MenuChoice::AddProduct => self.add_product()?,
                MenuChoice::ListInventory => self.list_inventory()?,
                MenuChoice::BuyProduct => self.buy_product()?,
                MenuChoice::Statistics => self.statistics()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Help => self.show_menu()?,
                MenuChoice::Exit => {
                    self.finish()?;
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn add_product(&mut self) -> io::Result<()> {
        let Some(name) = self.ask("Enter the product name:")? else {
            return Ok(());
        };
        if let Err(e) = validate_product_name(&name) {
            return self.report(&ApiError::from(e));
        }
        if let Some(existing) = product::find_product(&self.ledger, &name) {
            return self.report(&ApiError::from(CoreError::DuplicateName(existing.name)));
        }

        let dotted_thousands = self.config.dotted_thousands;
        let Some(price) = self.ask_until("Enter the price:", |raw| {
            let price = parse_price(raw, dotted_thousands)?;
            validate_price(price)?;
            Ok(price)
        })?
        else {
            return Ok(());
        };

        let Some(stock) = self.ask_until("Enter the stock:", |raw| {
            let stock = parse_count(raw, "stock")?;
            validate_stock(stock)?;
            Ok(stock)
        })?
        else {
            return Ok(());
        };

        match product::add_product(&self.ledger, &name, price, stock) {
            Ok(added) => self.emit(&added, render::product_added),
            Err(e) => self.report(&e),
        }
    }

    fn list_inventory(&mut self) -> io::Result<()> {
        let products = product::list_inventory(&self.ledger);
        self.emit(products.as_slice(), render::inventory)
    }

    fn buy_product(&mut self) -> io::Result<()> {
        let products = product::list_inventory(&self.ledger);
        if products.is_empty() {
            return self.say("The inventory is empty. Cannot buy.");
        }
        self.emit(products.as_slice(), render::inventory)?;

        let ledger = self.ledger.clone();
        let Some(chosen) = self.ask_until("Enter the name of the product to buy:", |raw| {
            validate_product_name(raw)?;
            product::find_product(&ledger, raw).ok_or_else(|| {
                ApiError::new(
                    ErrorCode::NotFound,
                    format!("The product '{}' does not exist. Please try again.", raw.trim()),
                )
            })
        })?
        else {
            return Ok(());
        };

        let Some(quote) = self.ask_until("Enter the quantity:", |raw| {
            let quantity = parse_count(raw, "quantity")?;
            sale::quote_purchase(&ledger, &chosen.name, quantity)
        })?
        else {
            return Ok(());
        };

        if self.config.confirm_purchases {
            let question = format!(
                "Confirm the purchase of {} of {}? Subtotal: {} (y/n)",
                quote.quantity,
                quote.product_name,
                self.config.format_money(Money::from_cents(quote.subtotal_cents))
            );
            match self.ask(&question)? {
                Some(answer) if is_confirmation(&answer) => {}
                Some(_) => return self.say("Purchase canceled."),
                None => return Ok(()),
            }
        }

        match sale::purchase(&self.ledger, &quote.product_name, quote.quantity) {
            Ok(sold) => self.emit(&sold, render::purchase),
            Err(e) => self.report(&e),
        }
    }

    fn statistics(&mut self) -> io::Result<()> {
        let stats = product::get_statistics(&self.ledger);
        self.emit(&stats, render::statistics)
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(query) = self.ask("Enter the name to search:")? else {
            return Ok(());
        };
        if query.trim().is_empty() {
            return Ok(());
        }

        let found = product::search_products(&self.ledger, &query);
        self.emit(found.as_slice(), render::search_results)
    }

    fn finish(&mut self) -> io::Result<()> {
        let receipt = sale::get_receipt(&self.ledger);
        self.emit(&receipt, render::receipt)?;
        self.output.flush()
    }

    // =========================================================================
    // Terminal Helpers
    // =========================================================================

    fn show_menu(&mut self) -> io::Result<()> {
        self.say(MENU)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn emit<T, F>(&mut self, value: &T, text: F) -> io::Result<()>
    where
        T: serde::Serialize + ?Sized,
        F: FnOnce(&T, &ConfigState) -> String,
    {
        render::emit(&mut self.output, &self.config, value, text)
    }

    fn report(&mut self, err: &ApiError) -> io::Result<()> {
        debug!(code = ?err.code, message = %err.message, "Reported to clerk");
        render::emit_error(&mut self.output, &self.config, err)
    }

    /// Prompts and reads one line without its line ending. `None` at end of
    /// input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompts until `accept` takes the answer. `None` at end of input.
    fn ask_until<T, F>(&mut self, prompt: &str, mut accept: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, ApiError>,
    {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match accept(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.report(&e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (SessionEnd, String, LedgerState) {
        let ledger = LedgerState::new();
        let mut session = Session::new(
            Cursor::new(script.to_string()),
            Vec::new(),
            ledger.clone(),
            ConfigState::default(),
        );
        let end = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (end, output, ledger)
    }

    #[test]
    fn test_quit_prints_receipt() {
        let (end, output, _) = run_script("0\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.starts_with("Welcome to the Mini-Store.\n--- MENU ---"));
        assert!(output.ends_with("Total accumulated sales: $0.0\n"));
    }

    #[test]
    fn test_end_of_input_prints_receipt() {
        let (end, output, _) = run_script("");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.contains("Thank you for using the Mini-Store."));
    }

    #[test]
    fn test_unknown_option_shows_menu_again() {
        let (_, output, _) = run_script("9\n0\n");
        assert!(output.contains("Invalid option. Please try again."));
        assert_eq!(output.matches("--- MENU ---").count(), 2);
    }

    #[test]
    fn test_windows_line_endings() {
        let (_, _, ledger) = run_script("1\r\nTea\r\n1.5\r\n3\r\n0\r\n");
        let tea = product::find_product(&ledger, "tea").unwrap();
        assert_eq!(tea.name, "Tea");
        assert_eq!(tea.price_cents, 150);
    }

    #[test]
    fn test_abandoned_add_writes_nothing() {
        let (end, _, ledger) = run_script("1\nTea\n2.5\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(product::list_inventory(&ledger).is_empty());
    }
}
