//! # Input Parsing
//!
//! Turns what the clerk typed into typed values. Range rules (positive
//! price, non-negative stock) are not checked here; the ledger's validators
//! own those.
//!
//! ## Price Formats
//! ```text
//! "2.50"    → 250 cents
//! "2.5"     → 250 cents
//! ".5"      → 50 cents
//! "5,500"   → 550000 cents     commas are always dropped
//! "5.500"   → 550 cents        dotted_thousands = false (default)
//! "5.500"   → 550000 cents     dotted_thousands = true
//! "1.005"   → 100 cents        extra digits round half to even
//! ```

use std::str::FromStr;

use ministore_core::money::{Money, CENTS_PER_UNIT};
use thiserror::Error;

/// Text that could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The {field} cannot be empty.")]
    Blank { field: &'static str },

    #[error("Invalid {field}. Please enter a valid number.")]
    NotANumber { field: &'static str },

    #[error("Invalid {field}. Please enter an integer.")]
    NotAnInteger { field: &'static str },

    #[error("The {field} is too large.")]
    TooLarge { field: &'static str },

    #[error("Invalid option. Please try again.")]
    UnknownOption(String),
}

// =============================================================================
// Menu
// =============================================================================

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ListInventory,
    BuyProduct,
    Statistics,
    Search,
    Help,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let choice = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "add" => MenuChoice::AddProduct,
            "2" | "list" => MenuChoice::ListInventory,
            "3" | "buy" => MenuChoice::BuyProduct,
            "4" | "stats" | "statistics" => MenuChoice::Statistics,
            "5" | "search" => MenuChoice::Search,
            "h" | "help" | "?" => MenuChoice::Help,
            "0" | "q" | "quit" | "exit" => MenuChoice::Exit,
            _ => return Err(InputError::UnknownOption(raw.trim().to_string())),
        };
        Ok(choice)
    }
}

// =============================================================================
// Numbers
// =============================================================================

/// Parses a price typed by the clerk.
///
/// A leading sign is accepted so that `-3` reaches the price validator and
/// gets the "must be positive" message instead of a parse error.
pub fn parse_price(raw: &str, dotted_thousands: bool) -> Result<Money, InputError> {
    const FIELD: &str = "price";

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank { field: FIELD });
    }

    let mut text: String = trimmed.chars().filter(|c| *c != ',').collect();
    if dotted_thousands && looks_dotted_thousands(&text) {
        text.retain(|c| c != '.');
    }

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text.as_str()),
    };

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(InputError::NotANumber { field: FIELD });
    }

    let too_large = InputError::TooLarge { field: FIELD };
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| too_large.clone())?
    };

    let cents = whole
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|c| c.checked_add(fraction_cents(fraction)))
        .ok_or(too_large)?;

    Ok(Money::from_cents(if negative { -cents } else { cents }))
}

/// Parses a whole number such as a stock count or a quantity.
pub fn parse_count(raw: &str, field: &'static str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank { field });
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger { field })
}

/// `y` / `yes` in any casing confirms; anything else declines.
pub fn is_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

// `\d+\.\d{3}`
fn looks_dotted_thousands(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 3
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

// Fraction digits (ASCII, already checked) to cents, half to even beyond two
// places. May return 100 when rounding carries into the whole part.
fn fraction_cents(fraction: &str) -> i64 {
    let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
    let cents = digit(0) * 10 + digit(1);

    let rest = fraction.get(2..).unwrap_or("");
    let Some(first) = rest.bytes().next() else {
        return cents;
    };

    let round_up = match first {
        b'6'..=b'9' => true,
        b'5' => rest.bytes().skip(1).any(|b| b != b'0') || cents % 2 == 1,
        _ => false,
    };

    if round_up {
        cents + 1
    } else {
        cents
    }
}
