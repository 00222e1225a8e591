//! # Rendering
//!
//! Turns command results into what the clerk reads.
//!
//! Text mode uses the store's wording and the configured currency format.
//! JSON mode prints each DTO as one line of camelCase JSON, with money as
//! integer cents.

use serde::Serialize;
use std::io::{self, Write};
use tracing::warn;

use crate::commands::{ProductDto, PurchaseDto, ReceiptDto, StatisticsDto};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Writes `value` in the configured output format.
///
/// `text` produces the human-readable form; it is not called in JSON mode.
/// A value that cannot be serialized is replaced by an `INTERNAL` error
/// document, so JSON consumers always get one JSON line per result.
pub fn emit<W, T, F>(out: &mut W, config: &ConfigState, value: &T, text: F) -> io::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce(&T, &ConfigState) -> String,
{
    match config.output {
        OutputFormat::Text => writeln!(out, "{}", text(value, config)),
        OutputFormat::Json => {
            let line = match serde_json::to_string(value) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Result could not be serialized");
                    let err = ApiError::internal(format!("Could not render the result: {}.", e));
                    serde_json::to_string(&err).map_err(io::Error::other)?
                }
            };
            writeln!(out, "{}", line)
        }
    }
}

/// Writes a failed command.
pub fn emit_error<W: Write>(out: &mut W, config: &ConfigState, err: &ApiError) -> io::Result<()> {
    emit(out, config, err, |err, _| err.message.clone())
}

// =============================================================================
// Text Renderers
// =============================================================================

pub fn product_added(_product: &ProductDto, _config: &ConfigState) -> String {
    "Product added successfully.".to_string()
}

pub fn inventory(products: &[ProductDto], config: &ConfigState) -> String {
    if products.is_empty() {
        return "The inventory is empty.".to_string();
    }
    titled("--- INVENTORY ---", products, config)
}

pub fn search_results(products: &[ProductDto], config: &ConfigState) -> String {
    if products.is_empty() {
        return "No products were found that match the search.".to_string();
    }
    titled("--- SEARCH RESULTS ---", products, config)
}

pub fn statistics(stats: &Option<StatisticsDto>, config: &ConfigState) -> String {
    match stats {
        None => "No products to show statistics for.".to_string(),
        Some(stats) => format!(
            "--- STATISTICS ---\nCheapest product: {} ({})\nMost expensive product: {} ({})",
            stats.cheapest.name,
            config.format_amount(stats.cheapest.price()),
            stats.most_expensive.name,
            config.format_amount(stats.most_expensive.price()),
        ),
    }
}

pub fn purchase(sale: &PurchaseDto, config: &ConfigState) -> String {
    format!(
        "Purchase successful.\nSubtotal: {}",
        config.format_money(sale.subtotal())
    )
}

pub fn receipt(receipt: &ReceiptDto, config: &ConfigState) -> String {
    let mut text = format!(
        "Thank you for using the {}.\nTotal accumulated sales: {}",
        config.store_name,
        config.format_money(receipt.total_sales())
    );
    if receipt.purchase_count > 0 {
        text.push_str(&format!(
            "\nPurchases: {} | Units sold: {}",
            receipt.purchase_count, receipt.units_sold
        ));
    }
    text
}

/// One inventory line.
pub fn product_line(product: &ProductDto, config: &ConfigState) -> String {
    format!(
        "Product: {} | Price: {} | Stock: {}",
        product.name,
        config.format_amount(product.price()),
        product.stock
    )
}

fn titled(title: &str, products: &[ProductDto], config: &ConfigState) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(title.to_string());
    lines.extend(products.iter().map(|p| product_line(p, config)));
    lines.join("\n")
}
