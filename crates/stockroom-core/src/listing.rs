//! # Listing Module
//!
//! Renders the product list and the aggregate total label.
//!
//! ## Refresh Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  After every add / update / delete (and at startup):                    │
//! │                                                                         │
//! │  list_all() ──► InventoryView::render(&rows)                           │
//! │                      │                                                  │
//! │                      ├──► one line per row:                             │
//! │                      │    "ID: 1, Name: Widget, Qty: 10,                │
//! │                      │     Price per Unit: 2.50, Total Price: 25.00,    │
//! │                      │     Rating: 4.5"                                 │
//! │                      │                                                  │
//! │                      └──► "Total Price of All Products: 25.00"          │
//! │                                                                         │
//! │  The whole view is rebuilt from a fresh read; nothing is patched.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selecting a line goes the other way: [`parse_listing_id`] pulls the id back
//! out of the text so the row can be reloaded.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InputError, InputResult};
use crate::types::Product;

/// Prefix of the aggregate label.
pub const AGGREGATE_PREFIX: &str = "Total Price of All Products: ";

/// Formats a float without a fixed precision.
///
/// Integral values keep a trailing `.0` (`3.0`, not `3`) so a rating reads
/// the same in the list as it was typed. Magnitudes from `1e16` up, or below
/// `1e-4`, switch to exponent form with a signed two-digit exponent.
///
/// ## Example
/// ```rust
/// use stockroom_core::listing::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(4.5), "4.5");
/// assert_eq!(format_float(9.99), "9.99");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(0.00001), "1e-05");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-5".
    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Renders one row of the product list.
pub fn format_listing_line(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Qty: {}, Price per Unit: {:.2}, Total Price: {:.2}, Rating: {}",
        product.product_id,
        product.name,
        product.quantity,
        product.price_per_unit,
        product.total_price(),
        format_float(product.rating)
    )
}

/// Sum of quantity × unit price across all rows.
pub fn aggregate_total(products: &[Product]) -> f64 {
    products.iter().map(Product::total_price).sum()
}

/// Renders the aggregate label for a given total.
pub fn format_aggregate(total: f64) -> String {
    format!("{AGGREGATE_PREFIX}{total:.2}")
}

/// Extracts the product id from a rendered list line.
///
/// Reads the text between the first `": "` and the first `", "`, so names
/// containing commas do not confuse it.
///
/// ## Example
/// ```rust
/// use stockroom_core::listing::parse_listing_id;
///
/// let line = "ID: 12, Name: Bolt, nut, Qty: 1, Price per Unit: 0.10, Total Price: 0.10, Rating: 2.0";
/// assert_eq!(parse_listing_id(line).unwrap(), 12);
/// ```
pub fn parse_listing_id(line: &str) -> InputResult<i64> {
    let malformed = || InputError::MalformedListing {
        line: line.to_string(),
    };

    let head = line.split(", ").next().unwrap_or_default();
    let id_text = head.split(": ").nth(1).ok_or_else(malformed)?;

    id_text.trim().parse::<i64>().map_err(|_| malformed())
}

// =============================================================================
// Inventory View
// =============================================================================

/// What the list box and the total label currently show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryView {
    /// One formatted line per row, in storage order.
    pub lines: Vec<String>,

    /// The aggregate label text.
    pub aggregate_label: String,
}

impl InventoryView {
    /// Builds the view from a full read of the table.
    pub fn render(products: &[Product]) -> Self {
        InventoryView {
            lines: products.iter().map(format_listing_line).collect(),
            aggregate_label: format_aggregate(aggregate_total(products)),
        }
    }

    /// Returns the line at `index`, if the list has that many entries.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines shown.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for InventoryView {
    fn default() -> Self {
        InventoryView {
            lines: Vec::new(),
            aggregate_label: format_aggregate(0.0),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
