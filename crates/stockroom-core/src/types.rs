//! # Domain Types
//!
//! ## The Product Record
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products                                                               │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  product_id      INTEGER PRIMARY KEY   user-supplied, never changes    │
//! │  name            TEXT                                                   │
//! │  quantity        INTEGER               ≥ 0 expected, not enforced      │
//! │  price_per_unit  REAL                  ≥ 0 expected, not enforced      │
//! │  rating          REAL                  any value                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike most inventory systems the id is typed in by the user rather than
//! generated, so the same id can be re-used after a delete.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// One inventory record, keyed by `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Primary key, chosen by the user.
    pub product_id: i64,

    /// Display name.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Price of one unit.
    pub price_per_unit: f64,

    /// Star rating.
    pub rating: f64,
}

impl Product {
    /// Creates a product from its five values.
    pub fn new(
        product_id: i64,
        name: impl Into<String>,
        quantity: i64,
        price_per_unit: f64,
        rating: f64,
    ) -> Self {
        Product {
            product_id,
            name: name.into(),
            quantity,
            price_per_unit,
            rating,
        }
    }

    /// Value of the stock held for this product (quantity × unit price).
    #[inline]
    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.price_per_unit
    }
}

// =============================================================================
// Field
// =============================================================================

/// The editable fields of a product, named as the form labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    ProductId,
    Name,
    Quantity,
    PricePerUnit,
    Rating,
}

impl Field {
    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Field::ProductId => "Product ID",
            Field::Name => "Name",
            Field::Quantity => "Quantity",
            Field::PricePerUnit => "Price per Unit",
            Field::Rating => "Rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price() {
        let product = Product::new(1, "Widget", 10, 2.50, 4.5);
        assert!((product.total_price() - 25.0).abs() < 1e-9);

        let empty = Product::new(2, "Gone", 0, 9.99, 1.0);
        assert_eq!(empty.total_price(), 0.0);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::ProductId.to_string(), "Product ID");
        assert_eq!(Field::PricePerUnit.to_string(), "Price per Unit");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(3, "Gadget", 3, 9.99, 3.0);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], 3);
        assert_eq!(json["pricePerUnit"], 9.99);
    }
}
