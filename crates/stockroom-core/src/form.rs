//! # Form Module
//!
//! The five input fields of the main window.
//!
//! The fields hold raw text, exactly as typed, and are only turned into a
//! [`Product`] when an action needs one. When parsing fails nothing is
//! cleared, so the user can correct the offending field.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InputResult;
use crate::listing::format_float;
use crate::types::Product;
use crate::validation::{parse_price, parse_product_id, parse_quantity, parse_rating};

/// Raw contents of the main form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormFields {
    pub product_id: String,
    pub name: String,
    pub quantity: String,
    pub price_per_unit: String,
    pub rating: String,
}

impl FormFields {
    /// Fields pre-filled with a product's current values.
    pub fn from_product(product: &Product) -> Self {
        FormFields {
            product_id: product.product_id.to_string(),
            name: product.name.clone(),
            quantity: product.quantity.to_string(),
            price_per_unit: format_float(product.price_per_unit),
            rating: format_float(product.rating),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = FormFields::default();
    }

    /// Checks if every field is empty.
    pub fn is_empty(&self) -> bool {
        *self == FormFields::default()
    }

    /// Parses just the id field (Modify and Delete only need the id).
    pub fn parse_product_id(&self) -> InputResult<i64> {
        parse_product_id(&self.product_id)
    }

    /// Parses all five fields into a product.
    ///
    /// Fields are checked in form order: id, quantity, price, rating. The
    /// name is taken as typed.
    pub fn parse_product(&self) -> InputResult<Product> {
        let product_id = parse_product_id(&self.product_id)?;
        let quantity = parse_quantity(&self.quantity)?;
        let price_per_unit = parse_price(&self.price_per_unit)?;
        let rating = parse_rating(&self.rating)?;

        Ok(Product {
            product_id,
            name: self.name.clone(),
            quantity,
            price_per_unit,
            rating,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::types::Field;

    fn fields(id: &str, name: &str, qty: &str, price: &str, rating: &str) -> FormFields {
        FormFields {
            product_id: id.to_string(),
            name: name.to_string(),
            quantity: qty.to_string(),
            price_per_unit: price.to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn test_parse_product() {
        let product = fields("1", "Widget", "10", "2.50", "4.5")
            .parse_product()
            .unwrap();
        assert_eq!(product, Product::new(1, "Widget", 10, 2.50, 4.5));
    }

    #[test]
    fn test_parse_product_reports_first_bad_field() {
        let err = fields("1", "Widget", "abc", "x", "4.5")
            .parse_product()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NotAnInteger {
                field: Field::Quantity,
                value: "abc".to_string()
            }
        );

        let err = fields("", "Widget", "1", "1", "1").parse_product().unwrap_err();
        assert_eq!(err.field(), Some(Field::ProductId));
    }

    #[test]
    fn test_name_is_not_validated() {
        let product = fields("5", "", "0", "0", "0").parse_product().unwrap();
        assert_eq!(product.name, "");
    }

    #[test]
    fn test_from_product_and_clear() {
        let mut form = FormFields::from_product(&Product::new(2, "Gadget", 3, 9.99, 3.0));
        assert_eq!(form, fields("2", "Gadget", "3", "9.99", "3.0"));
        assert_eq!(form.parse_product_id().unwrap(), 2);

        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_from_product_round_trips_through_parse() {
        let original = Product::new(9, "Nut", 1, 0.1, 5.0);
        let parsed = FormFields::from_product(&original).parse_product().unwrap();
        assert_eq!(parsed, original);
    }
}
