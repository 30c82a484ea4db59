//! # Validation Module
//!
//! Turns the raw text of an input field into a typed value.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Webview                                                      │
//! │  └── Sends the field text exactly as typed                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim surrounding whitespace                                       │
//! │  ├── Empty → Required                                                  │
//! │  └── Not a number → NotAnInteger / NotANumber                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── PRIMARY KEY uniqueness on product_id                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ranges are deliberately not checked: a negative quantity or price is
//! stored as typed.

use crate::error::{InputError, InputResult};
use crate::types::Field;

/// Parses a whole-number field.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_integer;
/// use stockroom_core::Field;
///
/// assert_eq!(parse_integer(Field::Quantity, " 12 ").unwrap(), 12);
/// assert!(parse_integer(Field::Quantity, "abc").is_err());
/// assert!(parse_integer(Field::Quantity, "2.5").is_err());
/// ```
pub fn parse_integer(field: Field, raw: &str) -> InputResult<i64> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(InputError::Required { field });
    }

    value.parse::<i64>().map_err(|_| InputError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

/// Parses a decimal field.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::parse_decimal;
/// use stockroom_core::Field;
///
/// assert_eq!(parse_decimal(Field::PricePerUnit, "2.50").unwrap(), 2.5);
/// assert_eq!(parse_decimal(Field::Rating, "4").unwrap(), 4.0);
/// assert!(parse_decimal(Field::Rating, "four").is_err());
/// assert!(parse_decimal(Field::Rating, "nan").is_err());
/// ```
pub fn parse_decimal(field: Field, raw: &str) -> InputResult<f64> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(InputError::Required { field });
    }

    let not_a_number = || InputError::NotANumber {
        field,
        value: value.to_string(),
    };

    // "nan" and "inf" parse, but SQLite cannot hold them as REAL.
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(not_a_number()),
    }
}

/// Parses the product id field.
pub fn parse_product_id(raw: &str) -> InputResult<i64> {
    parse_integer(Field::ProductId, raw)
}

/// Parses the quantity field.
pub fn parse_quantity(raw: &str) -> InputResult<i64> {
    parse_integer(Field::Quantity, raw)
}

/// Parses the price-per-unit field.
pub fn parse_price(raw: &str) -> InputResult<f64> {
    parse_decimal(Field::PricePerUnit, raw)
}

/// Parses the rating field.
pub fn parse_rating(raw: &str) -> InputResult<f64> {
    parse_decimal(Field::Rating, raw)
}

// =============================================================================
// Unit Tests
// =============================================================================
