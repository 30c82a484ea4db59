//! # Modify Dialog
//!
//! State machine behind the "Modify Product" pop-up.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   submit_modify (row found)                                             │
//! │          │                                                              │
//! │          ▼                                                              │
//! │     ┌─────────┐   Save, bad number     ┌─────────┐                      │
//! │     │  Open   │ ─────────────────────► │  Open   │  (error shown,       │
//! │     └────┬────┘                        └─────────┘   dialog stays)      │
//! │          │                                                              │
//! │          ├── Save, fields parse, store updated ──► Saved                │
//! │          │                                                              │
//! │          └── window dismissed ───────────────────► Cancelled            │
//! │                                                                         │
//! │  Saved and Cancelled are terminal: the id cannot be edited at any      │
//! │  point, and a closed dialog rejects further saves.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persisting is not done here. [`ModifyDialog::parse`] hands back the
//! product to write, and the caller calls [`ModifyDialog::mark_saved`] once
//! the store has accepted it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::listing::format_float;
use crate::types::Product;
use crate::validation::{parse_price, parse_quantity, parse_rating};

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DialogState {
    /// Visible and editable.
    Open,
    /// Changes written to the store; window closed.
    Saved,
    /// Closed without writing.
    Cancelled,
}

/// The editable fields of the dialog. The id is shown as a label only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DialogFields {
    pub name: String,
    pub quantity: String,
    pub price_per_unit: String,
    pub rating: String,
}

/// An open (or just closed) modify dialog for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ModifyDialog {
    product_id: i64,
    fields: DialogFields,
    state: DialogState,
}

impl ModifyDialog {
    /// Opens a dialog pre-filled from the product's current row.
    pub fn open(product: &Product) -> Self {
        ModifyDialog {
            product_id: product.product_id,
            fields: DialogFields {
                name: product.name.clone(),
                quantity: product.quantity.to_string(),
                price_per_unit: format_float(product.price_per_unit),
                rating: format_float(product.rating),
            },
            state: DialogState::Open,
        }
    }

    /// The id being edited. Fixed for the life of the dialog.
    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    /// Current field text.
    pub fn fields(&self) -> &DialogFields {
        &self.fields
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Checks if the dialog is still showing.
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Replaces the field text with what the user typed.
    pub fn edit(&mut self, fields: DialogFields) -> CoreResult<()> {
        self.ensure_open()?;
        self.fields = fields;
        Ok(())
    }

    /// Parses the fields into the product to write back.
    ///
    /// A parse failure leaves the dialog open with the text untouched.
    pub fn parse(&self) -> CoreResult<Product> {
        self.ensure_open()?;

        let quantity = parse_quantity(&self.fields.quantity)?;
        let price_per_unit = parse_price(&self.fields.price_per_unit)?;
        let rating = parse_rating(&self.fields.rating)?;

        Ok(Product {
            product_id: self.product_id,
            name: self.fields.name.clone(),
            quantity,
            price_per_unit,
            rating,
        })
    }

    /// Closes the dialog after the store accepted the update.
    pub fn mark_saved(&mut self) -> CoreResult<()> {
        self.ensure_open()?;
        self.state = DialogState::Saved;
        Ok(())
    }

    /// Closes the dialog without writing. Closing twice is harmless.
    pub fn cancel(&mut self) {
        if self.is_open() {
            self.state = DialogState::Cancelled;
        }
    }

    fn ensure_open(&self) -> CoreResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(CoreError::DialogClosed)
        }
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

    fn widget() -> Product {
        Product::new(1, "Widget", 10, 2.50, 4.5)
    }

    #[test]
    fn test_open_prefills_fields() {
        let dialog = ModifyDialog::open(&widget());

        assert!(dialog.is_open());
        assert_eq!(dialog.product_id(), 1);
        assert_eq!(dialog.fields().name, "Widget");
        assert_eq!(dialog.fields().quantity, "10");
        assert_eq!(dialog.fields().price_per_unit, "2.5");
        assert_eq!(dialog.fields().rating, "4.5");
    }

    #[test]
    fn test_parse_keeps_id() {
        let mut dialog = ModifyDialog::open(&widget());
        dialog
            .edit(DialogFields {
                name: "Widget XL".to_string(),
                quantity: "4".to_string(),
                price_per_unit: "3.75".to_string(),
                rating: "5".to_string(),
            })
            .unwrap();

        let product = dialog.parse().unwrap();
        assert_eq!(product, Product::new(1, "Widget XL", 4, 3.75, 5.0));
    }

    #[test]
    fn test_bad_input_keeps_dialog_open() {
        let mut dialog = ModifyDialog::open(&widget());
        let mut fields = dialog.fields().clone();
        fields.price_per_unit = "cheap".to_string();
        dialog.edit(fields).unwrap();

        let err = dialog.parse().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Input(InputError::NotANumber {
                field: Field::PricePerUnit,
                ..
            })
        ));
        assert!(dialog.is_open());
        assert_eq!(dialog.fields().price_per_unit, "cheap");
    }

    #[test]
    fn test_saved_dialog_rejects_further_use() {
        let mut dialog = ModifyDialog::open(&widget());
        dialog.mark_saved().unwrap();

        assert_eq!(dialog.state(), DialogState::Saved);
        assert!(matches!(dialog.parse(), Err(CoreError::DialogClosed)));
        assert!(matches!(dialog.mark_saved(), Err(CoreError::DialogClosed)));

        // Cancelling after save does not rewrite history.
        dialog.cancel();
        assert_eq!(dialog.state(), DialogState::Saved);
    }

    #[test]
    fn test_cancel() {
        let mut dialog = ModifyDialog::open(&widget());
        dialog.cancel();

        assert_eq!(dialog.state(), DialogState::Cancelled);
        assert!(matches!(
            dialog.edit(DialogFields::default()),
            Err(CoreError::DialogClosed)
        ));
    }
}
