//! # Form Controller
//!
//! Application state for the inventory window, and the handlers that act on it.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Button / list click                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FormController method ── parse fields (stockroom-core)                 │
//! │       │                        │                                        │
//! │       │                        └── bad text? ──► ApiError, inputs kept  │
//! │       ▼                                                                 │
//! │  ProductRepository call (stockroom-db)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh(): list_all() ──► InventoryView::render                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Screen snapshot back to the webview                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One controller exists per window and each action runs to completion
//! before the next one starts (see [`crate::state::FormState`]).

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use stockroom_core::listing::parse_listing_id;
use stockroom_core::{
    CoreError, DialogFields, FormFields, InputError, InventoryView, ModifyDialog, Product,
};
use stockroom_db::{Database, DbError};

/// Success message after an add.
pub const ADDED_MESSAGE: &str = "Product added successfully!";
/// Success message after the dialog saves.
pub const UPDATED_MESSAGE: &str = "Record updated successfully!";

/// An informational pop-up to show after an action succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    /// A "Success" notice.
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            title: "Success".to_string(),
            message: message.into(),
        }
    }
}

/// Everything the webview needs to draw the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Main form inputs.
    pub fields: FormFields,

    /// List lines and aggregate label.
    pub view: InventoryView,

    /// The modify dialog, only while it is open.
    pub dialog: Option<ModifyDialog>,

    /// Pop-up to show for the action that produced this screen.
    pub notice: Option<Notice>,
}

/// Owns the form inputs, the rendered list and the modify dialog.
#[derive(Debug)]
pub struct FormController {
    db: Database,
    fields: FormFields,
    view: InventoryView,
    dialog: Option<ModifyDialog>,
}

impl FormController {
    /// Creates the controller and renders the list for the first time.
    pub async fn new(db: Database) -> Result<Self, ApiError> {
        let mut controller = FormController {
            db,
            fields: FormFields::default(),
            view: InventoryView::default(),
            dialog: None,
        };
        controller.refresh().await?;
        Ok(controller)
    }

    /// Current state of the window.
    pub fn screen(&self) -> Screen {
        Screen {
            fields: self.fields.clone(),
            view: self.view.clone(),
            dialog: self.dialog.clone().filter(ModifyDialog::is_open),
            notice: None,
        }
    }

    /// Current state of the window plus a pop-up.
    pub fn screen_with(&self, notice: Notice) -> Screen {
        Screen {
            notice: Some(notice),
            ..self.screen()
        }
    }

    /// Main form inputs.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// What the list and total label show.
    pub fn view(&self) -> &InventoryView {
        &self.view
    }

    /// The modify dialog, if one has been opened.
    pub fn dialog(&self) -> Option<&ModifyDialog> {
        self.dialog.as_ref()
    }

    /// Replaces the inputs with what is currently typed in the window.
    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    /// Re-reads the whole table and rebuilds the list and total label.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let products = self.db.products().list_all().await?;
        self.view = InventoryView::render(&products);

        debug!(rows = self.view.len(), "View refreshed");
        Ok(())
    }

    /// Refreshes after a committed write.
    ///
    /// The write already succeeded, so a failed re-read is logged and the
    /// previous view is kept instead of reporting the action as failed.
    async fn refresh_after_write(&mut self) {
        if let Err(e) = self.refresh().await {
            error!(error = %e, "View refresh failed after a committed write");
        }
    }

    /// Add button: inserts the product described by the inputs.
    pub async fn submit_add(&mut self) -> Result<Notice, ApiError> {
        let product = self.fields.parse_product().map_err(|e| {
            warn!(error = %e, "Add rejected");
            ApiError::from(e)
        })?;

        self.db.products().insert(&product).await.map_err(|e| {
            if e.is_duplicate() {
                warn!(product_id = product.product_id, "Add rejected: id already exists");
            }
            ApiError::from(e)
        })?;

        info!(product_id = product.product_id, "Product added");
        self.refresh_after_write().await;

        Ok(Notice::success(ADDED_MESSAGE))
    }

    /// Modify button: opens the dialog for the id in the inputs.
    pub async fn submit_modify(&mut self) -> Result<(), ApiError> {
        let product = self.lookup_input_id().await?;

        debug!(product_id = product.product_id, "Opening modify dialog");
        self.dialog = Some(ModifyDialog::open(&product));
        Ok(())
    }

    /// Delete button: removes the row with the id in the inputs.
    pub async fn submit_delete(&mut self) -> Result<Notice, ApiError> {
        let product = self.lookup_input_id().await?;

        self.db.products().delete(product.product_id).await?;
        info!(product_id = product.product_id, "Product deleted");

        self.refresh_after_write().await;
        self.clear_inputs();

        Ok(Notice::success(format!(
            "Product ID {} deleted successfully!",
            product.product_id
        )))
    }

    /// Empties the five inputs.
    pub fn clear_inputs(&mut self) {
        self.fields.clear();
    }

    /// List click: copies the clicked row into the inputs.
    ///
    /// Does nothing if the index is past the end of the list or the row was
    /// deleted since the list was drawn.
    pub async fn select_from_list(&mut self, row_index: usize) -> Result<(), ApiError> {
        let Some(line) = self.view.line(row_index) else {
            debug!(row_index, "Selection outside list");
            return Ok(());
        };

        let product_id = parse_listing_id(line)?;

        match self.db.products().get(product_id).await? {
            Some(product) => self.fields = FormFields::from_product(&product),
            None => debug!(product_id, "Selected row no longer exists"),
        }

        Ok(())
    }

    /// Dialog Save button.
    ///
    /// Bad input leaves the dialog open. A row deleted while the dialog was
    /// open closes the dialog with a not-found error.
    pub async fn save_modify(&mut self, fields: DialogFields) -> Result<Notice, ApiError> {
        let dialog = self
            .dialog
            .as_mut()
            .ok_or_else(|| ApiError::from(CoreError::DialogClosed))?;

        dialog.edit(fields)?;

        let product = dialog.parse().map_err(|e| match e {
            CoreError::Input(input) => {
                warn!(error = %input, "Modify rejected");
                ApiError::input(format!("Please enter valid data. {}", input))
            }
            other => other.into(),
        })?;

        match self.db.products().update(&product).await {
            Ok(()) => {}
            Err(DbError::NotFound { .. }) => {
                warn!(product_id = product.product_id, "Row vanished while editing");
                dialog.cancel();
                self.refresh_after_write().await;
                return Err(CoreError::ProductNotFound(product.product_id).into());
            }
            Err(e) => return Err(e.into()),
        }

        dialog.mark_saved()?;
        info!(product_id = product.product_id, "Product updated");

        self.refresh_after_write().await;
        Ok(Notice::success(UPDATED_MESSAGE))
    }

    /// Dialog dismissed without saving.
    pub fn cancel_modify(&mut self) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.cancel();
            debug!(product_id = dialog.product_id(), "Modify dialog cancelled");
        }
    }

    /// Parses the id input and loads its row.
    async fn lookup_input_id(&self) -> Result<Product, ApiError> {
        let product_id = self.fields.parse_product_id().map_err(|e| {
            warn!(error = %e, "Rejected product id");
            match e {
                InputError::Required { .. } => ApiError::input("Please enter a Product ID."),
                _ => ApiError::input("Please enter a valid Product ID."),
            }
        })?;

        self.db
            .products()
            .get(product_id)
            .await?
            .ok_or_else(|| {
                warn!(product_id, "Product id not found");
                CoreError::ProductNotFound(product_id).into()
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::DialogState;
    use stockroom_db::DbConfig;

    async fn controller() -> FormController {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        FormController::new(db).await.unwrap()
    }

    fn fields(id: &str, name: &str, qty: &str, price: &str, rating: &str) -> FormFields {
        FormFields {
            product_id: id.to_string(),
            name: name.to_string(),
            quantity: qty.to_string(),
            price_per_unit: price.to_string(),
            rating: rating.to_string(),
        }
    }

    fn id_only(id: &str) -> FormFields {
        FormFields {
            product_id: id.to_string(),
            ..FormFields::default()
        }
    }

    async fn add(c: &mut FormController, form: FormFields) -> Result<Notice, ApiError> {
        c.set_fields(form);
        c.submit_add().await
    }

    async fn row_count(c: &FormController) -> i64 {
        c.db.products().count().await.unwrap()
    }

    #[tokio::test]
    async fn test_starts_with_empty_view() {
        let c = controller().await;
        let screen = c.screen();

        assert!(screen.view.lines.is_empty());
        assert_eq!(screen.view.aggregate_label, "Total Price of All Products: 0.00");
        assert!(screen.dialog.is_none());
        assert!(screen.notice.is_none());
    }

    #[tokio::test]
    async fn test_add_delete_aggregate_scenario() {
        let mut c = controller().await;

        let notice = add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        assert_eq!(notice, Notice::success("Product added successfully!"));
        assert_eq!(c.view().aggregate_label, "Total Price of All Products: 25.00");

        add(&mut c, fields("2", "Gadget", "3", "9.99", "3.0")).await.unwrap();
        assert_eq!(c.view().aggregate_label, "Total Price of All Products: 54.97");
        assert_eq!(c.view().len(), 2);

        c.set_fields(id_only("1"));
        let notice = c.submit_delete().await.unwrap();
        assert_eq!(notice.message, "Product ID 1 deleted successfully!");
        assert_eq!(c.view().aggregate_label, "Total Price of All Products: 29.97");
        assert_eq!(
            c.view().lines,
            vec!["ID: 2, Name: Gadget, Qty: 3, Price per Unit: 9.99, Total Price: 29.97, Rating: 3.0"]
        );
        assert!(c.fields().is_empty());
    }

    #[tokio::test]
    async fn test_add_with_bad_quantity_changes_nothing() {
        let mut c = controller().await;
        let typed = fields("1", "Widget", "abc", "2.50", "4.5");

        let err = add(&mut c, typed.clone()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
        assert_eq!(err.title, "Input Error");

        assert_eq!(row_count(&c).await, 0);
        assert_eq!(c.fields(), &typed);
        assert!(c.view().is_empty());
    }

    #[tokio::test]
    async fn test_add_with_nan_rating_changes_nothing() {
        let mut c = controller().await;
        let typed = fields("1", "Widget", "10", "2.50", "nan");

        let err = add(&mut c, typed.clone()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
        assert_eq!(err.message, "Rating must be a number, got 'nan'");

        assert_eq!(row_count(&c).await, 0);
        assert_eq!(c.fields(), &typed);
    }

    #[tokio::test]
    async fn test_add_reports_success_when_refresh_fails() {
        let mut c = controller().await;

        // A TEXT quantity cannot be read back as i64, so list_all fails.
        sqlx::query("INSERT INTO products VALUES (99, 'Bad', 'lots', 1.0, 1.0)")
            .execute(c.db.pool())
            .await
            .unwrap();
        assert!(c.db.products().list_all().await.is_err());

        let notice = add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        assert_eq!(notice, Notice::success("Product added successfully!"));

        assert_eq!(
            c.db.products().get(1).await.unwrap(),
            Some(Product::new(1, "Widget", 10, 2.50, 4.5))
        );
        // Previous view is kept.
        assert!(c.view().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_first_row() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();

        let err = add(&mut c, fields("1", "Other", "1", "1", "1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateKey);
        assert_eq!(err.message, "Product ID already exists. Use a unique Product ID.");

        let rows = c.db.products().list_all().await.unwrap();
        assert_eq!(rows, vec![Product::new(1, "Widget", 10, 2.50, 4.5)]);
    }

    #[tokio::test]
    async fn test_modify_and_delete_reject_bad_ids() {
        let mut c = controller().await;

        c.set_fields(id_only(""));
        let err = c.submit_modify().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
        assert_eq!(err.message, "Please enter a Product ID.");

        c.set_fields(id_only("one"));
        let err = c.submit_delete().await.unwrap_err();
        assert_eq!(err.message, "Please enter a valid Product ID.");

        c.set_fields(id_only("99"));
        let err = c.submit_modify().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product ID not found.");

        let err = c.submit_delete().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(c.dialog().is_none());
        // Inputs are kept for correction.
        assert_eq!(c.fields(), &id_only("99"));
    }

    #[tokio::test]
    async fn test_modify_dialog_saves_one_row() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        add(&mut c, fields("2", "Gadget", "3", "9.99", "3.0")).await.unwrap();

        c.set_fields(id_only("1"));
        c.submit_modify().await.unwrap();

        let screen = c.screen();
        let dialog = screen.dialog.expect("dialog should be open");
        assert_eq!(dialog.product_id(), 1);
        assert_eq!(dialog.fields().name, "Widget");

        let notice = c
            .save_modify(DialogFields {
                name: "Widget Pro".to_string(),
                quantity: "4".to_string(),
                price_per_unit: "5".to_string(),
                rating: "5.0".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(notice.message, "Record updated successfully!");
        assert_eq!(c.dialog().map(|d| d.state()), Some(DialogState::Saved));
        assert!(c.screen().dialog.is_none());

        let rows = c.db.products().list_all().await.unwrap();
        assert_eq!(
            rows,
            vec![
                Product::new(1, "Widget Pro", 4, 5.0, 5.0),
                Product::new(2, "Gadget", 3, 9.99, 3.0),
            ]
        );
        assert_eq!(c.view().aggregate_label, "Total Price of All Products: 49.97");
    }

    #[tokio::test]
    async fn test_modify_dialog_bad_input_stays_open() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        c.set_fields(id_only("1"));
        c.submit_modify().await.unwrap();

        let err = c
            .save_modify(DialogFields {
                name: "Widget".to_string(),
                quantity: "ten".to_string(),
                price_per_unit: "2.50".to_string(),
                rating: "4.5".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InputError);
        assert!(err.message.starts_with("Please enter valid data."));

        let dialog = c.screen().dialog.expect("dialog should stay open");
        assert_eq!(dialog.fields().quantity, "ten");
        assert_eq!(
            c.db.products().get(1).await.unwrap(),
            Some(Product::new(1, "Widget", 10, 2.50, 4.5))
        );
    }

    #[tokio::test]
    async fn test_cancelled_dialog_cannot_save() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        c.set_fields(id_only("1"));
        c.submit_modify().await.unwrap();

        c.cancel_modify();
        assert!(c.screen().dialog.is_none());

        let err = c.save_modify(DialogFields::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(
            c.db.products().get(1).await.unwrap(),
            Some(Product::new(1, "Widget", 10, 2.50, 4.5))
        );
    }

    #[tokio::test]
    async fn test_save_without_dialog_is_rejected() {
        let mut c = controller().await;
        let err = c.save_modify(DialogFields::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[tokio::test]
    async fn test_save_after_row_deleted_is_not_found() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        c.set_fields(id_only("1"));
        c.submit_modify().await.unwrap();

        c.db.products().delete(1).await.unwrap();

        let dialog_fields = c.dialog().unwrap().fields().clone();
        let err = c.save_modify(dialog_fields).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(c.screen().dialog.is_none());
        assert!(c.view().is_empty());
        assert_eq!(row_count(&c).await, 0);
    }

    #[tokio::test]
    async fn test_select_from_list_fills_inputs() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        add(&mut c, fields("2", "Gadget", "3", "9.99", "3.0")).await.unwrap();
        c.clear_inputs();

        c.select_from_list(1).await.unwrap();
        assert_eq!(c.fields(), &fields("2", "Gadget", "3", "9.99", "3.0"));

        // Out of range: nothing happens.
        c.select_from_list(7).await.unwrap();
        assert_eq!(c.fields(), &fields("2", "Gadget", "3", "9.99", "3.0"));
    }

    #[tokio::test]
    async fn test_select_vanished_row_is_noop() {
        let mut c = controller().await;
        add(&mut c, fields("1", "Widget", "10", "2.50", "4.5")).await.unwrap();
        c.clear_inputs();

        // Deleted behind the view's back; the list still shows it.
        c.db.products().delete(1).await.unwrap();
        c.select_from_list(0).await.unwrap();
        assert!(c.fields().is_empty());
    }

    #[tokio::test]
    async fn test_screen_with_notice() {
        let c = controller().await;
        let screen = c.screen_with(Notice::success("done"));
        assert_eq!(screen.notice.map(|n| n.title), Some("Success".to_string()));
    }
}
