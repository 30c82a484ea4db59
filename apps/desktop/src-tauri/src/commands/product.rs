//! # Product Commands
//!
//! Tauri commands behind the inventory window's buttons, list and dialog.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event                    Command              Pop-up on success     │
//! │  ────────                    ───────              ─────────────────     │
//! │  window load ──────────────► get_screen           -                     │
//! │  Add ──────────────────────► submit_add           "Product added..."    │
//! │  Modify ───────────────────► submit_modify        (dialog opens)        │
//! │  Delete ───────────────────► submit_delete        "Product ID n del..." │
//! │  Clear ────────────────────► clear_inputs         -                     │
//! │  list click ───────────────► select_from_list     -                     │
//! │  dialog Save ──────────────► save_modify          "Record updated..."   │
//! │  dialog close ─────────────► cancel_modify        -                     │
//! │                                                                         │
//! │  Every command returns the full Screen; failures return ApiError.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The webview sends whatever is typed in the inputs with each button press,
//! so the controller always parses the text the user actually sees.

use tauri::State;
use tracing::debug;

use crate::controller::Screen;
use crate::error::ApiError;
use crate::state::FormState;
use stockroom_core::{DialogFields, FormFields};

/// Returns the current window state.
///
/// Called once on load to draw the list and total label.
#[tauri::command]
pub async fn get_screen(form: State<'_, FormState>) -> Result<Screen, ApiError> {
    debug!("get_screen command");
    Ok(form.lock().await.screen())
}

/// Adds the product described by the five inputs.
///
/// ## Errors
/// - `INPUT_ERROR`: id, quantity, price or rating is not a number
/// - `DUPLICATE_KEY`: the id is already in the table
#[tauri::command]
pub async fn submit_add(
    form: State<'_, FormState>,
    fields: FormFields,
) -> Result<Screen, ApiError> {
    debug!(product_id = %fields.product_id, "submit_add command");

    let mut controller = form.lock().await;
    controller.set_fields(fields);
    let notice = controller.submit_add().await?;

    Ok(controller.screen_with(notice))
}

/// Opens the modify dialog for the id in the inputs.
///
/// ## Errors
/// - `INPUT_ERROR`: the id is empty or not a whole number
/// - `NOT_FOUND`: no row has that id
#[tauri::command]
pub async fn submit_modify(
    form: State<'_, FormState>,
    fields: FormFields,
) -> Result<Screen, ApiError> {
    debug!(product_id = %fields.product_id, "submit_modify command");

    let mut controller = form.lock().await;
    controller.set_fields(fields);
    controller.submit_modify().await?;

    Ok(controller.screen())
}

/// Deletes the row with the id in the inputs, then clears the inputs.
///
/// ## Errors
/// Same as [`submit_modify`].
#[tauri::command]
pub async fn submit_delete(
    form: State<'_, FormState>,
    fields: FormFields,
) -> Result<Screen, ApiError> {
    debug!(product_id = %fields.product_id, "submit_delete command");

    let mut controller = form.lock().await;
    controller.set_fields(fields);
    let notice = controller.submit_delete().await?;

    Ok(controller.screen_with(notice))
}

/// Empties the five inputs. The table is untouched.
#[tauri::command]
pub async fn clear_inputs(form: State<'_, FormState>) -> Result<Screen, ApiError> {
    debug!("clear_inputs command");

    let mut controller = form.lock().await;
    controller.clear_inputs();

    Ok(controller.screen())
}

/// Copies the clicked list row into the inputs.
///
/// ## Arguments
/// * `row_index` - zero-based position in the list (`rowIndex` from JS)
#[tauri::command]
pub async fn select_from_list(
    form: State<'_, FormState>,
    row_index: usize,
) -> Result<Screen, ApiError> {
    debug!(row_index, "select_from_list command");

    let mut controller = form.lock().await;
    controller.select_from_list(row_index).await?;

    Ok(controller.screen())
}

/// Saves the modify dialog's fields over the row it was opened for.
///
/// ## Errors
/// - `INPUT_ERROR`: a dialog field is malformed; the dialog stays open
/// - `NOT_FOUND`: the row was deleted while the dialog was open
/// - `INTERNAL`: the dialog was already saved or closed
#[tauri::command]
pub async fn save_modify(
    form: State<'_, FormState>,
    fields: DialogFields,
) -> Result<Screen, ApiError> {
    debug!("save_modify command");

    let mut controller = form.lock().await;
    let notice = controller.save_modify(fields).await?;

    Ok(controller.screen_with(notice))
}

/// Closes the modify dialog without saving.
#[tauri::command]
pub async fn cancel_modify(form: State<'_, FormState>) -> Result<Screen, ApiError> {
    debug!("cancel_modify command");

    let mut controller = form.lock().await;
    controller.cancel_modify();

    Ok(controller.screen())
}
