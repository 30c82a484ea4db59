//! # stockroom-core: Pure Logic for Stockroom
//!
//! Everything the inventory form does that does not touch the database or the
//! window lives here, as plain functions and small state machines.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Webview (static HTML/JS)                     │   │
//! │  │      Input fields ──► Product list ──► Total label ──► Dialog   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Tauri Commands + FormController                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   form    │  │  listing  │  │  dialog   │  │   │
//! │  │   │  Product  │  │FormFields │  │ list line │  │  Modify   │  │   │
//! │  │   │   Field   │  │           │  │ aggregate │  │  Dialog   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO WINDOW • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` record and form `Field` names
//! - [`validation`] - Parsing raw field text into typed values
//! - [`form`] - The five main input fields
//! - [`listing`] - List lines and the aggregate total label
//! - [`dialog`] - The modify dialog state machine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::listing::InventoryView;
//! use stockroom_core::Product;
//!
//! let widget = Product::new(1, "Widget", 10, 2.50, 4.5);
//! let view = InventoryView::render(&[widget]);
//!
//! assert_eq!(view.aggregate_label, "Total Price of All Products: 25.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dialog;
pub mod error;
pub mod form;
pub mod listing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dialog::{DialogFields, DialogState, ModifyDialog};
pub use error::{CoreError, CoreResult, InputError};
pub use form::FormFields;
pub use listing::InventoryView;
pub use types::{Field, Product};
