//! # State Module
//!
//! Application state managed by Tauri.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  app.manage(form_state)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────┐                          │
//! │  │  FormState                               │                          │
//! │  │  Arc<tokio::Mutex<FormController>>       │                          │
//! │  │    • Database (SQLite pool)              │                          │
//! │  │    • FormFields (five inputs)            │                          │
//! │  │    • InventoryView (list + total label)  │                          │
//! │  │    • Option<ModifyDialog>                │                          │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A single state type is enough: every command touches the form, the list
//! and the table together.

mod form;

pub use form::FormState;
