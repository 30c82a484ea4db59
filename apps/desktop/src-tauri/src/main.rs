//! # Stockroom Desktop Application Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Record Modifier                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Tauri WebView (ui/index.html, ui/main.js)                       │  │
//! │  │  • Five inputs         • Add / Modify / Delete / Clear           │  │
//! │  │  • Product list        • Total Price label                       │  │
//! │  │  • Modify Product dialog                                         │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                        invoke('command')                               │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Rust Backend (this crate)                                       │  │
//! │  │  lib.rs ─────► logging, database, state, command registration   │  │
//! │  │  commands/ ──► submit_add, submit_modify, submit_delete, ...    │  │
//! │  │  controller ─► FormController (inputs, list, dialog)            │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  SQLite: products.db                                             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    stockroom_desktop_lib::run();
}
