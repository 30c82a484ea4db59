//! # Tauri Commands Module
//!
//! All commands exposed to the webview.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Webview (ui/main.js)                                                   │
//! │  ────────────────────                                                   │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const screen = await invoke('submit_add', {                            │
//! │    fields: { productId: '1', name: 'Widget', quantity: '10', ... }      │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn submit_add(                                                   │
//! │      form: State<'_, FormState>,  ◄── Injected by Tauri                │
//! │      fields: FormFields,          ◄── From invoke params               │
//! │  ) -> Result<Screen, ApiError>                                          │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Webview redraws from Screen, or alerts ApiError                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
