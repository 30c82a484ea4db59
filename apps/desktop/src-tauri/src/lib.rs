//! # Stockroom Desktop Library
//!
//! Configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── controller.rs   ◄─── FormController: inputs, list, dialog handlers
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── form.rs     ◄─── Mutex around the controller
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── product.rs  ◄─── Button, list and dialog commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod controller;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use controller::FormController;
use state::FormState;
use stockroom_db::{Database, DbConfig};

/// Environment variable that overrides the database file location.
pub const DB_PATH_ENV: &str = "STOCKROOM_DB_PATH";

/// File name of the database inside the app data directory.
pub const DB_FILE_NAME: &str = "products.db";

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • Default: info,stockroom=debug,sqlx=warn (override with RUST_LOG)  │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • STOCKROOM_DB_PATH, else <app data dir>/products.db                │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • Create file if missing, create table if missing                   │
/// │                                                                         │
/// │  4. Build FormController ─────────────────────────────────────────────► │
/// │     • Empty inputs, list rendered from the table                        │
/// │                                                                         │
/// │  5. Register commands & launch window                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Stockroom desktop application");

    tauri::Builder::default()
        .setup(|app| {
            let db_path = get_database_path()?;
            info!(?db_path, "Database path determined");

            let controller = tauri::async_runtime::block_on(async {
                let db = Database::new(DbConfig::new(db_path)).await?;
                let controller = FormController::new(db).await?;
                Ok::<_, Box<dyn std::error::Error>>(controller)
            })?;

            info!(rows = controller.view().len(), "Inventory loaded");

            app.manage(FormState::new(controller));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::product::get_screen,
            commands::product::submit_add,
            commands::product::submit_modify,
            commands::product::submit_delete,
            commands::product::clear_inputs,
            commands::product::select_from_list,
            commands::product::save_modify,
            commands::product::cancel_modify,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Trace one crate only
/// - Default: `info,stockroom=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockroom.inventory/products.db`
/// - **Windows**: `%APPDATA%\stockroom\inventory\data\products.db`
/// - **Linux**: `~/.local/share/inventory/products.db`
///
/// Set `STOCKROOM_DB_PATH` to use a custom path.
fn get_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "stockroom", "inventory")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(DB_FILE_NAME))
}
