//! # Invoice Desktop Library
//!
//! Host for the invoice board page.
//! Loads the dataset, owns the view state, and answers page commands.
//!
//! ## Module Organization
//! ```text
//! invoice_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup hook & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── table.rs    ◄─── Dataset + Mutex<ViewState>
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── table.rs    ◄─── get_table, set_filter, toggle_sort
//! │   ├── config.rs   ◄─── get_config
//! │   └── ipc.rs      ◄─── Tauri wrappers (feature "desktop")
//! ├── render.rs       ◄─── TableView → RenderPatch
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use invoice_core::dataset::load_invoices;
use invoice_core::ViewState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{ConfigState, TableState};

/// Builds the managed state. Runs once when the host is ready.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Configuration ──► ConfigState (defaults + INVOICE_* env)           │
/// │  2. Dataset ────────► decode the embedded records                      │
/// │  3. View state ─────► default filter from config, unsorted             │
/// │  4. Page ready ─────► main.js wires handlers, calls get_table          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap(config: ConfigState) -> Result<(TableState, ConfigState), ApiError> {
    let invoices = load_invoices()?;
    info!(
        count = invoices.len(),
        default_filter = %config.default_filter,
        "Invoice dataset loaded"
    );

    let table = TableState::new(invoices, ViewState::with_filter(config.default_filter));
    Ok((table, config))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=invoice_desktop_lib=trace` - Trace this crate only
/// - Default: INFO, DEBUG for this crate
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,invoice_desktop_lib=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the Tauri application.
#[cfg(feature = "desktop")]
pub fn run() {
    use tauri::Manager;

    init_tracing();

    info!("Starting Invoice Board Desktop Application");

    tauri::Builder::default()
        .setup(|app| {
            let (table_state, config_state) = bootstrap(ConfigState::from_env())?;

            app.manage(table_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::ipc::get_table,
            commands::ipc::set_filter,
            commands::ipc::toggle_sort,
            commands::ipc::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
