//! # Tauri IPC Bindings
//!
//! `#[tauri::command]` wrappers over the plain command functions.
//!
//! ```text
//! main.js                                   Rust
//! ───────                                   ────
//! invoke('get_table')                 ───►  table::get_table(&table, &config)
//! invoke('set_filter', { status })    ───►  table::set_filter(&table, &config, &status)
//! invoke('toggle_sort', { column })   ───►  table::toggle_sort(&table, &config, &column)
//! invoke('get_config')                ───►  config::get_config(&config)
//! ```

use tauri::State;

use crate::error::ApiError;
use crate::render::RenderPatch;
use crate::state::{ConfigState, TableState};

use super::{config as config_cmd, table as table_cmd};

#[tauri::command]
pub fn get_table(table: State<'_, TableState>, config: State<'_, ConfigState>) -> RenderPatch {
    table_cmd::get_table(&table, &config)
}

#[tauri::command]
pub fn set_filter(
    table: State<'_, TableState>,
    config: State<'_, ConfigState>,
    status: String,
) -> Result<RenderPatch, ApiError> {
    table_cmd::set_filter(&table, &config, &status)
}

#[tauri::command]
pub fn toggle_sort(
    table: State<'_, TableState>,
    config: State<'_, ConfigState>,
    column: String,
) -> Result<RenderPatch, ApiError> {
    table_cmd::toggle_sort(&table, &config, &column)
}

#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    config_cmd::get_config(&config)
}
