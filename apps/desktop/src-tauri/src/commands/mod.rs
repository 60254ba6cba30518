//! # Commands Module
//!
//! All commands exposed to the page script.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── table.rs    ◄─── get_table, set_filter, toggle_sort
//! ├── config.rs   ◄─── get_config
//! └── ipc.rs      ◄─── #[tauri::command] wrappers (feature "desktop")
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page script                                                            │
//! │  ───────────                                                            │
//! │  const patch = await invoke('toggle_sort', { column: 'amount' });       │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  ipc::toggle_sort(table: State<TableState>, config: State<ConfigState>) │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  table::toggle_sort(&TableState, &ConfigState, "amount")                │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Page receives: RenderPatch                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs.

pub mod config;
pub mod table;

#[cfg(feature = "desktop")]
pub mod ipc;
