//! # Invoice Board Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Board Desktop                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │   ui/index.html + ui/main.js (applies RenderPatch to the DOM)    │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                          invoke('command')                              │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  lib.rs ─────► tracing, bootstrap, command registration          │  │
//! │  │  commands/ ──► get_table, set_filter, toggle_sort, get_config    │  │
//! │  │  state/ ─────► TableState, ConfigState                           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    invoice_desktop_lib::run();
}
