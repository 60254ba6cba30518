//! # State Module
//!
//! Manages application state for the desktop app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(table_state);                                       │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                  │                              │                       │
//! │                  ▼                              ▼                       │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │   TableState                 │  │   ConfigState                │    │
//! │  │                              │  │                              │    │
//! │  │  invoices (immutable)        │  │  currency_code               │    │
//! │  │  Mutex<ViewState>            │  │  currency_symbol             │    │
//! │  │                              │  │  default_filter              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • TableState: view state protected by Mutex, dataset read-only        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod table;

pub use config::ConfigState;
pub use table::TableState;
