//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each state
//! type has a single responsibility and commands declare exactly what they
//! need:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     State Architecture                         │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                     Tauri Runtime                        │  │
//! │  │  app.manage(order_book_state);                           │  │
//! │  │  app.manage(config_state);                               │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! │                   │                      │                     │
//! │                   ▼                      ▼                     │
//! │       ┌───────────────────┐   ┌──────────────────┐             │
//! │       │  OrderBookState   │   │   ConfigState    │             │
//! │       │                   │   │                  │             │
//! │       │  Arc<Mutex<       │   │  shop_name       │             │
//! │       │    OrderBook      │   │  currency        │             │
//! │       │  >>               │   │  demo_data       │             │
//! │       └───────────────────┘   └──────────────────┘             │
//! │                                                                │
//! │  THREAD SAFETY:                                                │
//! │  • OrderBookState: protected by Arc<Mutex<T>>                  │
//! │  • ConfigState: read-only after initialization                 │
//! └────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod orders;

pub use config::ConfigState;
pub use orders::{OrderBook, OrderBookState, OrderStats};
