//! # Tauri Commands Module
//!
//! All commands exposed to the dashboard page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── order.rs    ◄─── Order book operations and derived views
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Tauri Command Flow                         │
//! │                                                                │
//! │  Dashboard page                                                │
//! │  ──────────────                                                │
//! │  const res = await invoke('list_orders', { status: 'pending' })│
//! │         │                                                      │
//! │         │ (IPC via WebView)                                    │
//! │         ▼                                                      │
//! │  Rust Backend                                                  │
//! │  ────────────                                                  │
//! │  #[tauri::command]                                             │
//! │  fn list_orders(                                               │
//! │      orders: State<'_, OrderBookState>,  ◄── Injected by Tauri │
//! │      status: Option<OrderStatus>,        ◄── From invoke params│
//! │  ) -> OrdersResponse                                           │
//! │         │                                                      │
//! │         │ (JSON serialization)                                 │
//! │         ▼                                                      │
//! │  Dashboard receives: { orders: [...], stats: {...} }           │
//! └────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod order;
