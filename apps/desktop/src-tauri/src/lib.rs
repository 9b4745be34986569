//! # Flora Desktop Library
//!
//! Core library for the Floricultura Rosa desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! flora_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── orders.rs   ◄─── In-memory order book
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── order.rs    ◄─── Order book commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, OrderBook, OrderBookState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (tracing-subscriber with env filter;
///    default INFO, override with RUST_LOG)
/// 2. Load configuration (defaults + FLORA_* env overrides)
/// 3. Initialize state objects
///    • OrderBookState: the in-memory book, demo-seeded unless disabled —
///      everything is lost when the window closes, there is no storage
///    • ConfigState: read-only configuration
/// 4. Build & run the Tauri app (register commands, manage state,
///    launch window)
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Floricultura Rosa order dashboard");

    let config = ConfigState::from_env();
    let book = if config.demo_data {
        OrderBook::with_demo_orders()
    } else {
        OrderBook::new()
    };

    info!(orders = book.len(), shop = %config.shop_name, "Order book initialized");

    tauri::Builder::default()
        .manage(OrderBookState::new(book))
        .manage(config)
        .invoke_handler(tauri::generate_handler![
            // Order commands
            commands::order::list_orders,
            commands::order::add_order,
            commands::order::advance_order,
            commands::order::set_order_status,
            commands::order::get_order_stats,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=flora=trace` - Show trace for flora crates only
/// - Default: INFO level, DEBUG for the app itself
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flora=debug,flora_desktop_lib=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
