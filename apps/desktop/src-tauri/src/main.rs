//! # Flora Desktop Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                 Floricultura Rosa Desktop                      │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                    Tauri WebView                         │  │
//! │  │  ┌────────────────────────────────────────────────────┐  │  │
//! │  │  │              Dashboard (single page)               │  │  │
//! │  │  │  • Counter cards      • Status tabs                │  │  │
//! │  │  │  • Order cards        • New-order dialog           │  │  │
//! │  │  └────────────────────────────────────────────────────┘  │  │
//! │  │                         │                                │  │
//! │  │                 invoke('command')                        │  │
//! │  └─────────────────────────┼────────────────────────────────┘  │
//! │                            ▼                                   │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                Rust Backend (this crate)                 │  │
//! │  │                                                          │  │
//! │  │  lib.rs ─────► logging, state, commands, run loop        │  │
//! │  │  commands/ ──► list_orders, add_order, advance_order     │  │
//! │  │  state/ ─────► OrderBookState, ConfigState               │  │
//! │  │                                                          │  │
//! │  │  All state is in-memory and dies with the window.        │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // The actual setup is in lib.rs for better testability
    flora_desktop_lib::run();
}
