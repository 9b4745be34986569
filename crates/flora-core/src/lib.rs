//! # flora-core: Pure Business Logic for Floricultura Rosa
//!
//! This crate is the heart of the order dashboard. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                  Floricultura Rosa Architecture                  │
//! │                                                                  │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                 Frontend (single page)                     │  │
//! │  │   Counter cards ──► Status tabs ──► Order cards ──► Form   │  │
//! │  └───────────────────────────┬────────────────────────────────┘  │
//! │                              │ Tauri IPC                         │
//! │  ┌───────────────────────────▼────────────────────────────────┐  │
//! │  │                    Tauri Commands                          │  │
//! │  │   list_orders, add_order, advance_order, ...               │  │
//! │  └───────────────────────────┬────────────────────────────────┘  │
//! │                              │                                   │
//! │  ┌───────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ flora-core (THIS CRATE) ★                  │  │
//! │  │                                                            │  │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐               │  │
//! │  │   │  types   │  │  money   │  │ validation │               │  │
//! │  │   │  Order   │  │  Money   │  │   rules    │               │  │
//! │  │   │  Status  │  │ centavos │  │   checks   │               │  │
//! │  │   └──────────┘  └──────────┘  └────────────┘               │  │
//! │  │                                                            │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, OrderStatus, NewOrder)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form input validation

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// Re-exports so users can do `use flora_core::Money` instead of
// `use flora_core::money::Money`.

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

/// Width orders ids are zero-padded to ("001", "002", ...).
///
/// Covers the first 999 orders of a session; the format widens naturally
/// beyond that.
pub const ORDER_ID_WIDTH: usize = 3;
