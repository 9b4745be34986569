//! # Order Commands
//!
//! Tauri commands for the order book: the add-order form, the status
//! buttons, and the filtered views the tabs render.
//!
//! ## Order Lifecycle
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                           │
//! │                                                                │
//! │  ┌──────────┐      ┌───────────┐      ┌───────────┐            │
//! │  │ pending  │─────►│ preparing │─────►│ delivered │            │
//! │  └──────────┘      └───────────┘      └───────────┘            │
//! │       ▲                  │                                     │
//! │       │             advance_order                              │
//! │   add_order         (the card button only ever offers          │
//! │                      the legal next stage)                     │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{OrderBookState, OrderStats};
use flora_core::validation::{
    validate_arrangement, validate_customer_name, validate_delivery_address,
    validate_delivery_date, validate_phone, validate_total,
};
use flora_core::{NewOrder, Order, OrderStatus};

/// Raw add-order form payload, exactly as the dialog submits it.
///
/// Everything arrives as text; validation parses the date and the total.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub delivery_address: String,
    pub delivery_date: String,
    pub arrangement: String,
    pub total: String,
}

/// Order list response including the counter summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub stats: OrderStats,
}

/// Lists orders, optionally filtered by status.
///
/// ## Behavior
/// - No `status`: every order, in insertion order
/// - With `status`: the subsequence with that status, relative order
///   preserved
/// - `stats` is always computed over the full book, so the header cards
///   stay correct whichever tab is active
#[tauri::command]
pub fn list_orders(
    orders: State<'_, OrderBookState>,
    status: Option<OrderStatus>,
) -> OrdersResponse {
    debug!(?status, "list_orders command");

    orders.with_book(|book| OrdersResponse {
        orders: match status {
            Some(status) => book.with_status(status),
            None => book.orders().to_vec(),
        },
        stats: OrderStats::from(book),
    })
}

/// Adds a new order from the dialog form.
///
/// ## Behavior
/// - Validates and normalizes every field first; on failure the book is
///   untouched and the frontend shows the message as a toast
/// - On success the book mints the id and the order starts `pending`
///
/// ## Returns
/// The stored order.
#[tauri::command]
pub fn add_order(
    orders: State<'_, OrderBookState>,
    request: NewOrderRequest,
) -> Result<Order, ApiError> {
    debug!(customer = %request.customer_name, "add_order command");

    let new_order = NewOrder {
        customer_name: validate_customer_name(&request.customer_name)?,
        phone: validate_phone(&request.phone)?,
        delivery_address: validate_delivery_address(&request.delivery_address)?,
        delivery_date: validate_delivery_date(&request.delivery_date)?,
        arrangement: validate_arrangement(&request.arrangement)?,
        total: validate_total(&request.total)?,
    };

    let order = orders.with_book_mut(|book| book.add(new_order));
    info!(order_id = %order.id, total = %order.total, "order added");
    Ok(order)
}

/// Moves an order to the next pipeline stage.
///
/// ## Behavior
/// - `pending → preparing`, `preparing → delivered`
/// - `delivered` orders have no button in the UI; a direct call gets a
///   typed error
///
/// ## Returns
/// The updated order.
#[tauri::command]
pub fn advance_order(
    orders: State<'_, OrderBookState>,
    order_id: String,
) -> Result<Order, ApiError> {
    debug!(order_id = %order_id, "advance_order command");

    let order = orders.with_book_mut(|book| book.advance(&order_id))?;
    info!(order_id = %order.id, status = %order.status, "order advanced");
    Ok(order)
}

/// Replaces an order's status without pipeline enforcement.
///
/// ## Behavior
/// - Accepts any of the three statuses regardless of current state
/// - Unknown id is a silent no-op and returns `None`
///
/// The dashboard itself only calls [`advance_order`]; this command keeps
/// the permissive store operation reachable for tooling.
#[tauri::command]
pub fn set_order_status(
    orders: State<'_, OrderBookState>,
    order_id: String,
    status: OrderStatus,
) -> Option<Order> {
    debug!(order_id = %order_id, %status, "set_order_status command");

    let updated = orders.with_book_mut(|book| book.set_status(&order_id, status));
    if updated.is_none() {
        debug!(order_id = %order_id, "set_order_status: unknown id, no-op");
    }
    updated
}

/// Gets the counter summary for the header cards.
#[tauri::command]
pub fn get_order_stats(orders: State<'_, OrderBookState>) -> OrderStats {
    debug!("get_order_stats command");
    orders.with_book(OrderStats::from)
}
