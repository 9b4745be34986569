//! # Order Book State
//!
//! The authoritative in-memory list of orders for the current session.
//!
//! ## Thread Safety
//! The book is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the book
//! 2. Only one command should modify the book at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Book Operations Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   Order Book Operations                        │
//! │                                                                │
//! │  Frontend Action        Tauri Command          Book Change     │
//! │  ───────────────        ─────────────          ───────────     │
//! │                                                                │
//! │  Submit form ──────────► add_order() ────────► orders.push     │
//! │                                                                │
//! │  Status button ────────► advance_order() ────► status = next   │
//! │                                                                │
//! │  View tab ─────────────► list_orders() ──────► (read only)     │
//! │                                                                │
//! │  There is no delete and no reordering: insertion order is      │
//! │  the display order.                                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use flora_core::error::CoreResult;
use flora_core::{format_order_id, CoreError, Money, NewOrder, Order, OrderStatus};

/// The in-memory order book.
///
/// ## Invariants
/// - `id` is unique and immutable; minted as current count + 1, zero-padded
/// - Insertion order is preserved (append-only, no delete)
/// - The book performs no input validation; callers go through
///   `flora_core::validation` first
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        OrderBook { orders: Vec::new() }
    }

    /// Creates a book seeded with the three demo orders the dashboard
    /// has always started with.
    pub fn with_demo_orders() -> Self {
        let mut book = OrderBook::new();
        book.add(NewOrder {
            customer_name: "Maria Silva".to_string(),
            phone: "(11) 98765-4321".to_string(),
            delivery_address: "Rua das Flores, 123 - Jardim Primavera".to_string(),
            delivery_date: demo_date(2024, 11, 15),
            arrangement: "Buquê de rosas vermelhas - 12 unidades".to_string(),
            total: Money::from_cents(15000),
        });
        book.add(NewOrder {
            customer_name: "João Santos".to_string(),
            phone: "(11) 97654-3210".to_string(),
            delivery_address: "Av. Paulista, 1000 - Apto 501".to_string(),
            delivery_date: demo_date(2024, 11, 15),
            arrangement: "Arranjo misto com lírios e gerberas".to_string(),
            total: Money::from_cents(22000),
        });
        book.add(NewOrder {
            customer_name: "Ana Costa".to_string(),
            phone: "(11) 96543-2109".to_string(),
            delivery_address: "Rua Aurora, 456".to_string(),
            delivery_date: demo_date(2024, 11, 14),
            arrangement: "Cesta de café da manhã com flores".to_string(),
            total: Money::from_cents(18000),
        });
        book.set_status("002", OrderStatus::Preparing);
        book.set_status("003", OrderStatus::Delivered);
        book
    }

    /// Appends a new order with a freshly minted id and `Pending` status.
    ///
    /// ## Behavior
    /// - id = current count + 1, zero-padded ("001", "002", ...)
    /// - status = `Pending`, created_at = now
    /// - every other field is taken from `new_order` unchanged
    ///
    /// ## Returns
    /// The stored order.
    pub fn add(&mut self, new_order: NewOrder) -> Order {
        let order = Order {
            id: format_order_id(self.orders.len() + 1),
            customer_name: new_order.customer_name,
            phone: new_order.phone,
            delivery_address: new_order.delivery_address,
            delivery_date: new_order.delivery_date,
            arrangement: new_order.arrangement,
            status: OrderStatus::Pending,
            total: new_order.total,
            created_at: Utc::now(),
        };
        self.orders.push(order.clone());
        order
    }

    /// Replaces an order's status, leaving every other field untouched.
    ///
    /// ## Behavior
    /// - Accepts any of the three statuses regardless of current state;
    ///   the forward-only pipeline is enforced by [`OrderBook::advance`],
    ///   which is what the dashboard button calls
    /// - Unknown id is a silent no-op (`None`); the book is unchanged
    pub fn set_status(&mut self, order_id: &str, status: OrderStatus) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == order_id)?;
        order.status = status;
        Some(order.clone())
    }

    /// Moves an order to the next pipeline stage.
    ///
    /// ## Errors
    /// - [`CoreError::OrderNotFound`] when no order has the given id
    /// - [`CoreError::OrderDelivered`] when the order is already terminal
    pub fn advance(&mut self, order_id: &str) -> CoreResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;

        let next = order.status.next().ok_or_else(|| CoreError::OrderDelivered {
            order_id: order_id.to_string(),
        })?;

        order.status = next;
        Ok(order.clone())
    }

    /// Looks up an order by id.
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// All orders in insertion order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The subsequence of orders with the given status, in original
    /// relative order.
    pub fn with_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }

    /// Number of orders with the given status.
    pub fn count_with_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// Total number of orders in the book.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn demo_date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates in the seed data are always valid.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

/// Counter summary for the dashboard header cards.
///
/// Recomputed from the book on every change; at this scale nothing is
/// cached or maintained incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub delivered: usize,
}

impl From<&OrderBook> for OrderStats {
    fn from(book: &OrderBook) -> Self {
        OrderStats {
            total: book.len(),
            pending: book.count_with_status(OrderStatus::Pending),
            preparing: book.count_with_status(OrderStatus::Preparing),
            delivered: book.count_with_status(OrderStatus::Delivered),
        }
    }
}

/// Tauri-managed order book state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderBook>>`:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one command mutates the book at a time
#[derive(Debug)]
pub struct OrderBookState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrderBookState {
    /// Creates state holding the given book.
    pub fn new(book: OrderBook) -> Self {
        OrderBookState {
            book: Arc::new(Mutex::new(book)),
        }
    }

    /// Executes a function with read access to the book.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stats = state.with_book(|book| OrderStats::from(book));
    /// ```
    pub fn with_book<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        let book = self.book.lock().expect("Order book mutex poisoned");
        f(&book)
    }

    /// Executes a function with write access to the book.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let order = state.with_book_mut(|book| book.advance("001"))?;
    /// ```
    pub fn with_book_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.book.lock().expect("Order book mutex poisoned");
        f(&mut book)
    }
}

impl Default for OrderBookState {
    fn default() -> Self {
        Self::new(OrderBook::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(name: &str, total_cents: i64) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            phone: "(11) 99999-9999".to_string(),
            delivery_address: String::new(),
            delivery_date: demo_date(2024, 12, 1),
            arrangement: "Buquê de rosas".to_string(),
            total: Money::from_cents(total_cents),
        }
    }

    #[test]
    fn test_add_appends_pending_order() {
        let mut book = OrderBook::new();

        let order = book.add(new_order("Maria", 9990));

        assert_eq!(book.len(), 1);
        assert_eq!(order.id, "001");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Money::from_cents(9990));
        assert_eq!(order.delivery_address, "");
    }

    #[test]
    fn test_ids_are_sequential_and_zero_padded() {
        let mut book = OrderBook::new();

        for i in 1..=12 {
            let order = book.add(new_order("Cliente", 1000));
            assert_eq!(order.id, format!("{:03}", i));
        }

        assert_eq!(book.orders()[0].id, "001");
        assert_eq!(book.orders()[11].id, "012");
    }

    #[test]
    fn test_set_status_touches_only_the_status_field() {
        let mut book = OrderBook::with_demo_orders();
        let before = book.clone();

        let updated = book.set_status("001", OrderStatus::Preparing).unwrap();
        assert_eq!(updated.status, OrderStatus::Preparing);

        for (old, new) in before.orders().iter().zip(book.orders()) {
            if old.id == "001" {
                assert_eq!(new.status, OrderStatus::Preparing);
                // Every other field survives unchanged.
                assert_eq!(old.customer_name, new.customer_name);
                assert_eq!(old.phone, new.phone);
                assert_eq!(old.delivery_address, new.delivery_address);
                assert_eq!(old.delivery_date, new.delivery_date);
                assert_eq!(old.arrangement, new.arrangement);
                assert_eq!(old.total, new.total);
                assert_eq!(old.created_at, new.created_at);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_set_status_unknown_id_is_a_no_op() {
        let mut book = OrderBook::with_demo_orders();
        let before = book.clone();

        assert!(book.set_status("999", OrderStatus::Delivered).is_none());
        assert_eq!(before.orders(), book.orders());
    }

    #[test]
    fn test_with_status_preserves_order_and_partitions_the_book() {
        let mut book = OrderBook::new();
        book.add(new_order("A", 100));
        book.add(new_order("B", 200));
        book.add(new_order("C", 300));
        book.add(new_order("D", 400));
        book.set_status("002", OrderStatus::Preparing);
        book.set_status("004", OrderStatus::Delivered);

        let pending = book.with_status(OrderStatus::Pending);
        let preparing = book.with_status(OrderStatus::Preparing);
        let delivered = book.with_status(OrderStatus::Delivered);

        let pending_ids: Vec<&str> = pending.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(pending_ids, ["001", "003"]);
        assert_eq!(preparing[0].id, "002");
        assert_eq!(delivered[0].id, "004");

        assert_eq!(pending.len() + preparing.len() + delivered.len(), book.len());
    }

    #[test]
    fn test_seeded_scenario_counters() {
        let mut book = OrderBook::with_demo_orders();

        let stats = OrderStats::from(&book);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.preparing, 1);
        assert_eq!(stats.delivered, 1);

        book.advance("001").unwrap();

        let stats = OrderStats::from(&book);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.preparing, 2);
        assert_eq!(stats.delivered, 1);
    }

    #[test]
    fn test_demo_orders_seed_data() {
        let book = OrderBook::with_demo_orders();

        let totals: Vec<i64> = book.orders().iter().map(|o| o.total.cents()).collect();
        assert_eq!(totals, [15000, 22000, 18000]);
        assert_eq!(book.get("001").unwrap().customer_name, "Maria Silva");
        assert_eq!(book.get("003").unwrap().status, OrderStatus::Delivered);
    }

    #[test]
    fn test_validated_form_submission_scenario() {
        use flora_core::validation::{
            validate_arrangement, validate_customer_name, validate_delivery_address,
            validate_delivery_date, validate_phone, validate_total,
        };

        let mut book = OrderBook::with_demo_orders();

        // The add_order command assembles a NewOrder from validator output;
        // same path here, with the address left blank.
        let new_order = NewOrder {
            customer_name: validate_customer_name("Maria").unwrap(),
            phone: validate_phone("11999999999").unwrap(),
            delivery_address: validate_delivery_address("").unwrap(),
            delivery_date: validate_delivery_date("2024-12-01").unwrap(),
            arrangement: validate_arrangement("Buquê").unwrap(),
            total: validate_total("99.90").unwrap(),
        };

        let order = book.add(new_order);

        assert_eq!(book.len(), 4);
        assert_eq!(order.id, "004");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.delivery_address, "");
        assert_eq!(order.total, Money::from_cents(9990));
    }

    #[test]
    fn test_advance_walks_the_full_pipeline() {
        let mut book = OrderBook::new();
        book.add(new_order("Maria", 9990));

        assert_eq!(book.advance("001").unwrap().status, OrderStatus::Preparing);
        assert_eq!(book.advance("001").unwrap().status, OrderStatus::Delivered);

        // Delivered is terminal.
        assert!(matches!(
            book.advance("001"),
            Err(CoreError::OrderDelivered { .. })
        ));
        assert_eq!(book.get("001").unwrap().status, OrderStatus::Delivered);
    }

    #[test]
    fn test_advance_unknown_id() {
        let mut book = OrderBook::new();
        assert!(matches!(
            book.advance("042"),
            Err(CoreError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_state_wrapper_round_trip() {
        let state = OrderBookState::new(OrderBook::with_demo_orders());

        let added = state.with_book_mut(|book| book.add(new_order("Novo", 5000)));
        assert_eq!(added.id, "004");

        let stats = state.with_book(OrderStats::from);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
    }
}
