//! # Domain Types
//!
//! Core domain types for the order dashboard.
//!
//! ## Status Pipeline
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                    Order Delivery Pipeline                     │
//! │                                                                │
//! │   ┌──────────┐      ┌───────────┐      ┌───────────┐           │
//! │   │ pending  │─────►│ preparing │─────►│ delivered │ (final)   │
//! │   └──────────┘      └───────────┘      └───────────┘           │
//! │                                                                │
//! │   Transitions are strictly forward and linear: no skipping,    │
//! │   no reversing. `delivered` has no outgoing transition.        │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::ORDER_ID_WIDTH;

// =============================================================================
// Order Status
// =============================================================================

/// Position of an order in the delivery pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, preparation not started.
    Pending,
    /// Arrangement is being prepared.
    Preparing,
    /// Order delivered to the customer (terminal).
    Delivered,
}

impl OrderStatus {
    /// The legal next stage in the pipeline, or `None` for `Delivered`.
    ///
    /// ## Example
    /// ```rust
    /// use flora_core::OrderStatus;
    ///
    /// assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
    /// assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Delivered));
    /// assert_eq!(OrderStatus::Delivered.next(), None);
    /// ```
    #[must_use]
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Whether the pipeline ends here.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Wire/string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Id
// =============================================================================

/// Formats a 1-based sequence number as an order id.
///
/// Ids are zero-padded to width 3 ("001" ... "999") and widen naturally
/// afterwards ("1000"). The order book mints them as current count + 1.
///
/// ## Example
/// ```rust
/// use flora_core::format_order_id;
///
/// assert_eq!(format_order_id(1), "001");
/// assert_eq!(format_order_id(42), "042");
/// ```
#[must_use]
pub fn format_order_id(seq: usize) -> String {
    format!("{:0width$}", seq, width = ORDER_ID_WIDTH)
}

// =============================================================================
// Order
// =============================================================================

/// A customer order tracked through the delivery pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Zero-padded sequential id ("001", "002", ...). Unique within the
    /// book and immutable after creation.
    pub id: String,

    /// Customer display name.
    pub customer_name: String,

    /// Contact phone.
    pub phone: String,

    /// Delivery address; empty when the customer picks the order up.
    pub delivery_address: String,

    /// Requested delivery date.
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,

    /// Free-text description of the arrangement.
    pub arrangement: String,

    /// Position in the delivery pipeline.
    pub status: OrderStatus,

    /// Order total in centavos.
    pub total: Money,

    /// When the order entered the book.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// New Order
// =============================================================================

/// Validated input for the add-order operation: every [`Order`] field except
/// `id` and `status`, which the book mints itself.
///
/// Construct this through [`crate::validation`] so the caller-validates
/// contract of the order book holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    pub phone: String,
    pub delivery_address: String,
    #[ts(as = "String")]
    pub delivery_date: NaiveDate,
    pub arrangement: String,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pipeline_is_forward_and_linear() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
    }

    #[test]
    fn test_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );

        let back: OrderStatus = serde_json::from_str("\"preparing\"").unwrap();
        assert_eq!(back, OrderStatus::Preparing);
    }

    #[test]
    fn test_format_order_id() {
        assert_eq!(format_order_id(1), "001");
        assert_eq!(format_order_id(42), "042");
        assert_eq!(format_order_id(999), "999");
        // Width widens past the padded range instead of truncating.
        assert_eq!(format_order_id(1000), "1000");
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order {
            id: "001".to_string(),
            customer_name: "Maria Silva".to_string(),
            phone: "(11) 98765-4321".to_string(),
            delivery_address: "Rua das Flores, 123".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
            arrangement: "Buquê de rosas vermelhas".to_string(),
            status: OrderStatus::Pending,
            total: Money::from_cents(15000),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerName"], "Maria Silva");
        assert_eq!(json["deliveryAddress"], "Rua das Flores, 123");
        assert_eq!(json["deliveryDate"], "2024-11-15");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total"], 15000);
    }
}
