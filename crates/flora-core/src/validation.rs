//! # Validation Module
//!
//! Form input validation for the new-order dialog.
//!
//! ## Validation Strategy
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                          │
//! │                                                                │
//! │  Layer 1: Frontend (required markers on the form)              │
//! │  └── Immediate user feedback                                   │
//! │           │                                                    │
//! │           ▼                                                    │
//! │  Layer 2: Tauri Command (Rust)                                 │
//! │  └── THIS MODULE: trims, checks, normalizes                    │
//! │           │                                                    │
//! │           ▼                                                    │
//! │  Order book: performs NO validation of its own — it trusts     │
//! │  callers to have gone through this module first.               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator returns the normalized value (trimmed text, parsed date,
//! parsed amount), so commands assemble a [`crate::NewOrder`] directly from
//! validator output.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of the customer name field.
pub const MAX_CUSTOMER_NAME_LEN: usize = 120;
/// Maximum length of the phone field.
pub const MAX_PHONE_LEN: usize = 40;
/// Maximum length of the delivery address field.
pub const MAX_ADDRESS_LEN: usize = 240;
/// Maximum length of the arrangement description.
pub const MAX_ARRANGEMENT_LEN: usize = 500;

// =============================================================================
// Text Fields
// =============================================================================

/// Validates the customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 120 characters
///
/// ## Example
/// ```rust
/// use flora_core::validation::validate_customer_name;
///
/// assert_eq!(validate_customer_name(" Maria Silva ").unwrap(), "Maria Silva");
/// assert!(validate_customer_name("").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    required_text("customerName", name, MAX_CUSTOMER_NAME_LEN)
}

/// Validates the contact phone.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 40 characters
///
/// No digit-pattern check: the original form accepts free-form phone text
/// like "(11) 98765-4321".
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    required_text("phone", phone, MAX_PHONE_LEN)
}

/// Validates the delivery address.
///
/// ## Rules
/// - May be empty (pickup orders have no address)
/// - Must be at most 240 characters
///
/// ## Returns
/// The trimmed address, "" when blank.
pub fn validate_delivery_address(address: &str) -> ValidationResult<String> {
    let address = address.trim();

    if address.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "deliveryAddress".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    Ok(address.to_string())
}

/// Validates the arrangement description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 500 characters
pub fn validate_arrangement(arrangement: &str) -> ValidationResult<String> {
    required_text("arrangement", arrangement, MAX_ARRANGEMENT_LEN)
}

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Delivery Date
// =============================================================================

/// Validates the delivery date.
///
/// ## Rules
/// - Must not be empty
/// - Must be an ISO calendar date (`YYYY-MM-DD`, what `<input type="date">`
///   submits)
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use flora_core::validation::validate_delivery_date;
///
/// let date = validate_delivery_date("2024-12-01").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert!(validate_delivery_date("01/12/2024").is_err());
/// ```
pub fn validate_delivery_date(raw: &str) -> ValidationResult<NaiveDate> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "deliveryDate".to_string(),
        });
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "deliveryDate".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

// =============================================================================
// Total
// =============================================================================

/// Validates the order total.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal amount (at most two fraction digits,
///   `.` or `,` separator)
/// - Must not be negative (zero is allowed — courtesy deliveries)
///
/// ## Example
/// ```rust
/// use flora_core::validation::validate_total;
///
/// assert_eq!(validate_total("99.90").unwrap().cents(), 9990);
/// assert!(validate_total("abc").is_err());
/// assert!(validate_total("-10").is_err());
/// ```
pub fn validate_total(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "total".to_string(),
        });
    }

    let total = Money::from_decimal_str(raw).ok_or_else(|| ValidationError::InvalidFormat {
        field: "total".to_string(),
        reason: "expected a decimal amount like 150.00".to_string(),
    })?;

    if total.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "total".to_string(),
        });
    }

    Ok(total)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert_eq!(validate_customer_name("Maria").unwrap(), "Maria");
        assert_eq!(validate_customer_name("  João Santos  ").unwrap(), "João Santos");

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("(11) 98765-4321").unwrap(), "(11) 98765-4321");
        assert_eq!(validate_phone("11999999999").unwrap(), "11999999999");

        assert!(validate_phone("").is_err());
        assert!(validate_phone(&"9".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_delivery_address_allows_empty() {
        assert_eq!(validate_delivery_address("").unwrap(), "");
        assert_eq!(validate_delivery_address("   ").unwrap(), "");
        assert_eq!(
            validate_delivery_address(" Rua das Flores, 123 ").unwrap(),
            "Rua das Flores, 123"
        );
        assert!(validate_delivery_address(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_arrangement() {
        assert_eq!(validate_arrangement("Buquê").unwrap(), "Buquê");
        assert!(validate_arrangement("").is_err());
        assert!(validate_arrangement(&"x".repeat(600)).is_err());
    }

    #[test]
    fn test_validate_delivery_date() {
        assert_eq!(
            validate_delivery_date("2024-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );

        assert!(validate_delivery_date("").is_err());
        assert!(validate_delivery_date("01/12/2024").is_err());
        assert!(validate_delivery_date("2024-13-01").is_err());
        assert!(validate_delivery_date("tomorrow").is_err());
    }

    #[test]
    fn test_validate_total() {
        assert_eq!(validate_total("99.90").unwrap().cents(), 9990);
        assert_eq!(validate_total("150").unwrap().cents(), 15000);
        assert_eq!(validate_total("0").unwrap().cents(), 0);

        assert!(validate_total("").is_err());
        assert!(validate_total("abc").is_err());
        assert!(matches!(
            validate_total("-10"),
            Err(ValidationError::NegativeAmount { .. })
        ));
    }
}
