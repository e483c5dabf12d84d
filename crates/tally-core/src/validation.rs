//! # Validation Module
//!
//! Turns an untyped JSON payload into a [`Receipt`], and checks receipt ids.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation                                 │
//! │                                                                         │
//! │  payload (serde_json::Value)                                           │
//! │       │                                                                 │
//! │       ├── not an object?              → NotAnObject                    │
//! │       ├── missing required key?       → Required                       │
//! │       ├── retailer not a string / ""? → InvalidType / Empty            │
//! │       ├── purchaseDate not YYYY-MM-DD → InvalidFormat                  │
//! │       ├── purchaseTime not HH:MM      → InvalidFormat                  │
//! │       ├── total not 0.00 pattern      → InvalidFormat                  │
//! │       ├── items not a non-empty array → InvalidType / Empty            │
//! │       ├── each item: object, both keys, trimmed description, price    │
//! │       │                                                                 │
//! │       └── OK → Receipt                                                 │
//! │                                                                         │
//! │  The first failure wins. Every parse step returns a Result.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use tally_core::validation::{is_uuid_v4, validate_receipt};
//!
//! let receipt = validate_receipt(&json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "13:13",
//!     "total": "1.25",
//!     "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}]
//! }))
//! .unwrap();
//! assert_eq!(receipt.items().len(), 1);
//!
//! assert!(is_uuid_v4("7fb1377b-b223-49d9-a31a-5a02701dd310"));
//! assert!(!is_uuid_v4("63452"));
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use uuid::{Uuid, Variant, Version};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Keys every receipt payload must carry.
pub const REQUIRED_RECEIPT_FIELDS: [&str; 5] =
    ["retailer", "purchaseDate", "purchaseTime", "items", "total"];

/// Largest accepted `total` or item `price`, in cents ($1,000,000,000.00).
///
/// ## Business Reason
/// Keeps every per-item description bonus at or below 200,000,000 points,
/// so a receipt's score cannot overflow `u64` however many items it lists.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a raw payload into a [`Receipt`].
///
/// ## Rules
/// - Payload must be an object with all of [`REQUIRED_RECEIPT_FIELDS`]
/// - `retailer`: non-empty string
/// - `purchaseDate`: `YYYY-MM-DD`, a real calendar date
/// - `purchaseTime`: `HH:MM`, 24-hour clock
/// - `total`: digits, `.`, two digits, at most [`MAX_AMOUNT_CENTS`]
/// - `items`: at least one item, each with a non-blank `shortDescription`
///   and a `price` in the same format and range as `total`
///
/// Unknown keys are ignored.
pub fn validate_receipt(payload: &Value) -> ValidationResult<Receipt> {
    let object = payload.as_object().ok_or_else(|| ValidationError::NotAnObject {
        field: "receipt".to_string(),
    })?;

    if let Some(missing) = REQUIRED_RECEIPT_FIELDS
        .iter()
        .find(|key| !object.contains_key(**key))
    {
        return Err(ValidationError::Required {
            field: (*missing).to_string(),
        });
    }

    let retailer = required_str(object, "retailer", "retailer")?;
    if retailer.is_empty() {
        return Err(ValidationError::Empty {
            field: "retailer".to_string(),
        });
    }

    let purchase_date = parse_purchase_date(required_str(object, "purchaseDate", "purchaseDate")?)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "purchaseDate".to_string(),
            reason: "expected a calendar date as YYYY-MM-DD".to_string(),
        })?;

    let purchase_time = parse_purchase_time(required_str(object, "purchaseTime", "purchaseTime")?)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "purchaseTime".to_string(),
            reason: "expected a 24-hour time as HH:MM".to_string(),
        })?;

    let total = parse_amount(required_str(object, "total", "total")?, "total")?;

    let raw_items = object
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::InvalidType {
            field: "items".to_string(),
            expected: "an array",
        })?;
    if raw_items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_item(index, raw))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(Receipt::new(
        retailer.to_string(),
        purchase_date,
        purchase_time,
        items,
        total,
    ))
}

/// Decodes a raw request body and validates it.
///
/// Malformed JSON and schema failures both surface as
/// [`CoreError::InvalidReceipt`]; undecodable bodies name the field `body`.
pub fn parse_receipt(body: &[u8]) -> CoreResult<Receipt> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        CoreError::InvalidReceipt(ValidationError::InvalidFormat {
            field: "body".to_string(),
            reason: e.to_string(),
        })
    })?;
    validate_receipt(&payload).map_err(CoreError::InvalidReceipt)
}

/// Validates one entry of `items`.
fn validate_item(index: usize, raw: &Value) -> ValidationResult<Item> {
    let path = |key: &str| format!("items[{index}].{key}");

    let object = raw.as_object().ok_or_else(|| ValidationError::NotAnObject {
        field: format!("items[{index}]"),
    })?;

    for key in ["shortDescription", "price"] {
        if !object.contains_key(key) {
            return Err(ValidationError::Required { field: path(key) });
        }
    }

    let description = required_str(object, "shortDescription", &path("shortDescription"))?;
    if description.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: path("shortDescription"),
        });
    }

    let price = parse_amount(required_str(object, "price", &path("price"))?, &path("price"))?;

    Ok(Item::new(description.to_string(), price))
}

/// Reads `key` as a string; `field` names it in the error.
fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    field: &str,
) -> ValidationResult<&'a str> {
    match object.get(key) {
        None => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        Some(value) => value.as_str().ok_or_else(|| ValidationError::InvalidType {
            field: field.to_string(),
            expected: "a string",
        }),
    }
}

/// Parses a money string and enforces [`MAX_AMOUNT_CENTS`].
fn parse_amount(raw: &str, field: &str) -> ValidationResult<Money> {
    let amount = raw
        .parse::<Money>()
        .map_err(|e| ValidationError::money(field, e))?;
    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("amount exceeds {}", Money::from_cents(MAX_AMOUNT_CENTS)),
        });
    }
    Ok(amount)
}

// =============================================================================
// Date / Time Parsers
// =============================================================================

/// Parses a strict `YYYY-MM-DD` date. `None` for any other shape or a
/// non-existent day (e.g. `2022-02-30`).
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_purchase_date;
///
/// assert!(parse_purchase_date("2024-02-29").is_some());
/// assert!(parse_purchase_date("2023-02-29").is_none());
/// assert!(parse_purchase_date("01-02-2022").is_none());
/// ```
pub fn parse_purchase_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = digits(&s[0..4])?;
    let month = digits(&s[5..7])?;
    let day = digits(&s[8..10])?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parses a strict 24-hour `HH:MM` time.
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_purchase_time;
///
/// assert!(parse_purchase_time("23:59").is_some());
/// assert!(parse_purchase_time("24:00").is_none());
/// assert!(parse_purchase_time("2:30 PM").is_none());
/// ```
pub fn parse_purchase_time(s: &str) -> Option<NaiveTime> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let hour = digits(&s[0..2])?;
    let minute = digits(&s[3..5])?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// ASCII digits only; no sign, no whitespace.
fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Length of the canonical hyphenated UUID form.
const UUID_TEXT_LEN: usize = 36;

/// Byte offsets of the hyphens in `8-4-4-4-12`.
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// True when `token` is a canonical, hyphenated UUID v4 with the RFC 4122
/// variant. Braced, URN and simple (hyphen-less) forms are rejected.
pub fn is_uuid_v4(token: &str) -> bool {
    validate_receipt_id(token).is_ok()
}

/// Validates a receipt id and returns it parsed.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_receipt_id;
///
/// assert!(validate_receipt_id("adb6b560-0eef-42bc-9d16-df48f30e89b2").is_ok());
/// // version 1
/// assert!(validate_receipt_id("c232ab00-9414-11ec-b3c8-9f6bdeced846").is_err());
/// assert!(validate_receipt_id("63452").is_err());
/// ```
pub fn validate_receipt_id(token: &str) -> ValidationResult<Uuid> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: reason.to_string(),
    };

    let bytes = token.as_bytes();
    if bytes.len() != UUID_TEXT_LEN {
        return Err(invalid("expected 36 characters"));
    }
    let grouped = bytes.iter().enumerate().all(|(i, b)| {
        if UUID_HYPHENS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    if !grouped {
        return Err(invalid("expected 8-4-4-4-12 hex groups"));
    }

    let id = Uuid::try_parse(token).map_err(|_| invalid("not a UUID"))?;
    if id.get_version() != Some(Version::Random) {
        return Err(invalid("expected a version 4 UUID"));
    }
    if id.get_variant() != Variant::RFC4122 {
        return Err(invalid("expected the RFC 4122 variant"));
    }
    Ok(id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "retailer": "Walgreens",
            "purchaseDate": "2022-01-02",
            "purchaseTime": "08:13",
            "total": "2.65",
            "items": [
                {"shortDescription": "Pepsi - 12-oz", "price": "1.25"},
                {"shortDescription": "Dasani", "price": "1.40"}
            ]
        })
    }

    fn with(mut payload: Value, key: &str, value: Value) -> Value {
        payload[key] = value;
        payload
    }

    fn without(mut payload: Value, key: &str) -> Value {
        payload.as_object_mut().unwrap().remove(key);
        payload
    }

    #[test]
    fn test_valid_receipt() {
        let receipt = validate_receipt(&valid_payload()).unwrap();
        assert_eq!(receipt.retailer(), "Walgreens");
        assert_eq!(receipt.purchase_date(), NaiveDate::from_ymd_opt(2022, 1, 2).unwrap());
        assert_eq!(receipt.purchase_time(), NaiveTime::from_hms_opt(8, 13, 0).unwrap());
        assert_eq!(receipt.total().cents(), 265);
        assert_eq!(receipt.items().len(), 2);
        assert_eq!(receipt.items()[1].price().cents(), 140);
    }

    #[test]
    fn test_round_trips_to_submitted_json() {
        let payload = valid_payload();
        let receipt = validate_receipt(&payload).unwrap();
        assert_eq!(serde_json::to_value(&receipt).unwrap(), payload);
    }

    #[test]
    fn test_rejects_non_objects() {
        for payload in [json!([]), json!("receipt"), json!(42), json!(null)] {
            assert!(matches!(
                validate_receipt(&payload),
                Err(ValidationError::NotAnObject { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_missing_fields() {
        for key in REQUIRED_RECEIPT_FIELDS {
            let err = validate_receipt(&without(valid_payload(), key)).unwrap_err();
            assert_eq!(err, ValidationError::Required { field: key.to_string() });
        }
    }

    #[test]
    fn test_rejects_bad_retailer() {
        assert!(validate_receipt(&with(valid_payload(), "retailer", json!(""))).is_err());
        assert!(validate_receipt(&with(valid_payload(), "retailer", json!(7))).is_err());
        assert!(validate_receipt(&with(valid_payload(), "retailer", json!(null))).is_err());
    }

    #[test]
    fn test_rejects_bad_dates() {
        for date in [
            "01-02-2022",
            "2022-13-01",
            "2022-02-30",
            "2022-1-02",
            "2022/01/02",
            "20a2-01-02",
            "2022-01-02T00:00",
            "",
        ] {
            let err = validate_receipt(&with(valid_payload(), "purchaseDate", json!(date)));
            assert!(err.is_err(), "date {date:?} should be rejected");
        }
        assert!(validate_receipt(&with(valid_payload(), "purchaseDate", json!("2024-02-29"))).is_ok());
    }

    #[test]
    fn test_rejects_bad_times() {
        for time in ["1:01 PM", "01:01 PM", "24:00", "12:60", "1:01", "13:01:00", "ab:cd", ""] {
            let err = validate_receipt(&with(valid_payload(), "purchaseTime", json!(time)));
            assert!(err.is_err(), "time {time:?} should be rejected");
        }
        for time in ["00:00", "23:59", "14:00"] {
            assert!(validate_receipt(&with(valid_payload(), "purchaseTime", json!(time))).is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_total() {
        for total in ["2", "2.6", "2.655", "two", "2,65", ".65"] {
            let err = validate_receipt(&with(valid_payload(), "total", json!(total)));
            assert!(err.is_err(), "total {total:?} should be rejected");
        }
        // Numbers are not accepted in place of the string form.
        assert!(validate_receipt(&with(valid_payload(), "total", json!(2.65))).is_err());
    }

    #[test]
    fn test_rejects_bad_items() {
        assert_eq!(
            validate_receipt(&with(valid_payload(), "items", json!([]))).unwrap_err(),
            ValidationError::Empty { field: "items".to_string() }
        );
        assert!(validate_receipt(&with(valid_payload(), "items", json!({}))).is_err());
        assert!(validate_receipt(&with(valid_payload(), "items", json!(["Pepsi"]))).is_err());

        let err = validate_receipt(&with(
            valid_payload(),
            "items",
            json!([{"shortDescription": "Pepsi", "price": "1.25"}, {"price": "1.40"}]),
        ))
        .unwrap_err();
        assert_eq!(err.field(), "items[1].shortDescription");

        let err = validate_receipt(&with(
            valid_payload(),
            "items",
            json!([{"shortDescription": "   ", "price": "1.25"}]),
        ))
        .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "items[0].shortDescription".to_string() });

        let err = validate_receipt(&with(
            valid_payload(),
            "items",
            json!([{"shortDescription": "Pepsi", "price": "1.2"}]),
        ))
        .unwrap_err();
        assert_eq!(err.field(), "items[0].price");
    }

    #[test]
    fn test_amount_limit() {
        let max = Money::from_cents(MAX_AMOUNT_CENTS).to_string();
        let over = Money::from_cents(MAX_AMOUNT_CENTS + 1).to_string();
        assert_eq!(max, "1000000000.00");

        assert!(validate_receipt(&with(valid_payload(), "total", json!(max))).is_ok());
        let err = validate_receipt(&with(valid_payload(), "total", json!(over))).unwrap_err();
        assert_eq!(err.field(), "total");

        let err = validate_receipt(&with(
            valid_payload(),
            "items",
            json!([{"shortDescription": "abc", "price": "92233720368547758.07"}]),
        ))
        .unwrap_err();
        assert_eq!(err.field(), "items[0].price");
    }

    #[test]
    fn test_parse_receipt_from_bytes() {
        let body = valid_payload().to_string();
        let receipt = parse_receipt(body.as_bytes()).unwrap();
        assert_eq!(receipt.retailer(), "Walgreens");

        match parse_receipt(b"{not json") {
            Err(CoreError::InvalidReceipt(err)) => assert_eq!(err.field(), "body"),
            other => panic!("expected InvalidReceipt, got {other:?}"),
        }
        match parse_receipt(b"") {
            Err(CoreError::InvalidReceipt(err)) => assert_eq!(err.field(), "body"),
            other => panic!("expected InvalidReceipt, got {other:?}"),
        }
        match parse_receipt(b"{}") {
            Err(CoreError::InvalidReceipt(err)) => assert_eq!(err.field(), "retailer"),
            other => panic!("expected InvalidReceipt, got {other:?}"),
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let payload = json!({
            "retailer": "Target",
            "purchaseDate": "not-a-date",
            "purchaseTime": "99:99",
            "total": "x",
            "items": []
        });
        assert_eq!(validate_receipt(&payload).unwrap_err().field(), "purchaseDate");
    }

    #[test]
    fn test_validate_receipt_id() {
        assert!(is_uuid_v4("7fb1377b-b223-49d9-a31a-5a02701dd310"));
        assert!(is_uuid_v4("7FB1377B-B223-49D9-A31A-5A02701DD310"));
        assert!(is_uuid_v4(&Uuid::new_v4().to_string()));

        assert!(!is_uuid_v4("63452"));
        assert!(!is_uuid_v4(""));
        // simple, braced and urn forms
        assert!(!is_uuid_v4("7fb1377bb22349d9a31a5a02701dd310"));
        assert!(!is_uuid_v4("{7fb1377b-b223-49d9-a31a-5a02701dd310}"));
        assert!(!is_uuid_v4("urn:uuid:7fb1377b-b223-49d9-a31a-5a02701dd310"));
        // wrong version nibble
        assert!(!is_uuid_v4("7fb1377b-b223-19d9-a31a-5a02701dd310"));
        // wrong variant nibble
        assert!(!is_uuid_v4("7fb1377b-b223-49d9-c31a-5a02701dd310"));
        // misplaced hyphen
        assert!(!is_uuid_v4("7fb1377bb-223-49d9-a31a-5a02701dd310"));
        // non-hex
        assert!(!is_uuid_v4("7fb1377g-b223-49d9-a31a-5a02701dd310"));
    }

    #[test]
    fn test_parsers_reject_non_ascii() {
        // multi-byte characters must not panic on slicing
        assert!(parse_purchase_date("2022-é1-02").is_none());
        assert!(parse_purchase_time("1é:01").is_none());
        assert!(validate_receipt_id("7fb1377b-b223-49d9-a31a-5a02701dd31é").is_err());
    }
}
