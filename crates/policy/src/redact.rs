//! Response redaction for restricted viewers.
//!
//! A pure post-processing step over outbound payloads: when the actor's
//! expanded role set contains the restricted viewer role, values of
//! sensitive keys are replaced with a sentinel, recursively, preserving
//! every other key and the container shape. Everyone else bypasses the
//! filter entirely.

use serde_json::Value;

use finguard_core::Role;

use crate::hierarchy::{INVESTOR_VIEW, has_role};

/// Sentinel written over sensitive values.
pub const REDACTED: &str = "[REDACTED]";

/// Keys stripped from payloads served to restricted viewers: identity,
/// contact, account/routing numbers, device/network identifiers, and
/// line-item transaction detail.
pub(crate) const SENSITIVE_FIELDS: &[&str] = &[
    // identity
    "ssn",
    "national_id",
    "date_of_birth",
    "full_name",
    // contact
    "email",
    "phone",
    "address",
    // account
    "account_number",
    "routing_number",
    "iban",
    "card_number",
    // device / network
    "device_id",
    "device_fingerprint",
    "ip_address",
    "user_agent",
    // transaction detail
    "transactions",
    "transaction_history",
    "line_items",
];

/// Redact `payload` for the given role set.
///
/// Identity function for any role set without the restricted viewer role.
/// Idempotent: redacting an already-redacted payload changes nothing.
pub fn redact(payload: Value, roles: &[Role]) -> Value {
    if !has_role(roles, INVESTOR_VIEW) {
        return payload;
    }
    redact_value(payload)
}

fn redact_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, nested)| {
                    if SENSITIVE_FIELDS.contains(&key.as_str()) {
                        (key, Value::String(REDACTED.to_string()))
                    } else {
                        (key, redact_value(nested))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(redact_value).collect()),
        scalar => scalar,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
