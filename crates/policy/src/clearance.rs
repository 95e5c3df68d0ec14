//! Clearance gate.
//!
//! An ordered ladder (`l1 < l2 < l3 < l4`) gating especially sensitive
//! resource/action pairs independently of role and scope. Pairs not in the
//! requirement table need no minimum. Unrecognized actor clearance values
//! are already `l1` by parse-time fail-closed.

use finguard_core::{ClearanceLevel, UserAttributes};

use crate::evaluate::Denial;

/// Minimum clearance required by specific resource/action pairs.
pub(crate) const CLEARANCE_REQUIREMENTS: &[(&str, &str, ClearanceLevel)] = &[
    ("hedging", "write", ClearanceLevel::L4),
    ("hedging", "approve", ClearanceLevel::L4),
    ("risk", "write", ClearanceLevel::L3),
];

/// Minimum clearance required for `resource:action` (`L1` when unlisted).
pub fn required_clearance(resource: &str, action: &str) -> ClearanceLevel {
    CLEARANCE_REQUIREMENTS
        .iter()
        .find(|(req_resource, req_action, _)| *req_resource == resource && *req_action == action)
        .map_or(ClearanceLevel::L1, |(_, _, level)| *level)
}

pub(crate) fn check_clearance(
    attributes: &UserAttributes,
    resource: &str,
    action: &str,
) -> Result<(), Denial> {
    let required = required_clearance(resource, action);
    if attributes.clearance_level >= required {
        return Ok(());
    }

    // The denial names the literal required level so operators can diagnose
    // without re-deriving the table.
    Err(
        Denial::new(format!("requires {} clearance level", required.as_str())).with_required(
            vec![format!("clearance_level>={}", required.as_str())],
        ),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_pairs_require_no_minimum() {
        assert_eq!(required_clearance("cases", "read"), ClearanceLevel::L1);
        assert_eq!(required_clearance("hedging", "read"), ClearanceLevel::L1);
        assert_eq!(required_clearance("governance", "write"), ClearanceLevel::L1);
    }

    #[test]
    fn hedging_write_requires_l4() {
        assert_eq!(required_clearance("hedging", "write"), ClearanceLevel::L4);

        let attrs = UserAttributes::new("org1");
        let err = check_clearance(&attrs, "hedging", "write").unwrap_err();
        assert_eq!(err.reason, "requires l4 clearance level");
        assert_eq!(
            err.required_attributes,
            Some(vec!["clearance_level>=l4".to_string()])
        );
    }

    #[test]
    fn sufficient_clearance_passes() {
        let attrs = UserAttributes::new("org1").with_clearance(ClearanceLevel::L4);
        assert!(check_clearance(&attrs, "hedging", "write").is_ok());

        let attrs = UserAttributes::new("org1").with_clearance(ClearanceLevel::L3);
        assert!(check_clearance(&attrs, "risk", "write").is_ok());
    }

    #[test]
    fn clearance_check_is_monotone() {
        let levels = [
            ClearanceLevel::L1,
            ClearanceLevel::L2,
            ClearanceLevel::L3,
            ClearanceLevel::L4,
        ];

        for level in levels {
            let attrs = UserAttributes::new("org1").with_clearance(level);
            let passes = check_clearance(&attrs, "risk", "write").is_ok();
            assert_eq!(passes, level >= ClearanceLevel::L3, "at {level}");
        }
    }
}
