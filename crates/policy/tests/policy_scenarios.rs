//! Black-box scenarios against the public engine surface.

use serde_json::json;

use finguard_core::{AccessScope, ClearanceLevel, ResourceContext, Role, UserAttributes};
use finguard_policy::{REDACTED, evaluate, has_permission, has_role, redact};

fn roles(names: &[&'static str]) -> Vec<Role> {
    names.iter().map(|n| Role::new(*n)).collect()
}

#[test]
fn treasury_admin_needs_l4_to_write_hedging() {
    finguard_observability::init();

    let attrs = UserAttributes::new("org1");
    let denied = evaluate(&roles(&["admin"]), Some(&attrs), "hedging", "write", None);
    assert!(!denied.allowed);
    assert!(denied.reason.contains("clearance"));

    let attrs = attrs.with_clearance(ClearanceLevel::L4);
    let allowed = evaluate(&roles(&["admin"]), Some(&attrs), "hedging", "write", None);
    assert!(allowed.allowed);
}

#[test]
fn branch_manager_cannot_cross_org_boundaries() {
    let attrs = UserAttributes::new("org1").with_scope(AccessScope::Branch);
    let ctx = ResourceContext::new().with("org_id", "org2");

    let result = evaluate(
        &roles(&["branch_manager"]),
        Some(&attrs),
        "cases",
        "read:branch",
        Some(&ctx),
    );

    assert!(!result.allowed);
    assert_eq!(result.reason, "Branch-scoped access denied");
    assert!(!result.deny_by_default);
}

#[test]
fn super_admin_writes_governance_whatever_the_attributes_say() {
    // Branch-scoped, l1, foreign-org context: none of it stops the top role.
    let attrs = UserAttributes::new("org1").with_scope(AccessScope::Branch);
    let ctx = ResourceContext::new().with("org_id", "org2");

    let result = evaluate(
        &roles(&["super_admin"]),
        Some(&attrs),
        "governance",
        "write",
        Some(&ctx),
    );

    assert!(result.allowed);
    assert_eq!(result.reason, "Access granted after policy evaluation");
}

#[test]
fn governance_write_cannot_be_reached_below_the_top_role() {
    let attrs = UserAttributes::new("org1").with_clearance(ClearanceLevel::L4);

    for role in ["admin", "branch_manager", "cs_agent", "read_only"] {
        let result = evaluate(&roles(&[role]), Some(&attrs), "governance", "write", None);
        assert!(!result.allowed, "{role} must not write governance");
    }
}

#[test]
fn hedging_write_cannot_be_reached_below_l4() {
    for level in [ClearanceLevel::L1, ClearanceLevel::L2, ClearanceLevel::L3] {
        let attrs = UserAttributes::new("org1").with_clearance(level);
        for role in ["admin", "super_admin"] {
            let result = evaluate(&roles(&[role]), Some(&attrs), "hedging", "write", None);
            assert!(!result.allowed, "{role} at {level} must not write hedging");
        }
    }
}

#[test]
fn restricted_viewer_is_contained_to_aggregated_kpi_reads() {
    let attrs = UserAttributes::new("org1");
    let investor = roles(&["investor_view"]);

    let allowed = evaluate(&investor, Some(&attrs), "kpi", "read:aggregated", None);
    assert!(allowed.allowed);

    let probes = [
        ("kpi", "read"),
        ("kpi", "write"),
        ("kpi", "export"),
        ("cases", "read"),
        ("reports", "read"),
        ("reports", "read:aggregated"),
        ("governance", "read"),
        ("hedging", "write"),
    ];
    for (resource, action) in probes {
        let result = evaluate(&investor, Some(&attrs), resource, action, None);
        assert!(!result.allowed, "investor_view must not reach {resource}:{action}");
    }

    let plain_read = evaluate(&investor, Some(&attrs), "kpi", "read", None);
    assert!(plain_read.reason.contains("lacks permission for kpi:read"));
}

#[test]
fn coarse_helpers_agree_with_their_layer() {
    let admin = roles(&["admin"]);

    // has_role sees the hierarchy.
    assert!(has_role(&admin, "cs_agent"));
    assert!(!has_role(&admin, "super_admin"));

    // has_permission is the matcher only: it says yes to hedging:write
    // even though the full evaluation would demand l4 clearance.
    assert!(has_permission(&admin, "hedging", "write"));
    let attrs = UserAttributes::new("org1");
    assert!(!evaluate(&admin, Some(&attrs), "hedging", "write", None).allowed);
}

#[test]
fn investor_payloads_are_redacted_after_an_allowed_read() {
    let attrs = UserAttributes::new("org1");
    let investor = roles(&["investor_view"]);

    let decision = evaluate(&investor, Some(&attrs), "kpi", "read:aggregated", None);
    assert!(decision.allowed);

    let payload = json!({
        "kpi": "portfolio_yield",
        "value": 0.057,
        "breakdown": [
            {"branch": "north", "value": 0.061, "account_number": "111"},
            {"branch": "south", "value": 0.052, "account_number": "222"}
        ],
        "contact": {"email": "treasury@example.com"}
    });

    let redacted = redact(payload, &investor);
    assert_eq!(redacted["kpi"], "portfolio_yield");
    assert_eq!(redacted["breakdown"][0]["account_number"], REDACTED);
    assert_eq!(redacted["breakdown"][1]["value"], 0.052);
    assert_eq!(redacted["contact"]["email"], REDACTED);

    // Operators see the same payload untouched.
    let original = json!({"contact": {"email": "treasury@example.com"}});
    assert_eq!(redact(original.clone(), &roles(&["admin"])), original);
}

#[test]
fn decisions_are_pure_and_repeatable() {
    let attrs = UserAttributes::new("org1").with_scope(AccessScope::Regional);
    let ctx = ResourceContext::new().with("region", "emea");

    let first = evaluate(&roles(&["admin"]), Some(&attrs), "cases", "read", Some(&ctx));
    let second = evaluate(&roles(&["admin"]), Some(&attrs), "cases", "read", Some(&ctx));

    assert_eq!(first, second);
}
