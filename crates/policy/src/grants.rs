//! Coarse permission grants.
//!
//! Grants are `(role, resource, action-pattern)` rows compiled into a
//! static table. A pattern is an exact action, a resource-scoped wildcard
//! (`resource:*`), or the global grant (`*:*`, top role only). Grants are
//! additive across an actor's expanded role set; no grant revokes another.
//!
//! A matcher pass is necessary but never sufficient: scope, clearance, and
//! override checks still apply before a request is allowed.

use std::collections::BTreeSet;

use finguard_core::Role;

use crate::hierarchy::{
    ADMIN, BRANCH_MANAGER, CS_AGENT, INVESTOR_VIEW, READ_ONLY, SUPER_ADMIN, expand_roles,
    set_contains,
};

/// The only actions the restricted viewer role may ever perform, checked
/// before the grants table is consulted. Keeping this an explicit
/// allow-list (rather than grant rows) makes the cap immune to future
/// grants-table edits.
pub(crate) const RESTRICTED_VIEWER_ACTIONS: &[&str] = &["read:aggregated"];

/// Grant rows per role, as `resource:action-pattern` entries.
pub(crate) fn role_grants(role: &str) -> &'static [&'static str] {
    match role {
        SUPER_ADMIN => &["*:*"],
        ADMIN => &[
            "governance:*",
            "hedging:*",
            "kpi:*",
            "cases:*",
            "users:*",
            "reports:*",
            "risk:read",
            "audit:read",
        ],
        BRANCH_MANAGER => &["cases:*", "kpi:read", "reports:read", "users:read"],
        CS_AGENT => &["cases:read", "cases:write", "customers:read"],
        READ_ONLY => &["kpi:read", "reports:read", "cases:read"],
        INVESTOR_VIEW => &["kpi:read:aggregated"],
        _ => &[],
    }
}

/// Whether a single grant row covers `resource:action`.
///
/// Tried in specificity order: exact pair, `resource:*`, `*:*`.
fn grant_matches(grant: &str, resource: &str, action: &str) -> bool {
    let Some((grant_resource, grant_action)) = grant.split_once(':') else {
        return false;
    };

    if grant_resource == resource && grant_action == action {
        return true;
    }
    if grant_resource == resource && grant_action == "*" {
        return true;
    }
    grant_resource == "*" && grant_action == "*"
}

/// Matcher-level decision over an already-expanded role set.
pub(crate) fn matcher_allows(expanded: &BTreeSet<Role>, resource: &str, action: &str) -> bool {
    // Restricted-viewer pre-check: any action outside the aggregated-read
    // allow-list is a matcher-level deny regardless of table content.
    if set_contains(expanded, INVESTOR_VIEW) && !RESTRICTED_VIEWER_ACTIONS.contains(&action) {
        return false;
    }

    expanded.iter().any(|role| {
        role_grants(role.as_str())
            .iter()
            .any(|grant| grant_matches(grant, resource, action))
    })
}

/// Coarse permission check: does any grant in the expanded role set cover
/// `resource:action`?
///
/// Non-authoritative. Callers that enforce access must go through
/// `evaluate`, which layers scope, clearance, and override checks on top.
pub fn has_permission(roles: &[Role], resource: &str, action: &str) -> bool {
    matcher_allows(&expand_roles(roles), resource, action)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
