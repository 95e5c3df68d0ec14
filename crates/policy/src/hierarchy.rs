//! Role hierarchy resolution.
//!
//! Roles form a static, acyclic implication graph compiled into this
//! module: holding a role implies holding every role it transitively
//! contains. The graph is flat data plus a closure computation; roles are
//! never modeled as a type hierarchy.

use std::collections::BTreeSet;

use finguard_core::Role;

/// Top role. Implies every administrative role and bypasses scope checks.
pub const SUPER_ADMIN: &str = "super_admin";

/// Administrative role with broad operational grants.
pub const ADMIN: &str = "admin";

/// Branch operations lead; branch-scoped by convention.
pub const BRANCH_MANAGER: &str = "branch_manager";

/// Customer support agent.
pub const CS_AGENT: &str = "cs_agent";

/// Read-only operational access.
pub const READ_ONLY: &str = "read_only";

/// Restricted viewer for investor-facing reporting. Deliberately outside
/// the implication graph and capped to aggregated reads by the matcher.
pub const INVESTOR_VIEW: &str = "investor_view";

/// All roles known to the compiled policy, for audit/display surfaces.
pub const KNOWN_ROLES: &[&str] = &[
    SUPER_ADMIN,
    ADMIN,
    BRANCH_MANAGER,
    CS_AGENT,
    READ_ONLY,
    INVESTOR_VIEW,
];

/// Roles directly implied by holding `role`.
pub(crate) fn implied_roles(role: &str) -> &'static [&'static str] {
    match role {
        SUPER_ADMIN => &[ADMIN],
        ADMIN => &[BRANCH_MANAGER, CS_AGENT],
        BRANCH_MANAGER => &[READ_ONLY],
        CS_AGENT => &[READ_ONLY],
        _ => &[],
    }
}

/// Expand a declared role set into the transitive closure of implied roles.
///
/// Total: every role, including an unknown one, yields at least itself.
/// Unknown roles are kept as-is and simply match no grants downstream
/// (fail closed, never error).
pub fn expand_roles(roles: &[Role]) -> BTreeSet<Role> {
    let mut expanded: BTreeSet<Role> = BTreeSet::new();
    let mut pending: Vec<String> = roles.iter().map(|r| r.as_str().to_string()).collect();

    while let Some(name) = pending.pop() {
        for implied in implied_roles(&name) {
            if !expanded.iter().any(|r| r.as_str() == *implied) {
                pending.push((*implied).to_string());
            }
        }
        expanded.insert(Role::new(name));
    }

    expanded
}

/// True when `required` is in the transitive closure of `roles`.
pub fn has_role(roles: &[Role], required: &str) -> bool {
    set_contains(&expand_roles(roles), required)
}

/// Membership check over an already-expanded role set.
pub(crate) fn set_contains(expanded: &BTreeSet<Role>, role: &str) -> bool {
    expanded.iter().any(|r| r.as_str() == role)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
