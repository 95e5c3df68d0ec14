//! Read-only registry of the compiled policy.
//!
//! A serializable snapshot of roles, grants, clearance requirements, and
//! override rules, built from the same constants the engine evaluates
//! against (never a second source of truth). Hosts typically expose this
//! on an admin route for auditing.

use serde::Serialize;

use finguard_core::ClearanceLevel;

use crate::clearance::CLEARANCE_REQUIREMENTS;
use crate::grants::role_grants;
use crate::hierarchy::{
    ADMIN, BRANCH_MANAGER, CS_AGENT, INVESTOR_VIEW, KNOWN_ROLES, READ_ONLY, SUPER_ADMIN,
    implied_roles,
};

/// Role definition with its implications and grant rows (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub name: String,
    pub implies: Vec<String>,
    pub grants: Vec<String>,
    pub description: Option<String>,
}

/// A clearance requirement row (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct ClearanceRequirement {
    pub resource: String,
    pub action: String,
    pub level: ClearanceLevel,
}

/// An override rule summary (for audit/display).
#[derive(Debug, Clone, Serialize)]
pub struct OverrideRule {
    pub resource: String,
    pub action: Option<String>,
    pub description: String,
}

/// Complete view of the compiled policy for auditing.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyRegistry {
    pub roles: Vec<RoleDefinition>,
    pub clearance_requirements: Vec<ClearanceRequirement>,
    pub overrides: Vec<OverrideRule>,
}

impl PolicyRegistry {
    /// Snapshot the built-in policy tables.
    pub fn builtin() -> Self {
        let roles = KNOWN_ROLES
            .iter()
            .map(|name| RoleDefinition {
                name: (*name).to_string(),
                implies: implied_roles(name).iter().map(|r| (*r).to_string()).collect(),
                grants: role_grants(name).iter().map(|g| (*g).to_string()).collect(),
                description: role_description(name),
            })
            .collect();

        let clearance_requirements = CLEARANCE_REQUIREMENTS
            .iter()
            .map(|(resource, action, level)| ClearanceRequirement {
                resource: (*resource).to_string(),
                action: (*action).to_string(),
                level: *level,
            })
            .collect();

        let overrides = vec![
            OverrideRule {
                resource: "governance".to_string(),
                action: Some("write".to_string()),
                description: "requires the super_admin role explicitly".to_string(),
            },
            OverrideRule {
                resource: "hedging".to_string(),
                action: Some("write".to_string()),
                description: "requires l4 clearance, re-asserted after the clearance gate"
                    .to_string(),
            },
            OverrideRule {
                resource: "kpi".to_string(),
                action: None,
                description: "restricted viewers may only read:aggregated".to_string(),
            },
        ];

        Self {
            roles,
            clearance_requirements,
            overrides,
        }
    }
}

fn role_description(role: &str) -> Option<String> {
    match role {
        SUPER_ADMIN => Some("Top role; full grants and governance control".to_string()),
        ADMIN => Some("Administrator with broad operational grants".to_string()),
        BRANCH_MANAGER => Some("Branch operations lead, branch-scoped".to_string()),
        CS_AGENT => Some("Customer support agent".to_string()),
        READ_ONLY => Some("Read-only operational access".to_string()),
        INVESTOR_VIEW => Some("Restricted viewer for investor reporting".to_string()),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use finguard_core::Role;

    #[test]
    fn registry_covers_every_known_role() {
        let registry = PolicyRegistry::builtin();

        assert_eq!(registry.roles.len(), KNOWN_ROLES.len());
        for role in KNOWN_ROLES {
            assert!(registry.roles.iter().any(|r| r.name == *role));
        }
    }

    #[test]
    fn registry_mirrors_the_engine_tables() {
        let registry = PolicyRegistry::builtin();

        // Every listed grant row must actually be matchable through the
        // engine's own matcher for the role that carries it.
        for role in &registry.roles {
            for grant in &role.grants {
                let (resource, action) = grant.split_once(':').expect("grant row shape");
                if action.contains('*') || resource.contains('*') {
                    continue;
                }
                assert!(
                    crate::grants::has_permission(
                        &[Role::new(role.name.clone())],
                        resource,
                        action,
                    ),
                    "{} should match its own grant {grant}",
                    role.name
                );
            }
        }

        assert_eq!(
            registry.clearance_requirements.len(),
            CLEARANCE_REQUIREMENTS.len()
        );
    }

    #[test]
    fn registry_serializes_for_admin_surfaces() {
        let json = serde_json::to_value(PolicyRegistry::builtin()).unwrap();

        assert!(json["roles"].is_array());
        assert!(
            json["clearance_requirements"]
                .as_array()
                .unwrap()
                .iter()
                .any(|row| row["resource"] == "hedging" && row["level"] == "l4")
        );
    }
}
