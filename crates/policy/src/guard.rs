//! Operation-boundary guard.
//!
//! A thin `Result`-shaped adapter over `evaluate` for callers that enforce
//! authorization at a dispatch boundary. It adds no policy of its own; a
//! denial here is the engine's decision restated as an error value.

use thiserror::Error;

use finguard_core::{Actor, ResourceContext};

use crate::evaluate::evaluate;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: {reason}")]
    Forbidden {
        reason: String,
        required_attributes: Option<Vec<String>>,
    },
}

/// Operation-side authorization contract (checked before dispatch).
///
/// Implement this on operations that require a policy decision; the host
/// enforces it before executing the operation.
pub trait OperationAuthorization {
    fn resource(&self) -> &str;

    fn action(&self) -> &str;

    /// Resource context for scope checks. Operations on scoped resources
    /// must supply org/region identifiers here; returning `None` leaves
    /// those dimensions unconstrained.
    fn resource_context(&self) -> Option<ResourceContext> {
        None
    }
}

/// Authorize an operation for an authenticated actor.
///
/// Intended to be called before dispatching the operation.
pub fn authorize_operation<O: OperationAuthorization>(
    actor: &Actor,
    operation: &O,
) -> Result<(), AuthzError> {
    let context = operation.resource_context();
    let result = evaluate(
        &actor.roles,
        Some(&actor.attributes),
        operation.resource(),
        operation.action(),
        context.as_ref(),
    );

    if result.allowed {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            reason: result.reason,
            required_attributes: result.required_attributes,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use finguard_core::{ActorId, ClearanceLevel, Role, UserAttributes};

    use crate::hierarchy::{ADMIN, CS_AGENT};

    struct CloseCase {
        org_id: String,
    }

    impl OperationAuthorization for CloseCase {
        fn resource(&self) -> &str {
            "cases"
        }

        fn action(&self) -> &str {
            "write"
        }

        fn resource_context(&self) -> Option<ResourceContext> {
            Some(ResourceContext::new().with("org_id", self.org_id.clone()))
        }
    }

    struct RebalanceHedge;

    impl OperationAuthorization for RebalanceHedge {
        fn resource(&self) -> &str {
            "hedging"
        }

        fn action(&self) -> &str {
            "write"
        }
    }

    fn actor(role: &'static str, attributes: UserAttributes) -> Actor {
        Actor::new(ActorId::new(), vec![Role::new(role)], attributes)
    }

    #[test]
    fn permitted_operation_passes_the_guard() {
        let actor = actor(CS_AGENT, UserAttributes::new("org1"));
        let op = CloseCase {
            org_id: "org1".to_string(),
        };

        assert!(authorize_operation(&actor, &op).is_ok());
    }

    #[test]
    fn denial_carries_the_engine_reason() {
        let actor = actor(ADMIN, UserAttributes::new("org1"));

        let err = authorize_operation(&actor, &RebalanceHedge).unwrap_err();
        let AuthzError::Forbidden {
            reason,
            required_attributes,
        } = err;

        assert_eq!(reason, "requires l4 clearance level");
        assert_eq!(
            required_attributes,
            Some(vec!["clearance_level>=l4".to_string()])
        );
    }

    #[test]
    fn guard_honors_operation_context() {
        let actor = actor(
            CS_AGENT,
            UserAttributes::new("org1").with_scope(finguard_core::AccessScope::Branch),
        );
        let op = CloseCase {
            org_id: "org2".to_string(),
        };

        let err = authorize_operation(&actor, &op).unwrap_err();
        assert!(err.to_string().contains("Branch-scoped access denied"));
    }

    #[test]
    fn clearance_satisfied_passes_the_guard() {
        let actor = actor(
            ADMIN,
            UserAttributes::new("org1").with_clearance(ClearanceLevel::L4),
        );

        assert!(authorize_operation(&actor, &RebalanceHedge).is_ok());
    }
}
