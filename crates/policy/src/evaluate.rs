//! Policy evaluation.
//!
//! The single decision entry point. Composes role expansion, the
//! permission matcher, the scope evaluator, the clearance gate, and the
//! resource override rules into one deny-by-default `PolicyResult`.
//!
//! One error posture: never panic, always return a decision. Malformed
//! input degrades to a denial; nothing is retried (the function is
//! deterministic) and nothing escalates beyond the returned value.

use serde::Serialize;

use finguard_core::{ResourceContext, Role, UserAttributes};

use crate::clearance::check_clearance;
use crate::grants::matcher_allows;
use crate::hierarchy::expand_roles;
use crate::overrides::check_overrides;
use crate::scope::check_scope;

pub(crate) const EVALUATION_FAILED: &str = "Policy evaluation failed";
pub(crate) const ACCESS_GRANTED: &str = "Access granted after policy evaluation";

// ─────────────────────────────────────────────────────────────────────────────
// Policy Result
// ─────────────────────────────────────────────────────────────────────────────

/// The engine's sole output: an immutable, per-call decision value.
///
/// `allowed = true` is only reachable through the explicit positive path
/// (permission AND scope AND clearance AND no override veto); there is no
/// implicit allow. `deny_by_default` is `true` when the decision path
/// reached the default-deny branch (no matching grant, or unusable input)
/// rather than an explicit veto; it also stays `true` on the allow path,
/// recording that the overall posture remains default-deny and this
/// request happened to clear every gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    pub allowed: bool,

    /// Human-auditable explanation; never empty.
    pub reason: String,

    pub deny_by_default: bool,

    /// On denial, the attributes that would have been needed,
    /// e.g. `["clearance_level>=l4"]`.
    pub required_attributes: Option<Vec<String>>,
}

impl PolicyResult {
    fn granted() -> Self {
        Self {
            allowed: true,
            reason: ACCESS_GRANTED.to_string(),
            deny_by_default: true,
            required_attributes: None,
        }
    }

    fn denied(
        reason: impl Into<String>,
        deny_by_default: bool,
        required_attributes: Option<Vec<String>>,
    ) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
            deny_by_default,
            required_attributes,
        }
    }

    fn veto(denial: Denial) -> Self {
        Self::denied(denial.reason, false, denial.required_attributes)
    }
}

/// A single stage's denial, before `evaluate` stamps the decision-path
/// flag onto it.
#[derive(Debug, Clone)]
pub(crate) struct Denial {
    pub(crate) reason: String,
    pub(crate) required_attributes: Option<Vec<String>>,
}

impl Denial {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            required_attributes: None,
        }
    }

    pub(crate) fn with_required(mut self, required: Vec<String>) -> Self {
        self.required_attributes = Some(required);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// Decide whether `roles`/`attributes` may perform `action` on `resource`.
///
/// Stages, in order: role expansion; attribute validation (absent or
/// unusable attributes degrade to a denial, never a panic); permission
/// matcher; scope evaluator; clearance gate; override rules. The first
/// failing stage produces the result.
pub fn evaluate(
    roles: &[Role],
    attributes: Option<&UserAttributes>,
    resource: &str,
    action: &str,
    resource_context: Option<&ResourceContext>,
) -> PolicyResult {
    let expanded = expand_roles(roles);

    let Some(attributes) = attributes.filter(|attrs| attrs.is_valid()) else {
        return deny(resource, action, PolicyResult::denied(EVALUATION_FAILED, true, None));
    };

    if !matcher_allows(&expanded, resource, action) {
        return deny(
            resource,
            action,
            PolicyResult::denied(
                format!("Actor lacks permission for {resource}:{action}"),
                true,
                Some(vec![format!("permission:{resource}:{action}")]),
            ),
        );
    }

    if let Err(denial) = check_scope(&expanded, attributes, resource_context) {
        return deny(resource, action, PolicyResult::veto(denial));
    }

    if let Err(denial) = check_clearance(attributes, resource, action) {
        return deny(resource, action, PolicyResult::veto(denial));
    }

    if let Err(denial) = check_overrides(&expanded, attributes, resource, action) {
        return deny(resource, action, PolicyResult::veto(denial));
    }

    tracing::trace!(resource, action, "access granted");
    PolicyResult::granted()
}

fn deny(resource: &str, action: &str, result: PolicyResult) -> PolicyResult {
    tracing::debug!(
        resource,
        action,
        reason = %result.reason,
        deny_by_default = result.deny_by_default,
        "request denied"
    );
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
