//! Scope evaluation.
//!
//! Checks the actor's access scope against the org/region dimensions of
//! the request's resource context. First mismatch wins; an absent context
//! dimension is "not constrained" and passes. Populating context when
//! scoping matters is the caller's contract, not inferred here.

use std::collections::BTreeSet;

use finguard_core::{AccessScope, ResourceContext, Role, UserAttributes};

use crate::evaluate::Denial;
use crate::hierarchy::{SUPER_ADMIN, set_contains};

pub(crate) const BRANCH_DENIED: &str = "Branch-scoped access denied";
pub(crate) const REGIONAL_DENIED: &str = "Regional access denied";

pub(crate) fn check_scope(
    expanded: &BTreeSet<Role>,
    attributes: &UserAttributes,
    context: Option<&ResourceContext>,
) -> Result<(), Denial> {
    // Global scope and the top role bypass scoping entirely.
    if attributes.access_scope == AccessScope::Global || set_contains(expanded, SUPER_ADMIN) {
        return Ok(());
    }

    let Some(context) = context else {
        return Ok(());
    };

    match attributes.access_scope {
        AccessScope::Global => Ok(()),

        // `self` scoping is conservatively branch-equivalent on org_id;
        // the caller narrows self-scoped requests to the actor upstream.
        AccessScope::Branch | AccessScope::Own => match context.org_id() {
            Some(org) if org != attributes.org_id => Err(Denial::new(BRANCH_DENIED)
                .with_required(vec![format!("org_id={}", attributes.org_id)])),
            _ => Ok(()),
        },

        AccessScope::Regional => match context.region() {
            Some(region) if attributes.region.as_deref() != Some(region) => {
                Err(Denial::new(REGIONAL_DENIED).with_required(vec![format!(
                    "region={}",
                    attributes.region.as_deref().unwrap_or("unset")
                )]))
            }
            _ => Ok(()),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
