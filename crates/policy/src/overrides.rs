//! Resource override rules.
//!
//! A short table of hard exceptions layered after the general checks.
//! Overrides only narrow: they deny or re-assert a condition; they never
//! grant what an earlier stage refused.

use std::collections::BTreeSet;

use finguard_core::{ClearanceLevel, Role, UserAttributes};

use crate::evaluate::Denial;
use crate::grants::RESTRICTED_VIEWER_ACTIONS;
use crate::hierarchy::{INVESTOR_VIEW, SUPER_ADMIN, set_contains};

pub(crate) const SUPER_ADMIN_REQUIRED: &str = "requires super admin role";

pub(crate) fn check_overrides(
    expanded: &BTreeSet<Role>,
    attributes: &UserAttributes,
    resource: &str,
    action: &str,
) -> Result<(), Denial> {
    // Governance writes are reserved for the top role, independent of any
    // grants-table row that would otherwise allow them.
    if resource == "governance" && action == "write" && !set_contains(expanded, SUPER_ADMIN) {
        return Err(Denial::new(SUPER_ADMIN_REQUIRED)
            .with_required(vec!["role:super_admin".to_string()]));
    }

    // Hedging writes re-assert the l4 floor independently of the clearance
    // requirement table.
    if resource == "hedging"
        && action == "write"
        && attributes.clearance_level < ClearanceLevel::L4
    {
        return Err(Denial::new(format!(
            "requires {} clearance level",
            ClearanceLevel::L4.as_str()
        ))
        .with_required(vec![format!(
            "clearance_level>={}",
            ClearanceLevel::L4.as_str()
        )]));
    }

    // Restricted viewers only ever get aggregated KPI reads, re-asserted
    // independently of the matcher pre-check.
    if resource == "kpi"
        && set_contains(expanded, INVESTOR_VIEW)
        && !RESTRICTED_VIEWER_ACTIONS.contains(&action)
    {
        return Err(
            Denial::new(format!("restricted viewer lacks permission for kpi:{action}"))
                .with_required(vec!["action:read:aggregated".to_string()]),
        );
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
