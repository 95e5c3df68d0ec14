//! Actor attributes and per-request resource context.
//!
//! These types carry the fine-grained inputs of a policy decision. Parsing
//! from wire strings is total and fails closed: anything unrecognized maps
//! to the most restrictive value rather than an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────────────────────────────────────
// Clearance Level
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered sensitivity tier gating especially sensitive actions.
///
/// `L1 < L2 < L3 < L4`. An actor without an explicit clearance holds `L1`.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ClearanceLevel {
    #[default]
    L1,
    L2,
    L3,
    L4,
}

impl ClearanceLevel {
    /// Parse a wire string (`"l1"`..`"l4"`).
    ///
    /// Unrecognized values fall back to `L1` (fail closed, never error).
    pub fn parse(value: &str) -> Self {
        match value {
            "l1" => Self::L1,
            "l2" => Self::L2,
            "l3" => Self::L3,
            "l4" => Self::L4,
            _ => Self::L1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::L3 => "l3",
            Self::L4 => "l4",
        }
    }
}

impl core::fmt::Display for ClearanceLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access Scope
// ─────────────────────────────────────────────────────────────────────────────

/// Breadth of resource instances an actor may act on.
///
/// The wire string for `Own` is `"self"`. Note that the upstream contract
/// for self-scoped access is that the caller narrows the resource context
/// to the actor's own identifier; the policy layer treats `Own` as
/// branch-equivalent `org_id` scoping as a conservative fallback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessScope {
    #[default]
    #[serde(rename = "self")]
    Own,
    Branch,
    Regional,
    Global,
}

impl AccessScope {
    /// Parse a wire string; unrecognized values fall back to `Own`.
    pub fn parse(value: &str) -> Self {
        match value {
            "self" => Self::Own,
            "branch" => Self::Branch,
            "regional" => Self::Regional,
            "global" => Self::Global,
            _ => Self::Own,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "self",
            Self::Branch => "branch",
            Self::Regional => "regional",
            Self::Global => "global",
        }
    }
}

impl core::fmt::Display for AccessScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Attributes
// ─────────────────────────────────────────────────────────────────────────────

/// Per-actor context supplied by the session/identity layer.
///
/// `org_id` is required and must be non-blank; everything else is optional
/// and defaults to the most restrictive interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttributes {
    pub org_id: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub branch_id: Option<String>,

    #[serde(default)]
    pub risk_level: Option<String>,

    #[serde(default)]
    pub clearance_level: ClearanceLevel,

    #[serde(default)]
    pub access_scope: AccessScope,
}

impl UserAttributes {
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            region: None,
            branch_id: None,
            risk_level: None,
            clearance_level: ClearanceLevel::default(),
            access_scope: AccessScope::default(),
        }
    }

    pub fn with_clearance(mut self, clearance_level: ClearanceLevel) -> Self {
        self.clearance_level = clearance_level;
        self
    }

    pub fn with_scope(mut self, access_scope: AccessScope) -> Self {
        self.access_scope = access_scope;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    /// Whether the attribute set is usable for a policy decision.
    pub fn is_valid(&self) -> bool {
        !self.org_id.trim().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resource Context
// ─────────────────────────────────────────────────────────────────────────────

/// Per-request resource context assembled by the caller (typically from
/// path/query/body parameters).
///
/// Absent fields mean "unconstrained" for that dimension; the policy layer
/// trusts the caller to populate context when scoping matters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceContext(BTreeMap<String, Value>);

impl ResourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn org_id(&self) -> Option<&str> {
        self.str_field("org_id")
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.str_field("branch_id")
    }

    pub fn region(&self) -> Option<&str> {
        self.str_field("region")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ResourceContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
