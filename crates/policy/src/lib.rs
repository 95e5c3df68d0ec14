//! `finguard-policy` — the FinGuard authorization decision engine.
//!
//! Decides, for every sensitive administrative operation, whether an actor
//! may perform an action on a resource, combining role hierarchy, coarse
//! grants, scope restrictions, clearance, and resource override rules into
//! a single deny-by-default [`PolicyResult`], and redacts outbound
//! payloads for restricted viewer roles.
//!
//! The engine is pure and stateless per call: the policy tables are
//! compiled into the binary as immutable data, there is no I/O and no
//! shared mutable state, and every call completes synchronously. It is
//! safe to invoke concurrently from any number of request-handling tasks
//! without coordination.

pub mod clearance;
pub mod evaluate;
pub mod grants;
pub mod guard;
pub mod hierarchy;
pub mod overrides;
pub mod redact;
pub mod registry;
pub mod scope;

pub use clearance::required_clearance;
pub use evaluate::{PolicyResult, evaluate};
pub use grants::has_permission;
pub use guard::{AuthzError, OperationAuthorization, authorize_operation};
pub use hierarchy::{expand_roles, has_role};
pub use redact::{REDACTED, redact};
pub use registry::PolicyRegistry;
